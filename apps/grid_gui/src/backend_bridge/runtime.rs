//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use catalog_client::RecordFetcher;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Starts the backend worker thread.
///
/// Every fetch runs as its own task, so a page change issued while another
/// fetch is in flight overlaps with it; the controller sorts out which result
/// is current. `ctx` is woken after each posted event.
pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    fetcher: Arc<dyn RecordFetcher>,
    ctx: egui::Context,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                ctx.request_repaint();
                return;
            }
        };
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                BackendCommand::FetchPage { ticket } => {
                    let fetcher = fetcher.clone();
                    let ui_tx = ui_tx.clone();
                    let ctx = ctx.clone();
                    runtime.spawn(async move {
                        let outcome = fetcher.fetch_page(ticket.page()).await;
                        if ui_tx.send(UiEvent::PageLoaded { ticket, outcome }).is_err() {
                            tracing::debug!(seq = ticket.seq(), "ui closed before page arrived");
                            return;
                        }
                        ctx.request_repaint();
                    });
                }
            }
        }

        tracing::debug!("backend command channel closed; worker exiting");
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use crossbeam_channel::bounded;
    use grid_core::GridController;
    use shared::{
        domain::{ArtworkId, PageNumber, Row},
        error::FetchError,
    };

    use super::*;

    struct PageEchoFetcher;

    #[async_trait]
    impl RecordFetcher for PageEchoFetcher {
        async fn fetch_page(&self, page: PageNumber) -> Result<Vec<Row>, FetchError> {
            if page.get() == 5 {
                return Err(FetchError::Status(503));
            }
            Ok(vec![Row {
                id: Some(ArtworkId(page.get().into())),
                title: None,
                place_of_origin: String::new(),
                artist_display: None,
                inscriptions: String::new(),
                date_start: None,
                date_end: None,
            }])
        }
    }

    fn next_page_event(ui_rx: &Receiver<UiEvent>) -> UiEvent {
        loop {
            match ui_rx.recv_timeout(Duration::from_secs(5)).expect("event") {
                UiEvent::Info(_) => continue,
                other => return other,
            }
        }
    }

    #[test]
    fn fetch_results_come_back_as_ui_events() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        let worker = launch(cmd_rx, ui_tx, Arc::new(PageEchoFetcher), egui::Context::default());

        let mut grid = GridController::starting_at(PageNumber::new(4).expect("page"));
        let ticket = grid.mount();
        cmd_tx
            .send(BackendCommand::FetchPage { ticket })
            .expect("send");

        let UiEvent::PageLoaded {
            ticket: loaded,
            outcome,
        } = next_page_event(&ui_rx)
        else {
            panic!("expected a page");
        };
        assert_eq!(loaded, ticket);
        assert_eq!(outcome.expect("rows")[0].id, Some(ArtworkId(4)));

        let ticket = grid.go_to_next_page();
        cmd_tx
            .send(BackendCommand::FetchPage { ticket })
            .expect("send");
        let UiEvent::PageLoaded { outcome, .. } = next_page_event(&ui_rx) else {
            panic!("expected a page");
        };
        assert_eq!(outcome, Err(FetchError::Status(503)));

        drop(cmd_tx);
        worker.join().expect("worker exits");
    }
}
