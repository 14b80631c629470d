//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. The error string is meant for the
/// status line.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue full");
            Err("UI command queue is full; please retry".to_string())
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            Err("Backend worker disconnected; restart the app to reload pages".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use grid_core::GridController;

    use super::*;

    #[test]
    fn queues_fetch_commands() {
        let (cmd_tx, cmd_rx) = bounded(1);
        let ticket = GridController::new().mount();

        dispatch_backend_command(&cmd_tx, BackendCommand::FetchPage { ticket }).expect("queued");

        let BackendCommand::FetchPage { ticket: queued } = cmd_rx.try_recv().expect("command");
        assert_eq!(queued, ticket);
    }

    #[test]
    fn reports_full_queue() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        let mut grid = GridController::new();
        let first = grid.mount();
        let second = grid.go_to_next_page();

        dispatch_backend_command(&cmd_tx, BackendCommand::FetchPage { ticket: first })
            .expect("queued");
        let err = dispatch_backend_command(&cmd_tx, BackendCommand::FetchPage { ticket: second })
            .expect_err("queue full");
        assert!(err.contains("full"), "unexpected status: {err}");
    }

    #[test]
    fn reports_disconnected_worker() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);
        let ticket = GridController::new().mount();

        let err = dispatch_backend_command(&cmd_tx, BackendCommand::FetchPage { ticket })
            .expect_err("disconnected");
        assert!(err.contains("disconnected"), "unexpected status: {err}");
    }
}
