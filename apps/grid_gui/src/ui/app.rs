use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use grid_core::{FilterForm, GridController, LoadDisposition, LoadTicket};
use shared::{domain::PageNumber, error::FetchError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::surface::EguiGridSurface;

pub struct GridApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    grid: GridController,
    form: FilterForm,
    last_ticket: Option<LoadTicket>,

    catalog_base_url: String,
    status: String,
}

impl GridApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        start_page: PageNumber,
        catalog_base_url: String,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            grid: GridController::starting_at(start_page),
            form: FilterForm::default(),
            last_ticket: None,
            catalog_base_url,
            status: "Backend worker starting...".to_string(),
        };
        let ticket = app.grid.mount();
        app.dispatch_fetch(ticket);
        app
    }

    fn dispatch_fetch(&mut self, ticket: LoadTicket) {
        self.last_ticket = Some(ticket);
        if let Err(status) =
            dispatch_backend_command(&self.cmd_tx, BackendCommand::FetchPage { ticket })
        {
            self.grid
                .complete_load(ticket, Err(FetchError::Transport(status.clone())));
            self.status = status;
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::PageLoaded { ticket, outcome } => {
                    if let LoadDisposition::Applied { rows } = self.grid.complete_load(ticket, outcome) {
                        tracing::debug!(page = ticket.page().get(), rows, "grid refreshed");
                    }
                }
                UiEvent::BackendFailed(message) => {
                    tracing::error!("{message}");
                    if let Some(ticket) = self.last_ticket {
                        self.grid
                            .complete_load(ticket, Err(FetchError::Transport(message.clone())));
                    }
                    self.status = message;
                }
            }
        }
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("grid_header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Artworks");
                ui.small(self.catalog_base_url.as_str());
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(self.status.as_str());
        });

        let mut tickets = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut surface = EguiGridSurface::new(ui, &mut self.form);
            tickets = self.grid.render(&mut surface);
        });
        for ticket in tickets {
            self.dispatch_fetch(ticket);
        }

        if self.grid.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
