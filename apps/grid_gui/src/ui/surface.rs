//! egui rendition of the grid: toolbar, table and filter popover.

use grid_core::{
    ColumnDescriptor, ColumnKind, FilterForm, GridEvent, GridView, PopoverAnchor, RenderSurface,
};
use shared::domain::Row;

pub struct EguiGridSurface<'a> {
    ui: &'a mut egui::Ui,
    form: &'a mut FilterForm,
}

impl<'a> EguiGridSurface<'a> {
    pub fn new(ui: &'a mut egui::Ui, form: &'a mut FilterForm) -> Self {
        Self { ui, form }
    }

    fn show_toolbar(&mut self, view: &GridView<'_>, events: &mut Vec<GridEvent>) {
        self.ui.horizontal(|ui| {
            if ui.button("Prev").clicked() {
                events.push(GridEvent::PreviousPage);
            }
            ui.label(format!("Page {}", view.page));
            if ui.button("Next").clicked() {
                events.push(GridEvent::NextPage);
            }

            ui.separator();
            ui.label(format!("{} selected", view.selection.len()));
            if let Some(value) = view.filter_value {
                ui.separator();
                ui.label(format!("Filter value: {value}"));
            }
            if view.loading {
                ui.separator();
                ui.spinner();
                ui.label("Loading…");
            }
        });
    }

    fn show_table(&mut self, view: &GridView<'_>, events: &mut Vec<GridEvent>) {
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(self.ui, |ui| {
                egui::Grid::new("artwork_grid")
                    .striped(true)
                    .num_columns(view.columns.len())
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        for column in view.columns {
                            header_cell(ui, view, column, events);
                        }
                        ui.end_row();

                        for row in view.rows {
                            for column in view.columns {
                                body_cell(ui, view, column, row, events);
                            }
                            ui.end_row();
                        }
                    });

                if view.rows.is_empty() && !view.loading {
                    ui.add_space(8.0);
                    ui.label(view.empty_message);
                }
            });
    }

    fn show_popover(&mut self, view: &GridView<'_>, events: &mut Vec<GridEvent>) {
        let Some(anchor) = view.popover.anchor() else {
            return;
        };
        let ctx = self.ui.ctx().clone();
        let form = &mut *self.form;

        egui::Window::new("filter_popover")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .fixed_pos(egui::pos2(anchor.x, anchor.y))
            .show(&ctx, |ui| {
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(form.input_mut())
                            .hint_text("Enter a number")
                            .desired_width(180.0),
                    );
                    if response.changed() {
                        form.input_mut().retain(|c| {
                            c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
                        });
                    }
                    let enter_pressed =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    if ui.button("Apply").clicked() || enter_pressed {
                        if let Ok(values) = form.submit() {
                            events.push(GridEvent::FilterSubmitted(values));
                        }
                    }
                });
                if let Some(err) = form.error() {
                    ui.colored_label(ui.visuals().error_fg_color, err.to_string());
                }
            });
    }
}

impl RenderSurface for EguiGridSurface<'_> {
    fn render(&mut self, view: &GridView<'_>) -> Vec<GridEvent> {
        let mut events = Vec::new();
        self.show_toolbar(view, &mut events);
        self.ui.separator();
        self.show_table(view, &mut events);
        self.show_popover(view, &mut events);
        events
    }
}

fn header_cell(
    ui: &mut egui::Ui,
    view: &GridView<'_>,
    column: &ColumnDescriptor,
    events: &mut Vec<GridEvent>,
) {
    match column.kind {
        ColumnKind::Selection => {
            let mut all_selected = view.all_selected();
            if view.multi_select && ui.checkbox(&mut all_selected, "").changed() {
                let selection = if all_selected {
                    view.selectable_keys()
                } else {
                    Vec::new()
                };
                events.push(GridEvent::SelectionChanged(selection));
            }
        }
        ColumnKind::FilterTrigger => {
            let response = ui.button(column.header);
            if response.clicked() {
                let corner = response.rect.left_bottom();
                events.push(GridEvent::ToggleFilterPopover(PopoverAnchor::new(
                    corner.x, corner.y,
                )));
            }
        }
        ColumnKind::Field(_) => {
            ui.strong(column.header);
        }
    }
}

fn body_cell(
    ui: &mut egui::Ui,
    view: &GridView<'_>,
    column: &ColumnDescriptor,
    row: &Row,
    events: &mut Vec<GridEvent>,
) {
    match column.kind {
        ColumnKind::Selection => match view.row_key(row) {
            Some(id) => {
                let mut checked = view.selection.contains(id);
                if ui.checkbox(&mut checked, "").changed() {
                    events.push(GridEvent::SelectionChanged(view.selection.toggled(id)));
                }
            }
            None => {
                let mut unchecked = false;
                ui.add_enabled(false, egui::Checkbox::new(&mut unchecked, ""));
            }
        },
        ColumnKind::FilterTrigger => {
            ui.label("");
        }
        ColumnKind::Field(field) => {
            ui.label(field.display(row));
        }
    }
}
