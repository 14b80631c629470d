use catalog_client::RecordFetcher;
use shared::{
    domain::{ArtworkId, PageNumber, Row},
    error::FetchError,
};
use tracing::{debug, info, warn};

use crate::{
    filter::{parse_integer_prefix, FilterFormValues, FilterPopover, PopoverAnchor},
    load::{LoadDisposition, LoadSequence, LoadTicket},
    selection::SelectionSet,
    surface::{grid_columns, ColumnDescriptor, GridEvent, GridView, RenderSurface},
    EMPTY_MESSAGE,
};

/// Single owner of page, rows, selection, filter value and loading state.
///
/// Page changes do not fetch by themselves: they hand back a [`LoadTicket`]
/// that the caller runs against a [`RecordFetcher`] and settles with
/// [`GridController::complete_load`]. Loading is true exactly while the most
/// recently issued ticket is unsettled.
#[derive(Debug)]
pub struct GridController {
    page: PageNumber,
    rows: Vec<Row>,
    selection: SelectionSet,
    filter_value: Option<i64>,
    popover: FilterPopover,
    columns: Vec<ColumnDescriptor>,
    loads: LoadSequence,
}

impl Default for GridController {
    fn default() -> Self {
        Self::new()
    }
}

impl GridController {
    pub fn new() -> Self {
        Self {
            page: PageNumber::FIRST,
            rows: Vec::new(),
            selection: SelectionSet::default(),
            filter_value: None,
            popover: FilterPopover::default(),
            columns: grid_columns(),
            loads: LoadSequence::default(),
        }
    }

    /// Controller whose first load targets `page` instead of page 1.
    pub fn starting_at(page: PageNumber) -> Self {
        Self {
            page,
            ..Self::new()
        }
    }

    pub fn page(&self) -> PageNumber {
        self.page
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selected_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter().filter(|row| {
            row.key()
                .map(|id| self.selection.contains(id))
                .unwrap_or(false)
        })
    }

    /// Captured from the filter form. Not applied to the rows.
    pub fn filter_value(&self) -> Option<i64> {
        self.filter_value
    }

    pub fn popover(&self) -> &FilterPopover {
        &self.popover
    }

    pub fn is_loading(&self) -> bool {
        self.loads.is_pending()
    }

    /// Initial load for the current page.
    pub fn mount(&mut self) -> LoadTicket {
        self.on_page_change()
    }

    /// No-op on the first page.
    pub fn go_to_previous_page(&mut self) -> Option<LoadTicket> {
        let previous = self.page.previous()?;
        self.page = previous;
        Some(self.on_page_change())
    }

    /// Always advances; there is no last page.
    pub fn go_to_next_page(&mut self) -> LoadTicket {
        self.page = self.page.next();
        self.on_page_change()
    }

    fn on_page_change(&mut self) -> LoadTicket {
        let ticket = self.loads.issue(self.page);
        info!(page = self.page.get(), seq = ticket.seq(), "loading catalog page");
        ticket
    }

    /// Settles a load. Only the latest issued ticket can replace rows or clear
    /// the loading flag; a failed fetch leaves the current rows in place.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<Row>, FetchError>,
    ) -> LoadDisposition {
        if !self.loads.settle(ticket) {
            debug!(
                page = ticket.page().get(),
                seq = ticket.seq(),
                latest = self.loads.latest(),
                "discarding stale catalog page"
            );
            return LoadDisposition::Stale;
        }

        match outcome {
            Ok(rows) => {
                let count = rows.len();
                self.rows = rows;
                self.selection.clear();
                info!(page = ticket.page().get(), seq = ticket.seq(), rows = count, "catalog page applied");
                LoadDisposition::Applied { rows: count }
            }
            Err(err) => {
                warn!(
                    page = ticket.page().get(),
                    seq = ticket.seq(),
                    kind = err.kind(),
                    error = %err,
                    "catalog fetch failed; keeping current rows"
                );
                LoadDisposition::Failed
            }
        }
    }

    /// Fetches and settles `ticket` in one step.
    pub async fn load_with(
        &mut self,
        ticket: LoadTicket,
        fetcher: &dyn RecordFetcher,
    ) -> LoadDisposition {
        let outcome = fetcher.fetch_page(ticket.page()).await;
        self.complete_load(ticket, outcome)
    }

    pub fn on_selection_change(&mut self, selection: impl IntoIterator<Item = ArtworkId>) {
        self.selection.replace(selection);
        debug!(selected = self.selection.len(), "selection changed");
    }

    pub fn toggle_filter_popover(&mut self, anchor: PopoverAnchor) {
        self.popover.toggle(anchor);
        debug!(open = self.popover.is_open(), "filter popover toggled");
    }

    pub fn on_filter_form_submit(&mut self, values: FilterFormValues) {
        self.filter_value = parse_integer_prefix(values.raw_input());
        info!(filter_value = ?self.filter_value, "filter value captured");
    }

    pub fn view(&self) -> GridView<'_> {
        GridView {
            page: self.page,
            rows: &self.rows,
            loading: self.is_loading(),
            multi_select: true,
            selection: &self.selection,
            columns: &self.columns,
            popover: &self.popover,
            filter_value: self.filter_value,
            empty_message: EMPTY_MESSAGE,
        }
    }

    /// Applies one surface event. Returns the load to run when the page moved.
    pub fn handle_event(&mut self, event: GridEvent) -> Option<LoadTicket> {
        match event {
            GridEvent::SelectionChanged(ids) => {
                self.on_selection_change(ids);
                None
            }
            GridEvent::PreviousPage => self.go_to_previous_page(),
            GridEvent::NextPage => Some(self.go_to_next_page()),
            GridEvent::ToggleFilterPopover(anchor) => {
                self.toggle_filter_popover(anchor);
                None
            }
            GridEvent::FilterSubmitted(values) => {
                self.on_filter_form_submit(values);
                None
            }
        }
    }

    /// Renders one frame through `surface` and applies the events it reports.
    pub fn render(&mut self, surface: &mut dyn RenderSurface) -> Vec<LoadTicket> {
        let events = surface.render(&self.view());
        events
            .into_iter()
            .filter_map(|event| self.handle_event(event))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
