//! Contract between the controller and whatever draws the grid.

use shared::domain::{ArtworkId, PageNumber, Row, RowField};

use crate::{
    filter::{FilterFormValues, FilterPopover, PopoverAnchor},
    selection::SelectionSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Per-row checkbox plus a select-all header.
    Selection,
    /// Custom-rendered header that toggles the filter popover.
    FilterTrigger,
    Field(RowField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub kind: ColumnKind,
    pub header: &'static str,
}

impl ColumnDescriptor {
    pub fn field(field: RowField) -> Self {
        Self {
            kind: ColumnKind::Field(field),
            header: field.header(),
        }
    }
}

pub fn grid_columns() -> Vec<ColumnDescriptor> {
    let mut columns = vec![
        ColumnDescriptor {
            kind: ColumnKind::Selection,
            header: "",
        },
        ColumnDescriptor {
            kind: ColumnKind::FilterTrigger,
            header: "Open Panel",
        },
    ];
    columns.extend(RowField::ALL.into_iter().map(ColumnDescriptor::field));
    columns
}

/// Everything a surface needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    pub page: PageNumber,
    pub rows: &'a [Row],
    pub loading: bool,
    pub multi_select: bool,
    pub selection: &'a SelectionSet,
    pub columns: &'a [ColumnDescriptor],
    pub popover: &'a FilterPopover,
    pub filter_value: Option<i64>,
    pub empty_message: &'static str,
}

impl GridView<'_> {
    pub fn row_key(&self, row: &Row) -> Option<ArtworkId> {
        row.key()
    }

    pub fn is_selected(&self, row: &Row) -> bool {
        self.row_key(row)
            .map(|id| self.selection.contains(id))
            .unwrap_or(false)
    }

    /// Keys of every row that can be selected, in display order.
    pub fn selectable_keys(&self) -> Vec<ArtworkId> {
        self.rows.iter().filter_map(|row| self.row_key(row)).collect()
    }

    pub fn all_selected(&self) -> bool {
        let keys = self.selectable_keys();
        !keys.is_empty() && keys.iter().all(|id| self.selection.contains(*id))
    }
}

/// User interaction reported back by a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// The complete new selection, not a delta.
    SelectionChanged(Vec<ArtworkId>),
    PreviousPage,
    NextPage,
    ToggleFilterPopover(PopoverAnchor),
    FilterSubmitted(FilterFormValues),
}

/// Rendering capability the controller drives. A surface draws the view and
/// returns whatever the user did during that frame.
pub trait RenderSurface {
    fn render(&mut self, view: &GridView<'_>) -> Vec<GridEvent>;
}
