//! Grid state machine: page navigation, record loading, row selection and the
//! filter popover, driven through an abstract render surface.

mod controller;
pub mod filter;
pub mod load;
pub mod selection;
pub mod surface;

pub use controller::GridController;
pub use filter::{FilterForm, FilterFormValues, FilterPopover, FormError, PopoverAnchor};
pub use load::{LoadDisposition, LoadTicket};
pub use selection::SelectionSet;
pub use surface::{ColumnDescriptor, ColumnKind, GridEvent, GridView, RenderSurface};

pub const EMPTY_MESSAGE: &str = "No data found";
