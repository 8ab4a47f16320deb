pub mod alert;
pub mod drag_item;
pub mod form;
pub mod help_callout;
pub mod loader;
pub mod ordered_list;
pub mod table;
pub mod time_picker;

pub use alert::{Alert, AlertState, AlertType};
pub use drag_item::{DragItem, DragMonitor, DragPayload, DropOutcome, DropResult};
pub use form::{Control, Field, Fields, Form};
pub use help_callout::{HelpCallout, HelpCalloutState, Placement};
pub use loader::{Loader, LoaderState};
pub use ordered_list::{ListItem, OrderedList};
pub use table::{SortOrder, Table, TableEvent, TableHeader, TableRow, TableState};
pub use time_picker::{TimeFormat, TimePicker};

use crate::theme::ThemeRegistry;

/// Register the default style of every component.
pub fn register_styles(registry: &mut ThemeRegistry) {
    registry
        .register(alert::STYLE_NAME, alert::default_style)
        .register(drag_item::STYLE_NAME, drag_item::default_style)
        .register(form::STYLE_NAME, form::default_style)
        .register(help_callout::STYLE_NAME, help_callout::default_style)
        .register(loader::STYLE_NAME, loader::default_style)
        .register(ordered_list::STYLE_NAME, ordered_list::default_style)
        .register(table::HEADER_STYLE_NAME, table::header_style)
        .register(table::ROW_STYLE_NAME, table::row_style)
        .register(time_picker::STYLE_NAME, time_picker::default_style);
}
