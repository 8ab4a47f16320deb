pub mod alerts;
pub mod drag;
pub mod form;
pub mod layout;
pub mod loader;
pub mod logs;
pub mod scroll_shadow;
pub mod table;
pub mod time_picker;

pub use alerts::AlertsPage;
pub use drag::DragPage;
pub use form::FormPage;
pub use layout::LayoutPage;
pub use loader::LoaderPage;
pub use logs::LogsPage;
pub use scroll_shadow::ScrollShadowPage;
pub use table::TablePage;
pub use time_picker::TimePickerPage;
