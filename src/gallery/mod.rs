//! Interactive terminal gallery.
//!
//! Every component gets a page; the app owns the pages, routes input to
//! the visible one and draws the tab and status bars around it.

pub mod actions;
pub mod app;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod pages;

pub use actions::Action;
pub use app::{run_app, App};
pub use component::Component;
pub use context::GalleryContext;
pub use event_handler::{EventHandler, EventType};
