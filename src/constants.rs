//! Constants used throughout the gallery
//!
//! Centralizes file names, UI text and numeric limits.

// Configuration
pub const APP_NAME: &str = "component-gallery";
pub const CONFIG_FILE_NAME: &str = "component-gallery.toml";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FILE_NAME: &str = "component-gallery.log";

// Timing
/// Default event loop tick in milliseconds
pub const DEFAULT_TICK_RATE_MS: u64 = 250;
pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 1000;

/// Lines kept by the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 500;

// UI text
pub const TITLE_GALLERY: &str = " Shared Components ";
pub const HELP_LINE: &str = "Tab/Shift+Tab page · t theme · s symbols · d sentinels · q quit";
pub const TITLE_LOGS: &str = " Logs ";

// Layout
/// Height of the page tab bar
pub const TAB_BAR_HEIGHT: u16 = 3;
/// Height of the bottom help line
pub const STATUS_BAR_HEIGHT: u16 = 1;
