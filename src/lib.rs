//! Shared Components - terminal widgets for Ratatui applications
//!
//! This library provides the shared widgets of a product suite rendered
//! for the terminal: scroll shadows, sortable tables, time pickers,
//! alerts, forms, help callouts, loaders and drag handles, all styled
//! through one theme registry. A component gallery binary shows each of
//! them interactively.
//!
//! # Modules
//!
//! * [`behaviors`] - Scroll shadow coordination and overlays
//! * [`components`] - The widgets themselves
//! * [`config`] - Gallery configuration management
//! * [`gallery`] - Interactive terminal gallery
//! * [`layouts`] - Spacing vocabulary and the horizontal layout
//! * [`theme`] - Palettes, presets and the style registry

/// Behaviours attached to other components
pub mod behaviors;

/// Widgets
pub mod components;

/// Configuration module for the gallery
pub mod config;

/// Application constants and default values
pub mod constants;

/// Component error types
pub mod error;

/// Terminal gallery showing every component
pub mod gallery;

/// Layout helpers and spacing
pub mod layouts;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Glyph sets for terminals with and without Unicode support
pub mod symbols;

/// Theme presets and the style registry
pub mod theme;

pub use error::{ComponentError, Result};
