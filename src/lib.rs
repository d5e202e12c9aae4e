//! Folio library
//!
//! A personal portfolio driven by one content file: the content tables,
//! the presentation state (theme, active section, project carousel), the
//! contact-form mail hand-off, and three front ends over them (terminal
//! view, HTML preview server, static export).

// Module declarations
pub mod branding;
pub mod cli;
pub mod config;
pub mod handoff;
pub mod models;
pub mod render;
pub mod shortcuts;
pub mod state;
pub mod store;
#[cfg(feature = "ratatui")]
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
