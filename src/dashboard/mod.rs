//! Dashboard UI Module
//!
//! The single window: upload card, result card and history table.

pub mod app;
pub mod components;
pub mod state;
pub mod theme;
pub mod views;

pub use app::DashboardApp;
