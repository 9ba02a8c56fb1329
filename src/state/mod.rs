//! Presentation-layer state for the applet browser.
//!
//! The UI owns the query state; every edit goes through [`AppState`], which
//! explicitly recomputes the filtered view after each change.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::Focus;
