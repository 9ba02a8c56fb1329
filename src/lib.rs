//! Library entry for appletdex exposing the catalog engine and TUI pieces for
//! integration tests.

pub mod args;
pub mod catalog;
pub mod events;
pub mod query;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;
