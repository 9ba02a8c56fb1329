//! Command-line argument parsing and non-interactive handlers.

pub mod definition;
pub mod list;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use definition::{Args, process_args};
pub use utils::{determine_log_level, use_color};
