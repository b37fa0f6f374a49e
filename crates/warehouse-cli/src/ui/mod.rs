//! UI primitives for the Warehouse CLI.
//!
//! - **Context**: Output mode, color and unicode for one command
//! - **Theme**: Badges and text styles
//! - **Render**: Tables, receipts, hints, error messages

mod context;
pub mod render;
pub mod theme;

pub use context::{UiContext, UiFlags};
pub use theme::Badge;

pub use render::{badge, kv, print_error, receipt, table, title};
