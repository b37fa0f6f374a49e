//! Application context and ledger file handling.

mod context;

pub use context::AppContext;
