//! Command handlers.
//!
//! One-shot handlers load the save file, run one ledger operation and save
//! the file back when the operation changed state. The menu keeps one
//! ledger in memory for the whole session.

pub mod items;
pub mod menu;
pub mod misc;
pub mod views;
