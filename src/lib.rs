pub mod cohort;
pub mod config;
pub mod error;
pub mod player;
pub mod scorer;
pub mod stat_names;
// cmd and reports are modules of the binary crate (main.rs).
