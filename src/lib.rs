//! Rubik Table (workspace facade crate).
//!
//! Re-exports the workspace crates as `rubik_table::{core,engine,input,term,types}`
//! and holds the binary's configuration and logging setup.

pub use rubik_table_core as core;
pub use rubik_table_engine as engine;
pub use rubik_table_input as input;
pub use rubik_table_term as term;
pub use rubik_table_types as types;

pub mod config;
pub mod logging;
