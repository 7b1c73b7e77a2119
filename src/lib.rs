//! Concentration (workspace facade crate).
//!
//! This package exposes `concentration::{core,engine,input,term,types}` while
//! the implementation lives in dedicated crates under `crates/`.

pub use concentration_core as core;
pub use concentration_engine as engine;
pub use concentration_input as input;
pub use concentration_term as term;
pub use concentration_types as types;
