//! Tint (workspace facade crate).
//!
//! Re-exports the engine as `tint::core` and the shared vocabulary as
//! `tint::types`; the implementation lives in dedicated crates under `crates/`.

pub use tint_core as core;
pub use tint_types as types;
