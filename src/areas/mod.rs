//! Core repository components
//!
//! - `ledger`: commit creation and the in-memory commit history
//! - `repository`: owns the other areas and exposes `stage`, `commit` and `history`
//! - `staging`: the content-addressed staging directory
//! - `workspace`: expansion of user-supplied paths into files

pub mod ledger;
pub mod repository;
pub mod staging;
pub mod workspace;
