//! Core types and trait definitions for the rollcall election store.
//!
//! This crate is deliberately free of HTTP and database dependencies;
//! every other crate in the workspace depends on it.

pub mod candidate;
pub mod party;
pub mod store;
pub mod validate;
