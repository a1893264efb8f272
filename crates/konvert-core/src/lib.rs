//! Core data types for the Konvert conversion engine.
//!
//! This crate defines the fundamental types shared by the rest of the
//! workspace: unit names, quantities (a magnitude paired with a unit), and
//! the unified error type.
//!
//! This crate is intentionally free of graph logic and I/O.

pub mod errors;
pub mod quantity;
pub mod unit;
