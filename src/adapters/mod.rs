//! Infrastructure adapters. Implement ports.
//!
//! Community data sources, clocks, terminal UI. Map errors to DomainError.

pub mod catalog;
pub mod clock;
pub mod ui;
