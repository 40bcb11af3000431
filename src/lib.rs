//! SmartWindow monitor firmware library.
//!
//! Exposes the sampling core, reporters and hardware adapters for
//! integration testing. All ESP-IDF-specific code is guarded by
//! `#[cfg(feature = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod logic;
pub mod report;
pub mod sampler;

pub mod error;
pub mod pins;

// Hardware-facing modules; each carries a host simulation path.
pub mod adapters;
pub mod drivers;
pub mod sensors;
