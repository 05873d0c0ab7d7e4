//! Calculation Module
//!
//! `calculate(a?, b?)` with a fluent `get()`, behind an injectable strategy.
//!
//! ## Architecture
//!
//! - `domain/strategy.rs` - the `Calculate` seam and the built-in calculation
//! - `domain/recorder.rs` - call recorder with override queues around any strategy
//! - `domain/service.rs` - `CalculationClient` implementation delegating to its strategy
//! - `module.rs` - configuration and registration in the client hub
//!
//! The public API is defined in `calculation-sdk` and re-exported here.

pub use calculation_sdk::{CalculationClient, CalculationError, Operands, calculate_through};

// === MODULE DEFINITION ===
mod module;
pub use module::{CalculationModule, MODULE_NAME};

// === INTERNAL MODULES ===
pub mod config;
pub mod domain;
