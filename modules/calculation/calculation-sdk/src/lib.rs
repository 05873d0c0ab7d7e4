//! Calculation SDK
//!
//! This crate provides everything needed to consume the calculation service:
//! - API trait (`CalculationClient`) and operand type (`Operands`)
//! - Error type (`CalculationError`)
//! - `calculate_through`, the reference awaiting caller
//! - `testing::MockCalculationClient` (feature `testing`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculation_sdk::{CalculationClient, Operands};
//!
//! let client = hub.get::<dyn CalculationClient>()?;
//! let five = client.get().calculate(Operands::NONE).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculationClient, CalculationError, Operands};

// === CONSUMERS ===
mod consumer;
pub use consumer::calculate_through;

// === TEST DOUBLES ===
#[cfg(any(test, feature = "testing"))]
pub mod testing;
