//! Domain layer for calculation module

pub mod recorder;
pub mod service;
pub mod strategy;

pub use recorder::RecordingCalculation;
pub use service::Service;
pub use strategy::{Calculate, DefaultCalculation, FnCalculation, from_fn};
