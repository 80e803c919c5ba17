//! Application layer
//!
//! The harvest use case that drives the domain services end to end.

pub mod dto;
mod harvest;

pub use harvest::{HarvestProgressCallback, HarvestUseCase};
