//! Domain layer - Core harvesting logic
//!
//! Entities, repository traits and the filter/classifier services. Nothing
//! here knows where the Spotlight cache lives on a real machine.

pub mod entities;
pub mod repositories;
pub mod services;
