//! Domain layer
//!
//! Entities and the port traits the feed depends on.

pub mod entities;
pub mod ports;
