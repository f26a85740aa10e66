//! # Core Module
//!
//! Stateless foundation of the barostat: physical constants, unit conversions,
//! and the periodic box geometry value type. Nothing in this layer holds
//! mutable simulation state or talks to the external engine.

pub mod geometry;
pub mod units;
