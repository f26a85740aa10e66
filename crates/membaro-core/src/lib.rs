//! # Membarostat Core Library
//!
//! An adaptive Monte Carlo barostat for molecular simulations of membrane systems
//! held at constant pressure, constant surface tension, and constant temperature.
//!
//! On a configurable cadence the barostat proposes a random rescaling of one
//! dimension (or the coupled XY pair) of the periodic simulation box, accepts or
//! rejects the proposal via a Metropolis criterion built from the change in
//! potential energy and the ensemble's effective free-energy terms, and
//! self-tunes its proposal magnitude toward a 25-75% acceptance band per axis.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless value types and pure math: the
//!   periodic box representation ([`core::geometry::BoxVectors`]) and the
//!   physical constants and unit conversions ([`core::units`]).
//!
//! - **[`engine`]: The Logic Core.** The stateful barostat machinery: per-axis
//!   adaptive trial state, axis selection, volume proposals, the Metropolis
//!   acceptance test, the adaptive step-size tuner, and the
//!   [`MembraneBarostat`] controller that orchestrates them once per cadence.
//!
//! The expensive potential-energy evaluator, the particle coordinate store, and
//! the periodic box live in an external simulation engine. That engine is
//! abstracted behind the narrow [`engine::context::SimulationEngine`] trait so
//! the whole algorithm is testable against a deterministic stub that returns
//! scripted energies.

pub mod core;
pub mod engine;

pub use engine::barostat::MembraneBarostat;
pub use engine::config::{BarostatConfig, BarostatConfigBuilder, XyCoupling, ZMode};
pub use engine::error::BarostatError;
pub use engine::state::{Axis, TrialOutcome};
