//! # Engine Module
//!
//! The stateful logic core of the barostat. It owns the per-axis adaptive
//! trial state and the seeded random stream, and it drives one full trial
//! (axis selection, volume proposal, Metropolis acceptance, adaptive tuning)
//! against the external simulation engine on every cadence hit.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - cadence, temperature, coupling modes, seed
//! - **External Contract** ([`context`]) - the [`context::SimulationEngine`]
//!   capability trait and the registration constants this core exposes
//! - **State Tracking** ([`state`]) - per-axis step magnitudes and counters
//! - **Trial Machinery** (`selector`, `proposal`, `acceptance`, `tuner`) -
//!   the four stages of a Monte Carlo volume trial
//! - **Orchestration** ([`barostat`]) - the public [`barostat::MembraneBarostat`]
//!   controller invoked once per simulation step
//! - **Error Handling** ([`error`]) - barostat-level error types

pub(crate) mod acceptance;
pub mod barostat;
pub mod config;
pub mod context;
pub mod error;
pub(crate) mod proposal;
pub(crate) mod selector;
pub mod state;
pub(crate) mod tuner;
