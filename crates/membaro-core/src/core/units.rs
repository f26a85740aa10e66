//! Physical constants and unit conversions for the molar energy unit system
//! (kJ/mol, nm, K, bar).

/// Avogadro's number (1/mol).
pub const AVOGADRO: f64 = 6.0221367e23;

/// Boltzmann constant (J/K).
pub const BOLTZMANN: f64 = 1.380658e-23;

/// Molar gas constant (J/(mol·K)).
pub const RGAS: f64 = BOLTZMANN * AVOGADRO;

/// Boltzmann constant in molar energy units (kJ/(mol·K)).
pub const BOLTZ: f64 = RGAS / 1000.0;

/// Converts a pressure in bar to kJ/(mol·nm³), or a surface tension in bar·nm
/// to kJ/(mol·nm²).
pub const BAR_TO_MOLAR: f64 = AVOGADRO * 1e-25;

/// Thermal energy kT in kJ/mol at the given temperature (K).
pub fn kt(temperature: f64) -> f64 {
    BOLTZ * temperature
}
