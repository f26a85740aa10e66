use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// How the x and y box dimensions are coupled during a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XyCoupling {
    /// X and Y are always scaled together, preserving their aspect ratio.
    #[default]
    Isotropic,
    /// X and Y are perturbed independently.
    Anisotropic,
}

/// How the z box dimension participates in trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZMode {
    /// Z is perturbed on its own trials like any other axis.
    #[default]
    Free,
    /// Z is never perturbed and never compensates.
    Fixed,
    /// Z is rescaled on every trial to exactly cancel the XY volume change.
    ConstantVolume,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BarostatConfig {
    /// Trial cadence in simulation steps; 0 disables triggering entirely.
    #[serde(default = "default_frequency")]
    pub frequency: u64,
    /// Target temperature in kelvin.
    pub temperature: f64,
    /// Default value for the run-time pressure parameter, in bar.
    pub default_pressure: f64,
    /// Default value for the run-time surface-tension parameter, in bar·nm.
    #[serde(default)]
    pub default_surface_tension: f64,
    #[serde(default)]
    pub xy_coupling: XyCoupling,
    #[serde(default)]
    pub z_mode: ZMode,
    /// Random seed; 0 requests an OS-sourced seed at initialization.
    #[serde(default)]
    pub random_seed: u64,
}

fn default_frequency() -> u64 {
    25
}

impl BarostatConfig {
    pub fn builder() -> BarostatConfigBuilder {
        BarostatConfigBuilder::new()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigLoadError> {
        Self::parse(content, "<string>")
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    fn parse(content: &str, path: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.temperature > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "temperature",
                reason: "must be positive (kT appears in the acceptance exponent)",
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct BarostatConfigBuilder {
    frequency: Option<u64>,
    temperature: Option<f64>,
    default_pressure: Option<f64>,
    default_surface_tension: Option<f64>,
    xy_coupling: Option<XyCoupling>,
    z_mode: Option<ZMode>,
    random_seed: Option<u64>,
}

impl BarostatConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frequency(mut self, steps: u64) -> Self {
        self.frequency = Some(steps);
        self
    }
    pub fn temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }
    pub fn default_pressure(mut self, bar: f64) -> Self {
        self.default_pressure = Some(bar);
        self
    }
    pub fn default_surface_tension(mut self, bar_nm: f64) -> Self {
        self.default_surface_tension = Some(bar_nm);
        self
    }
    pub fn xy_coupling(mut self, mode: XyCoupling) -> Self {
        self.xy_coupling = Some(mode);
        self
    }
    pub fn z_mode(mut self, mode: ZMode) -> Self {
        self.z_mode = Some(mode);
        self
    }
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<BarostatConfig, ConfigError> {
        let config = BarostatConfig {
            frequency: self.frequency.unwrap_or_else(default_frequency),
            temperature: self
                .temperature
                .ok_or(ConfigError::MissingParameter("temperature"))?,
            default_pressure: self
                .default_pressure
                .ok_or(ConfigError::MissingParameter("default_pressure"))?,
            default_surface_tension: self.default_surface_tension.unwrap_or(0.0),
            xy_coupling: self.xy_coupling.unwrap_or_default(),
            z_mode: self.z_mode.unwrap_or_default(),
            random_seed: self.random_seed.unwrap_or(0),
        };
        config.validate()?;
        Ok(config)
    }
}
