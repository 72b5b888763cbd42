use thiserror::Error;
use typedd::{UnknownMode, ValidationMode};

/// Environment variable selecting `strict` or `lean` wiring.
pub const VALIDATION_ENV: &str = "TYPEDD_VALIDATION";
/// Environment variable with the store's request channel capacity.
pub const STORE_BUFFER_ENV: &str = "TYPEDD_STORE_BUFFER";

const DEFAULT_STORE_BUFFER: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid TYPEDD_VALIDATION: {0}")]
    Mode(#[from] UnknownMode),

    #[error("invalid TYPEDD_STORE_BUFFER {value:?}: expected a positive integer")]
    StoreBuffer { value: String },
}

/// Settings for a [`UserSystem`](super::UserSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the store's request channel.
    pub store_buffer: usize,
    /// Whether components are wired behind validation decorators.
    pub mode: ValidationMode,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            store_buffer: DEFAULT_STORE_BUFFER,
            mode: ValidationMode::default(),
        }
    }
}

impl SystemConfig {
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reads [`VALIDATION_ENV`] and [`STORE_BUFFER_ENV`]. Unset variables
    /// keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(VALIDATION_ENV) {
            config.mode = raw.parse()?;
        }
        if let Some(raw) = lookup(STORE_BUFFER_ENV) {
            config.store_buffer = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::StoreBuffer { value: raw }),
            };
        }
        Ok(config)
    }
}
