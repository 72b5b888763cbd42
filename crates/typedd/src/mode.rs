//! # Validation Mode
//!
//! Chooses, once at wiring time, whether components are composed behind the
//! validation decorators.
//!
//! - [`ValidationMode::Strict`]: every service and repository is wrapped, so a
//!   broken contract surfaces at the first boundary it crosses.
//! - [`ValidationMode::Lean`]: components are composed directly and pay no
//!   checking cost. Strict runs (tests, debug builds) are expected to have
//!   caught any violation already.
//!
//! The default follows the build profile: strict when `debug_assertions` are
//! on, lean otherwise. For contractually valid values both modes behave
//! identically.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationMode {
    Strict,
    Lean,
}

impl ValidationMode {
    /// True when components should be composed behind decorators.
    pub fn is_strict(self) -> bool {
        matches!(self, ValidationMode::Strict)
    }
}

impl Default for ValidationMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ValidationMode::Strict
        } else {
            ValidationMode::Lean
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => f.write_str("strict"),
            ValidationMode::Lean => f.write_str("lean"),
        }
    }
}

/// The string did not name a validation mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation mode {0:?}, expected \"strict\" or \"lean\"")]
pub struct UnknownMode(pub String);

impl FromStr for ValidationMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationMode::Strict),
            "lean" => Ok(ValidationMode::Lean),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Strict".parse::<ValidationMode>(), Ok(ValidationMode::Strict));
        assert_eq!(" lean ".parse::<ValidationMode>(), Ok(ValidationMode::Lean));
        assert_eq!(
            "debug".parse::<ValidationMode>(),
            Err(UnknownMode("debug".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [ValidationMode::Strict, ValidationMode::Lean] {
            assert_eq!(mode.to_string().parse::<ValidationMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_default_follows_build_profile() {
        assert_eq!(ValidationMode::default().is_strict(), cfg!(debug_assertions));
    }
}
