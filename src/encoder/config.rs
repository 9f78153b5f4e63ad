use std::sync::OnceLock;

use crate::encoder::mask::PenaltyRules;
use crate::encoder::tables::MAX_VERSION;
use crate::error::{EncodeError, Result};
use crate::models::Version;

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

fn parse_env_rules(name: &str, default: PenaltyRules) -> PenaltyRules {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<PenaltyRules>().ok())
        .unwrap_or(default)
}

/// Encoder settings.
///
/// `max_version` bounds the version search; it can only lower the
/// supported maximum, never raise it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    max_version: Version,
    penalty: PenaltyRules,
    parallel_masks: bool,
}

impl EncoderConfig {
    /// Configuration with an explicit version cap
    pub fn new(max_version: u8) -> Result<Self> {
        let version = Version::new(max_version)
            .filter(|v| v.number() <= MAX_VERSION)
            .ok_or_else(|| {
                EncodeError::InvalidConfig(format!(
                    "max version {} outside 1..={}",
                    max_version, MAX_VERSION
                ))
            })?;
        Ok(Self {
            max_version: version,
            ..Self::default()
        })
    }

    /// Read `QR_MAX_VERSION`, `QR_MASK_RULES` and `QR_PARALLEL_MASKS`.
    /// Unparseable values fall back to the defaults; the version cap is
    /// clamped into the supported range.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let max_version = parse_env_u8("QR_MAX_VERSION", MAX_VERSION).clamp(1, MAX_VERSION);
        Self {
            max_version: Version::new(max_version).unwrap_or(defaults.max_version),
            penalty: parse_env_rules("QR_MASK_RULES", defaults.penalty),
            parallel_masks: parse_env_bool_u8("QR_PARALLEL_MASKS", defaults.parallel_masks),
        }
    }

    /// Replace the mask penalty rule set
    pub fn with_penalty(mut self, penalty: PenaltyRules) -> Self {
        self.penalty = penalty;
        self
    }

    /// Toggle rayon-parallel mask trials
    pub fn with_parallel_masks(mut self, parallel: bool) -> Self {
        self.parallel_masks = parallel;
        self
    }

    /// Largest version the encoder may choose
    pub fn max_version(&self) -> Version {
        self.max_version
    }

    /// Penalty rules used for mask selection
    pub fn penalty(&self) -> PenaltyRules {
        self.penalty
    }

    /// Whether mask trials run on the rayon pool
    pub fn parallel_masks(&self) -> bool {
        self.parallel_masks
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_version: Version::new(MAX_VERSION).unwrap_or(Version::MIN),
            penalty: PenaltyRules::Iso,
            parallel_masks: true,
        }
    }
}

static ENV_CONFIG: OnceLock<EncoderConfig> = OnceLock::new();

/// Process-wide configuration, read from the environment once.
pub(crate) fn env_config() -> &'static EncoderConfig {
    ENV_CONFIG.get_or_init(EncoderConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncoderConfig::default();
        assert_eq!(config.max_version().number(), MAX_VERSION);
        assert_eq!(config.penalty(), PenaltyRules::Iso);
        assert!(config.parallel_masks());
    }

    #[test]
    fn test_new_validates_range() {
        assert!(EncoderConfig::new(1).is_ok());
        assert!(EncoderConfig::new(MAX_VERSION).is_ok());
        assert!(matches!(
            EncoderConfig::new(0),
            Err(EncodeError::InvalidConfig(_))
        ));
        assert!(matches!(
            EncoderConfig::new(MAX_VERSION + 1),
            Err(EncodeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = EncoderConfig::default()
            .with_penalty(PenaltyRules::Reduced)
            .with_parallel_masks(false);
        assert_eq!(config.penalty(), PenaltyRules::Reduced);
        assert!(!config.parallel_masks());
    }
}
