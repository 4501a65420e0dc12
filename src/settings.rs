//! Front-end settings and hole generation
//!
//! Loaded from an optional JSON file; command line flags override it.

use std::fs;
use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::DEFAULT_COURSE_ROUGH;
use crate::sim::CourseConfig;

/// Longest hole length that is still a whole number of meters in an `f64`
pub const MAX_HOLE_LENGTH: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shortest generated hole (meters, inclusive)
    pub min_length: f64,
    /// Longest generated hole (meters, exclusive)
    pub max_length: f64,
    /// Rough beyond the cup (meters)
    pub course_rough: f64,
    /// Fixed swing budget; derived from the hole length when absent
    pub max_swings: Option<u32>,
    /// RNG seed for reproducible holes; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_length: 200.0,
            max_length: 800.0,
            course_rough: DEFAULT_COURSE_ROUGH,
            max_swings: None,
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_length.is_nan() || self.min_length < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "min_length must be non-negative (got {})",
                self.min_length
            )));
        }
        if self.max_length.is_nan() || self.max_length <= self.min_length {
            return Err(SettingsError::Invalid(format!(
                "max_length ({}) must be greater than min_length ({})",
                self.max_length, self.min_length
            )));
        }
        if self.max_length > MAX_HOLE_LENGTH {
            return Err(SettingsError::Invalid(format!(
                "max_length must be at most {MAX_HOLE_LENGTH} (got {})",
                self.max_length
            )));
        }
        if self.course_rough.is_nan() || self.course_rough < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "course_rough must be non-negative (got {})",
                self.course_rough
            )));
        }
        if self.max_swings == Some(0) {
            return Err(SettingsError::Invalid("max_swings must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Swing budget for a hole: fixed if configured, else one per
    /// hundred meters plus one
    pub fn max_swings_for(&self, course_length: f64) -> u32 {
        self.max_swings.unwrap_or_else(|| ((course_length / 100.0) as u32).saturating_add(1))
    }

    /// Course for a known length
    pub fn course_for_length(&self, course_length: f64) -> CourseConfig {
        CourseConfig {
            course_length,
            max_swings: self.max_swings_for(course_length),
            course_rough: self.course_rough,
        }
    }

    /// Seeded RNG, drawing a fresh seed when none is configured
    pub fn rng(&self) -> (u64, Pcg32) {
        let seed = self.seed.unwrap_or_else(rand::random);
        (seed, Pcg32::seed_from_u64(seed))
    }

    /// Random whole-meter hole length in `[min_length, max_length)`.
    /// Falls back to `min_length` rounded up when no whole meter fits.
    pub fn generate_course(&self, rng: &mut impl Rng) -> CourseConfig {
        let min = self.min_length.ceil() as u64;
        let max = self.max_length.ceil() as u64;
        let length = if max > min { rng.random_range(min..max) } else { min };
        self.course_for_length(length as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.course_rough, 1000.0);
    }

    #[test]
    fn test_max_swings_derived_from_length() {
        let settings = Settings::default();
        assert_eq!(settings.max_swings_for(200.0), 3);
        assert_eq!(settings.max_swings_for(799.0), 8);
        assert_eq!(settings.max_swings_for(50.0), 1);

        let fixed = Settings {
            max_swings: Some(4),
            ..Default::default()
        };
        assert_eq!(fixed.max_swings_for(799.0), 4);
    }

    #[test]
    fn test_generated_course_is_deterministic_and_in_range() {
        let settings = Settings {
            seed: Some(12345),
            ..Default::default()
        };
        let (seed, mut rng1) = settings.rng();
        assert_eq!(seed, 12345);
        let (_, mut rng2) = settings.rng();

        for _ in 0..100 {
            let a = settings.generate_course(&mut rng1);
            let b = settings.generate_course(&mut rng2);
            assert_eq!(a, b);
            assert!(a.course_length >= 200.0 && a.course_length < 800.0);
            assert_eq!(a.course_length.fract(), 0.0);
            assert_eq!(a.max_swings, (a.course_length / 100.0) as u32 + 1);
            assert_eq!(a.course_rough, 1000.0);
        }
    }

    #[test]
    fn test_validation_rejects_bad_ranges() {
        let inverted = Settings {
            min_length: 500.0,
            max_length: 100.0,
            ..Default::default()
        };
        assert!(matches!(inverted.validate(), Err(SettingsError::Invalid(_))));

        let negative_rough = Settings {
            course_rough: -1.0,
            ..Default::default()
        };
        assert!(negative_rough.validate().is_err());

        let no_swings = Settings {
            max_swings: Some(0),
            ..Default::default()
        };
        assert!(no_swings.validate().is_err());

        let nan_length = Settings {
            min_length: f64::NAN,
            ..Default::default()
        };
        assert!(nan_length.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_huge_lengths() {
        let huge: Settings =
            serde_json::from_str(r#"{"min_length": 1e20, "max_length": 2e20}"#).unwrap();
        assert!(matches!(huge.validate(), Err(SettingsError::Invalid(_))));

        let at_limit = Settings {
            min_length: MAX_HOLE_LENGTH - 10.0,
            max_length: MAX_HOLE_LENGTH,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
        let (_, mut rng) = Settings { seed: Some(1), ..at_limit.clone() }.rng();
        let course = at_limit.generate_course(&mut rng);
        assert!(course.course_length >= at_limit.min_length);
        assert!(course.course_length < at_limit.max_length);
    }

    #[test]
    fn test_generate_course_without_room_does_not_panic() {
        let (_, mut rng) = Settings::default().rng();

        let huge = Settings {
            min_length: 1e20,
            max_length: 2e20,
            ..Default::default()
        };
        let course = huge.generate_course(&mut rng);
        assert_eq!(course.course_length, u64::MAX as f64);
        assert_eq!(course.max_swings, u32::MAX);

        let narrow = Settings {
            min_length: 200.2,
            max_length: 200.8,
            ..Default::default()
        };
        assert_eq!(narrow.generate_course(&mut rng).course_length, 201.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"max_swings": 5, "seed": 7}"#).unwrap();
        assert_eq!(settings.max_swings, Some(5));
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.min_length, 200.0);
        assert_eq!(settings.max_length, 800.0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("swing_golf_settings_{}.json", std::process::id()));
        fs::write(&path, r#"{"min_length": 100, "max_length": 150, "course_rough": 50}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.min_length, 100.0);
        assert_eq!(settings.course_rough, 50.0);

        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Parse { .. })));

        fs::remove_file(&path).unwrap();
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io { .. })));
    }
}
