//! Round configuration and validation.

use std::error::Error;
use std::fmt;

/// Why a [`GameConfig`] was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field that must be strictly positive was zero or negative.
    NonPositive { field: &'static str, value: f32 },
    /// A field that must be non-negative was negative.
    Negative { field: &'static str, value: f32 },
    /// A field was NaN or infinite.
    NotFinite { field: &'static str },
    /// A ring capacity was zero.
    ZeroCapacity { field: &'static str },
    /// The critical threshold exceeds the warning threshold.
    ThresholdOrder { warning: f32, critical: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::NotFinite { field } => {
                write!(f, "{field} must be finite")
            }
            Self::ZeroCapacity { field } => {
                write!(f, "{field} must hold at least one sample")
            }
            Self::ThresholdOrder { warning, critical } => write!(
                f,
                "critical threshold {critical} exceeds warning threshold {warning}"
            ),
        }
    }
}

impl Error for ConfigError {}

/// All tunable round parameters.
///
/// `default()` reproduces the stock tuning; callers override fields
/// with struct-update syntax and must call
/// [`validate`](GameConfig::validate) before handing the config to a
/// [`GameDirector`](crate::GameDirector).
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Seconds of investigation countdown per round.
    pub investigation_time: f32,
    /// Scaled seconds from round start until the hazard warning.
    pub hazard_delay: f32,
    /// Scaled seconds between the warning and the hazard executing.
    pub hazard_warning_time: f32,
    /// Seconds of history the rewind replays.
    pub rewind_duration: f32,
    /// Playback speed multiplier during rewind.
    pub rewind_speed: f32,
    /// World history ring capacity, in snapshots.
    pub world_capacity: usize,
    /// World recording cadence in samples per second.
    pub world_record_hz: f32,
    /// Player history ring capacity, in frames.
    pub player_capacity: usize,
    /// Player recording cadence in samples per second.
    pub player_record_hz: f32,
    /// Countdown remaining at which severity turns Warning.
    pub warning_threshold: f32,
    /// Countdown remaining at which severity turns Critical.
    pub critical_threshold: f32,
    /// Real seconds between GameOver/Victory and the scheduled restart.
    pub restart_delay: f32,
    /// Seconds between accepted interactions.
    pub interact_cooldown: f32,
    /// How close the player must be to the hazard site to interact.
    pub interact_radius: f32,
    /// Countdown seconds deducted when a mini-game is failed.
    pub failure_time_penalty: f32,
    /// Seed for all round randomness (hazard pick, board layouts).
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            investigation_time: 60.0,
            hazard_delay: 5.0,
            hazard_warning_time: 2.0,
            rewind_duration: 3.0,
            rewind_speed: 2.0,
            world_capacity: 300,
            world_record_hz: 30.0,
            player_capacity: 600,
            player_record_hz: 60.0,
            warning_threshold: 20.0,
            critical_threshold: 10.0,
            restart_delay: 3.0,
            interact_cooldown: 0.5,
            interact_radius: 2.0,
            failure_time_penalty: 0.0,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Check every parameter. Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("investigation_time", self.investigation_time),
            ("rewind_duration", self.rewind_duration),
            ("rewind_speed", self.rewind_speed),
            ("world_record_hz", self.world_record_hz),
            ("player_record_hz", self.player_record_hz),
            ("interact_radius", self.interact_radius),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("hazard_delay", self.hazard_delay),
            ("hazard_warning_time", self.hazard_warning_time),
            ("warning_threshold", self.warning_threshold),
            ("critical_threshold", self.critical_threshold),
            ("restart_delay", self.restart_delay),
            ("interact_cooldown", self.interact_cooldown),
            ("failure_time_penalty", self.failure_time_penalty),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.world_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "world_capacity",
            });
        }
        if self.player_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "player_capacity",
            });
        }

        if self.critical_threshold > self.warning_threshold {
            return Err(ConfigError::ThresholdOrder {
                warning: self.warning_threshold,
                critical: self.critical_threshold,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn default_config_matches_stock_tuning() {
        let c = GameConfig::default();
        assert_eq!(c.investigation_time, 60.0);
        assert_eq!(c.hazard_delay, 5.0);
        assert_eq!(c.rewind_duration, 3.0);
        assert_eq!(c.rewind_speed, 2.0);
        assert_eq!(c.world_capacity, 300);
        assert_eq!(c.world_record_hz, 30.0);
        assert_eq!(c.player_capacity, 600);
        assert_eq!(c.player_record_hz, 60.0);
    }

    #[test]
    fn zero_investigation_time_is_rejected() {
        let config = GameConfig {
            investigation_time: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "investigation_time",
                value: 0.0
            })
        );
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = GameConfig {
            player_capacity: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroCapacity {
                field: "player_capacity"
            })
        );
    }

    #[test]
    fn inverted_thresholds_are_rejected() {
        let config = GameConfig {
            warning_threshold: 5.0,
            critical_threshold: 10.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdOrder {
                warning: 5.0,
                critical: 10.0
            })
        );
    }

    #[test]
    fn nan_durations_are_rejected() {
        let config = GameConfig {
            hazard_delay: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "hazard_delay"
            })
        );
    }

    #[test]
    fn negative_penalty_is_rejected() {
        let config = GameConfig {
            failure_time_penalty: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ConfigError::NonPositive {
            field: "rewind_speed",
            value: -2.0,
        };
        assert_eq!(err.to_string(), "rewind_speed must be positive, got -2");
    }
}
