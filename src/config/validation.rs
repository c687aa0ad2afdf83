//! Configuration validation.
//!
//! Every rule runs on every validation and all failures are reported
//! together, so a broken config file can be fixed in one pass.

use super::error::ConfigViolation;
use super::CaptureConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn check(ok: bool, violation: impl FnOnce() -> ConfigViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Run every rule against `config`, accumulating all violations.
pub fn validate(config: &CaptureConfig) -> Check {
    let placement = &config.placement;
    let margin = placement.margin;

    let checks = vec![
        check(config.trajectory_points >= 1, || {
            ConfigViolation::NoTrajectoryPoints
        }),
        check(config.marker_radius > 0.0, || {
            ConfigViolation::NonPositiveRadius {
                radius: config.marker_radius,
            }
        }),
        check((0.0..=1.0).contains(&placement.near_probability), || {
            ConfigViolation::ProbabilityOutOfRange {
                probability: placement.near_probability,
            }
        }),
        check(
            placement.near_radius_min >= 0.0 && placement.near_radius_min <= placement.near_radius_max,
            || ConfigViolation::InvalidNearRadius {
                min: placement.near_radius_min,
                max: placement.near_radius_max,
            },
        ),
        check(margin >= 0.0, || ConfigViolation::NegativeMargin { margin }),
        check(config.canvas.width > 2.0 * margin, || {
            ConfigViolation::CanvasTooSmall {
                axis: "width",
                extent: config.canvas.width,
                margin,
            }
        }),
        check(config.canvas.height > 2.0 * margin, || {
            ConfigViolation::CanvasTooSmall {
                axis: "height",
                extent: config.canvas.height,
                margin,
            }
        }),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Violations as a plain list; empty when the config is valid.
pub fn violations(config: &CaptureConfig) -> Vec<ConfigViolation> {
    match validate(config) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Extent;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&CaptureConfig::default()).is_success());
        assert!(violations(&CaptureConfig::default()).is_empty());
    }

    #[test]
    fn accumulates_all_violations() {
        let mut config = CaptureConfig::default();
        config.trajectory_points = 0;
        config.marker_radius = 0.0;
        config.placement.near_probability = 1.5;
        config.placement.near_radius_min = 200.0;

        let found = violations(&config);
        assert_eq!(found.len(), 4);
        assert!(found.contains(&ConfigViolation::NoTrajectoryPoints));
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigViolation::NonPositiveRadius { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigViolation::ProbabilityOutOfRange { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, ConfigViolation::InvalidNearRadius { .. })));
    }

    #[test]
    fn canvas_must_leave_room_inside_margin() {
        let mut config = CaptureConfig::default();
        config.canvas = Extent::new(100.0, 600.0);

        let found = violations(&config);
        assert_eq!(
            found,
            vec![ConfigViolation::CanvasTooSmall {
                axis: "width",
                extent: 100.0,
                margin: 50.0,
            }]
        );
    }

    #[test]
    fn negative_margin_is_rejected() {
        let mut config = CaptureConfig::default();
        config.placement.margin = -1.0;
        assert!(validate(&config).is_failure());
    }
}
