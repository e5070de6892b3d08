use serde::{Deserialize, Serialize};

use super::error::ParamsError;

/// Configuration for the arrow tracker.
///
/// Set once at construction; every field has a default so partial JSON
/// configs are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerParams {
    /// Squared pixel distance under which two points count as the same
    /// point across frames. `49` accepts up to 7 px of jitter.
    pub similarity_tolerance: i64,
    /// Candidates enclosing less area than this are discarded as noise.
    pub min_area: f64,
    /// Stability added to a track each frame it absorbs a candidate.
    pub stability_gain_on_match: i32,
    /// Upper clamp for the stability score.
    pub stability_max: i32,
    /// Tracks with stability strictly above this value are reported.
    pub stability_threshold: i32,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            similarity_tolerance: 49,
            min_area: 50.0,
            stability_gain_on_match: 2,
            stability_max: 10,
            stability_threshold: 2,
        }
    }
}

impl TrackerParams {
    /// Reject configurations under which the tracker cannot behave sensibly.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.similarity_tolerance < 0 {
            return Err(ParamsError::NegativeTolerance(self.similarity_tolerance));
        }
        if !self.min_area.is_finite() || self.min_area < 0.0 {
            return Err(ParamsError::InvalidMinArea(self.min_area));
        }
        if self.stability_gain_on_match <= 0 {
            return Err(ParamsError::NonPositiveGain(self.stability_gain_on_match));
        }
        if self.stability_max < 0 {
            return Err(ParamsError::NegativeStabilityMax(self.stability_max));
        }
        if self.stability_threshold >= self.stability_max {
            return Err(ParamsError::UnreachableThreshold {
                threshold: self.stability_threshold,
                max: self.stability_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(TrackerParams::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let p: TrackerParams =
            serde_json::from_str(r#"{ "similarity_tolerance": 25 }"#).expect("parse params");
        assert_eq!(p.similarity_tolerance, 25);
        assert_eq!(p.stability_max, 10);
        assert_eq!(p.min_area, 50.0);
    }

    #[test]
    fn threshold_at_max_is_rejected() {
        let p = TrackerParams {
            stability_threshold: 10,
            ..TrackerParams::default()
        };
        assert_eq!(
            p.validate(),
            Err(ParamsError::UnreachableThreshold {
                threshold: 10,
                max: 10
            })
        );
    }

    #[test]
    fn bad_scalars_are_rejected() {
        let neg_tol = TrackerParams {
            similarity_tolerance: -1,
            ..TrackerParams::default()
        };
        assert!(matches!(
            neg_tol.validate(),
            Err(ParamsError::NegativeTolerance(-1))
        ));

        let nan_area = TrackerParams {
            min_area: f64::NAN,
            ..TrackerParams::default()
        };
        assert!(matches!(
            nan_area.validate(),
            Err(ParamsError::InvalidMinArea(_))
        ));

        let zero_gain = TrackerParams {
            stability_gain_on_match: 0,
            ..TrackerParams::default()
        };
        assert!(matches!(
            zero_gain.validate(),
            Err(ParamsError::NonPositiveGain(0))
        ));
    }
}
