//! Bounds checking for user supplied feature values.

use crate::artifact::FeatureSpec;
use crate::error::{PredictionError, ValidationError};

/// Human readable form of an internal feature name: underscores become
/// spaces and every alphabetic run is title-cased, so
/// `od280/od315_of_diluted_wines` reads `Od280/Od315 Of Diluted Wines`.
pub fn display_name(feature: &str) -> String {
    let mut out = String::with_capacity(feature.len());
    let mut in_word = false;
    for ch in feature.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Check every value against its feature's inclusive `[min, max]` range.
///
/// `values` must be in the same order as `features`. Stops at the first
/// violation in feature order.
pub fn validate_inputs(features: &[FeatureSpec], values: &[f64]) -> Result<(), ValidationError> {
    for (spec, &value) in features.iter().zip(values) {
        if !spec.bounds.contains(value) {
            return Err(ValidationError {
                feature: spec.name.clone(),
                min: spec.bounds.min,
                max: spec.bounds.max,
            });
        }
    }
    Ok(())
}

/// Length guard used before validation so a short vector can never pass
/// silently.
pub(crate) fn check_width(features: &[FeatureSpec], values: &[f64]) -> Result<(), PredictionError> {
    if features.len() != values.len() {
        return Err(PredictionError::DimensionMismatch {
            expected: features.len(),
            found: values.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::FeatureBounds;

    fn specs() -> Vec<FeatureSpec> {
        vec![
            FeatureSpec::new("alcohol", FeatureBounds::new(10.0, 15.0)),
            FeatureSpec::new("malic_acid", FeatureBounds::new(0.5, 6.0)),
            FeatureSpec::new("color_intensity", FeatureBounds::new(1.0, 13.0)),
        ]
    }

    #[test]
    fn display_name_title_cases_words() {
        assert_eq!(display_name("alcohol"), "Alcohol");
        assert_eq!(display_name("malic_acid"), "Malic Acid");
        assert_eq!(display_name("COLOR_INTENSITY"), "Color Intensity");
        assert_eq!(
            display_name("od280/od315_of_diluted_wines"),
            "Od280/Od315 Of Diluted Wines"
        );
    }

    #[test]
    fn in_range_values_pass() {
        assert!(validate_inputs(&specs(), &[13.0, 2.0, 5.0]).is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate_inputs(&specs(), &[10.0, 6.0, 1.0]).is_ok());
        assert!(validate_inputs(&specs(), &[15.0, 0.5, 13.0]).is_ok());
    }

    #[test]
    fn out_of_range_names_the_feature() {
        let err = validate_inputs(&specs(), &[50.0, 2.0, 5.0]).unwrap_err();
        assert_eq!(err.feature, "alcohol");
        assert_eq!(err.to_string(), "Alcohol must be between 10.00 and 15.00");

        let err = validate_inputs(&specs(), &[12.0, 0.49, 5.0]).unwrap_err();
        assert_eq!(err.to_string(), "Malic Acid must be between 0.50 and 6.00");
    }

    #[test]
    fn first_violation_in_feature_order_wins() {
        let err = validate_inputs(&specs(), &[13.0, 100.0, -1.0]).unwrap_err();
        assert_eq!(err.feature, "malic_acid");
    }
}
