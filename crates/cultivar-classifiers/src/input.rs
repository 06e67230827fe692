//! Turning raw form text into an ordered feature vector.

use std::collections::HashMap;

use crate::artifact::FeatureSpec;
use crate::error::ParseError;

/// Parsed user input, one value per declared feature in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Drop `_` digit separators (`1_000.5`). Returns `None` when an underscore
/// is not between two digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i > 0 && bytes[i - 1].is_ascii_digit();
        let after = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(before && after) {
            return None;
        }
    }
    Some(out)
}

/// Parse one raw field. Surrounding whitespace is ignored; anything that is
/// not a finite number is rejected.
pub fn parse_value(feature: &str, raw: &str) -> Result<f64, ParseError> {
    let not_a_number = || ParseError::NotANumber {
        feature: feature.to_string(),
        raw: raw.to_string(),
    };
    let text = strip_digit_separators(raw.trim()).ok_or_else(not_a_number)?;
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(not_a_number()),
    }
}

/// Read every declared feature from the submitted fields, in feature order.
/// Unknown fields are ignored.
pub fn parse_form(
    features: &[FeatureSpec],
    form: &HashMap<String, String>,
) -> Result<FeatureVector, ParseError> {
    parse_fields(features, |name| form.get(name).map(String::as_str))
}

/// Same as [`parse_form`] for any name-to-text lookup.
pub fn parse_fields<'a, F>(features: &[FeatureSpec], lookup: F) -> Result<FeatureVector, ParseError>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut values = Vec::with_capacity(features.len());
    for spec in features {
        let raw = lookup(&spec.name).ok_or_else(|| ParseError::Missing {
            feature: spec.name.clone(),
        })?;
        values.push(parse_value(&spec.name, raw)?);
    }
    Ok(FeatureVector::new(values))
}
