//! Pre-submission validation of raw form values
//!
//! Values stay as typed text until submit time; this module is the only
//! place they are parsed. Categorical fields come from fixed selectors and
//! are passed through without checking their domain.

use super::form_state::FieldValues;
use super::schema::required_numeric_fields;
use thiserror::Error;

/// Reasons a form cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required numeric fields left empty, in schema order
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// First numeric field that is not a number >= 0
    #[error("{0} must be a positive number")]
    InvalidNumber(&'static str),
}

/// Form values after a successful validation pass
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct ParsedInput {
    pub area: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub stories: f64,
    pub parking: f64,
    pub mainroad: String,
    pub guestroom: String,
    pub basement: String,
    pub hotwaterheating: String,
    pub airconditioning: String,
    pub prefarea: String,
    pub furnishingstatus: String,
}

/// Validate the raw values of a form.
///
/// Missing required fields are reported together; numeric problems stop at
/// the first offending field.
pub fn validate(values: &FieldValues) -> Result<ParsedInput, ValidationError> {
    let missing: Vec<&'static str> = required_numeric_fields()
        .iter()
        .copied()
        .filter(|name| values.get(name).map_or(true, str::is_empty))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let mut numbers = [0.0; 5];
    for (slot, name) in numbers.iter_mut().zip(required_numeric_fields()) {
        *slot = values
            .get(name)
            .and_then(parse_leading_float)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .ok_or(ValidationError::InvalidNumber(*name))?;
    }
    let [area, bedrooms, bathrooms, stories, parking] = numbers;

    let text = |name: &str| values.get(name).unwrap_or_default().to_string();

    Ok(ParsedInput {
        area,
        bedrooms,
        bathrooms,
        stories,
        parking,
        mainroad: text("mainroad"),
        guestroom: text("guestroom"),
        basement: text("basement"),
        hotwaterheating: text("hotwaterheating"),
        airconditioning: text("airconditioning"),
        prefarea: text("prefarea"),
        furnishingstatus: text("furnishingstatus"),
    })
}

/// Parse the longest leading decimal literal of `raw`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12abc"`
/// yields 12. Returns `None` when no digits are found.
fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let is_digit = |i: usize| bytes.get(i).is_some_and(u8::is_ascii_digit);

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while is_digit(end) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        while is_digit(frac_end) {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while is_digit(exp_end) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}
