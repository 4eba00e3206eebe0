//! Field validators for form inputs.
//!
//! A validator is a pure function from a raw field value to an optional
//! error message: `Some(message)` means the value is invalid, `None` means
//! it passed. Validators never enforce presence except [`required`]; every
//! range-style validator treats an empty value as valid so that optional
//! numeric fields can stay blank.

/// A boxed validator, as stored in a [`RuleSet`](super::RuleSet).
pub type Validator = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Box a validator function for use in a rule set.
pub fn rule<F>(f: F) -> Validator
where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
{
    Box::new(f)
}

/// Parse a raw field value the way the form layer treats numbers.
///
/// Whitespace-only input parses as zero; anything else must be a valid
/// float. Returns `None` when the value is not numeric at all.
fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Fails when the trimmed value is empty.
pub fn required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("This field is required".to_string());
    }
    None
}

/// Fails when a non-empty value is shorter than `min` characters.
pub fn min_length(min: usize) -> impl Fn(&str) -> Option<String> {
    move |value| {
        if !value.is_empty() && value.chars().count() < min {
            return Some(format!("Minimum {min} characters required"));
        }
        None
    }
}

/// Fails when a non-empty value is longer than `max` characters.
pub fn max_length(max: usize) -> impl Fn(&str) -> Option<String> {
    move |value| {
        if !value.is_empty() && value.chars().count() > max {
            return Some(format!("Maximum {max} characters allowed"));
        }
        None
    }
}

/// Fails when a non-empty value is not numerically parseable.
pub fn number(value: &str) -> Option<String> {
    if !value.is_empty() && parse_number(value).is_none() {
        return Some("Must be a valid number".to_string());
    }
    None
}

/// Fails when a non-empty value is not a number greater than zero.
pub fn positive_number(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match parse_number(value) {
        Some(num) if num > 0.0 => None,
        _ => Some("Must be a positive number".to_string()),
    }
}

/// Fails when a non-empty value is outside `[min, max]` inclusive, or not
/// parseable at all.
pub fn range(min: f64, max: f64) -> impl Fn(&str) -> Option<String> {
    move |value| {
        if value.is_empty() {
            return None;
        }
        match parse_number(value) {
            None => Some("Must be a valid number".to_string()),
            Some(num) if num < min || num > max => {
                Some(format!("Must be between {min} and {max}"))
            }
            Some(_) => None,
        }
    }
}

/// Fails when a non-empty value is not an integer part plus an optional
/// fraction of at most `places` digits.
pub fn decimal(places: usize) -> impl Fn(&str) -> Option<String> {
    move |value| {
        if value.is_empty() {
            return None;
        }
        let ok = match value.split_once('.') {
            None => value.bytes().all(|b| b.is_ascii_digit()),
            Some((int, frac)) => {
                !int.is_empty()
                    && int.bytes().all(|b| b.is_ascii_digit())
                    && !frac.is_empty()
                    && frac.len() <= places
                    && frac.bytes().all(|b| b.is_ascii_digit())
            }
        };
        if !ok {
            return Some(format!(
                "Must be a decimal with up to {places} decimal places"
            ));
        }
        None
    }
}

// Ammunition-specific validators.
//
// powder_charge advertises a 0.1 grain lower bound but the guard is
// `num <= 0.0`, so values in (0, 0.1) pass. The backend has always behaved
// this way and forms rely on it, so the guard is kept as-is.

/// Powder charge in grains. Valid on `(0, 200]`.
pub fn powder_charge(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match parse_number(value) {
        Some(num) if num > 0.0 && num <= 200.0 => None,
        _ => Some("Powder charge must be between 0.1 and 200 grains".to_string()),
    }
}

/// Muzzle velocity in feet per second. Valid on `[100, 5000]`.
pub fn velocity(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match parse_number(value) {
        Some(num) if (100.0..=5000.0).contains(&num) => None,
        _ => Some("Velocity must be between 100 and 5000 fps".to_string()),
    }
}

/// Cartridge overall length in inches. Valid on `[0.5, 10]`.
pub fn overall_length(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match parse_number(value) {
        Some(num) if (0.5..=10.0).contains(&num) => None,
        _ => Some("Overall length must be between 0.5 and 10 inches".to_string()),
    }
}
