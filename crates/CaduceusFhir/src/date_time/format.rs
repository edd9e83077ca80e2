//! Numeric rendering helpers shared by the temporal formatters.

/// Zero-pads a month, day, hour, minute or second to two digits.
pub fn format_two_digits(value: u32) -> String {
    format!("{:02}", value)
}

/// Renders a year with at least four digits, keeping the sign of BCE years.
///
/// ```rust
/// use caduceus_fhir::date_time::format::format_year;
///
/// assert_eq!(format_year(2015), "2015");
/// assert_eq!(format_year(-1), "-0001");
/// ```
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{:04}", year)
    }
}

/// Renders the digits that follow the decimal point of a fractional second.
///
/// Returns `None` for anything outside `(0, 1)`, so a zero fraction leaves no
/// trace in the output. The digits come from the shortest scientific form of
/// the float, expanded back to fixed point: `1e-9` becomes `000000001` and
/// `2.6e-4` becomes `00026`.
pub fn format_fraction(fraction: f64) -> Option<String> {
    if !(fraction > 0.0 && fraction < 1.0) {
        return None;
    }

    let scientific = format!("{:e}", fraction);
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    // A value below one always has a negative exponent.
    let leading_zeros = usize::try_from(-exponent - 1).ok()?;
    let mut rendered = "0".repeat(leading_zeros);
    rendered.push_str(&digits);
    Some(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digits() {
        assert_eq!(format_two_digits(0), "00");
        assert_eq!(format_two_digits(7), "07");
        assert_eq!(format_two_digits(59), "59");
    }

    #[test]
    fn test_year_padding() {
        assert_eq!(format_year(0), "0000");
        assert_eq!(format_year(999), "0999");
        assert_eq!(format_year(-44), "-0044");
    }

    #[test]
    fn test_fraction_expands_scientific_form() {
        assert_eq!(format_fraction(0.12345).as_deref(), Some("12345"));
        assert_eq!(format_fraction(0.00001).as_deref(), Some("00001"));
        assert_eq!(format_fraction(0.00006).as_deref(), Some("00006"));
        assert_eq!(format_fraction(0.00026).as_deref(), Some("00026"));
        assert_eq!(format_fraction(0.000000001).as_deref(), Some("000000001"));
        assert_eq!(format_fraction(0.999999999).as_deref(), Some("999999999"));
    }

    #[test]
    fn test_fraction_out_of_range() {
        assert_eq!(format_fraction(0.0), None);
        assert_eq!(format_fraction(1.0), None);
        assert_eq!(format_fraction(f64::NAN), None);
    }
}
