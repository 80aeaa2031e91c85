//! Number printing and rounding shared by every generated value.

/// Print a number the way a browser stringifies it: shortest decimal that
/// round-trips, no trailing `.0`, and negative zero as `0`.
pub fn css_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(v: f64) -> i64 {
    let floor = v.floor();
    if v - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// `<n>px` with browser number formatting.
pub fn px(v: f64) -> String {
    format!("{}px", css_number(v))
}

/// `<n>vw` with browser number formatting.
pub fn vw(v: f64) -> String {
    format!("{}vw", css_number(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_have_no_fraction() {
        assert_eq!(css_number(16.0), "16");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(0.0), "0");
    }

    #[test]
    fn fractions_print_shortest() {
        assert_eq!(css_number(16.0 * 0.9), "14.4");
        assert_eq!(css_number(0.5 * 1.375), "0.6875");
        assert_eq!(css_number(1.125), "1.125");
        assert_eq!(css_number(47.0 / 40.0), "1.175");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(round_half_up(10.5), 11);
        assert_eq!(round_half_up(14.4), 14);
        assert_eq!(round_half_up(17.6), 18);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(19.0), 19);
    }

    #[test]
    fn units() {
        assert_eq!(px(16.875), "16.875px");
        assert_eq!(vw(0.125), "0.125vw");
    }
}
