// src/core/coerce.rs
//
// Best-effort coercion of loose JSON stat fields.
//
// Absent, null and "" are *empty*: blank on screen, 0 in sums.
// Anything that is present but not a number is *invalid*: 0 in sums,
// shown as given so a typo in the source file stays visible.

use serde_json::Value;

/// A stat field after coercion.
#[derive(Clone, Debug, PartialEq)]
pub enum Stat {
    Empty,
    Number(f64),
    Invalid(String),
}

impl Stat {
    /// Contribution to a team total.
    pub fn as_f64(&self) -> f64 {
        match self {
            Stat::Number(n) if !n.is_nan() => *n,
            _ => 0.0,
        }
    }

    /// Cell text.
    pub fn display(&self) -> String {
        match self {
            Stat::Empty => s!(),
            Stat::Number(n) => fmt_number(*n),
            Stat::Invalid(raw) => raw.clone(),
        }
    }
}

/// Coerce a raw field. `None` means the key was missing.
pub fn numeric(value: Option<&Value>) -> Stat {
    match value {
        None | Some(Value::Null) => Stat::Empty,
        Some(Value::String(s)) if s.is_empty() => Stat::Empty,
        Some(v) => match to_number(v) {
            Some(n) => Stat::Number(n),
            None => Stat::Invalid(raw_display(Some(v))),
        },
    }
}

/// Number-like conversion. Booleans count as 1/0; whitespace-only text is 0.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number_text(s),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_number_text(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0.0);
    }
    match t {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // Rust's float parser also takes "inf"/"nan"; keep to plain decimals.
    if !t.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) {
        return None;
    }
    t.parse::<f64>().ok()
}

/// Shortest decimal that round-trips, `-0` folded to `0`. Magnitudes from
/// 1e21 up and below 1e-6 use exponent form (`1e+21`, `1.5e-7`).
pub fn fmt_number(n: f64) -> String {
    if n.is_nan() {
        s!("NaN")
    } else if n.is_infinite() {
        if n > 0.0 { s!("Infinity") } else { s!("-Infinity") }
    } else if n == 0.0 {
        s!("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let sci = format!("{n:e}");
        match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        }
    } else {
        n.to_string()
    }
}

/// Display a field as given, without numeric coercion.
pub fn raw_display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => s!(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.as_f64().map(fmt_number).unwrap_or_else(|| n.to_string()),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Display for name-like fields: falsy values show as blank.
pub fn text_display(value: Option<&Value>) -> String {
    match value {
        Some(Value::Bool(false)) => s!(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => s!(),
        other => raw_display(other),
    }
}

/// `ratio × 100` to one decimal place; ties round away from zero.
pub fn percent_1dp(ratio: f64) -> String {
    round_1dp(ratio * 100.0)
}

/// Rounds the stored value itself. `{:.1}` is exact except on ties, where it
/// goes to even; the only exactly representable ties are odd multiples of
/// 0.25, and those go away from zero.
fn round_1dp(pct: f64) -> String {
    if !pct.is_finite() {
        return fmt_number(pct);
    }
    if pct == 0.0 {
        return s!("0.0");
    }
    let quarters = pct * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let sign = if pct < 0.0 { "-" } else { "" };
        return format!("{sign}{:.1}", pct.abs() + 0.05);
    }
    format!("{pct:.1}")
}

/// Save percentage cell: blank when absent or null.
pub fn save_percentage(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => s!(),
        Some(v) => match to_number(v) {
            Some(ratio) => percent_1dp(ratio),
            None => s!("NaN"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_markers() {
        assert_eq!(numeric(None), Stat::Empty);
        assert_eq!(numeric(Some(&Value::Null)), Stat::Empty);
        assert_eq!(numeric(Some(&json!(""))), Stat::Empty);
        assert_eq!(numeric(None).display(), "");
        assert_eq!(numeric(None).as_f64(), 0.0);
    }

    #[test]
    fn numbers_and_numeric_text() {
        assert_eq!(numeric(Some(&json!("5"))), Stat::Number(5.0));
        assert_eq!(numeric(Some(&json!(" 2.5 "))), Stat::Number(2.5));
        assert_eq!(numeric(Some(&json!(3))), Stat::Number(3.0));
        assert_eq!(numeric(Some(&json!(true))), Stat::Number(1.0));
        assert_eq!(numeric(Some(&json!("1e2"))).display(), "100");
        assert_eq!(numeric(Some(&json!("-Infinity"))).display(), "-Infinity");
    }

    #[test]
    fn extreme_magnitudes_use_exponents() {
        assert_eq!(fmt_number(1e21), "1e+21");
        assert_eq!(fmt_number(-2.5e22), "-2.5e+22");
        assert_eq!(fmt_number(1e-7), "1e-7");
        assert_eq!(fmt_number(1.5e-7), "1.5e-7");
        assert_eq!(fmt_number(1e20), "100000000000000000000");
        assert_eq!(fmt_number(0.000001), "0.000001");
    }

    #[test]
    fn zero_is_not_blank() {
        assert_eq!(numeric(Some(&json!(0))).display(), "0");
        assert_eq!(numeric(Some(&json!("0"))).display(), "0");
        assert_eq!(numeric(Some(&json!(-0.0))).display(), "0");
    }

    #[test]
    fn invalid_counts_as_zero_but_keeps_text() {
        for v in [json!("abc"), json!("nan"), json!("inf"), json!([1]), json!({"a": 1})] {
            let stat = numeric(Some(&v));
            assert!(matches!(stat, Stat::Invalid(_)), "{v} should be invalid");
            assert_eq!(stat.as_f64(), 0.0);
        }
        assert_eq!(numeric(Some(&json!("abc"))).display(), "abc");
    }

    #[test]
    fn raw_and_text_display() {
        assert_eq!(raw_display(Some(&json!("12:34"))), "12:34");
        assert_eq!(raw_display(Some(&json!(-2))), "-2");
        assert_eq!(raw_display(Some(&json!(0))), "0");
        assert_eq!(raw_display(None), "");
        assert_eq!(text_display(Some(&json!(0))), "");
        assert_eq!(text_display(Some(&json!(false))), "");
        assert_eq!(text_display(Some(&json!(17))), "17");
        assert_eq!(text_display(Some(&json!("C"))), "C");
    }

    #[test]
    fn save_percentages() {
        assert_eq!(save_percentage(Some(&json!(0.912))), "91.2");
        assert_eq!(save_percentage(Some(&json!(0.833))), "83.3");
        assert_eq!(save_percentage(Some(&json!(1))), "100.0");
        assert_eq!(save_percentage(Some(&json!("0.9"))), "90.0");
        assert_eq!(save_percentage(Some(&json!(0))), "0.0");
        assert_eq!(save_percentage(None), "");
        assert_eq!(save_percentage(Some(&Value::Null)), "");
        assert_eq!(save_percentage(Some(&json!("n/a"))), "NaN");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_1dp(91.25), "91.3");
        assert_eq!(round_1dp(0.25), "0.3");
        assert_eq!(round_1dp(-0.25), "-0.3");
        assert_eq!(percent_1dp(-0.25), "-25.0");
        assert_eq!(round_1dp(0.75), "0.8");
        assert_eq!(round_1dp(-0.0), "0.0");
    }

    #[test]
    fn near_ties_round_by_stored_value() {
        // 0.8105 * 100 is stored just below 81.05
        assert_eq!(save_percentage(Some(&json!(0.8105))), "81.0");
        assert_eq!(save_percentage(Some(&json!(0.8005))), "80.0");
        assert_eq!(save_percentage(Some(&json!(0.8035))), "80.3");
        assert_eq!(save_percentage(Some(&json!(0.9125))), "91.3");
        assert_eq!(round_1dp(-0.04), "-0.0");
    }
}
