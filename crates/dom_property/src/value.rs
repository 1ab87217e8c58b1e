//! Host value model for property and attribute writes.
//!
//! Values flowing through the property layer keep their host type: a number
//! assigned to a node property stays a number, while attribute writes and
//! redundant-write checks go through [`PropValue::to_markup_string`], which
//! reproduces string-concatenation coercion exactly.

use core::fmt::{Display, Formatter, Result as FmtResult};
use serde_json::Value as JsonValue;

/// Largest decimal exponent still printed without exponent notation.
const MAX_DECIMAL_EXPONENT: i32 = 21;
/// Smallest decimal exponent still printed as `0.000ddd`.
const MIN_DECIMAL_EXPONENT: i32 = -6;

/// A host-native value assigned to a property or attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// The `undefined` value.
    Undefined,
    /// The `null` value.
    Null,
    /// A boolean primitive.
    Boolean(bool),
    /// A number (IEEE 754 double precision).
    Number(f64),
    /// A string value (UTF-8).
    String(String),
}

impl PropValue {
    /// True for `undefined` and `null`.
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Boolean coercion: `false` for nullish values, `false`, `0`, `-0`, `NaN` and `""`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(flag) => *flag,
            Self::Number(number) => !(number.is_nan() || *number == 0.0),
            Self::String(text) => !text.is_empty(),
        }
    }

    /// Numeric coercion, the conversion used by `isNaN(value)` and `value < 1`.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined => f64::NAN,
            Self::Null => 0.0,
            Self::Boolean(flag) => f64::from(u8::from(*flag)),
            Self::Number(number) => *number,
            Self::String(text) => parse_numeric_literal(text),
        }
    }

    /// String coercion as performed by `'' + value`.
    ///
    /// Numbers use the host number-to-string rules: shortest round-trip
    /// digits, no trailing `.0` on integers, `-0` printed as `0`, and exponent
    /// notation (`1e+21`, `1.5e-7`) outside the decimal range.
    pub fn to_markup_string(&self) -> String {
        match self {
            Self::Undefined => String::from("undefined"),
            Self::Null => String::from("null"),
            Self::Boolean(flag) => flag.to_string(),
            Self::Number(number) => format_number(*number),
            Self::String(text) => text.clone(),
        }
    }

    /// Loose equality on the canonical string form, the check used to skip
    /// redundant writes.
    pub fn markup_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(left), Self::String(right)) => left == right,
            _ => self.to_markup_string() == other.to_markup_string(),
        }
    }

    /// Convert a JSON primitive. Arrays and objects have no property value form.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Null => Some(Self::Null),
            JsonValue::Bool(flag) => Some(Self::Boolean(*flag)),
            JsonValue::Number(number) => number.as_f64().map(Self::Number),
            JsonValue::String(text) => Some(Self::String(text.clone())),
            JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }
}

impl Display for PropValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(&self.to_markup_string())
    }
}

impl From<bool> for PropValue {
    fn from(flag: bool) -> Self {
        Self::Boolean(flag)
    }
}

impl From<f64> for PropValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for PropValue {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for PropValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

/// Number-to-string conversion following the host algorithm.
fn format_number(number: f64) -> String {
    if number.is_nan() {
        return String::from("NaN");
    }
    if number == 0.0 {
        return String::from("0");
    }
    if number.is_infinite() {
        let text = if number > 0.0 { "Infinity" } else { "-Infinity" };
        return String::from(text);
    }
    let sign = if number < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", number.abs());
    let Some((mantissa, exponent_text)) = scientific.split_once('e') else {
        return number.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let Ok(exponent) = exponent_text.parse::<i32>() else {
        return number.to_string();
    };
    let digit_count = digits.len() as i32;
    let point = exponent + 1;

    let body = if digit_count <= point && point <= MAX_DECIMAL_EXPONENT {
        let mut out = digits;
        out.push_str(&"0".repeat((point - digit_count) as usize));
        out
    } else if 0 < point && point <= MAX_DECIMAL_EXPONENT {
        let (integral, fraction) = digits.split_at(point as usize);
        format!("{integral}.{fraction}")
    } else if MIN_DECIMAL_EXPONENT < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let exponent_sign = if point > 0 { '+' } else { '-' };
        let magnitude = (point - 1).abs();
        if rest.is_empty() {
            format!("{lead}e{exponent_sign}{magnitude}")
        } else {
            format!("{lead}.{rest}e{exponent_sign}{magnitude}")
        }
    };
    format!("{sign}{body}")
}

/// String-to-number conversion following the host `ToNumber` rules.
fn parse_numeric_literal(text: &str) -> f64 {
    let trimmed = text.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{FEFF}');
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_integer(&trimmed[2..], radix);
    }
    // Rust's float parser also accepts "inf" and "nan", which the host rejects.
    let is_decimal_literal = trimmed
        .bytes()
        .all(|byte| byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_integer(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |accumulated, character| {
            character
                .to_digit(radix)
                .map(|digit| accumulated.mul_add(f64::from(radix), f64::from(digit)))
        })
        .unwrap_or(f64::NAN)
}
