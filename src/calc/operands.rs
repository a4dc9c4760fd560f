//! Operand parsing.
//!
//! # Responsibilities
//! - Hold the flat parameter map built from a query string or JSON body
//! - Convert JSON values into the string form the parser expects
//! - Parse `num1` and `num2` into `f64`

use std::collections::HashMap;

use serde_json::Value;

use crate::calc::CalcError;

/// Parameter name of the first operand.
pub const NUM1: &str = "num1";
/// Parameter name of the second operand.
pub const NUM2: &str = "num2";
/// Parameter name carrying the operation on the unified route.
pub const OPERATION: &str = "operation";

/// Flat mapping of request parameter name to its raw string value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn new(map: HashMap<String, String>) -> Self {
        Self(map)
    }

    /// Build parameters from a decoded JSON document.
    ///
    /// Only a top-level object contributes entries. Strings are kept as-is and
    /// numbers are rendered in decimal; any other value type is skipped.
    pub fn from_json(value: &Value) -> Self {
        let Value::Object(object) = value else {
            return Self::default();
        };

        let map = object
            .iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key.clone(), s.clone())),
                Value::Number(n) => Some((key.clone(), n.to_string())),
                _ => None,
            })
            .collect();

        Self(map)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for Params {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// The two numeric inputs of every operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub num1: f64,
    pub num2: f64,
}

impl Operands {
    pub fn new(num1: f64, num2: f64) -> Self {
        Self { num1, num2 }
    }

    /// Parse `num1` and `num2` out of the parameter map.
    pub fn from_params(params: &Params) -> Result<Self, CalcError> {
        Ok(Self {
            num1: parse_operand(params.get(NUM1))?,
            num2: parse_operand(params.get(NUM2))?,
        })
    }
}

/// Parse the longest leading number, ignoring leading whitespace and any
/// trailing text (`"3abc"` is 3, `"abc"` fails).
fn parse_operand(raw: Option<&str>) -> Result<f64, CalcError> {
    raw.map(str::trim_start)
        .and_then(numeric_prefix)
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or(CalcError::InvalidInput)
}

/// Longest prefix of `s` shaped like a decimal float, `inf`, `infinity` or `nan`.
fn numeric_prefix(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    for word in ["infinity", "inf", "nan"] {
        let matched = s
            .get(end..end + word.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(word));
        if matched {
            return Some(&s[..end + word.len()]);
        }
    }

    let int = digits(end);
    end += int;

    if bytes.get(end) == Some(&b'.') {
        let frac = digits(end + 1);
        if int == 0 && frac == 0 {
            return None;
        }
        end += 1 + frac;
    } else if int == 0 {
        return None;
    }

    // An exponent counts only when it has digits: "2e" is 2.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    Some(&s[..end])
}
