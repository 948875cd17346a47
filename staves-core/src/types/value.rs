//! Attribute values carried by score leaves and groups.

use super::time::{from_f64, to_f64, Time};
use anyhow::{anyhow, Result};
use num_rational::Ratio;
use std::fmt;
use std::str::FromStr;

/// A value stored under an attribute key.
///
/// Numeric variants compare by value, so `Int(1)`, `Rational(1/1)` and
/// `Float(1.0)` are all equal.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Absent value; what a read of an unset key resolves to
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Rational(Time),
    Float(f64),
    /// Symbolic constant such as a dynamic marking (`:mf`)
    Symbol(String),
    Str(String),
}

impl Value {
    /// Create a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Everything except `Nil` and `false` counts as true
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric value as exact time; floats are converted with [`from_f64`]
    pub fn as_time(&self) -> Option<Time> {
        match self {
            Value::Int(n) => Some(Ratio::from_integer(*n)),
            Value::Rational(r) => Some(*r),
            Value::Float(f) => Some(from_f64(*f)),
            _ => None,
        }
    }

    /// Name of the variant, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "Nil",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Integer",
            Value::Rational(_) => "Rational",
            Value::Float(_) => "Float",
            Value::Symbol(_) => "Symbol",
            Value::Str(_) => "String",
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Rational(r) => Some(to_f64(*r)),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            // Exact comparison whenever neither side is a float
            (Value::Int(_) | Value::Rational(_), Value::Int(_) | Value::Rational(_)) => {
                self.as_time() == other.as_time()
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<Time> for Value {
    fn from(r: Time) -> Self {
        Value::Rational(r)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

/// String slices become symbols; use `Value::Str` for free text
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Symbol(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Rational(r) => write!(f, "{}", r),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Symbol(s) => write!(f, ":{}", s),
            Value::Str(s) => write!(f, "{:?}", s),
        }
    }
}

/// Parse the textual forms produced by `Display`:
/// `nil`, `true`, `false`, `:symbol`, `"text"`, `42`, `3/2`, `0.5`.
impl FromStr for Value {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow!("Empty attribute value"));
        }

        match s {
            "nil" => return Ok(Value::Nil),
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            _ => {}
        }

        if let Some(name) = s.strip_prefix(':') {
            if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(anyhow!("Invalid symbol '{}'", s));
            }
            return Ok(Value::Symbol(name.to_string()));
        }

        if let Some(inner) = s.strip_prefix('"') {
            let text = inner
                .strip_suffix('"')
                .ok_or_else(|| anyhow!("Unclosed string literal: {}", s))?;
            return Ok(Value::Str(text.to_string()));
        }

        if let Some((n, d)) = s.split_once('/') {
            let numer: i64 = n
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid rational numerator in '{}'", s))?;
            let denom: i64 = d
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid rational denominator in '{}'", s))?;
            if denom == 0 {
                return Err(anyhow!("Rational '{}' has a zero denominator", s));
            }
            return Ok(Value::Rational(Ratio::new(numer, denom)));
        }

        if let Ok(n) = s.parse::<i64>() {
            return Ok(Value::Int(n));
        }

        if let Ok(x) = s.parse::<f64>() {
            return Ok(Value::Float(x));
        }

        Err(anyhow!("Unrecognized attribute value: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::time::{beats, time};

    #[test]
    fn test_numeric_equality_across_representations() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::Int(1), Value::Rational(beats(1)));
        assert_eq!(Value::Rational(time(1, 2)), Value::Float(0.5));
        assert_ne!(Value::Int(1), Value::Int(2));
        assert_ne!(Value::Int(1), Value::Bool(true));
    }

    #[test]
    fn test_symbol_and_string_differ() {
        assert_ne!(Value::symbol("mf"), Value::Str("mf".to_string()));
        assert_eq!(Value::from("mf"), Value::symbol("mf"));
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Int(0).is_truthy());
        assert!(Value::symbol("mf").is_truthy());
    }

    #[test]
    fn test_parse_values() {
        assert_eq!("nil".parse::<Value>().unwrap(), Value::Nil);
        assert_eq!("true".parse::<Value>().unwrap(), Value::Bool(true));
        assert_eq!(":mf".parse::<Value>().unwrap(), Value::symbol("mf"));
        assert_eq!("42".parse::<Value>().unwrap(), Value::Int(42));
        assert_eq!("3/2".parse::<Value>().unwrap(), Value::Rational(time(3, 2)));
        assert_eq!("0.25".parse::<Value>().unwrap(), Value::Float(0.25));
        assert_eq!(
            "\"legato\"".parse::<Value>().unwrap(),
            Value::Str("legato".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Value>().is_err());
        assert!(":".parse::<Value>().is_err());
        assert!("1/0".parse::<Value>().is_err());
        assert!("\"open".parse::<Value>().is_err());
        assert!("forte!".parse::<Value>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for v in [Value::Nil, Value::Int(-3), Value::symbol("pp"), Value::Rational(time(1, 3))] {
            assert_eq!(v.to_string().parse::<Value>().unwrap(), v);
        }
    }

    #[test]
    fn test_as_time() {
        assert_eq!(Value::Int(2).as_time(), Some(beats(2)));
        assert_eq!(Value::Float(0.5).as_time(), Some(time(1, 2)));
        assert_eq!(Value::symbol("x").as_time(), None);
    }
}
