use super::MAX_STRING_LEN;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable value

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Undefined,
    Integer(i64),
    String(String),
}

impl Default for Val {
    fn default() -> Val {
        Val::Undefined
    }
}

impl Val {
    pub fn is_defined(&self) -> bool {
        !matches!(self, Val::Undefined)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Undefined => "UNDEFINED",
            Val::Integer(_) => "INTEGER",
            Val::String(_) => "STRING",
        }
    }

    /// Parses a `def` literal: `0x` followed by hex digits, or text in double quotes.
    /// Text longer than `MAX_STRING_LEN` bytes is cut short, not rejected.
    pub fn from_literal(s: &str) -> Result<Val> {
        if s.len() < 2 {
            return Err(error!(IllegalLiteral; s));
        }
        if let Some(digits) = s.strip_prefix("0x") {
            return match parse_hex(digits) {
                Some(n) => Ok(Val::Integer(n)),
                None => Err(error!(IllegalLiteral; s)),
            };
        }
        if s.starts_with('"') && s.ends_with('"') {
            let content = &s[1..s.len() - 1];
            return Ok(Val::String(truncate(content, MAX_STRING_LEN).to_string()));
        }
        Err(error!(IllegalLiteral; s))
    }
}

/// Reads the leading run of hex digits. Values wider than 64 bits
/// saturate, then the bits are taken as two's complement.
fn parse_hex(s: &str) -> Option<i64> {
    let mut value: u64 = 0;
    let mut digits = 0;
    for ch in s.chars() {
        let digit = match ch.to_digit(16) {
            Some(d) => d as u64,
            None => break,
        };
        digits += 1;
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(digit))
            .unwrap_or(u64::max_value());
    }
    if digits == 0 {
        None
    } else {
        Some(value as i64)
    }
}

/// Longest prefix of `s` within `max` bytes that ends on a char boundary.
pub(crate) fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Undefined => write!(f, "UNDEFINED"),
            Val::Integer(n) => write!(f, "0x{:x}", n),
            Val::String(s) => write!(f, "\"{}\"", s),
        }
    }
}
