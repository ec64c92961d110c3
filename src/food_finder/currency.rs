//! # Currency Formatting
//!
//! [`number_to_currency`] renders a number as a currency string, e.g. `2000` as
//! `$2,000.00`. Every aspect of the output is configurable through
//! [`CurrencyOptions`]:
//!
//! | option      | default | effect                                            |
//! |-------------|---------|---------------------------------------------------|
//! | `unit`      | `$`     | prefix placed before the digits                   |
//! | `precision` | `2`     | number of fractional digits                       |
//! | `delimiter` | `,`     | inserted every three digits of the integer part   |
//! | `separator` | `.`     | between integer and fraction, dropped at precision 0 |
//!
//! Numbers are handled as decimal digit strings ([`Amount`]), never as binary
//! floats, so rounding is exact: half away from zero at the requested precision.
//! Floats enter through their shortest round-trip representation (`20000.03`
//! stays `20000.03`).

use crate::error::{FinderError, Result};
use crate::model::Price;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DEFAULT_UNIT: &str = "$";
const DEFAULT_PRECISION: usize = 2;
const DEFAULT_DELIMITER: &str = ",";
const DEFAULT_SEPARATOR: &str = ".";

/// Formatting options. Also the `currency` section of `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyOptions {
    pub unit: String,
    pub precision: usize,
    pub delimiter: String,
    pub separator: String,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
            precision: DEFAULT_PRECISION,
            delimiter: DEFAULT_DELIMITER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl CurrencyOptions {
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_delimiter(mut self, delimiter: &str) -> Self {
        self.delimiter = delimiter.to_string();
        self
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }
}

/// A signed decimal number kept as digit strings.
///
/// `int_digits` never carries leading zeros (zero itself is `"0"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    negative: bool,
    int_digits: String,
    frac_digits: String,
}

impl Default for Amount {
    fn default() -> Self {
        Self {
            negative: false,
            int_digits: "0".to_string(),
            frac_digits: String::new(),
        }
    }
}

/// An [`Amount`] rounded to a fixed number of fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rounded {
    pub negative: bool,
    pub int_digits: String,
    pub frac_digits: String,
}

impl Amount {
    fn from_parts(negative: bool, int_digits: &str, frac_digits: &str) -> Self {
        let trimmed = int_digits.trim_start_matches('0');
        Self {
            negative,
            int_digits: if trimmed.is_empty() {
                "0".to_string()
            } else {
                trimmed.to_string()
            },
            frac_digits: frac_digits.to_string(),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.int_digits == "0" && self.frac_digits.bytes().all(|b| b == b'0')
    }

    /// Rounds half away from zero to `precision` fractional digits.
    pub fn rounded(&self, precision: usize) -> Rounded {
        let frac = &self.frac_digits;
        let (int_digits, frac_digits) = if frac.len() <= precision {
            let padded = format!("{}{}", frac, "0".repeat(precision - frac.len()));
            (self.int_digits.clone(), padded)
        } else {
            let mut kept = format!("{}{}", self.int_digits, &frac[..precision]);
            if frac.as_bytes()[precision] >= b'5' {
                kept = increment_digits(&kept);
            }
            let split = kept.len() - precision;
            (kept[..split].to_string(), kept[split..].to_string())
        };

        let is_zero = int_digits
            .bytes()
            .chain(frac_digits.bytes())
            .all(|b| b == b'0');
        Rounded {
            negative: self.negative && !is_zero,
            int_digits,
            frac_digits,
        }
    }
}

/// Adds one to a string of ASCII digits, growing it on carry-out.
fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

impl FromStr for Amount {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FinderError::InvalidAmount(s.to_string());
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, f),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(invalid());
        }

        Ok(Self::from_parts(negative, int_part, frac_part))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::from_parts(value < 0, &value.unsigned_abs().to_string(), "")
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            log::warn!("Formatting non-finite amount {} as zero", value);
            return Self::default();
        }
        // f64's Display never uses exponent notation
        value.to_string().parse().unwrap_or_default()
    }
}

impl From<Price> for Amount {
    fn from(price: Price) -> Self {
        let cents = price.cents();
        let abs = cents.unsigned_abs();
        Self::from_parts(
            cents < 0,
            &(abs / 100).to_string(),
            &format!("{:02}", abs % 100),
        )
    }
}

/// Formats `amount` as currency according to `options`.
pub fn number_to_currency(amount: impl Into<Amount>, options: &CurrencyOptions) -> String {
    let rounded = amount.into().rounded(options.precision);

    let mut out = String::new();
    if rounded.negative {
        out.push('-');
    }
    out.push_str(&options.unit);
    out.push_str(&group_thousands(&rounded.int_digits, &options.delimiter));
    if options.precision > 0 {
        out.push_str(&options.separator);
        out.push_str(&rounded.frac_digits);
    }
    out
}

fn group_thousands(digits: &str, delimiter: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * delimiter.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(delimiter);
        }
        out.push(ch);
    }
    out
}
