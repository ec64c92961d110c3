use crate::currency::Amount;
use crate::error::{FinderError, Result};
use crate::registry::Registry;
use crate::store::LineBackend;
use crate::text::TextExt;
use std::fmt;
use std::str::FromStr;

/// Field delimiter of the persisted line format.
pub const FIELD_DELIMITER: char = '\t';

const DEFAULT_CUISINE: &str = "unknown";

/// A price held in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl FromStr for Price {
    type Err = FinderError;

    /// Parses a decimal string, rounding to whole cents.
    fn from_str(s: &str) -> Result<Self> {
        let rounded = s.parse::<Amount>()?.rounded(2);
        let cents: i64 = format!("{}{}", rounded.int_digits, rounded.frac_digits)
            .parse()
            .map_err(|_| FinderError::InvalidAmount(s.to_string()))?;
        Ok(Self(if rounded.negative { -cents } else { cents }))
    }
}

/// Canonical text form: `12` for whole amounts, `12.50` otherwise.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        match abs % 100 {
            0 => write!(f, "{}{}", sign, abs / 100),
            cents => write!(f, "{}{}.{:02}", sign, abs / 100, cents),
        }
    }
}

/// Construction attributes for a [`Restaurant`]. Unset fields take defaults.
#[derive(Debug, Clone, Default)]
pub struct RestaurantAttrs {
    pub name: Option<String>,
    pub cuisine: Option<String>,
    pub price: Option<Price>,
}

impl RestaurantAttrs {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub price: Option<Price>,
}

impl Default for Restaurant {
    fn default() -> Self {
        Self::new(RestaurantAttrs::default())
    }
}

impl Restaurant {
    /// Builds a record. Delimiters and line breaks inside text fields become
    /// spaces so that every constructed record survives `to_line`/`from_line`.
    pub fn new(attrs: RestaurantAttrs) -> Self {
        Self {
            name: attrs.name.as_deref().map(clean_field).unwrap_or_default(),
            cuisine: attrs
                .cuisine
                .as_deref()
                .map(clean_field)
                .unwrap_or_else(|| DEFAULT_CUISINE.to_string()),
            price: attrs.price,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.is_blank()
            && !self.cuisine.is_blank()
            && self.price.is_some_and(|p| p.is_positive())
    }

    /// Appends the record to the registry's bound file.
    ///
    /// Returns false without touching storage when nothing is bound or the
    /// record is invalid.
    pub fn save<B: LineBackend>(&self, registry: &mut Registry<B>) -> bool {
        registry.save(self)
    }

    pub fn all<B: LineBackend>(registry: &Registry<B>) -> Vec<Restaurant> {
        registry.all()
    }

    /// The stored line. Fields are cleaned again here because `name` and
    /// `cuisine` are public and may have been changed after `new`.
    pub fn to_line(&self) -> String {
        let price = self.price.map(|p| p.to_string()).unwrap_or_default();
        format!(
            "{}{d}{}{d}{}",
            clean_field(&self.name),
            clean_field(&self.cuisine),
            price,
            d = FIELD_DELIMITER
        )
    }

    /// Parses one stored line. `line_no` is only used for error reporting.
    pub fn from_line(line: &str, line_no: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [name, cuisine, price] = fields.as_slice() else {
            return Err(FinderError::Parse {
                line: line_no,
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        };

        let price = if price.is_empty() {
            None
        } else {
            Some(price.parse::<Price>().map_err(|e| FinderError::Parse {
                line: line_no,
                reason: e.to_string(),
            })?)
        };

        Ok(Self {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            price,
        })
    }
}

fn clean_field(value: &str) -> String {
    value
        .chars()
        .map(|c| if c == FIELD_DELIMITER || c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
