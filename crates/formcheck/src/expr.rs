//! Range and number expressions.
//!
//! Bounds are written in a compact `|`-delimited syntax where a pipe on the
//! outside of a bound makes it inclusive:
//!
//! | Expression | Meaning            |
//! |------------|--------------------|
//! | `8\|16`    | `8 < x < 16`       |
//! | `\|8\|16`  | `8 <= x < 16`      |
//! | `8\|16\|`  | `8 < x <= 16`      |
//! | `\|8\|16\|`| `8 <= x <= 16`     |
//! | `18`       | `x > 18` / `x < 18`|
//! | `\|18\|`   | `x >= 18` / `x <= 18` |

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::ExprError;

static RANGE_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();

fn range_regex() -> &'static Regex {
    RANGE_REGEX.get_or_init(|| Regex::new(r"^\|?[0-9]+\|[0-9]+\|?$").expect("range grammar"))
}

fn number_regex() -> &'static Regex {
    NUMBER_REGEX.get_or_init(|| Regex::new(r"^(?:[0-9]+|\|[0-9]+\|)$").expect("number grammar"))
}

/// A single integer bound and whether the bound itself is admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound {
    pub value: i64,
    pub inclusive: bool,
}

impl Bound {
    pub const fn inclusive(value: i64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    pub const fn exclusive(value: i64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// A parsed range expression such as `|6|16|`.
///
/// `lower.value <= upper.value` always holds: reversed input is normalized by
/// swapping both the values and their inclusivity, so `16|6|` (exclusive 16,
/// inclusive 6) becomes `|6|16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeExpr {
    pub lower: Bound,
    pub upper: Bound,
}

impl RangeExpr {
    /// Parse a range expression.
    ///
    /// ```
    /// use formcheck::RangeExpr;
    ///
    /// let range = RangeExpr::parse("|6|16").unwrap();
    /// assert!(range.contains(6));
    /// assert!(!range.contains(16));
    /// assert!(RangeExpr::parse("6-16").is_err());
    /// ```
    pub fn parse(expr: &str) -> Result<Self, ExprError> {
        if !range_regex().is_match(expr) {
            return Err(ExprError::RangeSyntax(expr.to_string()));
        }

        let tokens: Vec<&str> = expr.split('|').collect();
        let (low, high, low_inclusive, high_inclusive) = match tokens.as_slice() {
            [low, high] => (*low, *high, false, false),
            ["", low, high, ""] => (*low, *high, true, true),
            ["", low, high] => (*low, *high, true, false),
            [low, high, ""] => (*low, *high, false, true),
            _ => return Err(ExprError::RangeSyntax(expr.to_string())),
        };

        let mut lower = Bound {
            value: parse_bound(expr, low)?,
            inclusive: low_inclusive,
        };
        let mut upper = Bound {
            value: parse_bound(expr, high)?,
            inclusive: high_inclusive,
        };
        if lower.value > upper.value {
            std::mem::swap(&mut lower, &mut upper);
        }

        Ok(Self { lower, upper })
    }

    /// Check whether `value` lies inside the range.
    pub fn contains(&self, value: i64) -> bool {
        let above = if self.lower.inclusive {
            value >= self.lower.value
        } else {
            value > self.lower.value
        };
        let below = if self.upper.inclusive {
            value <= self.upper.value
        } else {
            value < self.upper.value
        };
        above && below
    }
}

impl FromStr for RangeExpr {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lower.inclusive {
            f.write_str("|")?;
        }
        write!(f, "{}|{}", self.lower.value, self.upper.value)?;
        if self.upper.inclusive {
            f.write_str("|")?;
        }
        Ok(())
    }
}

/// A parsed number expression: `18` (exclusive) or `|18|` (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberExpr(pub Bound);

impl NumberExpr {
    /// Parse a number expression.
    pub fn parse(expr: &str) -> Result<Self, ExprError> {
        if !number_regex().is_match(expr) {
            return Err(ExprError::NumberSyntax(expr.to_string()));
        }

        let tokens: Vec<&str> = expr.split('|').collect();
        let bound = match tokens.as_slice() {
            [value] => Bound::exclusive(parse_bound(expr, value)?),
            ["", value, ""] => Bound::inclusive(parse_bound(expr, value)?),
            _ => return Err(ExprError::NumberSyntax(expr.to_string())),
        };

        Ok(Self(bound))
    }

    /// The bound as a lower limit: `value >= n` when inclusive, `value > n` otherwise.
    pub fn admits_at_least(&self, value: i64) -> bool {
        if self.0.inclusive {
            value >= self.0.value
        } else {
            value > self.0.value
        }
    }

    /// The bound as an upper limit: `value <= n` when inclusive, `value < n` otherwise.
    pub fn admits_at_most(&self, value: i64) -> bool {
        if self.0.inclusive {
            value <= self.0.value
        } else {
            value < self.0.value
        }
    }
}

impl FromStr for NumberExpr {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NumberExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.inclusive {
            write!(f, "|{}|", self.0.value)
        } else {
            write!(f, "{}", self.0.value)
        }
    }
}

fn parse_bound(expr: &str, token: &str) -> Result<i64, ExprError> {
    token.parse().map_err(|source| ExprError::Bound {
        expr: expr.to_string(),
        source,
    })
}
