//! Exact fixed-point decimal for salaries and salary factors.
//!
//! # Responsibility
//! - Represent DECIMAL(19,4) values without binary floating point.
//! - Map to SQLite INTEGER columns holding ten-thousandths.
//!
//! # Invariants
//! - Scale is always 4 fractional digits.
//! - Rounding (multiplication, reduced display precision) is half away
//!   from zero.

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of fractional digits carried by every [`Decimal`].
pub const SCALE: u32 = 4;

/// `10^SCALE`; one whole unit expressed in stored units.
pub const UNITS_PER_ONE: i64 = 10_000;

/// Fixed-point decimal with four fractional digits.
///
/// `Display` prints the shortest exact form (`1.2`, `50000`); with an
/// explicit precision (`{:.2}`) it rounds half away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal {
    units: i64,
}

impl Decimal {
    pub const ZERO: Decimal = Decimal { units: 0 };

    /// Builds a value from raw ten-thousandths.
    pub const fn from_units(units: i64) -> Self {
        Self { units }
    }

    /// Builds a whole-number value.
    pub const fn from_whole(value: i64) -> Self {
        Self {
            units: value * UNITS_PER_ONE,
        }
    }

    /// Raw ten-thousandths, as stored in SQLite.
    pub const fn units(self) -> i64 {
        self.units
    }

    /// Multiplies by `factor`, rounding the product back to scale 4.
    ///
    /// Returns `None` when the result does not fit the storage range.
    pub fn checked_mul(self, factor: Decimal) -> Option<Decimal> {
        let product = i128::from(self.units) * i128::from(factor.units);
        let rounded = round_half_away(product, i128::from(UNITS_PER_ONE));
        i64::try_from(rounded).ok().map(Self::from_units)
    }

    pub fn is_negative(self) -> bool {
        self.units < 0
    }
}

/// Error returned when text is not a scale-4 decimal literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalParseError {
    input: String,
    reason: &'static str,
}

impl Display for DecimalParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid decimal `{}`: {}", self.input, self.reason)
    }
}

impl Error for DecimalParseError {}

impl FromStr for Decimal {
    type Err = DecimalParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let fail = |reason| DecimalParseError {
            input: value.to_string(),
            reason,
        };

        let trimmed = value.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole_text, frac_text) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };
        if whole_text.is_empty() && frac_text.is_empty() {
            return Err(fail("no digits"));
        }
        if !whole_text.bytes().chain(frac_text.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(fail("unexpected character"));
        }
        if frac_text.len() > SCALE as usize {
            return Err(fail("more than 4 fractional digits"));
        }

        let whole = if whole_text.is_empty() {
            0
        } else {
            whole_text
                .parse::<i64>()
                .map_err(|_| fail("value out of range"))?
        };
        let frac = format!("{frac_text:0<width$}", width = SCALE as usize)
            .parse::<i64>()
            .map_err(|_| fail("value out of range"))?;

        let units = whole
            .checked_mul(UNITS_PER_ONE)
            .and_then(|units| units.checked_add(frac))
            .ok_or_else(|| fail("value out of range"))?;

        Ok(Self::from_units(if negative { -units } else { units }))
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let requested = f.precision();
        let places = requested.map_or(SCALE, |p| p.min(SCALE as usize) as u32);
        let units = round_half_away(
            i128::from(self.units),
            10_i128.pow(SCALE - places),
        );

        let divisor = 10_u128.pow(places);
        let magnitude = units.unsigned_abs();
        let mut text = String::new();
        if units < 0 {
            text.push('-');
        }
        text.push_str(&(magnitude / divisor).to_string());

        let mut frac = if places > 0 {
            format!("{:0width$}", magnitude % divisor, width = places as usize)
        } else {
            String::new()
        };
        match requested {
            None => {
                let kept = frac.trim_end_matches('0').len();
                frac.truncate(kept);
            }
            Some(p) if p > SCALE as usize => {
                frac.extend(std::iter::repeat('0').take(p - SCALE as usize));
            }
            Some(_) => {}
        }
        if !frac.is_empty() {
            text.push('.');
            text.push_str(&frac);
        }

        f.write_str(&text)
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Decimal {
    type Error = DecimalParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl ToSql for Decimal {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.units))
    }
}

impl FromSql for Decimal {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self::from_units)
    }
}

fn round_half_away(value: i128, divisor: i128) -> i128 {
    let quotient = value / divisor;
    let remainder = value % divisor;
    if remainder.abs() * 2 >= divisor {
        quotient + value.signum()
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::{Decimal, UNITS_PER_ONE};

    fn dec(text: &str) -> Decimal {
        text.parse().expect("literal should parse")
    }

    #[test]
    fn parses_whole_fraction_and_signed_literals() {
        assert_eq!(dec("50000").units(), 50_000 * UNITS_PER_ONE);
        assert_eq!(dec("1.2").units(), 12_000);
        assert_eq!(dec("-0.0005").units(), -5);
        assert_eq!(dec(".5").units(), 5_000);
        assert_eq!(dec(" +3. ").units(), 30_000);
    }

    #[test]
    fn rejects_malformed_literals() {
        for bad in ["", "-", ".", "1.23456", "12a", "1.2.3", "99999999999999999999"] {
            assert!(bad.parse::<Decimal>().is_err(), "`{bad}` should not parse");
        }
    }

    #[test]
    fn display_prints_shortest_form_and_honours_precision() {
        assert_eq!(dec("1.2").to_string(), "1.2");
        assert_eq!(dec("50000").to_string(), "50000");
        assert_eq!(format!("{:.2}", dec("60000")), "60000.00");
        assert_eq!(format!("{:.2}", dec("12.345")), "12.35");
        assert_eq!(format!("{:.2}", dec("-12.345")), "-12.35");
        assert_eq!(format!("{:.2}", dec("-0.0001")), "0.00");
        assert_eq!(format!("{:.0}", dec("2.5")), "3");
        assert_eq!(format!("{:.6}", dec("1.5")), "1.500000");
    }

    #[test]
    fn multiplication_is_exact_and_rounds_half_away_from_zero() {
        let factor = dec("1.2");
        assert_eq!(dec("50000.00").checked_mul(factor), Some(dec("60000")));
        assert_eq!(dec("0.0003").checked_mul(dec("0.5")), Some(dec("0.0002")));
        assert_eq!(dec("-0.0003").checked_mul(dec("0.5")), Some(dec("-0.0002")));
        assert_eq!(Decimal::from_units(i64::MAX).checked_mul(dec("2")), None);
    }

    #[test]
    fn compounding_matches_repeated_factor() {
        let factor = dec("1.2");
        let mut salary = dec("50000");
        for _ in 0..3 {
            salary = salary.checked_mul(factor).expect("no overflow");
        }
        assert_eq!(salary, dec("86400"));
    }

    #[test]
    fn serde_uses_string_form() {
        let json = serde_json::to_string(&dec("1.2")).expect("serialize");
        assert_eq!(json, "\"1.2\"");
        let back: Decimal = serde_json::from_str("\"30000.50\"").expect("deserialize");
        assert_eq!(back, dec("30000.5"));
    }
}
