//! [`Money`]-related definitions.

use std::{fmt, iter::Sum, ops, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

/// Amount of money in major currency units.
///
/// Arithmetic is exact. Rounding to cents only happens on rendering.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Number of fractional digits [`Money`] is rendered with.
    pub const SCALE: u32 = 2;

    /// Creates a new [`Money`] of the provided `amount`.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Creates a new [`Money`] of whole major `units`.
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        Self(Decimal::from_parts(
            units.unsigned_abs() as u32,
            (units.unsigned_abs() >> 32) as u32,
            0,
            units < 0,
            0,
        ))
    }

    /// Returns the exact amount of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Indicates whether this [`Money`] is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Indicates whether this [`Money`] is strictly greater than zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Indicates whether this [`Money`] is strictly less than zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds this [`Money`] to whole cents, with midpoints going away from
    /// zero.
    #[must_use]
    pub fn round_cents(self) -> Self {
        let mut amount = self.0.round_dp_with_strategy(
            Self::SCALE,
            RoundingStrategy::MidpointAwayFromZero,
        );
        amount.rescale(Self::SCALE);
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        Self(amount)
    }
}

impl fmt::Display for Money {
    /// Renders this [`Money`] with `,` thousands separators and exactly two
    /// decimal places.
    ///
    /// Width, alignment and the `+` flag are honored.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.round_cents().0;
        let digits = cents.abs().to_string();
        let (int, frac) = digits.split_once('.').unwrap_or((&digits, "00"));

        let mut grouped = String::with_capacity(digits.len() + int.len() / 3);
        for (i, c) in int.chars().enumerate() {
            if i > 0 && (int.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        grouped.push('.');
        grouped.push_str(frac);

        f.pad_integral(!cents.is_sign_negative(), "", &grouped)
    }
}

impl FromStr for Money {
    type Err = &'static str;

    /// Parses a plain (`1040.5`) or a rendered (`+1,040.50`) amount.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
            None => return Err("empty amount"),
        };
        if !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
            return Err("invalid amount");
        }
        if !is_grouped(unsigned) {
            return Err("misplaced thousands separator");
        }

        let plain = unsigned.replace(',', "");
        let amount =
            Decimal::from_str(&plain).map_err(|_| "invalid amount")?;

        Ok(Self(if negative { -amount } else { amount }))
    }
}

/// Checks the thousands separators of an unsigned amount: either none at
/// all, or a leading group of 1 to 3 digits followed by groups of exactly 3.
fn is_grouped(unsigned: &str) -> bool {
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if frac.contains(',') {
        return false;
    }
    if !int.contains(',') {
        return true;
    }

    let mut groups = int.split(',');
    let leading = groups.next().unwrap_or_default();
    (1..=3).contains(&leading.len()) && groups.all(|g| g.len() == 3)
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl ops::Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl ops::Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl ops::Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}
