//! [`Studio`] [`Property`] definition.

use common::Money;

use super::Bonus;
#[cfg(doc)]
use super::Property;

/// Monthly bonus of a furnished [`Studio`].
pub const FURNISHED_BONUS: Money = Money::from_units(250);

/// A single-room studio [`Property`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Studio {
    /// Indicator whether this [`Studio`] is rented furnished.
    pub is_furnished: bool,
}

impl Bonus for Studio {
    fn bonus(&self) -> Money {
        if self.is_furnished {
            FURNISHED_BONUS
        } else {
            Money::ZERO
        }
    }
}
