//! [`House`] [`Property`] definition.

use common::Money;
use rust_decimal::Decimal;

use super::Bonus;
#[cfg(doc)]
use super::Property;

/// Monthly bonus per bedroom of a [`House`].
pub const BEDROOM_BONUS: Money = Money::from_units(80);

/// Monthly bonus of a [`House`] with a pool.
pub const POOL_BONUS: Money = Money::from_units(300);

/// Number of rooms or spots.
pub type Count = u16;

/// A whole house [`Property`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct House {
    /// Number of bedrooms in this [`House`].
    pub bedrooms: Count,

    /// Number of garage spots of this [`House`].
    ///
    /// Informational only, doesn't affect the rent.
    pub garage_spots: Count,

    /// Indicator whether this [`House`] has a pool.
    pub has_pool: bool,
}

impl Bonus for House {
    fn bonus(&self) -> Money {
        let pool = if self.has_pool { POOL_BONUS } else { Money::ZERO };
        BEDROOM_BONUS * Decimal::from(self.bedrooms) + pool
    }
}
