//! [`Apartment`] [`Property`] definition.

use common::{Money, Percent};
use rust_decimal::Decimal;

use super::Bonus;
#[cfg(doc)]
use super::Property;

/// Share of the [`Apartment::condo_fee`] added to the rent.
#[expect(unsafe_code, reason = "constant is in range")]
pub const CONDO_FEE_SHARE: Percent =
    unsafe { Percent::new_unchecked(Decimal::from_parts(30, 0, 0, false, 0)) };

/// Monthly bonus of an [`Apartment`] in a building with a leisure area.
pub const LEISURE_AREA_BONUS: Money = Money::from_units(150);

/// Floor of an [`Apartment`]. Negative for underground floors.
pub type Floor = i16;

/// An apartment [`Property`] in a building.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Apartment {
    /// [`Floor`] this [`Apartment`] is located on.
    pub floor: Floor,

    /// Monthly condominium fee of this [`Apartment`].
    pub condo_fee: Money,

    /// Indicator whether the building has a leisure area.
    pub has_leisure_area: bool,
}

impl Bonus for Apartment {
    fn bonus(&self) -> Money {
        let leisure = if self.has_leisure_area {
            LEISURE_AREA_BONUS
        } else {
            Money::ZERO
        };
        CONDO_FEE_SHARE.of(self.condo_fee) + leisure
    }
}
