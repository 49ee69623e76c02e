//! [`Property`] definitions.

pub mod apartment;
pub mod house;
pub mod studio;

use std::{fmt, str::FromStr};

use common::{define_kind, Money, Percent};
use derive_more::{AsRef, Display, From};
use rust_decimal::Decimal;

pub use self::{apartment::Apartment, house::House, studio::Studio};

/// Share of the [`SaleValue`] every [`Property`] is rented for monthly.
#[expect(unsafe_code, reason = "constant is in range")]
pub const BASE_RATE: Percent =
    unsafe { Percent::new_unchecked(Decimal::from_parts(5, 0, 0, false, 1)) };

/// Property offered for rent.
#[derive(Clone, Debug)]
pub struct Property {
    /// [`Code`] of this [`Property`] in the agency catalog.
    pub code: Code,

    /// [`Address`] of this [`Property`].
    pub address: Address,

    /// [`Area`] of this [`Property`].
    pub area: Area,

    /// Estimated [`SaleValue`] of this [`Property`].
    pub sale_value: SaleValue,

    /// [`Features`] specific to the [`Kind`] of this [`Property`].
    pub features: Features,
}

impl Property {
    /// Returns [`Kind`] of this [`Property`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.features.kind()
    }

    /// Computes the monthly base rent of this [`Property`]: the
    /// [`BASE_RATE`] of its [`SaleValue`] plus the [`Bonus`] of its
    /// [`Features`].
    ///
    /// The result is never less than the [`BASE_RATE`] of the [`SaleValue`].
    #[must_use]
    pub fn base_rent(&self) -> Money {
        BASE_RATE.of(self.sale_value.into()) + self.features.bonus()
    }
}

/// Kind-specific part of a [`Property`] base rent.
pub trait Bonus {
    /// Returns the non-negative monthly bonus added on top of the base rent.
    fn bonus(&self) -> Money;
}

/// [`Kind`]-specific features of a [`Property`].
#[derive(Clone, Debug, From)]
pub enum Features {
    #[doc(hidden)]
    House(House),
    #[doc(hidden)]
    Apartment(Apartment),
    #[doc(hidden)]
    Studio(Studio),
}

impl Features {
    /// Returns [`Kind`] of these [`Features`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::House(_) => Kind::House,
            Self::Apartment(_) => Kind::Apartment,
            Self::Studio(_) => Kind::Studio,
        }
    }
}

impl Bonus for Features {
    fn bonus(&self) -> Money {
        match self {
            Self::House(h) => h.bonus(),
            Self::Apartment(a) => a.bonus(),
            Self::Studio(s) => s.bonus(),
        }
    }
}

define_kind! {
    #[doc = "Kind of a [`Property`]."]
    enum Kind {
        #[doc = "A whole [`House`]."]
        House = 1,

        #[doc = "An [`Apartment`] in a building."]
        Apartment = 2,

        #[doc = "A single-room [`Studio`]."]
        Studio = 3,
    }
}

/// Catalog code of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Code(String);

impl Code {
    /// Creates a new [`Code`] out of the trimmed `code`, if it's valid.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Option<Self> {
        let code = code.as_ref().trim();
        Self::check(code).then(|| Self(code.to_owned()))
    }

    /// Checks whether the given trimmed `code` is a valid [`Code`].
    fn check(code: &str) -> bool {
        !code.is_empty() && code.len() <= 64
    }
}

impl FromStr for Code {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Code`")
    }
}

/// Full address of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] out of the trimmed `address`, if it's valid.
    #[must_use]
    pub fn new(address: impl AsRef<str>) -> Option<Self> {
        let address = address.as_ref().trim();
        Self::check(address).then(|| Self(address.to_owned()))
    }

    /// Checks whether the given trimmed `address` is a valid [`Address`].
    fn check(address: &str) -> bool {
        !address.is_empty() && address.len() <= 512
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}

/// Area of a [`Property`] in square meters.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Area(Decimal);

impl Area {
    /// Creates a new [`Area`] if the given `sq_meters` are positive.
    #[must_use]
    pub fn new(sq_meters: Decimal) -> Option<Self> {
        (sq_meters > Decimal::ZERO).then_some(Self(sq_meters))
    }

    /// Returns square meters of this [`Area`].
    #[must_use]
    pub fn sq_meters(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sq_meters = self.0.round_dp(2);
        sq_meters.rescale(2);
        write!(f, "{sq_meters} m²")
    }
}

impl FromStr for Area {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Area`")
    }
}

/// Estimated sale value of a [`Property`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub struct SaleValue(Money);

impl SaleValue {
    /// Creates a new [`SaleValue`] if the given `value` is positive.
    #[must_use]
    pub fn new(value: Money) -> Option<Self> {
        value.is_positive().then_some(Self(value))
    }

    /// Creates a new [`SaleValue`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `value` is not negative.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(value: Money) -> Self {
        Self(value)
    }
}

impl From<SaleValue> for Money {
    fn from(value: SaleValue) -> Self {
        value.0
    }
}

impl FromStr for SaleValue {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `SaleValue`")
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use super::{
        Address, Apartment, Area, Code, Features, House, Kind, Property,
        SaleValue, Studio, BASE_RATE,
    };

    fn property(sale_value: i64, features: impl Into<Features>) -> Property {
        Property {
            code: Code::new("P-001").unwrap(),
            address: Address::new("Rua das Flores, 100").unwrap(),
            area: Area::new(Decimal::new(85, 0)).unwrap(),
            sale_value: SaleValue::new(Money::from_units(sale_value)).unwrap(),
            features: features.into(),
        }
    }

    #[test]
    fn house_base_rent() {
        let house = property(
            100_000,
            House {
                bedrooms: 3,
                garage_spots: 2,
                has_pool: true,
            },
        );

        assert_eq!(house.kind(), Kind::House);
        assert_eq!(house.base_rent(), Money::from_units(1040));
    }

    #[test]
    fn apartment_base_rent() {
        let apartment = property(
            200_000,
            Apartment {
                floor: 7,
                condo_fee: Money::from_units(1000),
                has_leisure_area: false,
            },
        );

        assert_eq!(apartment.kind(), Kind::Apartment);
        assert_eq!(apartment.base_rent(), Money::from_units(1300));
    }

    #[test]
    fn studio_base_rent() {
        let studio = property(150_000, Studio { is_furnished: true });

        assert_eq!(studio.kind(), Kind::Studio);
        assert_eq!(studio.base_rent(), Money::from_units(1000));
    }

    #[test]
    fn zero_sale_value_leaves_bonus_only() {
        let mut studio = property(1, Studio { is_furnished: true });
        #[expect(unsafe_code, reason = "zero is not negative")]
        let zero = unsafe { SaleValue::new_unchecked(Money::ZERO) };
        studio.sale_value = zero;

        assert_eq!(studio.base_rent(), Money::from_units(250));
    }

    #[test]
    fn base_rent_never_below_base_rate() {
        let features: [Features; 6] = [
            House {
                bedrooms: 0,
                garage_spots: 0,
                has_pool: false,
            }
            .into(),
            House {
                bedrooms: 5,
                garage_spots: 1,
                has_pool: true,
            }
            .into(),
            Apartment {
                floor: -1,
                condo_fee: Money::ZERO,
                has_leisure_area: false,
            }
            .into(),
            Apartment {
                floor: 12,
                condo_fee: Money::from_units(850),
                has_leisure_area: true,
            }
            .into(),
            Studio {
                is_furnished: false,
            }
            .into(),
            Studio { is_furnished: true }.into(),
        ];

        for sale_value in [1, 99_999, 1_250_000] {
            for f in &features {
                let p = property(sale_value, f.clone());
                assert!(
                    p.base_rent() >= BASE_RATE.of(p.sale_value.into()),
                    "{p:?}",
                );
            }
        }
    }

    #[test]
    fn kinds_are_numbered() {
        assert_eq!(Kind::from_u8(1), Some(Kind::House));
        assert_eq!(Kind::from_u8(2), Some(Kind::Apartment));
        assert_eq!(Kind::from_u8(3), Some(Kind::Studio));
        assert_eq!(Kind::from_u8(0), None);
        assert_eq!(Kind::from_u8(4), None);
        assert_eq!(Kind::Studio.to_string(), "Studio");
    }

    #[test]
    fn kinds_parse_by_name() {
        assert_eq!("apartment".parse::<Kind>().ok(), Some(Kind::Apartment));
        assert_eq!("HOUSE".parse::<Kind>().ok(), Some(Kind::House));
        assert!("loft".parse::<Kind>().is_err());
    }

    #[test]
    fn validates_values() {
        assert!(Area::new(Decimal::ZERO).is_none());
        assert!(Area::new(Decimal::NEGATIVE_ONE).is_none());
        assert!("-12.5".parse::<Area>().is_err());
        assert_eq!(
            "72.456".parse::<Area>().unwrap().to_string(),
            "72.46 m²",
        );

        assert!(SaleValue::new(Money::ZERO).is_none());
        assert!("-1".parse::<SaleValue>().is_err());
        assert!("350,000.00".parse::<SaleValue>().is_ok());

        assert!(Code::new("  ").is_none());
        assert!(Address::new("").is_none());
    }
}
