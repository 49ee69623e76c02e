//! [`Quote`] definitions.

use common::{unit, DateTimeOf, Money};

use crate::domain::{Client, Property};

/// Monthly rental quote of a [`Property`] for a [`Client`].
///
/// All the amounts stay zero until [`Quote::calculate()`] is called.
#[derive(Clone, Debug)]
pub struct Quote<'a> {
    /// [`Client`] this [`Quote`] is prepared for.
    client: &'a Client,

    /// [`Property`] this [`Quote`] is prepared for.
    property: &'a Property,

    /// Base rent of the [`Property`].
    base_rent: Money,

    /// [`Charges`] on top of the base rent.
    charges: Charges,

    /// Sum of the base rent and all the [`Charges`].
    total_monthly: Money,
}

impl<'a> Quote<'a> {
    /// Creates a new empty [`Quote`].
    #[must_use]
    pub fn new(client: &'a Client, property: &'a Property) -> Self {
        Self {
            client,
            property,
            base_rent: Money::ZERO,
            charges: Charges::default(),
            total_monthly: Money::ZERO,
        }
    }

    /// Replaces ancillary [`Charges`] of this [`Quote`].
    ///
    /// Nothing is recomputed until the next [`Quote::calculate()`].
    pub fn set_ancillary_charges(&mut self, charges: Charges) {
        self.charges = charges;
    }

    /// Computes the base rent and the total monthly amount out of the current
    /// state of this [`Quote`].
    pub fn calculate(&mut self) {
        let Charges {
            condo_fee,
            property_tax,
            other_fees,
            adjustment,
        } = self.charges;

        self.base_rent = self.property.base_rent();
        self.total_monthly =
            self.base_rent + condo_fee + property_tax + other_fees + adjustment;
    }

    /// Returns [`Client`] of this [`Quote`].
    #[must_use]
    pub fn client(&self) -> &'a Client {
        self.client
    }

    /// Returns [`Property`] of this [`Quote`].
    #[must_use]
    pub fn property(&self) -> &'a Property {
        self.property
    }

    /// Returns the base rent of this [`Quote`].
    #[must_use]
    pub fn base_rent(&self) -> Money {
        self.base_rent
    }

    /// Returns ancillary [`Charges`] of this [`Quote`].
    #[must_use]
    pub fn charges(&self) -> &Charges {
        &self.charges
    }

    /// Returns the total monthly amount of this [`Quote`].
    #[must_use]
    pub fn total_monthly(&self) -> Money {
        self.total_monthly
    }
}

/// Monthly charges added on top of a base rent.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Charges {
    /// Condominium fee. Not negative.
    pub condo_fee: Money,

    /// Property tax. Not negative.
    pub property_tax: Money,

    /// Other fees (administration, insurance). Not negative.
    pub other_fees: Money,

    /// Manual adjustment: positive is a surcharge, negative is a discount.
    pub adjustment: Money,
}

/// [`DateTime`] when a [`Quote`] was issued.
///
/// [`DateTime`]: common::DateTime
pub type IssueDateTime = DateTimeOf<(Quote<'static>, unit::Issue)>;

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use crate::domain::{
        client,
        property::{self, House, Studio},
        Client, Property,
    };

    use super::{Charges, Quote};

    fn client() -> Client {
        Client {
            name: client::Name::new("Ana Souza").unwrap(),
            contact: client::Contact::new("+55 11 99999-0000").unwrap(),
            tax_id: client::TaxId::new("123.456.789-00").unwrap(),
        }
    }

    fn house() -> Property {
        Property {
            code: property::Code::new("H-17").unwrap(),
            address: property::Address::new("Rua das Flores, 100").unwrap(),
            area: property::Area::new(Decimal::new(120, 0)).unwrap(),
            sale_value: property::SaleValue::new(Money::from_units(100_000))
                .unwrap(),
            features: House {
                bedrooms: 3,
                garage_spots: 1,
                has_pool: true,
            }
            .into(),
        }
    }

    #[test]
    fn starts_empty() {
        let (client, house) = (client(), house());
        let quote = Quote::new(&client, &house);

        assert_eq!(quote.base_rent(), Money::ZERO);
        assert_eq!(quote.total_monthly(), Money::ZERO);
        assert_eq!(quote.charges(), &Charges::default());
    }

    #[test]
    fn sums_charges() {
        let (client, house) = (client(), house());
        let mut quote = Quote::new(&client, &house);
        quote.set_ancillary_charges(Charges {
            condo_fee: Money::ZERO,
            property_tax: Money::from_units(50),
            other_fees: Money::ZERO,
            adjustment: Money::from_units(-100),
        });
        quote.calculate();

        assert_eq!(quote.base_rent(), Money::from_units(1040));
        assert_eq!(quote.total_monthly(), Money::from_units(990));
    }

    #[test]
    fn calculation_is_idempotent() {
        let (client, house) = (client(), house());
        let mut quote = Quote::new(&client, &house);
        quote.set_ancillary_charges(Charges {
            condo_fee: Money::from_units(300),
            property_tax: Money::from_units(80),
            other_fees: Money::from_units(25),
            adjustment: Money::from_units(10),
        });

        quote.calculate();
        let first = quote.total_monthly();
        quote.calculate();

        assert_eq!(quote.total_monthly(), first);
        assert_eq!(first, Money::from_units(1455));
    }

    #[test]
    fn recalculates_after_charges_change() {
        let client = client();
        let studio = Property {
            features: Studio {
                is_furnished: false,
            }
            .into(),
            ..house()
        };
        let mut quote = Quote::new(&client, &studio);
        quote.calculate();
        assert_eq!(quote.total_monthly(), Money::from_units(500));

        quote.set_ancillary_charges(Charges {
            other_fees: Money::from_units(70),
            ..Charges::default()
        });
        assert_eq!(quote.total_monthly(), Money::from_units(500));

        quote.calculate();
        assert_eq!(quote.total_monthly(), Money::from_units(570));
    }
}
