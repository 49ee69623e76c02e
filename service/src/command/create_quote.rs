//! [`Command`] for creating a new calculated [`Quote`].

use std::convert::Infallible;

use tracing as log;

use crate::{
    domain::{quote::Charges, Client, Property, Quote},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Quote`] and calculating it.
#[derive(Clone, Copy, Debug)]
pub struct CreateQuote<'a> {
    /// [`Client`] to prepare a new [`Quote`] for.
    pub client: &'a Client,

    /// [`Property`] to prepare a new [`Quote`] for.
    pub property: &'a Property,

    /// Ancillary [`Charges`] of a new [`Quote`].
    pub charges: Charges,
}

impl<'a, S> Command<CreateQuote<'a>> for Service<S> {
    type Ok = Quote<'a>;
    type Err = Infallible;

    fn execute(&self, cmd: CreateQuote<'a>) -> Result<Self::Ok, Self::Err> {
        let CreateQuote {
            client,
            property,
            charges,
        } = cmd;

        let mut quote = Quote::new(client, property);
        quote.set_ancillary_charges(charges);
        quote.calculate();

        log::debug!(
            "calculated quote of `{}` for `{}`: base rent {}, total {}",
            property.code,
            client.name,
            quote.base_rent(),
            quote.total_monthly(),
        );

        Ok(quote)
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use crate::{
        command::Command as _,
        domain::{client, property, quote::Charges, Client, Property},
        infra::FileSystem,
        Config, Service,
    };

    use super::CreateQuote;

    #[test]
    fn calculates_new_quote() {
        let service = Service::new(Config::default(), FileSystem::new("."));
        let client = Client {
            name: client::Name::new("Bruno Lima").unwrap(),
            contact: client::Contact::new("bruno@example.com").unwrap(),
            tax_id: client::TaxId::new("987.654.321-00").unwrap(),
        };
        let apartment = Property {
            code: property::Code::new("A-42").unwrap(),
            address: property::Address::new("Rua Augusta, 1500").unwrap(),
            area: property::Area::new(Decimal::new(68, 0)).unwrap(),
            sale_value: property::SaleValue::new(Money::from_units(200_000))
                .unwrap(),
            features: property::Apartment {
                floor: 9,
                condo_fee: Money::from_units(1000),
                has_leisure_area: false,
            }
            .into(),
        };

        let quote = service
            .execute(CreateQuote {
                client: &client,
                property: &apartment,
                charges: Charges {
                    condo_fee: Money::from_units(1000),
                    property_tax: Money::from_units(120),
                    other_fees: Money::ZERO,
                    adjustment: Money::from_units(-20),
                },
            })
            .unwrap();

        assert_eq!(quote.base_rent(), Money::from_units(1300));
        assert_eq!(quote.total_monthly(), Money::from_units(2400));
        assert_eq!(quote.client(), &client);
    }
}
