//! [`Command`] for creating a new [`Property`].

use common::Money;
use derive_more::{Display, Error};
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        property::{self, Features},
        Property,
    },
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Property`] out of unchecked values.
#[derive(Clone, Debug)]
pub struct CreateProperty {
    /// [`property::Code`] of a new [`Property`].
    pub code: property::Code,

    /// [`property::Address`] of a new [`Property`].
    pub address: property::Address,

    /// Area of a new [`Property`] in square meters.
    pub area: Decimal,

    /// Estimated sale value of a new [`Property`].
    pub sale_value: Money,

    /// [`Features`] of a new [`Property`].
    pub features: Features,
}

impl<S> Command<CreateProperty> for Service<S> {
    type Ok = Property;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: CreateProperty) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateProperty {
            code,
            address,
            area,
            sale_value,
            features,
        } = cmd;

        let area = property::Area::new(area)
            .ok_or(E::NonPositiveArea(area))
            .map_err(tracerr::wrap!())?;
        let sale_value = property::SaleValue::new(sale_value)
            .ok_or(E::NonPositiveSaleValue(sale_value))
            .map_err(tracerr::wrap!())?;
        if let Features::Apartment(apartment) = &features {
            if apartment.condo_fee.is_negative() {
                return Err(tracerr::new!(E::NegativeCondoFee(
                    apartment.condo_fee
                )));
            }
        }

        let property = Property {
            code,
            address,
            area,
            sale_value,
            features,
        };
        log::debug!(
            "created `{}` property `{}`",
            property.kind(),
            property.code,
        );

        Ok(property)
    }
}

/// Error of [`CreateProperty`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ExecutionError {
    /// Area is zero or negative.
    #[display("`Property` area must be positive, but is {_0}")]
    NonPositiveArea(#[error(not(source))] Decimal),

    /// Estimated sale value is zero or negative.
    #[display("`Property` sale value must be positive, but is {_0}")]
    NonPositiveSaleValue(#[error(not(source))] Money),

    /// [`property::Apartment`] condo fee is negative.
    #[display("`Apartment` condo fee must not be negative, but is {_0}")]
    NegativeCondoFee(#[error(not(source))] Money),
}
