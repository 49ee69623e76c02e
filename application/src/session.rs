//! Interactive quoting [`Session`].

use std::path::PathBuf;

use common::{operations::Insert, Handler as _};
use service::{
    command::{CreateProperty, CreateQuote, SaveQuote},
    domain::{
        property::{Apartment, Features, House, Kind, Studio},
        quote::{Charges, IssueDateTime},
        Client, Property,
    },
    infra::{storage, Storage},
    query::RenderQuote,
    report::Document,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    prompt::{Console, Prompter},
    Error,
};

/// Greeting printed when a [`Session`] starts.
const BANNER: &str = "=== Rental Quote Generator - R.M. Real Estate ===";

/// Single quote prepared interactively: from the client data entry up to the
/// optional saving of the report.
#[derive(Debug)]
pub struct Session<'s, S, C> {
    /// [`service::Service`] doing the calculations and the saving.
    service: &'s service::Service<S>,

    /// [`Prompter`] talking to the user.
    prompter: Prompter<C>,
}

impl<'s, S, C> Session<'s, S, C>
where
    S: Storage<
        Insert<Document>,
        Ok = PathBuf,
        Err = Traced<storage::Error>,
    >,
    C: Console,
{
    /// Creates a new [`Session`].
    #[must_use]
    pub fn new(
        service: &'s service::Service<S>,
        prompter: Prompter<C>,
    ) -> Self {
        Self { service, prompter }
    }

    /// Runs this [`Session`] to the end.
    ///
    /// Returns the path of the saved report, if the user chose to save it.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPropertyKind`] if no such property kind is offered.
    /// - [`Error::Prompt`] if the data entry is interrupted.
    /// - [`Error::SaveQuote`] if the report cannot be saved.
    pub fn run(&mut self) -> Result<Option<PathBuf>, Error> {
        self.prompter.say(format_args!("{BANNER}\n"))?;

        let client = self.client()?;
        let property = self.property()?;
        let charges = self.charges()?;

        let quote = self
            .service
            .execute(CreateQuote {
                client: &client,
                property: &property,
                charges,
            })
            .unwrap_or_else(|e| match e {});
        let issued_at = IssueDateTime::now();
        let report = self
            .service
            .execute(RenderQuote {
                quote: &quote,
                issued_at,
            })
            .unwrap_or_else(|e| match e {});
        self.prompter.say(format_args!("\n{report}"))?;

        if !self.prompter.confirm("\nSave quote? (y/n)")? {
            log::debug!("quote of `{}` left unsaved", client.name);
            return Ok(None);
        }
        let path = self.service.execute(SaveQuote {
            quote: &quote,
            issued_at,
        })?;
        self.prompter
            .say(format_args!("Quote saved as: {}", path.display()))?;

        Ok(Some(path))
    }

    /// Collects the [`Client`] data.
    fn client(&mut self) -> Result<Client, Error> {
        let p = &mut self.prompter;
        Ok(Client {
            name: p.text("Client name")?,
            contact: p.text("Contact (phone / WhatsApp)")?,
            tax_id: p.text("Tax ID")?,
        })
    }

    /// Collects the [`Property`] data, starting with its [`Kind`].
    fn property(&mut self) -> Result<Property, Error> {
        let symbol = &self.service.config().style.currency_symbol;
        let p = &mut self.prompter;

        p.say("\nProperty kind:")?;
        for kind in Kind::ALL {
            p.say(format_args!("{} - {kind}", kind.u8()))?;
        }
        let choice = p.line("Choose (1/2/3)")?;
        let Some(kind) = choice
            .parse()
            .ok()
            .and_then(Kind::from_u8)
            .or_else(|| choice.parse().ok())
        else {
            p.say("Invalid option. Exiting.")?;
            return Err(Error::InvalidPropertyKind(choice));
        };

        p.say(format_args!("\n--- {kind} details ---"))?;
        let code = p.text("Property code")?;
        let address = p.text("Address")?;
        let area = p.positive("Area (m²)")?;
        let sale_value =
            p.positive(&format!("Estimated sale value ({symbol})"))?;
        let features: Features = match kind {
            Kind::House => House {
                bedrooms: p.count("Bedrooms")?,
                garage_spots: p.count("Garage spots")?,
                has_pool: p.confirm("Has a pool? (y/n)")?,
            }
            .into(),
            Kind::Apartment => Apartment {
                floor: p.floor("Floor")?,
                condo_fee: p.amount(&format!("Condo fee ({symbol})"))?,
                has_leisure_area: p.confirm("Has a leisure area? (y/n)")?,
            }
            .into(),
            Kind::Studio => Studio {
                is_furnished: p.confirm("Furnished? (y/n)")?,
            }
            .into(),
        };

        Ok(self.service.execute(CreateProperty {
            code,
            address,
            area,
            sale_value: sale_value.into(),
            features,
        })?)
    }

    /// Collects the ancillary [`Charges`] of a quote.
    fn charges(&mut self) -> Result<Charges, Error> {
        let p = &mut self.prompter;

        p.say("\n--- Additional charges ---")?;
        Ok(Charges {
            condo_fee: p.amount("Condo fee (0 if none or included)")?,
            property_tax: p.amount("Monthly property tax (0 if included)")?,
            other_fees: p.amount("Other fees / administration (0 if none)")?,
            adjustment: p.adjustment(
                "Discount or surcharge? \
                 (positive = surcharge, negative = discount, 0 = none)",
            )?,
        })
    }
}
