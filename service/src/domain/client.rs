//! [`Client`] definitions.

use std::{fmt, str::FromStr};

use derive_more::{AsRef, Display};

/// Client a quote is prepared for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Client {
    /// [`Name`] of this [`Client`].
    pub name: Name,

    /// [`Contact`] of this [`Client`].
    pub contact: Contact,

    /// [`TaxId`] of this [`Client`].
    pub tax_id: TaxId,
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            name,
            contact,
            tax_id,
        } = self;
        write!(f, "Client: {name} | Contact: {contact} | Tax ID: {tax_id}")
    }
}

/// Full name of a [`Client`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] out of the trimmed `name`, if it's valid.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        Self::check(name).then(|| Self(name.to_owned()))
    }

    /// Checks whether the given trimmed `name` is a valid [`Name`].
    fn check(name: &str) -> bool {
        !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Contact (phone, messenger or e-mail) of a [`Client`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Contact(String);

impl Contact {
    /// Creates a new [`Contact`] out of the trimmed `contact`, if it's valid.
    #[must_use]
    pub fn new(contact: impl AsRef<str>) -> Option<Self> {
        let contact = contact.as_ref().trim();
        Self::check(contact).then(|| Self(contact.to_owned()))
    }

    /// Checks whether the given trimmed `contact` is a valid [`Contact`].
    fn check(contact: &str) -> bool {
        !contact.is_empty() && contact.len() <= 512
    }
}

impl FromStr for Contact {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Contact`")
    }
}

/// Taxpayer identification number of a [`Client`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct TaxId(String);

impl TaxId {
    /// Creates a new [`TaxId`] out of the trimmed `id`, if it's valid.
    #[must_use]
    pub fn new(id: impl AsRef<str>) -> Option<Self> {
        let id = id.as_ref().trim();
        Self::check(id).then(|| Self(id.to_owned()))
    }

    /// Checks whether the given trimmed `id` is a valid [`TaxId`].
    fn check(id: &str) -> bool {
        !id.is_empty() && id.len() <= 64
    }
}

impl FromStr for TaxId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `TaxId`")
    }
}

#[cfg(test)]
mod spec {
    use super::{Client, Contact, Name, TaxId};

    #[test]
    fn trims_fields() {
        let name = Name::new("  Ana Souza \n").unwrap();
        assert_eq!(name.as_ref(), "Ana Souza");

        assert_eq!(
            Contact::new("\t+55 11 9999-0000").unwrap().as_ref(),
            "+55 11 9999-0000",
        );
        assert_eq!(
            TaxId::new(" 123.456.789-00 ").unwrap().as_ref(),
            "123.456.789-00",
        );
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(Name::new("").is_none());
        assert!(Name::new("   ").is_none());
        assert!(Contact::new("\n").is_none());
        assert!(TaxId::new(" \t ").is_none());
        assert!("".parse::<Name>().is_err());
    }

    #[test]
    fn displays_all_fields() {
        let client = Client {
            name: Name::new("Ana Souza").unwrap(),
            contact: Contact::new("ana@example.com").unwrap(),
            tax_id: TaxId::new("123").unwrap(),
        };

        assert_eq!(
            client.to_string(),
            "Client: Ana Souza | Contact: ana@example.com | Tax ID: 123",
        );
    }
}
