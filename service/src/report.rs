//! Textual reports of a [`Quote`].

use common::{
    datetime::{Layout, UtcOffset},
    Money,
};
use derive_more::{AsRef, Display};
use serde::Deserialize;
use smart_default::SmartDefault;

use crate::domain::{client, quote::IssueDateTime, Quote};

/// Width of the report banners.
const WIDTH: usize = 60;

/// Width of the line item labels column.
const LABEL_WIDTH: usize = 25;

/// Width of the line item amounts column.
const AMOUNT_WIDTH: usize = 12;

/// Named layout of a [`Quote`] report.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Full report with a line item for every charge.
    Full,

    /// Short receipt with the total monthly amount only.
    #[default]
    Summary,
}

/// Presentation settings of a report.
#[derive(Clone, Debug, SmartDefault)]
pub struct Style {
    /// Title printed in the report header.
    #[default("RENTAL QUOTE - R.M. Real Estate".to_owned())]
    pub title: String,

    /// Symbol printed before every amount.
    #[default("R$".to_owned())]
    pub currency_symbol: String,

    /// Offset from UTC the issue time is printed at.
    #[default(UtcOffset::UTC)]
    pub utc_offset: UtcOffset,
}

/// Renders the provided [`Quote`] with the provided [`Template`].
#[must_use]
pub fn render(
    template: Template,
    quote: &Quote<'_>,
    issued_at: IssueDateTime,
    style: &Style,
) -> String {
    match template {
        Template::Full => full(quote, issued_at, style),
        Template::Summary => summary(quote, issued_at, style),
    }
}

/// Renders the full report of the provided [`Quote`].
fn full(quote: &Quote<'_>, issued_at: IssueDateTime, style: &Style) -> String {
    let thick = "=".repeat(WIDTH);
    let thin = "-".repeat(WIDTH);
    let property = quote.property();
    let charges = quote.charges();
    let line = |label: &str, amount: String| {
        format!("{label:<LABEL_WIDTH$} {} {amount}", style.currency_symbol)
    };
    let amount = |m: Money| format!("{m:>AMOUNT_WIDTH$}");

    let mut lines = vec![
        thick.clone(),
        format!("          {}", style.title),
        format!("Date: {}", stamp(issued_at, style)),
        thick.clone(),
        quote.client().to_string(),
        format!("Property: {} - {}", property.kind(), property.address),
        format!("Code: {}  |  Area: {}", property.code, property.area),
        thin.clone(),
        line("Base rent", amount(quote.base_rent())),
    ];
    for (label, value) in [
        ("Condo fee", charges.condo_fee),
        ("Property tax", charges.property_tax),
        ("Other fees", charges.other_fees),
    ] {
        if value.is_positive() {
            lines.push(line(label, amount(value)));
        }
    }
    if !charges.adjustment.is_zero() {
        lines.push(line(
            "Adjustment",
            format!("{:>+AMOUNT_WIDTH$}", charges.adjustment),
        ));
    }
    lines.extend([
        thin,
        line("TOTAL MONTHLY", amount(quote.total_monthly())),
        thick,
    ]);

    lines.join("\n") + "\n"
}

/// Renders the short summary of the provided [`Quote`].
fn summary(
    quote: &Quote<'_>,
    issued_at: IssueDateTime,
    style: &Style,
) -> String {
    let property = quote.property();

    [
        style.title.clone(),
        format!("Date: {}", stamp(issued_at, style)),
        String::new(),
        quote.client().to_string(),
        format!("Property: {} - {}", property.kind(), property.address),
        format!(
            "TOTAL MONTHLY: {} {}",
            style.currency_symbol,
            quote.total_monthly(),
        ),
    ]
    .join("\n")
        + "\n"
}

/// Renders the human-readable issue time of a report.
fn stamp(issued_at: IssueDateTime, style: &Style) -> String {
    issued_at.format(Layout::Stamp, style.utc_offset)
}

/// Renders the compact issue time of a report, suitable for file names.
#[must_use]
pub fn compact_stamp(issued_at: IssueDateTime, offset: UtcOffset) -> String {
    issued_at.format(Layout::Compact, offset)
}

/// Rendered report ready to be stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    /// [`FileName`] of this [`Document`].
    pub name: FileName,

    /// Text of this [`Document`].
    pub content: String,
}

/// Name of a [`Document`] file, without any directory part.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct FileName(String);

impl FileName {
    /// Maximum length of a [`FileName`], in bytes.
    const MAX_LEN: usize = 255;

    /// Maximum number of bytes taken from a prefix or a stamp.
    const MAX_AFFIX_LEN: usize = 64;

    /// Creates a new [`FileName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Creates a new `{prefix}_{client}_{stamp}.txt` [`FileName`] of a quote
    /// report.
    ///
    /// Whitespace and path separators are replaced with `_`. The client name
    /// is cut short so the whole name fits into [`FileName::MAX_LEN`] bytes.
    #[must_use]
    pub fn for_quote(prefix: &str, client: &client::Name, stamp: &str) -> Self {
        let (prefix, stamp) = (sanitize(prefix), sanitize(stamp));
        let prefix = truncate(&prefix, Self::MAX_AFFIX_LEN);
        let stamp = truncate(&stamp, Self::MAX_AFFIX_LEN);
        let client = sanitize(client.as_ref());
        let client = truncate(
            &client,
            Self::MAX_LEN - prefix.len() - stamp.len() - "__.txt".len(),
        );
        Self(format!("{prefix}_{client}_{stamp}.txt"))
    }

    /// Checks whether the given `name` is a valid [`FileName`].
    fn check(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && name.len() <= Self::MAX_LEN
            && !name.contains(is_separator)
    }
}

/// Indicates whether the provided character can't be kept in a [`FileName`].
fn is_separator(c: char) -> bool {
    matches!(c, '/' | '\\' | '\0')
}

/// Replaces whitespace and separators in the provided `part` with `_`.
/// Cuts the provided `s` down to at most `max` bytes, on a char boundary.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let end = (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0);
    &s[..end]
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| if c.is_whitespace() || is_separator(c) { '_' } else { c })
        .collect()
}
