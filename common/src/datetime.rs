//! Date and time utilities.

use std::marker::PhantomData;

use derive_more::Debug;
use time::macros::format_description;

pub use time::UtcOffset;

/// Untyped date and time.
pub type DateTime = DateTimeOf;

/// UTC date and time.
#[derive(Debug)]
pub struct DateTimeOf<Of: ?Sized = ()> {
    /// Inner representation of the date and time.
    inner: time::OffsetDateTime,

    /// Type parameter describing the kind of date and time.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateTimeOf<Of> {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[must_use]
    pub fn now() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`DateTime`] from the provided Unix timestamp.
    ///
    /// [`None`] is returned if the timestamp is invalid.
    #[must_use]
    pub fn from_unix_timestamp(timestamp: i64) -> Option<Self> {
        Some(Self {
            inner: time::OffsetDateTime::from_unix_timestamp(timestamp).ok()?,
            _of: PhantomData,
        })
    }

    /// Returns the Unix timestamp of this [`DateTime`].
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.inner.unix_timestamp()
    }

    /// Renders this [`DateTime`] with the provided [`Layout`], as seen at the
    /// provided `offset` from UTC.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn format(&self, layout: Layout, offset: UtcOffset) -> String {
        let local = self.inner.to_offset(offset);
        let formatted = match layout {
            Layout::Stamp => local.format(format_description!(
                "[day]/[month]/[year] [hour]:[minute]"
            )),
            Layout::Compact => local.format(format_description!(
                "[year][month][day]_[hour][minute]"
            )),
        };
        formatted.unwrap_or_else(|e| panic!("cannot format `DateTime`: {e}"))
    }

    /// Coerces one kind of [`DateTime`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateTimeOf<NewOf> {
        DateTimeOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Textual layout of a [`DateTime`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layout {
    /// Human-readable `dd/mm/yyyy HH:MM` layout.
    Stamp,

    /// Sortable `yyyymmdd_HHMM` layout, safe to use in file names.
    Compact,
}

/// Parses a `±HH:MM` offset from UTC.
///
/// # Errors
///
/// Returns an error if the `input` is not a valid offset.
pub fn parse_utc_offset(input: &str) -> Result<UtcOffset, time::error::Parse> {
    UtcOffset::parse(
        input.trim(),
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
}

impl<Of: ?Sized> Copy for DateTimeOf<Of> {}
impl<Of: ?Sized> Clone for DateTimeOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateTimeOf<Of> {}
impl<Of: ?Sized> PartialEq for DateTimeOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
