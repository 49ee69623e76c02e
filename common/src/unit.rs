//! Marker types.

/// Marker type describing a document issuing.
#[derive(Clone, Copy, Debug)]
pub struct Issue;
