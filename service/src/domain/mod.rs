//! Domain definitions.

pub mod client;
pub mod property;
pub mod quote;

pub use self::{client::Client, property::Property, quote::Quote};
