//! Port traits (interfaces)
//!
//! These traits define the boundaries between the core domain and the
//! collaborators it does not own: exchange rates and local persistence.
//! Adapters implement these traits.

pub mod currency;
pub mod store;

pub use currency::*;
pub use store::*;
