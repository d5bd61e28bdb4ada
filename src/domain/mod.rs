//! Core domain types
//!
//! Pure types with no I/O dependencies. These represent the printers,
//! filaments, settings and results the calculator and importer work with.

pub mod error;
pub mod offer;
pub mod settings;
pub mod slicer;
pub mod types;

pub use error::*;
pub use offer::*;
pub use settings::*;
pub use slicer::*;
pub use types::*;
