//! Adapters: implementations of the port traits
//!
//! - `rate_table`: fixed exchange rates (`CurrencyConverter`)
//! - `json_store`: one JSON file per key on disk (`KeyValueStore`)
//! - `memory_store`: in-memory store for development and tests

pub mod json_store;
pub mod memory_store;
pub mod rate_table;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use rate_table::RateTable;
