//! Inventory domain module.
//!
//! An in-memory registry of named items, each carrying a price and a quantity,
//! implemented as deterministic domain logic (no IO, no storage).

pub mod item;
pub mod supermarket;
pub mod value;

pub use item::ItemRecord;
pub use supermarket::{Inventory, Supermarket};
pub use value::{Price, Quantity};
