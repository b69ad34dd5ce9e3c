//! The inventory registry.
//!
//! `get_item` hands out a live `&mut ItemRecord` into the registry, while
//! `list_items` returns an owned snapshot that shares nothing with it.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use supermarket_core::{DomainError, DomainResult};

use crate::item::ItemRecord;

/// Owned snapshot of the registry, keyed by item name.
pub type Inventory = HashMap<String, ItemRecord>;

/// In-memory registry of named items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Supermarket {
    items: Inventory,
}

impl Supermarket {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the backing map.
    pub fn items(&self) -> &Inventory {
        &self.items
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a new item.
    ///
    /// Fails with `DuplicateKey` if `name` is taken, then with
    /// `InvalidArgument` if `price` or `quantity` is negative.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<()> {
        match self.items.entry(name.into()) {
            Entry::Occupied(slot) => {
                tracing::warn!(item = %slot.key(), "add rejected: item already exists");
                Err(DomainError::duplicate_key(slot.key().as_str()))
            }
            Entry::Vacant(slot) => {
                let record = ItemRecord::new(price, quantity).map_err(|_| {
                    tracing::warn!(item = %slot.key(), price, quantity, "add rejected: invalid price or quantity");
                    DomainError::invalid_argument(format!(
                        "Invalid price or quantity: price={price}, quantity={quantity}"
                    ))
                })?;
                tracing::debug!(item = %slot.key(), price, quantity, "item added");
                slot.insert(record);
                Ok(())
            }
        }
    }

    /// Delete an item, returning its last record.
    pub fn remove_item(&mut self, name: &str) -> DomainResult<ItemRecord> {
        let record = self.items.remove(name).ok_or_else(|| {
            tracing::warn!(item = name, "remove rejected: item not found");
            DomainError::not_found(name)
        })?;
        tracing::debug!(item = name, "item removed");
        Ok(record)
    }

    pub fn change_price(&mut self, name: &str, new_price: f64) -> DomainResult<()> {
        let record = self.get_item(name).inspect_err(|_| {
            tracing::warn!(item = name, new_price, "price change rejected: item not found");
        })?;
        record.set_price(new_price).inspect_err(|_| {
            tracing::warn!(item = name, new_price, "price change rejected");
        })?;
        tracing::debug!(item = name, new_price, "price changed");
        Ok(())
    }

    pub fn change_quantity(&mut self, name: &str, new_quantity: i64) -> DomainResult<()> {
        let record = self.get_item(name).inspect_err(|_| {
            tracing::warn!(item = name, new_quantity, "quantity change rejected: item not found");
        })?;
        record.set_quantity(new_quantity).inspect_err(|_| {
            tracing::warn!(item = name, new_quantity, "quantity change rejected");
        })?;
        tracing::debug!(item = name, new_quantity, "quantity changed");
        Ok(())
    }

    /// Live handle to the stored record; writes through it are visible to
    /// every later query.
    pub fn get_item(&mut self, name: &str) -> DomainResult<&mut ItemRecord> {
        self.items
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(name))
    }

    /// Shared-borrow lookup with the same `NotFound` semantics as `get_item`.
    pub fn item(&self, name: &str) -> DomainResult<&ItemRecord> {
        self.items
            .get(name)
            .ok_or_else(|| DomainError::not_found(name))
    }

    /// Independent copy of every record.
    pub fn list_items(&self) -> Inventory {
        self.items.clone()
    }
}
