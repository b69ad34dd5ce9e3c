use serde::{Deserialize, Serialize};

use supermarket_core::DomainResult;

use crate::value::{Price, Quantity};

/// Price/quantity pair stored in the registry under an item name.
///
/// Fields are private and every setter validates, so a record reached through
/// a live handle still upholds `price >= 0` and `quantity >= 0`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    price: Price,
    quantity: Quantity,
}

impl ItemRecord {
    pub fn new(price: f64, quantity: i64) -> DomainResult<Self> {
        Ok(Self {
            price: Price::new(price)?,
            quantity: Quantity::new(quantity)?,
        })
    }

    /// Assemble a record from already-validated parts.
    pub fn from_parts(price: Price, quantity: Quantity) -> Self {
        Self { price, quantity }
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        self.price = Price::new(price)?;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        self.quantity = Quantity::new(quantity)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_setter_leaves_record_untouched() {
        let mut record = ItemRecord::new(3.0, 4).unwrap();

        assert!(record.set_price(-1.0).is_err());
        assert!(record.set_quantity(-2).is_err());

        assert_eq!(record, ItemRecord::new(3.0, 4).unwrap());
    }

    #[test]
    fn from_parts_matches_validated_constructor() {
        let record = ItemRecord::from_parts(Price::new(2.0).unwrap(), Quantity::from(12u64));
        assert_eq!(record, ItemRecord::new(2.0, 12).unwrap());
        assert_eq!(record.quantity().value(), 12);
    }

    #[test]
    fn serializes_as_price_and_quantity_fields() {
        let record = ItemRecord::new(1.0, 10).unwrap();
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json, serde_json::json!({ "price": 1.0, "quantity": 10 }));
    }

    #[test]
    fn deserialization_rejects_negative_price() {
        let raw = r#"{ "price": -0.5, "quantity": 12 }"#;
        assert!(serde_json::from_str::<ItemRecord>(raw).is_err());
    }
}
