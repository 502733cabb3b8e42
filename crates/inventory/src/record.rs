use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ValueObject};

/// Item name: the unique key of the inventory table.
///
/// Always trimmed and never empty. Comparison is exact (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unit price. Finite and non-negative; `-0.0` is stored as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "price must be a finite number (got {value})"
            )));
        }
        if value < 0.0 {
            return Err(DomainError::validation(format!(
                "price cannot be negative (got {value})"
            )));
        }
        // -0.0 passes the sign check; fold it into +0.0
        Ok(Self(value + 0.0))
    }

    /// Parse user input (surrounding whitespace ignored).
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let value = raw.trim().parse::<f64>().map_err(|_| {
            DomainError::validation(format!("price must be a number (got {:?})", raw.trim()))
        })?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

fn parse_quantity(raw: &str) -> DomainResult<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        DomainError::validation(format!(
            "quantity must be a non-negative integer (got {:?})",
            raw.trim()
        ))
    })
}

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    item_name: ItemName,
    quantity: u64,
    price: Price,
    category: String,
}

impl InventoryRecord {
    pub fn new(item_name: ItemName, quantity: u64, price: Price, category: impl Into<String>) -> Self {
        Self {
            item_name,
            quantity,
            price,
            category: category.into().trim().to_string(),
        }
    }

    pub fn item_name(&self) -> &ItemName {
        &self.item_name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// `quantity × price` for this row.
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price.value()
    }

    /// Replace the mutable fields. The name never changes.
    pub(crate) fn apply(&mut self, changes: RecordChanges) {
        self.quantity = changes.quantity;
        self.price = changes.price;
        self.category = changes.category;
    }
}

impl Entity for InventoryRecord {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.item_name
    }
}

/// Validated replacement values for an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordChanges {
    pub quantity: u64,
    pub price: Price,
    pub category: String,
}

impl RecordChanges {
    pub fn new(quantity: u64, price: Price, category: impl Into<String>) -> Self {
        Self {
            quantity,
            price,
            category: category.into().trim().to_string(),
        }
    }
}

/// Raw text of the add form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordForm {
    pub item_name: String,
    pub quantity: String,
    pub price: String,
    pub category: String,
}

impl RecordForm {
    pub fn new(
        item_name: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            quantity: quantity.into(),
            price: price.into(),
            category: category.into(),
        }
    }

    /// Validate every field and build a record.
    ///
    /// Emptiness is checked for all fields before any number is parsed.
    pub fn parse(&self) -> DomainResult<InventoryRecord> {
        if [&self.item_name, &self.quantity, &self.price, &self.category]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(DomainError::incomplete("all fields must be filled"));
        }

        let item_name = ItemName::parse(&self.item_name)?;
        let quantity = parse_quantity(&self.quantity)?;
        let price = Price::parse(&self.price)?;

        Ok(InventoryRecord::new(item_name, quantity, price, self.category.as_str()))
    }
}

/// Raw text of the update form. The name comes from the current selection instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateForm {
    pub quantity: String,
    pub price: String,
    pub category: String,
}

impl UpdateForm {
    pub fn new(
        quantity: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            quantity: quantity.into(),
            price: price.into(),
            category: category.into(),
        }
    }

    pub fn parse(&self) -> DomainResult<RecordChanges> {
        if [&self.quantity, &self.price, &self.category]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(DomainError::incomplete("all fields must be filled"));
        }

        let quantity = parse_quantity(&self.quantity)?;
        let price = Price::parse(&self.price)?;

        Ok(RecordChanges::new(quantity, price, self.category.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_validation(result: DomainResult<impl core::fmt::Debug>, needle: &str) {
        match result {
            Err(DomainError::Validation(msg)) if msg.contains(needle) => {}
            other => panic!("expected validation error containing {needle:?}, got {other:?}"),
        }
    }

    fn assert_incomplete(result: DomainResult<impl core::fmt::Debug>) {
        match result {
            Err(DomainError::Incomplete(msg)) if msg == "all fields must be filled" => {}
            other => panic!("expected incomplete input error, got {other:?}"),
        }
    }

    #[test]
    fn form_parses_into_trimmed_record() {
        let record = RecordForm::new("  Widget ", " 10", "2.5 ", " Hardware ")
            .parse()
            .unwrap();

        assert_eq!(record.item_name().as_str(), "Widget");
        assert_eq!(record.quantity(), 10);
        assert_eq!(record.price().value(), 2.5);
        assert_eq!(record.category(), "Hardware");
        assert_eq!(record.id(), record.item_name());
    }

    #[test]
    fn empty_field_is_rejected_before_number_parsing() {
        // quantity is garbage too, but the emptiness check wins
        assert_incomplete(RecordForm::new("Widget", "ten", "2.5", "   ").parse());
        assert_incomplete(RecordForm::new("", "1", "1", "Misc").parse());
    }

    #[test]
    fn quantity_must_be_non_negative_integer() {
        assert_validation(RecordForm::new("Widget", "1.5", "2", "Misc").parse(), "quantity");
        assert_validation(RecordForm::new("Widget", "-3", "2", "Misc").parse(), "quantity");
        assert_validation(RecordForm::new("Widget", "lots", "2", "Misc").parse(), "quantity");
    }

    #[test]
    fn price_must_be_finite_and_non_negative() {
        assert_validation(RecordForm::new("Widget", "1", "cheap", "Misc").parse(), "price");
        assert_validation(RecordForm::new("Widget", "1", "-0.5", "Misc").parse(), "negative");
        assert_validation(RecordForm::new("Widget", "1", "inf", "Misc").parse(), "finite");
        assert_validation(RecordForm::new("Widget", "1", "NaN", "Misc").parse(), "finite");
    }

    #[test]
    fn negative_zero_price_is_plain_zero() {
        let price = Price::parse("-0").unwrap();
        assert_eq!(price.value().to_bits(), 0.0f64.to_bits());
        assert_eq!(price.to_string(), "0");
        assert_eq!(Price::new(-0.0).unwrap(), Price::ZERO);
    }

    #[test]
    fn price_accepts_integers_and_exponents() {
        assert_eq!(Price::parse("3").unwrap().value(), 3.0);
        assert_eq!(Price::parse("1e2").unwrap().value(), 100.0);
    }

    #[test]
    fn update_form_validates_like_add_form() {
        let changes = UpdateForm::new("7", "1.25", "Tools").parse().unwrap();
        assert_eq!(changes, RecordChanges::new(7, Price::new(1.25).unwrap(), "Tools"));

        assert_incomplete(UpdateForm::new("7", "", "Tools").parse());
        assert_validation(UpdateForm::new("x", "1", "Tools").parse(), "quantity");
    }

    #[test]
    fn serde_rejects_invalid_value_objects() {
        assert!(serde_json::from_str::<Price>("-1.0").is_err());
        assert!(serde_json::from_str::<ItemName>("\"  \"").is_err());
        assert_eq!(
            serde_json::from_str::<ItemName>("\" Bolt \"").unwrap().as_str(),
            "Bolt"
        );
    }
}
