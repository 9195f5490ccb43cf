//! Item Collection
//!
//! The editable problem instance: ordered items plus the capacity.
//! Items are addressed by position, so a removal shifts every later index.

use serde::Serialize;

use crate::error::ValidationFailure;
use crate::models::{Item, ItemField};

pub const DEFAULT_CAPACITY: f64 = 50.0;
const NEW_ITEM_WEIGHT: f64 = 10.0;
const NEW_ITEM_VALUE: f64 = 50.0;

/// Snapshot of the instance sent with solve/recommend/compare requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Problem {
    pub items: Vec<Item>,
    pub capacity: f64,
}

impl Problem {
    /// Local checks only; the service stays authoritative.
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        if self.items.is_empty() {
            return Err(ValidationFailure::EmptyItems);
        }
        // NaN (unparsable input) fails here too
        if !(self.capacity.is_finite() && self.capacity > 0.0) {
            return Err(ValidationFailure::NonPositiveCapacity);
        }
        for (index, item) in self.items.iter().enumerate() {
            let weight_ok = item.weight.is_finite() && item.weight > 0.0;
            let value_ok = item.value.is_finite() && item.value >= 0.0;
            if !(weight_ok && value_ok) {
                return Err(ValidationFailure::InvalidItem {
                    index,
                    name: item.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Editable column of the item table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Weight,
    Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemCollection {
    items: Vec<Item>,
    capacity: f64,
}

impl Default for ItemCollection {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ItemCollection {
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        Self { items, capacity }
    }

    /// Starting instance shown before any preset is picked
    pub fn seeded() -> Self {
        Self::new(
            vec![
                Item::new("Package A", 10.0, 60.0),
                Item::new("Package B", 20.0, 100.0),
                Item::new("Package C", 30.0, 120.0),
            ],
            DEFAULT_CAPACITY,
        )
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn set_capacity(&mut self, capacity: f64) {
        self.capacity = capacity;
    }

    /// Append a default item named after its 1-based position
    pub fn add(&mut self) {
        let name = format!("Item {}", self.items.len() + 1);
        self.items.push(Item::new(name, NEW_ITEM_WEIGHT, NEW_ITEM_VALUE));
    }

    pub fn update(&mut self, index: usize, field: ItemField) {
        debug_assert!(index < self.items.len(), "item index {} out of range", index);
        let Some(item) = self.items.get_mut(index) else {
            log::error!("update on missing item #{}", index);
            return;
        };
        match field {
            ItemField::Name(name) => item.name = name,
            ItemField::Weight(weight) => item.weight = weight,
            ItemField::Value(value) => item.value = value,
        }
    }

    /// Remove by position; later items shift down by one
    pub fn remove(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            log::error!("remove on missing item #{}", index);
            None
        }
    }

    /// Discard every item. Callers confirm with the user first.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    /// Text for one table cell. Empty past the end, which only a row
    /// about to be dropped after a removal can ask for.
    pub fn cell_text(&self, index: usize, column: Column) -> String {
        let Some(item) = self.items.get(index) else {
            return String::new();
        };
        match column {
            Column::Name => item.name.clone(),
            Column::Weight => item.weight.to_string(),
            Column::Value => item.value.to_string(),
        }
    }

    pub fn problem(&self) -> Problem {
        Problem {
            items: self.items.clone(),
            capacity: self.capacity,
        }
    }
}

/// Numeric input text to a number. Unparseable text becomes NaN, which
/// validation rejects with a message instead of silently using zero.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_names_by_position() {
        let mut items = ItemCollection::seeded();
        items.add();

        assert_eq!(items.len(), 4);
        assert_eq!(items.items()[3], Item::new("Item 4", 10.0, 50.0));
    }

    #[test]
    fn test_update_in_place() {
        let mut items = ItemCollection::seeded();
        items.update(1, ItemField::Weight(25.5));
        items.update(1, ItemField::Name("Crate".to_string()));

        assert_eq!(items.items()[1], Item::new("Crate", 25.5, 100.0));
        assert_eq!(items.items()[0].name, "Package A");
    }

    #[test]
    fn test_edit_keeps_rows_remove_reindexes() {
        let mut items = ItemCollection::seeded();
        items.update(1, ItemField::Value(140.0));

        // an edit leaves the row set alone; only the cell text moves
        assert_eq!(items.len(), 3);
        assert_eq!(items.cell_text(1, Column::Value), "140");
        assert_eq!(items.cell_text(1, Column::Name), "Package B");

        items.remove(0);
        assert_eq!(items.len(), 2);
        assert_eq!(items.cell_text(0, Column::Name), "Package B");
        assert_eq!(items.cell_text(0, Column::Weight), "20");
        assert_eq!(items.cell_text(2, Column::Name), "");
    }

    #[test]
    fn test_remove_shifts_later_items() {
        let mut items = ItemCollection::seeded();
        let removed = items.remove(0);

        assert_eq!(removed.map(|i| i.name), Some("Package A".to_string()));
        assert_eq!(items.items()[0].name, "Package B");
        assert_eq!(items.items()[1].name, "Package C");
        assert!(items.remove(5).is_none());
    }

    #[test]
    fn test_clear_then_validate_blocks() {
        let mut items = ItemCollection::seeded();
        items.clear();

        assert!(items.is_empty());
        assert_eq!(items.problem().validate(), Err(ValidationFailure::EmptyItems));
    }

    #[test]
    fn test_capacity_must_be_positive_number() {
        let mut items = ItemCollection::seeded();
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            items.set_capacity(bad);
            assert_eq!(
                items.problem().validate(),
                Err(ValidationFailure::NonPositiveCapacity),
                "capacity {} should be rejected",
                bad
            );
        }
        items.set_capacity(0.5);
        assert!(items.problem().validate().is_ok());
    }

    #[test]
    fn test_invalid_item_reported_by_row() {
        let mut items = ItemCollection::seeded();
        items.update(2, ItemField::Value(-1.0));

        assert_eq!(
            items.problem().validate(),
            Err(ValidationFailure::InvalidItem { index: 2, name: "Package C".to_string() })
        );
    }

    #[test]
    fn test_problem_wire_shape() {
        let problem = ItemCollection::new(vec![Item::new("A", 1.0, 2.0)], 5.0).problem();
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"items": [{"item": "A", "weight": 1.0, "value": 2.0}], "capacity": 5.0})
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert!(parse_amount("").is_nan());
        assert!(parse_amount("ten").is_nan());

        let mut items = ItemCollection::seeded();
        items.update(2, ItemField::Weight(parse_amount("")));
        assert!(matches!(
            items.problem().validate(),
            Err(ValidationFailure::InvalidItem { index: 2, .. })
        ));
    }
}
