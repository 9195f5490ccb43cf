//! Algorithm Catalog & Presets
//!
//! Read-only data fetched once at startup.

use crate::items::ItemCollection;
use crate::models::{AlgorithmDescriptor, Preset, DEFAULT_ALGORITHM};

/// Known algorithms, in service order, plus the current selection
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmCatalog {
    algorithms: Vec<AlgorithmDescriptor>,
    selected: String,
}

impl Default for AlgorithmCatalog {
    fn default() -> Self {
        Self {
            algorithms: Vec::new(),
            selected: DEFAULT_ALGORITHM.to_string(),
        }
    }
}

impl AlgorithmCatalog {
    pub fn load(&mut self, algorithms: Vec<AlgorithmDescriptor>) {
        self.algorithms = algorithms;
    }

    pub fn is_loaded(&self) -> bool {
        !self.algorithms.is_empty()
    }

    pub fn all(&self) -> &[AlgorithmDescriptor] {
        &self.algorithms
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Select a known algorithm. Unknown ids leave the selection alone.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_some() {
            self.selected = id.to_string();
            true
        } else {
            log::warn!("ignoring selection of unknown algorithm '{}'", id);
            false
        }
    }

    pub fn get(&self, id: &str) -> Option<&AlgorithmDescriptor> {
        self.algorithms.iter().find(|algo| algo.id == id)
    }

    /// Descriptor for display; falls back to the bare id when the catalog
    /// has not loaded or does not know it.
    pub fn describe(&self, id: &str) -> AlgorithmDescriptor {
        self.get(id).cloned().unwrap_or_else(|| AlgorithmDescriptor {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            time_complexity: "?".to_string(),
            space_complexity: "?".to_string(),
            best_for: None,
            worst_case: None,
            optimal: None,
            category: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetLibrary {
    presets: Vec<Preset>,
}

impl PresetLibrary {
    pub fn load(&mut self, presets: Vec<Preset>) {
        self.presets = presets;
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }
}

/// Replace the current instance with a copy of `preset`.
pub fn apply_preset(items: &mut ItemCollection, preset: &Preset) {
    items.replace_all(preset.items.clone());
    items.set_capacity(preset.capacity);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Item, ItemField};

    fn descriptor(id: &str) -> AlgorithmDescriptor {
        AlgorithmDescriptor {
            id: id.to_string(),
            name: format!("{} name", id),
            description: String::new(),
            time_complexity: "O(n)".to_string(),
            space_complexity: "O(1)".to_string(),
            best_for: None,
            worst_case: None,
            optimal: None,
            category: None,
        }
    }

    fn freight() -> Preset {
        Preset {
            name: "Cross-Country Freight".to_string(),
            description: "Long-haul trucking".to_string(),
            difficulty: Difficulty::Medium,
            category: Some("logistics".to_string()),
            capacity: 150.0,
            items: vec![
                Item::new("Electronics", 40.0, 200.0),
                Item::new("Furniture", 60.0, 180.0),
            ],
        }
    }

    #[test]
    fn test_default_selection_before_load() {
        let catalog = AlgorithmCatalog::default();
        assert_eq!(catalog.selected(), "greedy");
        assert!(!catalog.is_loaded());
    }

    #[test]
    fn test_select_rejects_unknown_id() {
        let mut catalog = AlgorithmCatalog::default();
        catalog.load(vec![descriptor("greedy"), descriptor("branch-bound")]);

        assert!(catalog.select("branch-bound"));
        assert!(!catalog.select("quantum"));
        assert_eq!(catalog.selected(), "branch-bound");
    }

    #[test]
    fn test_describe_falls_back_to_id() {
        let catalog = AlgorithmCatalog::default();
        let info = catalog.describe("memoization");
        assert_eq!(info.name, "memoization");
    }

    #[test]
    fn test_apply_preset_round_trip() {
        let preset = freight();
        let mut items = ItemCollection::seeded();

        apply_preset(&mut items, &preset);

        assert_eq!(items.items(), preset.items.as_slice());
        assert_eq!(items.capacity(), 150.0);
    }

    #[test]
    fn test_apply_preset_copies_items() {
        let mut library = PresetLibrary::default();
        library.load(vec![freight()]);
        let mut items = ItemCollection::seeded();

        apply_preset(&mut items, &library.presets()[0]);
        items.update(0, ItemField::Weight(1.0));
        items.add();

        assert_eq!(library.presets()[0], freight());
    }
}
