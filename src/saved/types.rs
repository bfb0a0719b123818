use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculator::ClassificationResult;
use crate::catalog::Category;
use crate::scoring::Selection;

pub const STORE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfiguration {
    pub result: ClassificationResult,
    pub selection: Selection,
    pub saved_at: DateTime<Utc>,
}

impl SavedConfiguration {
    pub fn new(result: ClassificationResult, selection: Selection) -> Self {
        Self {
            result,
            selection,
            saved_at: Utc::now(),
        }
    }

    /// Modifications grouped by category, one `- item` line each.
    /// Categories with nothing selected are skipped.
    pub fn format_modifications(&self) -> String {
        let mut out = String::new();
        for category in Category::ALL {
            let items = self.selection.items(category);
            if items.is_empty() {
                continue;
            }
            out.push_str(&format!("\n{}:\n", category.as_str().to_uppercase()));
            for item in items {
                out.push_str(&format!("- {}\n", item));
            }
        }
        out
    }

    /// Plain-text summary suitable for pasting into an entry form
    pub fn format_submission(&self) -> String {
        let r = &self.result;
        format!(
            "Vehicle: {} {}\nBase class: {}\nFinal class: {}\nTotal points: {}\nModifications:{}",
            r.make,
            r.model,
            r.base_class_raw,
            r.final_class,
            r.total_points,
            self.format_modifications()
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedStore {
    pub version: u32,
    #[serde(default)]
    pub configs: Vec<SavedConfiguration>,
}

impl Default for SavedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SavedStore {
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            configs: Vec::new(),
        }
    }

    /// Newest entries come first
    pub fn push(&mut self, config: SavedConfiguration) {
        self.configs.insert(0, config);
    }

    /// 1-based lookup, as shown by `saved list`
    pub fn get(&self, index: usize) -> Option<&SavedConfiguration> {
        index.checked_sub(1).and_then(|i| self.configs.get(i))
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn clear(&mut self) {
        self.configs.clear();
    }
}
