use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Category;

/// Modifications chosen for one car.
///
/// The tire choice is a single value; every other category is a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "SelectionFile")]
pub struct Selection {
    pub tires: Option<String>,

    /// Never holds `Category::Tires` or an empty set
    mods: BTreeMap<Category, BTreeSet<String>>,
}

/// On-disk form of a [`Selection`], before the invariants are restored
#[derive(Deserialize)]
struct SelectionFile {
    #[serde(default)]
    tires: Option<String>,

    #[serde(default)]
    mods: BTreeMap<Category, BTreeSet<String>>,
}

impl From<SelectionFile> for Selection {
    fn from(file: SelectionFile) -> Self {
        let mut selection = Selection {
            tires: file.tires,
            mods: BTreeMap::new(),
        };
        for (category, labels) in file.mods {
            if category == Category::Tires {
                tracing::warn!(
                    ?labels,
                    "tires listed under mods, keeping the tires field instead"
                );
                continue;
            }
            for label in labels {
                selection.select(category, label);
            }
        }
        selection
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an item. Choosing a tire replaces the previous tire.
    pub fn select(&mut self, category: Category, label: impl Into<String>) {
        let label = label.into();
        if category == Category::Tires {
            self.tires = Some(label);
        } else {
            self.mods.entry(category).or_default().insert(label);
        }
    }

    /// Builder form of [`Selection::select`]
    pub fn with(mut self, category: Category, label: impl Into<String>) -> Self {
        self.select(category, label);
        self
    }

    /// Deselect an item; returns whether it was selected
    pub fn deselect(&mut self, category: Category, label: &str) -> bool {
        if category == Category::Tires {
            if self.tires.as_deref() == Some(label) {
                self.tires = None;
                return true;
            }
            return false;
        }

        let Some(items) = self.mods.get_mut(&category) else {
            return false;
        };
        let removed = items.remove(label);
        if items.is_empty() {
            self.mods.remove(&category);
        }
        removed
    }

    /// Selected labels of one category
    pub fn items(&self, category: Category) -> Vec<&str> {
        if category == Category::Tires {
            return self.tires.iter().map(String::as_str).collect();
        }
        self.mods
            .get(&category)
            .map(|items| items.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every selected (category, label) pair in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.items(category).into_iter().map(move |l| (category, l)))
    }

    pub fn is_empty(&self) -> bool {
        self.tires.is_none() && self.mods.is_empty()
    }
}
