use std::collections::BTreeMap;

use super::schema::{Category, ModItem};

/// Per-category modification point values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    categories: BTreeMap<Category, Vec<ModItem>>,
}

impl ScoreTable {
    pub fn new(categories: BTreeMap<Category, Vec<ModItem>>) -> Self {
        Self { categories }
    }

    /// Point value of `label` in `category`, or `None` when the table has no such item
    pub fn points(&self, category: Category, label: &str) -> Option<i32> {
        self.categories
            .get(&category)?
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.points)
    }

    /// Items of one category in display order
    pub fn items(&self, category: Category) -> Option<&[ModItem]> {
        self.categories.get(&category).map(Vec::as_slice)
    }

    /// Categories present in the table, in display order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str, points: i32) -> ModItem {
        ModItem {
            label: label.to_string(),
            points,
        }
    }

    fn sample_table() -> ScoreTable {
        let mut categories = BTreeMap::new();
        categories.insert(Category::Weight, vec![item("Added ballast (-3 points)", -3)]);
        categories.insert(
            Category::Tires,
            vec![item("OEM (0 points)", 0), item("Slick (+18 points)", 18)],
        );
        ScoreTable::new(categories)
    }

    #[test]
    fn test_points_lookup() {
        let table = sample_table();
        assert_eq!(table.points(Category::Tires, "Slick (+18 points)"), Some(18));
        assert_eq!(table.points(Category::Tires, "OEM (0 points)"), Some(0));
        assert_eq!(table.points(Category::Weight, "Added ballast (-3 points)"), Some(-3));
    }

    #[test]
    fn test_points_missing() {
        let table = sample_table();
        assert_eq!(table.points(Category::Tires, "Bias ply"), None);
        // Label exists, but under another category
        assert_eq!(table.points(Category::Engine, "Slick (+18 points)"), None);
    }

    #[test]
    fn test_categories_in_display_order() {
        let table = sample_table();
        let cats: Vec<_> = table.categories().collect();
        assert_eq!(cats, vec![Category::Tires, Category::Weight]);
        assert_eq!(table.items(Category::Tires).map(|i| i.len()), Some(2));
        assert!(table.items(Category::Aero).is_none());
    }
}
