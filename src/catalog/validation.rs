use std::collections::HashSet;

use super::schema::{CatalogFile, Category};
use crate::scoring::clean_base_class;

/// Largest magnitude a single modification may be worth
pub const MAX_ITEM_POINTS: i32 = 1_000;

/// Validate a catalog before it is used.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(file: &CatalogFile) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if file.classes.is_empty() {
        errors.push("catalog.classes: ladder must not be empty".to_string());
    }

    let mut seen = HashSet::new();
    for (i, class) in file.classes.iter().enumerate() {
        if class.trim().is_empty() {
            errors.push(format!("catalog.classes[{}]: class name must not be empty", i));
        } else if !seen.insert(class.as_str()) {
            errors.push(format!("catalog.classes[{}]: duplicate class '{}'", i, class));
        }
    }

    for (make, models) in &file.models {
        for (model, raw) in models {
            let clean = clean_base_class(raw);
            if !seen.contains(clean.as_str()) {
                errors.push(format!(
                    "catalog.models.{}.{}: base class '{}' is not on the class ladder",
                    make, model, raw
                ));
            }
        }
    }

    let mut categories: Vec<(Category, &str)> = Vec::new();
    for (name, items) in &file.score_table {
        match name.parse::<Category>() {
            Ok(category) => {
                if let Some((_, first)) = categories.iter().find(|(c, _)| *c == category) {
                    errors.push(format!(
                        "catalog.score_table.{}: duplicate category, already defined as '{}'",
                        name, first
                    ));
                } else {
                    categories.push((category, name.as_str()));
                }
            }
            Err(e) => errors.push(format!("catalog.score_table.{}: {}", name, e)),
        }
        let mut labels = HashSet::new();
        for (i, item) in items.iter().enumerate() {
            if !labels.insert(item.label.as_str()) {
                errors.push(format!(
                    "catalog.score_table.{}[{}]: duplicate item '{}'",
                    name, i, item.label
                ));
            }
            if !(-MAX_ITEM_POINTS..=MAX_ITEM_POINTS).contains(&item.points) {
                errors.push(format!(
                    "catalog.score_table.{}[{}].points: {} is outside -{}..={}",
                    name, i, item.points, MAX_ITEM_POINTS, MAX_ITEM_POINTS
                ));
            }
        }
    }

    let tires = file
        .score_table
        .iter()
        .find(|(name, _)| name.parse::<Category>() == Ok(Category::Tires));
    match tires {
        None => errors.push("catalog.score_table: missing required 'tires' category".to_string()),
        Some((_, items)) if items.is_empty() => {
            errors.push("catalog.score_table.tires: must offer at least one tire".to_string())
        }
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
