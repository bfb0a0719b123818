use serde::{Deserialize, Serialize};

use super::indicators::special_indicator_bonus;
use super::selection::Selection;
use crate::catalog::{Category, ScoreTable};
use crate::error::ClassificationError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModContribution {
    pub category: Category,
    pub label: String,
    pub points: i32,  // 0 when the item is not in the table
    pub known: bool,  // false for items the table does not list
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreBreakdown {
    pub base_bonus: i32,
    pub mod_points: i32,
    pub total: i32,
    pub contributions: Vec<ModContribution>,
}

/// Sum of the table value of every selected item. Unknown items count as 0.
pub fn modification_points(selection: &Selection, table: &ScoreTable) -> i32 {
    selection
        .iter()
        .map(|(category, label)| table.points(category, label).unwrap_or(0))
        .fold(0, i32::saturating_add)
}

pub fn total_score(raw_base_class: &str, selection: &Selection, table: &ScoreTable) -> i32 {
    special_indicator_bonus(raw_base_class).saturating_add(modification_points(selection, table))
}

/// Score a selection, refusing when no tire has been chosen.
pub fn compute_score(
    raw_base_class: &str,
    selection: &Selection,
    table: &ScoreTable,
) -> Result<ScoreBreakdown, ClassificationError> {
    let has_tire = selection
        .tires
        .as_deref()
        .is_some_and(|tire| !tire.trim().is_empty());
    if !has_tire {
        return Err(ClassificationError::MissingRequiredCategory {
            category: Category::Tires,
        });
    }

    let contributions: Vec<ModContribution> = selection
        .iter()
        .map(|(category, label)| {
            let points = table.points(category, label);
            if points.is_none() {
                tracing::debug!(%category, label, "item not in score table, scoring as 0");
            }
            ModContribution {
                category,
                label: label.to_string(),
                points: points.unwrap_or(0),
                known: points.is_some(),
            }
        })
        .collect();

    let base_bonus = special_indicator_bonus(raw_base_class);
    let mod_points = contributions
        .iter()
        .map(|c| c.points)
        .fold(0, i32::saturating_add);

    Ok(ScoreBreakdown {
        base_bonus,
        mod_points,
        total: base_bonus.saturating_add(mod_points),
        contributions,
    })
}
