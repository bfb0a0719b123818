use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category, ModItem};
use crate::classify::{classify, promotion_tier};
use crate::error::ClassificationError;
use crate::scoring::{clean_base_class, compute_score, ScoreBreakdown, Selection};

/// Outcome of one classification request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassificationResult {
    pub make: String,
    pub model: String,
    pub base_class_raw: String,
    pub base_class_clean: String,
    pub base_bonus_points: i32,
    pub modification_points: i32,
    pub total_points: i32,
    /// Band tier earned by the points, before the ladder cap
    pub promotion_tier: usize,
    /// Ladder steps actually climbed; smaller than the tier near the top
    pub classes_moved: usize,
    pub final_class: String,
}

/// Entry point for callers: wraps a catalog and answers scoring requests.
///
/// Holds no state between calls.
#[derive(Debug, Clone)]
pub struct Calculator {
    catalog: Catalog,
}

impl Calculator {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Raw base class of a cataloged vehicle
    pub fn lookup_base_class(&self, make: &str, model: &str) -> Result<&str, ClassificationError> {
        if make.trim().is_empty() || model.trim().is_empty() {
            return Err(ClassificationError::NoVehicleSelected);
        }
        self.catalog
            .lookup_base_class(make, model)
            .ok_or_else(|| ClassificationError::UnknownMakeModel {
                make: make.to_string(),
                model: model.to_string(),
            })
    }

    pub fn compute_score(
        &self,
        raw_base_class: &str,
        selection: &Selection,
    ) -> Result<ScoreBreakdown, ClassificationError> {
        compute_score(raw_base_class, selection, self.catalog.score_table())
    }

    pub fn classify(&self, raw_base_class: &str, total: i32) -> Result<String, ClassificationError> {
        classify(raw_base_class, total, self.catalog.ladder())
    }

    /// Look up, score and classify a vehicle in one call.
    pub fn evaluate(
        &self,
        make: &str,
        model: &str,
        selection: &Selection,
    ) -> Result<ClassificationResult, ClassificationError> {
        let raw = self.lookup_base_class(make, model)?;
        let score = self.compute_score(raw, selection)?;
        let final_class = self.classify(raw, score.total)?;
        let clean = clean_base_class(raw);
        let ladder = self.catalog.ladder();
        let classes_moved = match (ladder.index_of(&clean), ladder.index_of(&final_class)) {
            (Some(base), Some(top)) => top.saturating_sub(base),
            _ => 0,
        };

        tracing::info!(
            make,
            model,
            base = raw,
            total = score.total,
            final_class = %final_class,
            "vehicle classified"
        );

        Ok(ClassificationResult {
            make: make.to_string(),
            model: model.to_string(),
            base_class_raw: raw.to_string(),
            base_class_clean: clean,
            base_bonus_points: score.base_bonus,
            modification_points: score.mod_points,
            total_points: score.total,
            promotion_tier: promotion_tier(score.total),
            classes_moved,
            final_class,
        })
    }

    pub fn makes(&self) -> Vec<&str> {
        self.catalog.list_makes()
    }

    pub fn models(&self, make: &str) -> Vec<&str> {
        self.catalog.list_models(make)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.catalog.categories()
    }

    pub fn items(&self, category: Category) -> &[ModItem] {
        self.catalog.score_table_for(category).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogFile;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    const OEM: &str = "OEM (0 points)";
    const TURBO: &str = "Turbo upgrade (+20 points)";

    fn item(label: &str, points: i32) -> ModItem {
        ModItem {
            label: label.to_string(),
            points,
        }
    }

    fn calculator() -> Calculator {
        let file = CatalogFile {
            classes: ["TTS", "TTE", "TTD", "TTC", "TTB", "TTA", "TTX"]
                .map(String::from)
                .to_vec(),
            models: BTreeMap::from([(
                "Ford".to_string(),
                BTreeMap::from([
                    ("Mustang GT (S550)".to_string(), "TTC*".to_string()),
                    ("Fiesta".to_string(), "TTS".to_string()),
                ]),
            )]),
            score_table: BTreeMap::from([
                ("tires".to_string(), vec![item(OEM, 0)]),
                ("engine".to_string(), vec![item(TURBO, 20), item("Engine swap (+80 points)", 80)]),
                ("weight".to_string(), vec![item("Added ballast (-3 points)", -3)]),
            ]),
        };
        Calculator::new(Catalog::from_file(file).unwrap())
    }

    #[test]
    fn test_evaluate_promotes_one_tier() {
        let selection = Selection::new().with(Category::Tires, OEM).with(Category::Engine, TURBO);
        let result = calculator()
            .evaluate("Ford", "Mustang GT (S550)", &selection)
            .unwrap();

        assert_eq!(
            result,
            ClassificationResult {
                make: "Ford".to_string(),
                model: "Mustang GT (S550)".to_string(),
                base_class_raw: "TTC*".to_string(),
                base_class_clean: "TTC".to_string(),
                base_bonus_points: 7,
                modification_points: 20,
                total_points: 27,
                promotion_tier: 1,
                classes_moved: 1,
                final_class: "TTB".to_string(),
            }
        );
    }

    #[test]
    fn test_evaluate_caps_at_top() {
        let selection = Selection::new()
            .with(Category::Tires, OEM)
            .with(Category::Engine, TURBO)
            .with(Category::Engine, "Engine swap (+80 points)");
        let result = calculator().evaluate("Ford", "Fiesta", &selection).unwrap();
        assert_eq!(result.total_points, 100);
        assert_eq!(result.promotion_tier, 6);
        assert_eq!(result.classes_moved, 6);
        assert_eq!(result.final_class, "TTX");
    }

    #[test]
    fn test_classes_moved_reflects_ladder_cap() {
        let file = CatalogFile {
            classes: ["TTS", "TTA", "TTX"].map(String::from).to_vec(),
            models: BTreeMap::from([(
                "Nissan".to_string(),
                BTreeMap::from([("GT-R (R35)".to_string(), "TTA*".to_string())]),
            )]),
            score_table: BTreeMap::from([
                ("tires".to_string(), vec![item(OEM, 0)]),
                (
                    "engine".to_string(),
                    vec![item("Stage 3 (+50 points)", 50), item("E85 (+50 points)", 50)],
                ),
            ]),
        };
        let calc = Calculator::new(Catalog::from_file(file).unwrap());
        let selection = Selection::new()
            .with(Category::Tires, OEM)
            .with(Category::Engine, "Stage 3 (+50 points)")
            .with(Category::Engine, "E85 (+50 points)");

        let result = calc.evaluate("Nissan", "GT-R (R35)", &selection).unwrap();
        assert_eq!(result.total_points, 107);
        assert_eq!(result.promotion_tier, 6);
        assert_eq!(result.classes_moved, 1);
        assert_eq!(result.final_class, "TTX");
    }

    #[test]
    fn test_evaluate_requires_tire() {
        let selection = Selection::new().with(Category::Engine, TURBO);
        let err = calculator()
            .evaluate("Ford", "Fiesta", &selection)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(matches!(
            err,
            ClassificationError::MissingRequiredCategory {
                category: Category::Tires
            }
        ));
    }

    #[test]
    fn test_unknown_vehicle() {
        let calc = calculator();
        let err = calc.lookup_base_class("Ford", "Model T").unwrap_err();
        assert_eq!(
            err,
            ClassificationError::UnknownMakeModel {
                make: "Ford".to_string(),
                model: "Model T".to_string(),
            }
        );
    }

    #[test]
    fn test_no_vehicle_selected() {
        let err = calculator().lookup_base_class("Ford", "").unwrap_err();
        assert_eq!(err, ClassificationError::NoVehicleSelected);
    }

    #[test]
    fn test_classify_entry_point() {
        let calc = calculator();
        assert_eq!(calc.classify("TTS", 100).unwrap(), "TTX");
        assert_eq!(calc.classify("TTQ", 0).unwrap_err().kind(), ErrorKind::Integrity);
    }

    #[test]
    fn test_read_accessors() {
        let calc = calculator();
        assert_eq!(calc.makes(), vec!["Ford"]);
        assert_eq!(calc.models("Ford"), vec!["Fiesta", "Mustang GT (S550)"]);
        assert_eq!(
            calc.categories(),
            vec![Category::Engine, Category::Tires, Category::Weight]
        );
        assert_eq!(calc.items(Category::Weight)[0].points, -3);
        assert!(calc.items(Category::Aero).is_empty());
    }

    #[test]
    fn test_result_serializes_to_json() {
        let selection = Selection::new().with(Category::Tires, OEM);
        let result = calculator().evaluate("Ford", "Fiesta", &selection).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["final_class"], "TTS");
        assert_eq!(json["total_points"], 0);
    }
}
