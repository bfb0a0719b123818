use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// On-disk catalog layout.
///
/// Example YAML:
/// ```yaml
/// classes: [TTS, TTE, TTD, TTC, TTB, TTA, TTX]
/// models:
///   Mazda:
///     "MX-5 Miata (ND)": "TTD*"
/// score_table:
///   tires:
///     - { label: "OEM (0 points)", points: 0 }
///   engine:
///     - { label: "Turbo upgrade (+20 points)", points: 20 }
/// ```
///
/// Category keys are kept as strings here and checked by
/// [`validate_catalog`](super::validate_catalog), so a typo reports a readable
/// error instead of a YAML type error.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Class ladder, slowest class first
    pub classes: Vec<String>,

    /// make -> model -> raw base class (may carry `*` / `$` markers)
    pub models: BTreeMap<String, BTreeMap<String, String>>,

    /// category -> selectable modifications, in display order
    pub score_table: BTreeMap<String, Vec<ModItem>>,
}

/// A selectable modification and its point value.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ModItem {
    pub label: String,
    pub points: i32,
}

/// Modification category.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Engine,
    Drivetrain,
    Suspension,
    Chassis,
    Aero,
    Tires,
    Weight,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Engine,
        Category::Drivetrain,
        Category::Suspension,
        Category::Chassis,
        Category::Aero,
        Category::Tires,
        Category::Weight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Engine => "engine",
            Category::Drivetrain => "drivetrain",
            Category::Suspension => "suspension",
            Category::Chassis => "chassis",
            Category::Aero => "aero",
            Category::Tires => "tires",
            Category::Weight => "weight",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "unknown category '{}' (expected one of: {})",
                    wanted,
                    Category::ALL.map(|c| c.as_str()).join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("Tires".parse::<Category>().unwrap(), Category::Tires);
        assert_eq!(" aero ".parse::<Category>().unwrap(), Category::Aero);
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "brakes".parse::<Category>().unwrap_err();
        assert!(err.contains("brakes"));
        assert!(err.contains("drivetrain"));
    }

    #[test]
    fn test_category_order_is_display_order() {
        let mut shuffled = vec![Category::Weight, Category::Tires, Category::Engine];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Category::Engine, Category::Tires, Category::Weight]
        );
    }

    #[test]
    fn test_catalog_file_parse() {
        let yaml = r#"
classes: [TTS, TTE]
models:
  Honda:
    "Civic Si": "TTS$"
score_table:
  tires:
    - { label: "OEM (0 points)", points: 0 }
  weight:
    - label: "Added ballast (-3 points)"
      points: -3
"#;
        let file: CatalogFile = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(file.classes, vec!["TTS", "TTE"]);
        assert_eq!(file.models["Honda"]["Civic Si"], "TTS$");
        assert_eq!(file.score_table["weight"][0].points, -3);
    }

    #[test]
    fn test_catalog_file_rejects_unknown_fields() {
        let yaml = r#"
classes: [TTS]
models: {}
score_table: {}
colors: {}
"#;
        assert!(serde_saphyr::from_str::<CatalogFile>(yaml).is_err());
    }
}
