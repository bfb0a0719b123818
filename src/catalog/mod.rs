mod ladder;
mod schema;
mod table;
mod validation;

pub use ladder::ClassLadder;
pub use schema::{CatalogFile, Category, ModItem};
pub use table::ScoreTable;
pub use validation::validate_catalog;

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("builtin.yaml");

/// Read-only reference data: vehicles, the class ladder and the score table.
#[derive(Debug, Clone)]
pub struct Catalog {
    ladder: ClassLadder,
    models: BTreeMap<String, BTreeMap<String, String>>,
    score_table: ScoreTable,
}

impl Catalog {
    /// Build a catalog from parsed file contents.
    ///
    /// Fails with every validation problem found, see [`validate_catalog`].
    pub fn from_file(file: CatalogFile) -> Result<Self, Vec<String>> {
        validate_catalog(&file)?;

        let mut categories = BTreeMap::new();
        for (name, items) in file.score_table {
            // validate_catalog already rejected unknown names
            if let Ok(category) = name.parse::<Category>() {
                categories.insert(category, items);
            }
        }

        Ok(Self {
            ladder: ClassLadder::new(file.classes),
            models: file.models,
            score_table: ScoreTable::new(categories),
        })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        parse_catalog(BUILTIN_CATALOG, "built-in catalog")
    }

    /// Raw base class for a vehicle, `None` when the pair is not cataloged
    pub fn lookup_base_class(&self, make: &str, model: &str) -> Option<&str> {
        self.models.get(make)?.get(model).map(String::as_str)
    }

    pub fn list_makes(&self) -> Vec<&str> {
        self.models.keys().map(String::as_str).collect()
    }

    /// Models for `make`; empty when the make is unknown
    pub fn list_models(&self, make: &str) -> Vec<&str> {
        self.models
            .get(make)
            .map(|models| models.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn score_table_for(&self, category: Category) -> Option<&[ModItem]> {
        self.score_table.items(category)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.score_table.categories().collect()
    }

    pub fn score_table(&self) -> &ScoreTable {
        &self.score_table
    }

    pub fn ladder(&self) -> &ClassLadder {
        &self.ladder
    }
}

/// Load a catalog from a YAML file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML cannot be parsed
/// - The catalog fails validation
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file at {}", path.display()))?;
    let catalog = parse_catalog(&content, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        makes = catalog.models.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

fn parse_catalog(content: &str, source: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_saphyr::from_str(content)
        .with_context(|| format!("Failed to parse catalog: invalid YAML in {}", source))?;

    Catalog::from_file(file).map_err(|errors| {
        anyhow::anyhow!(
            "Invalid catalog in {}:\n  - {}",
            source,
            errors.join("\n  - ")
        )
    })
}
