//! Time-trial vehicle classification.
//!
//! A car starts from the base class its make and model is cataloged at. Special
//! markers on that class and every selected modification add points, and each
//! 14-point band promotes the car one step up the class ladder.
//!
//! ```
//! use tt_class::{Calculator, Catalog, Category, Selection};
//!
//! let calc = Calculator::new(Catalog::builtin().unwrap());
//! let selection = Selection::new()
//!     .with(Category::Tires, "OEM (0 points)")
//!     .with(Category::Engine, "Turbo upgrade (+20 points)");
//! let result = calc.evaluate("Ford", "Mustang GT (S550)", &selection).unwrap();
//! assert_eq!(result.total_points, 27);
//! assert_eq!(result.final_class, "TTB");
//! ```

pub mod calculator;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod output;
pub mod saved;
pub mod scoring;
pub mod telemetry;

pub use calculator::{Calculator, ClassificationResult};
pub use catalog::{Catalog, Category, ClassLadder, ModItem, ScoreTable};
pub use classify::{classify, promotion_tier};
pub use error::{ClassificationError, ErrorKind};
pub use scoring::Selection;
