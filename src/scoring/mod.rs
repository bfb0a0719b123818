pub mod engine;
pub mod indicators;
pub mod selection;

pub use engine::{compute_score, modification_points, total_score, ModContribution, ScoreBreakdown};
pub use indicators::{clean_base_class, describe_indicators, special_indicator_bonus};
pub use selection::Selection;
