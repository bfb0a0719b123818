use thiserror::Error;

use crate::catalog::Category;

/// Broad class of a [`ClassificationError`].
///
/// Validation errors are user-correctable (pick a tire, pick a vehicle).
/// Integrity errors mean the catalog and the class ladder disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Integrity,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// No vehicle was chosen before scoring
    #[error("no vehicle selected: choose a make and model first")]
    NoVehicleSelected,

    #[error("unknown vehicle: '{make} {model}' is not in the catalog")]
    UnknownMakeModel { make: String, model: String },

    #[error("{category} selection required: choose exactly one {category} option")]
    MissingRequiredCategory { category: Category },

    /// The cleaned base class is missing from the class ladder
    #[error("base class '{clean}' (raw '{raw}') is not on the class ladder")]
    UnknownBaseClass { raw: String, clean: String },
}

impl ClassificationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassificationError::NoVehicleSelected
            | ClassificationError::UnknownMakeModel { .. }
            | ClassificationError::MissingRequiredCategory { .. } => ErrorKind::Validation,
            ClassificationError::UnknownBaseClass { .. } => ErrorKind::Integrity,
        }
    }
}
