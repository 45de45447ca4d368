//! Error types for boundary configuration and update.

use thiserror::Error;

/// Which list of boundary sites an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryClass {
    Inlet,
    Outlet,
}

impl std::fmt::Display for BoundaryClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryClass::Inlet => write!(f, "inlet"),
            BoundaryClass::Outlet => write!(f, "outlet"),
        }
    }
}

/// Errors raised while configuring or applying the velocity boundary.
#[derive(Error, Debug)]
pub enum BoundaryError {
    /// An update function set does not have one entry per dimension.
    #[error("{class} update functions: expected {expected}, got {actual}")]
    FunctionCount {
        class: BoundaryClass,
        expected: usize,
        actual: usize,
    },

    /// The same coordinates appear twice within one class.
    #[error("{class} site ({coords}) is listed more than once")]
    DuplicateSite { class: BoundaryClass, coords: String },

    /// A site is both an inlet and an outlet.
    #[error("site ({coords}) is both an inlet and an outlet")]
    OverlappingSites { coords: String },

    /// A site lies outside the velocity field it is written into.
    #[error("{class} site ({coords}) is outside the velocity field {bounds}")]
    OutOfRange {
        class: BoundaryClass,
        coords: String,
        bounds: String,
    },

    /// Sites are attached but no update functions are.
    #[error("boundary sites are attached but no update functions are")]
    MissingUpdateFunctions,

    /// Strategy or engine parameters are unusable.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Building a dedicated thread pool failed.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl BoundaryError {
    pub fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters(reason.into())
    }

    /// True for errors that reject an `attach_*` call.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::FunctionCount { .. }
                | Self::DuplicateSite { .. }
                | Self::OverlappingSites { .. }
        )
    }
}
