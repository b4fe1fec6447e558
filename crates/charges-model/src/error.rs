use thiserror::Error;

use crate::field::Field;

/// Raised when raw form text cannot be converted into a typed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("{field} is not a finite number: {raw:?}")]
    NotNumeric { field: Field, raw: String },
    #[error("{field} has no option {raw:?}")]
    InvalidChoice { field: Field, raw: String },
}

pub type Result<T> = std::result::Result<T, CoercionError>;
