use thiserror::Error;

/// The fragments/values pair doesn't have the interpolation shape
/// (exactly one more fragment than values).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("template shape: {fragments} fragments need {} values, got {values}",
        .fragments.saturating_sub(1))]
pub struct ShapeError {
    pub fragments: usize,
    pub values: usize,
}

impl ShapeError {
    /// Ok iff `fragments == values + 1`.
    pub fn check(fragments: usize, values: usize) -> Result<(), ShapeError> {
        if fragments == values + 1 {
            Ok(())
        } else {
            Err(ShapeError { fragments, values })
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error("invalid template in JSON: {0}")]
    Json(String),
}
