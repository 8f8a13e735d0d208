use crate::font::FontError;
use crate::geom::ArgumentCountError;

use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CanvasError {
    #[error("Could not get a 2d drawing context from the provided surface.")]
    MissingDrawingContext,
    #[error(transparent)]
    InvalidArgumentCount(#[from] ArgumentCountError),
    #[error(transparent)]
    Font(#[from] FontError),
}
