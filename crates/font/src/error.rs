use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontError {
    #[error("A font needs at least 5 parts, found {found}.")]
    InsufficientParts { found: usize },
}
