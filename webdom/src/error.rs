use thiserror::Error;

/// Structural failures of the document model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no element with id '{0}'")]
    NoSuchElement(String),
    #[error("element '{child}' is not a child of '{parent}'")]
    NotAChild { parent: String, child: String },
    #[error("an element with id '{0}' already exists")]
    DuplicateId(String),
    #[error("element '{0}' cannot be moved inside itself")]
    HierarchyCycle(String),
    #[error("invalid insets value '{0}'")]
    InvalidInsets(String),
    #[error("invalid color value '{0}'")]
    InvalidColor(String),
}
