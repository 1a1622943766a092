use crate::keyframe::element::ElementKind;

/// Convenience result type used across slidemorph.
pub type MorphResult<T> = Result<T, MorphError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Two elements in one keyframe share the same identity.
    #[error("duplicate identity: element id '{id}' appears more than once in a keyframe")]
    DuplicateIdentity {
        /// The repeated element id.
        id: String,
    },

    /// An element carries a kind discriminator outside the closed set.
    #[error("unknown element kind: '{kind}' (element id '{id}')")]
    UnknownElementKind {
        /// Element id, or an empty string when the id itself could not be read.
        id: String,
        /// The unrecognized discriminator.
        kind: String,
    },

    /// An id was paired across keyframes with two different kinds.
    ///
    /// Only produced by the pairing check; the planner turns it into exit + enter.
    #[error("kind mismatch on persist: element id '{id}' changed from {previous} to {next}")]
    KindMismatchOnPersist {
        /// Shared element id.
        id: String,
        /// Kind in the previous keyframe.
        previous: ElementKind,
        /// Kind in the next keyframe.
        next: ElementKind,
    },

    /// Transition options are out of range.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Malformed slide or element data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::DuplicateIdentity`] value.
    pub fn duplicate_identity(id: impl Into<String>) -> Self {
        Self::DuplicateIdentity { id: id.into() }
    }

    /// Build a [`MorphError::UnknownElementKind`] value.
    pub fn unknown_kind(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnknownElementKind {
            id: id.into(),
            kind: kind.into(),
        }
    }

    /// Build a [`MorphError::InvalidOptions`] value.
    pub fn invalid_options(msg: impl Into<String>) -> Self {
        Self::InvalidOptions(msg.into())
    }

    /// Build a [`MorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for MorphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
