use thiserror::Error;

/// The root cause of a [`LicenseError`], independent of how many clauses
/// wrapped it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseErrorKind {
    MissingLicense,
    UnrecognizedLicenseId,
    UnbalancedParenthesis,
}

/// Errors produced while parsing a license expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LicenseError {
    /// The license field was empty or the literal `unknown`.
    #[error("license missing")]
    MissingLicense,

    /// A term did not match any known license after normalization.
    #[error("unrecognized license ID {id}")]
    UnrecognizedLicenseId { id: String },

    /// An opening parenthesis had no matching close.
    #[error("unbalanced parenthesis in {expression:?}")]
    UnbalancedParenthesis { expression: String },

    /// Another error, annotated with the clause it was found in.
    #[error("{context}: {inner}")]
    Context {
        context: String,
        inner: Box<LicenseError>,
    },
}

impl LicenseError {
    pub fn kind(&self) -> LicenseErrorKind {
        match self {
            Self::MissingLicense => LicenseErrorKind::MissingLicense,
            Self::UnrecognizedLicenseId { .. } => LicenseErrorKind::UnrecognizedLicenseId,
            Self::UnbalancedParenthesis { .. } => LicenseErrorKind::UnbalancedParenthesis,
            Self::Context { inner, .. } => inner.kind(),
        }
    }

    pub fn is(&self, kind: LicenseErrorKind) -> bool {
        self.kind() == kind
    }

    pub(crate) fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            inner: Box::new(self),
        }
    }
}
