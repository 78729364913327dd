use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Field name → every message reported for that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result of a mediated request.
pub type Outcome<T> = Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Failure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Failure => "failure",
        };
        f.write_str(name)
    }
}

/// Classified handler error.
///
/// `code` is a stable dotted identifier such as `Product.NotFound`;
/// `description` is safe to show to API clients. `internal` carries
/// diagnostics for failures and is only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {description}")]
pub struct Error {
    kind: ErrorKind,
    code: Cow<'static, str>,
    description: String,
    field_errors: Option<FieldErrors>,
    internal: Option<String>,
}

impl Error {
    pub const VALIDATION_CODE: &'static str = "Validation";
    pub const VALIDATION_DESCRIPTION: &'static str = "One or more validation errors occurred";

    fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            description: description.into(),
            field_errors: None,
            internal: None,
        }
    }

    pub fn validation(code: impl Into<Cow<'static, str>>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, code, description)
    }

    /// Validation error carrying per-field messages, as produced by the pipeline.
    pub fn validation_failed(field_errors: FieldErrors) -> Self {
        Self {
            field_errors: Some(field_errors),
            ..Self::new(
                ErrorKind::Validation,
                Self::VALIDATION_CODE,
                Self::VALIDATION_DESCRIPTION,
            )
        }
    }

    pub fn not_found(code: impl Into<Cow<'static, str>>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code, description)
    }

    pub fn failure(code: impl Into<Cow<'static, str>>, description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failure, code, description)
    }

    /// Failure wrapping an unexpected error; its debug rendering is kept as
    /// internal detail.
    pub fn unexpected(
        code: impl Into<Cow<'static, str>>,
        source: &(dyn std::error::Error + 'static),
    ) -> Self {
        Self {
            internal: Some(format!("{source:?}")),
            ..Self::new(ErrorKind::Failure, code, source.to_string())
        }
    }

    pub fn with_internal(mut self, detail: impl Into<String>) -> Self {
        self.internal = Some(detail.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.field_errors.as_ref()
    }

    pub fn internal(&self) -> Option<&str> {
        self.internal.as_deref()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_code_and_description() {
        let err = Error::not_found("Product.NotFound", "Product was not found.");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), "Product.NotFound");
        assert_eq!(err.to_string(), "Product.NotFound: Product was not found.");
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_unexpected_keeps_debug_detail_internal() {
        let io = std::io::Error::other("connection reset");
        let err = Error::unexpected("Product.Persistence", &io);
        assert_eq!(err.kind(), ErrorKind::Failure);
        assert_eq!(err.description(), "connection reset");
        assert!(err.internal().is_some_and(|d| d.contains("connection reset")));
    }

    #[test]
    fn test_validation_failed_uses_standard_code() {
        let mut fields = FieldErrors::new();
        fields.insert("name".into(), vec!["Name is required".into()]);
        let err = Error::validation_failed(fields);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.code(), Error::VALIDATION_CODE);
        assert_eq!(err.field_errors().map(|f| f.len()), Some(1));
    }
}
