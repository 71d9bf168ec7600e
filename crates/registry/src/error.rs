use thiserror::Error;

/// Error type for registration operations.
///
/// Registration errors are returned synchronously to the caller and
/// reject only the section being added; previously registered sections
/// are unaffected. The render path defines no error type at all: lookup
/// misses there degrade to omitted declarations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("the font \"{0}\" is not registered")]
    UnknownFont(String),

    #[error("the font weight \"{0}\" is not registered")]
    UnknownFontWeight(String),
}
