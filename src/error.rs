//! Error types returned when a [`MacroTable`] is built or loaded from outside data.
//!
//! Looking up a macro never fails, so these errors only show up through
//! [`MacroTableBuilder`] and the loaders of the [`format`] module.
//!
//! [`MacroTable`]: crate::table::MacroTable
//! [`MacroTableBuilder`]: crate::table::MacroTableBuilder
//! [`format`]: crate::format
use std::{error::Error, fmt::Display};
use thiserror::Error;

/// Anything that could possibly go wrong while defining a macro.
///
/// The error carries the name of the macro whose definition was rejected.
#[derive(Debug)]
pub struct MacroError {
    inner: Box<Inner>,
}

#[derive(Debug)]
struct Inner {
    error: ErrorKind,
    name: Box<str>,
}

impl MacroError {
    pub(crate) fn new(error: ErrorKind, name: &str) -> Self {
        Self {
            inner: Box::new(Inner {
                error,
                name: name.into(),
            }),
        }
    }

    /// The name of the macro whose definition caused the error.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Whether the error was caused by a name which was already present in the table.
    pub fn is_duplicate(&self) -> bool {
        matches!(self.inner.error, ErrorKind::MacroAlreadyDefined)
    }
}

impl Error for MacroError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner.error)
    }
}

impl Display for MacroError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("macro definition error: ")?;
        self.inner.error.fmt(f)?;
        write!(f, "\n    in the definition of: {}", self.inner.name)
    }
}

pub(crate) type InnerResult<T> = std::result::Result<T, ErrorKind>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    #[error("expected a control sequence, macro names must begin with a backslash")]
    ControlSequence,
    #[error("empty control sequence")]
    EmptyControlSequence,
    #[error("control words may only contain ascii letters, found `{0}`")]
    ControlWord(char),
    #[error("control symbols are a single non-letter character")]
    ControlSymbol,
    #[error("macro definition contains a standalone '#'")]
    StandaloneHashSign,
    #[error(
        "macro definition found parameter #{0} but expected a parameter in the range [#1, #{1}]"
    )]
    IncorrectReplacementParams(u8, u8),
    #[error("macro definition contains too many parameters, the maximum is 9")]
    TooManyParams,
    #[error("macro definition never uses parameter #{0}")]
    MissingParameter(u8),
    #[error("macro definition uses parameter #{0} more than once")]
    RepeatedParameter(u8),
    #[error("a parametrized macro must take at least one argument")]
    ZeroArity,
    #[error("macro already defined")]
    MacroAlreadyDefined,
    #[error("alias target `{0}` is not a defined macro")]
    AliasTarget(Box<str>),
}

/// Errors returned by the loaders of the [`format`](crate::format) module.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input is not a valid macro object. This includes macro definitions rejected
    /// while deserializing, whose [`MacroError`] message is kept in the JSON error.
    #[error("invalid macro object: {0}")]
    Json(#[from] serde_json::Error),
    /// The script does not contain an object literal.
    #[error("expected an object literal in the macro script")]
    Script,
    /// The object literal is followed by something other than a `;` or comments.
    #[error("unexpected input after the macro object")]
    TrailingInput,
}
