//! The definition of the [`MacroEntry`] enum, the expansion a macro name is mapped to.
//!
//! Entries are only data: substituting arguments into a template is left to the renderer
//! consuming the table.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
    error::InnerResult,
    template::{self, TemplateToken},
};

/// What a macro expands to.
///
/// Entries of the builtin table borrow `'static` strings, while entries loaded from outside data
/// own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub enum MacroEntry {
    /// A literal replacement string, e.g. `\mathbb{R}`.
    Simple(Cow<'static, str>),
    /// A template in which the renderer substitutes `arity` caller supplied arguments at the
    /// `#1`, `#2`, ... placeholders, e.g. `\vec{#1}`.
    Parametrized {
        template: Cow<'static, str>,
        arity: u8,
    },
}

impl MacroEntry {
    /// A simple expansion borrowing a static string.
    pub const fn simple(expansion: &'static str) -> Self {
        Self::Simple(Cow::Borrowed(expansion))
    }

    /// A parametrized expansion borrowing a static template.
    pub const fn parametrized(template: &'static str, arity: u8) -> Self {
        Self::Parametrized {
            template: Cow::Borrowed(template),
            arity,
        }
    }

    /// The replacement string, or the template of a parametrized entry.
    pub fn expansion(&self) -> &str {
        match self {
            Self::Simple(expansion) => expansion,
            Self::Parametrized { template, .. } => template,
        }
    }

    /// The number of arguments the macro takes, 0 for simple expansions.
    pub fn arity(&self) -> u8 {
        match self {
            Self::Simple(_) => 0,
            Self::Parametrized { arity, .. } => *arity,
        }
    }

    pub fn is_parametrized(&self) -> bool {
        matches!(self, Self::Parametrized { .. })
    }

    /// The literal text and placeholders making up the expansion.
    ///
    /// Entries held by a [`MacroTable`](crate::MacroTable) are always valid, so this only
    /// returns `None` for an entry constructed by hand with a malformed template.
    pub fn tokens(&self) -> Option<Vec<TemplateToken<'_>>> {
        self.validate().ok()
    }

    /// The number of placeholder tokens in the template.
    pub fn placeholders(&self) -> usize {
        self.tokens().map_or(0, |tokens| {
            tokens
                .iter()
                .filter(|t| matches!(t, TemplateToken::Parameter(_)))
                .count()
        })
    }

    /// A valid entry uses each of its parameters exactly once.
    pub(crate) fn validate(&self) -> InnerResult<Vec<TemplateToken<'_>>> {
        if let Self::Parametrized { arity, .. } = self {
            template::arity(*arity)?;
        }
        let tokens = template::parse(self.expansion(), self.arity())?;
        template::placeholders(&tokens, self.arity())?;
        Ok(tokens)
    }
}

/// Shape of an entry in a KaTeX `macros` object: either a string, or a `[template, arity]` pair.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawEntry {
    Simple(String),
    Parametrized(String, u8),
}

impl RawEntry {
    /// The entry as written, left for the caller to validate.
    pub(crate) fn into_entry(self) -> MacroEntry {
        match self {
            RawEntry::Simple(expansion) => MacroEntry::Simple(Cow::Owned(expansion)),
            RawEntry::Parametrized(template, arity) => MacroEntry::Parametrized {
                template: Cow::Owned(template),
                arity,
            },
        }
    }
}

impl TryFrom<RawEntry> for MacroEntry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let entry = raw.into_entry();
        entry.validate().map_err(|e| e.to_string())?;
        Ok(entry)
    }
}

impl From<MacroEntry> for RawEntry {
    fn from(entry: MacroEntry) -> Self {
        match entry {
            MacroEntry::Simple(expansion) => RawEntry::Simple(expansion.into_owned()),
            MacroEntry::Parametrized { template, arity } => {
                RawEntry::Parametrized(template.into_owned(), arity)
            }
        }
    }
}
