//! Configuration options for the LaTeX [`preamble`](crate::preamble) writer.

/// The command used to write each macro definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DefinitionCommand {
    /// `\newcommand{\v}[1]{\vec{#1}}`, which fails if the macro already exists.
    #[default]
    NewCommand,
    /// `\renewcommand{\v}[1]{\vec{#1}}`, which fails if the macro does not exist.
    RenewCommand,
    /// `\providecommand{\v}[1]{\vec{#1}}`, which keeps an existing definition.
    ProvideCommand,
    /// The TeX primitive, `\def\v#1{\vec{#1}}`, which silently overwrites.
    Def,
}

impl DefinitionCommand {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::NewCommand => r"\newcommand",
            Self::RenewCommand => r"\renewcommand",
            Self::ProvideCommand => r"\providecommand",
            Self::Def => r"\def",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreambleConfig {
    /// The command used for definitions. (default: [`DefinitionCommand::NewCommand`])
    pub command: DefinitionCommand,
    /// If true and `command` is [`DefinitionCommand::NewCommand`], each definition is written as
    /// `\providecommand{\v}{}\renewcommand{\v}[1]{\vec{#1}}`, so that the preamble compiles
    /// whether or not LaTeX already defines the name. (default: true)
    pub redefine_existing: bool,
    /// If true, aliases are written as `\let\vv\v` after every definition. If false, they are
    /// written as a full definition of their own. (default: true)
    pub alias_with_let: bool,
}

impl Default for PreambleConfig {
    fn default() -> Self {
        Self {
            command: DefinitionCommand::NewCommand,
            redefine_existing: true,
            alias_with_let: true,
        }
    }
}
