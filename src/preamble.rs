//! Compiles a [`MacroTable`] into LaTeX macro definitions, so that documents rendered both by
//! KaTeX and by a LaTeX engine can share the same macros.
//!
//! The output is available through [`push_preamble`] and [`write_preamble`].
use std::{
    fmt::{self, Write},
    io,
};

use tracing::debug;

use crate::{
    config::{DefinitionCommand, PreambleConfig},
    entry::MacroEntry,
    table::MacroTable,
};

struct PreambleWriter<'a, W> {
    table: &'a MacroTable,
    config: PreambleConfig,
    writer: W,
}

impl<'a, W> PreambleWriter<'a, W>
where
    W: Write,
{
    fn new(table: &'a MacroTable, config: PreambleConfig, writer: W) -> Self {
        Self {
            table,
            config,
            writer,
        }
    }

    fn write(mut self) -> fmt::Result {
        let table = self.table;
        for (name, entry) in table.entries() {
            self.definition(name, entry)?;
        }

        // Aliases come last so that `\let` always finds its target defined.
        for (alias, target) in table.aliases() {
            if self.config.alias_with_let {
                debug!(alias, target, "writing macro alias");
                writeln!(self.writer, r"\let{alias}{target}")?;
            } else if let Some(entry) = table.get(alias) {
                self.definition(alias, entry)?;
            }
        }
        Ok(())
    }

    fn definition(&mut self, name: &str, entry: &MacroEntry) -> fmt::Result {
        debug!(
            name,
            expansion = entry.expansion(),
            arity = entry.arity(),
            "writing macro definition"
        );

        let command = match self.config.command {
            DefinitionCommand::NewCommand if self.config.redefine_existing => {
                // Defines the name if LaTeX does not know it, so that the renew always succeeds.
                write!(self.writer, r"\providecommand{{{name}}}{{}}")?;
                DefinitionCommand::RenewCommand
            }
            command => command,
        };

        match (command, entry.arity()) {
            (DefinitionCommand::Def, arity) => {
                write!(self.writer, r"\def{name}")?;
                for index in 1..=arity {
                    write!(self.writer, "#{index}")?;
                }
                writeln!(self.writer, "{{{}}}", entry.expansion())
            }
            (command, 0) => writeln!(
                self.writer,
                "{}{{{name}}}{{{}}}",
                command.as_str(),
                entry.expansion()
            ),
            (command, arity) => writeln!(
                self.writer,
                "{}{{{name}}}[{arity}]{{{}}}",
                command.as_str(),
                entry.expansion()
            ),
        }
    }
}

/// Forwards formatted output to an [`io::Write`], keeping the io error which interrupted it.
struct IoWriter<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> Write for IoWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}

/// Appends the definitions of every macro in `table` to `string`, one per line.
pub fn push_preamble(
    string: &mut String,
    table: &MacroTable,
    config: PreambleConfig,
) -> fmt::Result {
    PreambleWriter::new(table, config, string).write()
}

/// Writes the definitions of every macro in `table` to `writer`, one per line.
pub fn write_preamble<W>(writer: W, table: &MacroTable, config: PreambleConfig) -> io::Result<()>
where
    W: io::Write,
{
    let mut writer = IoWriter {
        inner: writer,
        error: None,
    };
    PreambleWriter::new(table, config, &mut writer)
        .write()
        .map_err(|_| {
            writer
                .error
                .take()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "formatter error"))
        })
}

#[cfg(test)]
mod tests {
    use super::push_preamble;
    use crate::{
        config::{DefinitionCommand, PreambleConfig},
        entry::MacroEntry,
        table::MacroTable,
    };

    fn preamble(table: &MacroTable, config: PreambleConfig) -> String {
        let mut out = String::new();
        push_preamble(&mut out, table, config).unwrap();
        out
    }

    #[test]
    fn builtin() {
        assert_eq!(
            preamble(MacroTable::builtin(), Default::default()),
            r"\providecommand{\C}{}\renewcommand{\C}{\mathbb{C}}
\providecommand{\N}{}\renewcommand{\N}{\mathbb{N}}
\providecommand{\Q}{}\renewcommand{\Q}{\mathbb{Q}}
\providecommand{\R}{}\renewcommand{\R}{\mathbb{R}}
\providecommand{\Z}{}\renewcommand{\Z}{\mathbb{Z}}
\providecommand{\b}{}\renewcommand{\b}[1]{\textbf{#1}}
\providecommand{\v}{}\renewcommand{\v}[1]{\vec{#1}}
\let\bb\b
\let\vv\v
"
        );
    }

    #[test]
    fn existing_latex_commands() {
        let mut builder = MacroTable::builder();
        builder
            .define(r"\,", MacroEntry::simple(r"\thinspace"))
            .unwrap()
            .define(r"\vec", MacroEntry::parametrized(r"\mathbf{#1}", 1))
            .unwrap();
        assert_eq!(
            preamble(&builder.build(), Default::default()),
            r"\providecommand{\,}{}\renewcommand{\,}{\thinspace}
\providecommand{\vec}{}\renewcommand{\vec}[1]{\mathbf{#1}}
"
        );
    }

    #[test]
    fn new_commands_only() {
        let config = PreambleConfig {
            redefine_existing: false,
            ..Default::default()
        };
        let out = preamble(MacroTable::builtin(), config);
        assert!(out.contains(r"\newcommand{\v}[1]{\vec{#1}}"));
        assert!(!out.contains(r"\renewcommand"));
        assert!(!out.contains(r"\providecommand"));
    }

    #[test]
    fn aliases_as_definitions() {
        let config = PreambleConfig {
            redefine_existing: false,
            alias_with_let: false,
            ..Default::default()
        };
        let out = preamble(MacroTable::builtin(), config);
        assert!(!out.contains(r"\let"));
        assert!(out.ends_with(
            "\\newcommand{\\bb}[1]{\\textbf{#1}}\n\\newcommand{\\vv}[1]{\\vec{#1}}\n"
        ));
    }

    #[test]
    fn tex_def() {
        let mut builder = MacroTable::builder();
        builder
            .define(r"\R", MacroEntry::simple(r"\mathbb{R}"))
            .unwrap()
            .define(r"\pair", MacroEntry::parametrized(r"(#1, #2)", 2))
            .unwrap();
        let config = PreambleConfig {
            command: DefinitionCommand::Def,
            ..Default::default()
        };
        assert_eq!(
            preamble(&builder.build(), config),
            "\\def\\R{\\mathbb{R}}\n\\def\\pair#1#2{(#1, #2)}\n"
        );
    }

    #[test]
    fn provide_command() {
        let config = PreambleConfig {
            command: DefinitionCommand::ProvideCommand,
            ..Default::default()
        };
        let out = preamble(MacroTable::builtin(), config);
        assert!(out.contains(r"\providecommand{\b}[1]{\textbf{#1}}"));
        assert!(out.contains(r"\providecommand{\Z}{\mathbb{Z}}"));
    }

    #[test]
    fn empty_table() {
        assert_eq!(preamble(&MacroTable::default(), Default::default()), "");
    }
}
