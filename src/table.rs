//! The [`MacroTable`], an immutable mapping from macro names to their [`MacroEntry`].
//!
//! The builtin table is available through [`MacroTable::builtin`]. Other tables are assembled
//! with a [`MacroTableBuilder`], or loaded through the [`format`](crate::format) module.

use std::{borrow::Cow, collections::BTreeMap, fmt, sync::OnceLock};

use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use tracing::debug;

use crate::{
    entry::{MacroEntry, RawEntry},
    error::{ErrorKind, MacroError},
    tables::{BUILTIN_ALIASES, BUILTIN_MACROS},
    template,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Definition {
    Entry(MacroEntry),
    /// Name of the entry this alias resolves to. Never the name of another alias.
    Alias(Cow<'static, str>),
}

/// A fixed mapping from macro names to expansions.
///
/// A table never changes once built: it exposes lookups and enumeration only, and can be shared
/// freely between threads.
///
/// Two tables compare equal when they resolve the same names to the same entries, regardless of
/// which of those names are aliases.
#[derive(Debug, Clone, Default)]
pub struct MacroTable {
    definitions: BTreeMap<Cow<'static, str>, Definition>,
}

impl MacroTable {
    /// The canonical builtin table.
    ///
    /// It defines `\R`, `\C`, `\Q`, `\Z` and `\N` as the blackboard bold number sets, `\v` as
    /// `\vec{#1}` and `\b` as `\textbf{#1}`. `\vv` and `\bb` are aliases of `\v` and `\b`.
    pub fn builtin() -> &'static MacroTable {
        static BUILTIN: OnceLock<MacroTable> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut builder = MacroTableBuilder::new();
            for (name, entry) in BUILTIN_MACROS {
                builder
                    .define(*name, entry.clone())
                    .expect("builtin macros are well formed");
            }
            for (alias, target) in BUILTIN_ALIASES {
                builder
                    .alias(*alias, target)
                    .expect("builtin aliases point to builtin macros");
            }
            let table = builder.build();
            debug!(
                entries = table.entries().count(),
                aliases = table.aliases().count(),
                "builtin macro table initialized"
            );
            table
        })
    }

    pub fn builder() -> MacroTableBuilder {
        MacroTableBuilder::new()
    }

    /// Look up a macro by its exact name, backslash included. Aliases are resolved.
    pub fn get(&self, name: &str) -> Option<&MacroEntry> {
        match self.definitions.get(name)? {
            Definition::Entry(entry) => Some(entry),
            Definition::Alias(target) => match self.definitions.get(&**target)? {
                Definition::Entry(entry) => Some(entry),
                Definition::Alias(_) => unreachable!("aliases always resolve to an entry"),
            },
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// The number of names in the table, aliases included.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Every name of the table with the entry it resolves to, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MacroEntry)> + '_ {
        self.definitions
            .keys()
            .filter_map(|name| Some((&**name, self.get(name)?)))
    }

    /// The entries defined under their canonical name, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MacroEntry)> + '_ {
        self.definitions
            .iter()
            .filter_map(|(name, definition)| match definition {
                Definition::Entry(entry) => Some((&**name, entry)),
                Definition::Alias(_) => None,
            })
    }

    /// The aliases of the table as `(alias, target)` pairs, sorted by alias.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.definitions
            .iter()
            .filter_map(|(name, definition)| match definition {
                Definition::Alias(target) => Some((&**name, &**target)),
                Definition::Entry(_) => None,
            })
    }
}

impl PartialEq for MacroTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, entry)| other.get(name) == Some(entry))
    }
}

impl Eq for MacroTable {}

impl<'a> IntoIterator for &'a MacroTable {
    type Item = (&'a str, &'a MacroEntry);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Assembles a [`MacroTable`], checking every definition on the way in.
///
/// - Names must be control sequences (`\R`, `\textbf`, `\,`).
/// - Templates must only refer to parameters in the range `#1..=#arity`.
/// - A name can only be defined once, be it as a macro or as an alias.
#[derive(Debug, Default)]
pub struct MacroTableBuilder {
    definitions: BTreeMap<Cow<'static, str>, Definition>,
}

impl MacroTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new macro.
    pub fn define(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        entry: MacroEntry,
    ) -> Result<&mut Self, MacroError> {
        let name = name.into();
        self.check_name(&name)?;
        entry.validate().map_err(|e| MacroError::new(e, &name))?;

        self.definitions.insert(name, Definition::Entry(entry));
        Ok(self)
    }

    /// Make `name` resolve to the entry of the already defined `target`.
    ///
    /// If `target` is itself an alias, the new alias points to the entry behind it.
    pub fn alias(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        target: &str,
    ) -> Result<&mut Self, MacroError> {
        let name = name.into();
        self.check_name(&name)?;

        let target = match self.definitions.get_key_value(target) {
            Some((key, Definition::Entry(_))) => key.clone(),
            Some((_, Definition::Alias(resolved))) => resolved.clone(),
            None => {
                return Err(MacroError::new(
                    ErrorKind::AliasTarget(target.into()),
                    &name,
                ))
            }
        };

        self.definitions.insert(name, Definition::Alias(target));
        Ok(self)
    }

    pub fn build(self) -> MacroTable {
        MacroTable {
            definitions: self.definitions,
        }
    }

    fn check_name(&self, name: &str) -> Result<(), MacroError> {
        template::control_sequence(name).map_err(|e| MacroError::new(e, name))?;
        if self.definitions.contains_key(name) {
            return Err(MacroError::new(ErrorKind::MacroAlreadyDefined, name));
        }
        Ok(())
    }
}

impl Serialize for MacroTable {
    /// Aliases are written as copies of their target, since KaTeX has no notion of them.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for MacroTable {
    /// Duplicate names are rejected instead of overwriting the first definition.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = MacroTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object mapping macro names to expansions")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut builder = MacroTableBuilder::new();
                // Entries are validated by the builder, so that errors name the macro.
                while let Some((name, raw)) = map.next_entry::<String, RawEntry>()? {
                    builder
                        .define(name, raw.into_entry())
                        .map_err(de::Error::custom)?;
                }
                Ok(builder.build())
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
