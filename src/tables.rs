//! Static data: the builtin macro definitions and their aliases.

use crate::entry::MacroEntry;

/// The canonical builtin definitions.
pub static BUILTIN_MACROS: &[(&str, MacroEntry)] = &[
    (r"\R", MacroEntry::simple(r"\mathbb{R}")),
    (r"\C", MacroEntry::simple(r"\mathbb{C}")),
    (r"\Q", MacroEntry::simple(r"\mathbb{Q}")),
    (r"\Z", MacroEntry::simple(r"\mathbb{Z}")),
    (r"\N", MacroEntry::simple(r"\mathbb{N}")),
    (r"\v", MacroEntry::parametrized(r"\vec{#1}", 1)),
    (r"\b", MacroEntry::parametrized(r"\textbf{#1}", 1)),
];

/// Alternative names of builtin definitions, as `(alias, target)` pairs.
pub static BUILTIN_ALIASES: &[(&str, &str)] = &[(r"\vv", r"\v"), (r"\bb", r"\b")];
