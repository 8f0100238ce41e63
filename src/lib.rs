//! This crate provides a [`MacroTable`], a fixed mapping from `LaTeX` macro names to their
//! expansions, meant to be handed to a math renderer such as KaTeX at startup.
//!
//! The crate does not expand macros itself. It supplies the rule set, which can be exchanged
//! through the JSON and script formats of the [`format`] module, or compiled into `LaTeX`
//! definitions through [`push_preamble`] and [`write_preamble`].
//!
//! ```
//! use katex_macros::{MacroEntry, MacroTable};
//!
//! let table = MacroTable::builtin();
//! assert_eq!(table.get(r"\R"), Some(&MacroEntry::simple(r"\mathbb{R}")));
//! assert_eq!(table.get(r"\vv").map(MacroEntry::arity), Some(1));
//! assert_eq!(table.get(r"\X"), None);
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod format;
pub mod preamble;
pub mod table;
pub mod tables;
pub mod template;

#[doc(inline)]
pub use config::PreambleConfig;
#[doc(inline)]
pub use entry::MacroEntry;
#[doc(inline)]
pub use error::{LoadError, MacroError};
#[doc(inline)]
pub use preamble::{push_preamble, write_preamble};
#[doc(inline)]
pub use table::{MacroTable, MacroTableBuilder};
