//! Validation of macro names and replacement templates.
//!
//! Templates follow TeX's replacement text rules: `#1` to `#9` refer to the arguments of the
//! macro, and `##` stands for a literal `#`. Anything else following a `#` is an error.

use crate::error::{ErrorKind, InnerResult};

/// The maximum number of parameters a TeX macro can take.
pub const MAX_ARITY: u8 = 9;

/// A piece of a replacement template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken<'a> {
    /// Placeholder for the argument at the given position, starting at 1.
    Parameter(u8),
    /// Literal text. An escaped `##` is reduced to a single `#`.
    String(&'a str),
}

/// Check that `name` is a control sequence: a backslash followed by either ascii letters or a
/// single other character.
pub(crate) fn control_sequence(name: &str) -> InnerResult<()> {
    let rest = name.strip_prefix('\\').ok_or(ErrorKind::ControlSequence)?;
    let mut chars = rest.chars();
    let first = chars.next().ok_or(ErrorKind::EmptyControlSequence)?;

    if first.is_ascii_alphabetic() {
        match chars.find(|c| !c.is_ascii_alphabetic()) {
            Some(c) => Err(ErrorKind::ControlWord(c)),
            None => Ok(()),
        }
    } else if chars.next().is_some() {
        Err(ErrorKind::ControlSymbol)
    } else {
        Ok(())
    }
}

/// The arity of a parametrized macro must be in the range `1..=9`.
pub(crate) fn arity(arity: u8) -> InnerResult<()> {
    match arity {
        0 => Err(ErrorKind::ZeroArity),
        1..=MAX_ARITY => Ok(()),
        _ => Err(ErrorKind::TooManyParams),
    }
}

/// Split a template into literal text and parameter placeholders, making sure that every
/// placeholder refers to one of the `parameter_count` parameters.
pub(crate) fn parse(template: &str, parameter_count: u8) -> InnerResult<Vec<TemplateToken<'_>>> {
    let mut splits = template.split_inclusive('#').peekable();
    let mut tokens = Vec::new();

    while let Some(split) = splits.next() {
        // Consuming a trailing parameter leaves an empty split behind.
        if split.is_empty() {
            break;
        }
        tokens.push(TemplateToken::String(split));

        let next_split = match splits.peek_mut() {
            Some(next_split) => next_split,
            None if split.ends_with('#') => return Err(ErrorKind::StandaloneHashSign),
            None => break,
        };
        let first_char = next_split
            .chars()
            .next()
            .expect("split inclusive always yields at least one char per element");

        if first_char == '#' {
            // skip the next split since it only contains the second '#'
            splits.next();
        } else if first_char.is_ascii_digit() {
            let param_index = first_char as u8 - b'0';
            if param_index > parameter_count || param_index == 0 {
                return Err(ErrorKind::IncorrectReplacementParams(
                    param_index,
                    parameter_count,
                ));
            }

            let trimmed = match tokens.pop() {
                Some(TemplateToken::String(s)) => &s[..s.len() - 1],
                _ => unreachable!("a string token was pushed previously in the loop"),
            };
            if !trimmed.is_empty() {
                tokens.push(TemplateToken::String(trimmed));
            }

            tokens.push(TemplateToken::Parameter(param_index));
            // Make it so that the next split wont begin with the digit.
            *next_split = &next_split[1..];
        } else {
            return Err(ErrorKind::StandaloneHashSign);
        }
    }

    tokens.shrink_to_fit();
    Ok(tokens)
}

/// Check that each of the parameters `#1..=#arity` appears exactly once in the tokens.
pub(crate) fn placeholders(tokens: &[TemplateToken<'_>], arity: u8) -> InnerResult<()> {
    let mut uses = [0u8; MAX_ARITY as usize];
    for token in tokens {
        if let TemplateToken::Parameter(index) = token {
            let count = &mut uses[*index as usize - 1];
            if *count > 0 {
                return Err(ErrorKind::RepeatedParameter(*index));
            }
            *count += 1;
        }
    }

    match (1..=arity).find(|index| uses[*index as usize - 1] == 0) {
        Some(index) => Err(ErrorKind::MissingParameter(index)),
        None => Ok(()),
    }
}
