//! Accelerator parsing and validation.
//!
//! Responsibilities:
//! - Parse GTK-style accelerator strings (`<Ctrl><Alt>t`) into modifiers and a key symbol.
//! - Decide whether an accelerator is acceptable for a custom keybinding.
//!
//! Does NOT handle:
//! - Checking that the key symbol names a real keysym (the desktop shell does that).
//! - Duplicate detection across stored records (see the `add` command).
//!
//! Invariants:
//! - Modifier names are matched case-exactly.
//! - A valid binding has at least one modifier, no repeated modifier, and a non-empty key symbol.

use std::fmt;

use thiserror::Error;

/// Reasons an accelerator string is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    /// Nothing to parse.
    #[error("binding is empty")]
    Empty,

    /// A `<` without a closing `>`.
    #[error("unterminated modifier in '{binding}'")]
    UnterminatedModifier {
        /// The offending binding
        binding: String,
    },

    /// A modifier token outside the accepted set.
    #[error("unknown modifier '<{modifier}>'")]
    UnknownModifier {
        /// Text between the angle brackets
        modifier: String,
    },

    /// The same modifier appears twice.
    #[error("modifier '<{modifier}>' appears more than once")]
    DuplicateModifier {
        /// The repeated modifier
        modifier: Modifier,
    },

    /// No modifier before the key symbol.
    #[error("binding needs at least one modifier")]
    MissingModifier,

    /// Modifiers without a key symbol after them.
    #[error("binding has no key after its modifiers")]
    MissingKey,
}

/// Keyboard modifiers understood by GSettings accelerators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Super,
    Primary,
    /// Recognized by GTK but not offered for custom keybindings.
    Meta,
}

impl Modifier {
    /// Modifiers a custom keybinding may use.
    pub const ACCEPTED: [Modifier; 5] = [
        Modifier::Ctrl,
        Modifier::Alt,
        Modifier::Shift,
        Modifier::Super,
        Modifier::Primary,
    ];

    /// The token text between the angle brackets.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ctrl => "Ctrl",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
            Self::Super => "Super",
            Self::Primary => "Primary",
            Self::Meta => "Meta",
        }
    }

    /// Look up a modifier by its exact token text.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Ctrl" => Some(Self::Ctrl),
            "Alt" => Some(Self::Alt),
            "Shift" => Some(Self::Shift),
            "Super" => Some(Self::Super),
            "Primary" => Some(Self::Primary),
            "Meta" => Some(Self::Meta),
            _ => None,
        }
    }

    /// Whether this modifier may appear in a custom keybinding.
    pub fn is_accepted(self) -> bool {
        Self::ACCEPTED.contains(&self)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A binding split into its modifiers and key symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBinding {
    /// Modifiers in the order they were written.
    pub modifiers: Vec<Modifier>,
    /// Everything after the last modifier token.
    pub key: String,
}

/// Parse an accelerator like `<Ctrl><Alt>t`.
///
/// Modifier tokens are consumed while the input continues with `<`; the first
/// other character starts the key symbol, which runs to the end of the string.
///
/// # Examples
///
/// ```
/// use gckb_store::binding::{Modifier, parse_binding};
///
/// let parsed = parse_binding("<Ctrl><Alt>t").unwrap();
/// assert_eq!(parsed.modifiers, vec![Modifier::Ctrl, Modifier::Alt]);
/// assert_eq!(parsed.key, "t");
///
/// assert!(parse_binding("<Meta>t").is_err());
/// ```
pub fn parse_binding(binding: &str) -> Result<ParsedBinding, BindingError> {
    if binding.is_empty() {
        return Err(BindingError::Empty);
    }

    let mut modifiers = Vec::new();
    let mut rest = binding;

    while let Some(after_open) = rest.strip_prefix('<') {
        let Some(close) = after_open.find('>') else {
            return Err(BindingError::UnterminatedModifier {
                binding: binding.to_string(),
            });
        };

        let token = &after_open[..close];
        let modifier = Modifier::from_token(token)
            .filter(|m| m.is_accepted())
            .ok_or_else(|| BindingError::UnknownModifier {
                modifier: token.to_string(),
            })?;

        if modifiers.contains(&modifier) {
            return Err(BindingError::DuplicateModifier { modifier });
        }
        modifiers.push(modifier);
        rest = &after_open[close + 1..];
    }

    if modifiers.is_empty() {
        return Err(BindingError::MissingModifier);
    }
    if rest.is_empty() {
        return Err(BindingError::MissingKey);
    }

    Ok(ParsedBinding {
        modifiers,
        key: rest.to_string(),
    })
}

/// Returns true if `binding` is acceptable for a custom keybinding.
pub fn is_valid_binding(binding: &str) -> bool {
    parse_binding(binding).is_ok()
}
