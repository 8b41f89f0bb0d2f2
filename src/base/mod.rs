//! Foundation types for the generator.
//!
//! - [`SymbolId`] - Opaque identity of a symbol in the host graph
//! - [`Name`] - Cheap-to-clone identifier text
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other autonotify modules.

use std::fmt;

#[cfg(feature = "interchange")]
use serde::{Deserialize, Serialize};

pub use smol_str::SmolStr as Name;
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;

/// Identity of a symbol in a [`SymbolGraph`](crate::model::SymbolGraph).
///
/// Two symbols are the same symbol iff their ids are equal. Names are never
/// used for identity: two types called `Person` in different namespaces
/// have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(Serialize, Deserialize), serde(transparent))]
pub struct SymbolId(u32);

impl SymbolId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for SymbolId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}
