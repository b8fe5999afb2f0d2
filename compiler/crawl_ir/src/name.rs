//! Interned identifier ids.
//!
//! The parser resolves every identifier (variables, parameters, function
//! names) to a dense `Name` once per parse, so scope maps at evaluation time
//! are keyed by integers instead of strings.

use std::fmt;

use rustc_hash::FxHashMap;

/// Interned identifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Create from a raw id.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get the raw id.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Name table built by a single parse.
///
/// Ids are handed out densely in first-seen order, starting at zero.
#[derive(Clone, Debug, Default)]
pub struct Interner {
    map: FxHashMap<String, Name>,
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `s`, returning the existing id if it was seen before.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let raw = u32::try_from(self.strings.len()).unwrap_or(u32::MAX);
        let name = Name(raw);
        self.strings.push(s.to_owned());
        self.map.insert(s.to_owned(), name);
        name
    }

    /// Look up an already interned string without adding it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Resolve a name back to its source text.
    ///
    /// Unknown ids resolve to `"<unknown>"`; names only come from the same
    /// parse, so this only happens when mixing tables.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings
            .get(name.index())
            .map_or("<unknown>", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests;
