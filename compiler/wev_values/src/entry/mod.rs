//! Sets of possible values and resolved member keys.

use std::fmt;

use smallvec::SmallVec;

use crate::errors::{empty_entry, EvalResult};
use crate::Value;

/// Every value an expression may hold at a program point.
///
/// Never empty and free of duplicates. Insertion order is kept so results are
/// deterministic; entries are small, so membership is a linear scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryEntry {
    values: SmallVec<[Value; 2]>,
}

impl MemoryEntry {
    /// An entry holding exactly one value.
    pub fn new(value: Value) -> Self {
        let mut values = SmallVec::new();
        values.push(value);
        Self { values }
    }

    /// Build an entry from possible values, or `None` if there are none.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Option<Self> {
        let mut iter = values.into_iter();
        let mut entry = Self::new(iter.next()?);
        for value in iter {
            entry.insert(value);
        }
        Some(entry)
    }

    /// Like [`from_values`](Self::from_values), failing with `EmptyEntry`.
    pub fn try_from_values(values: impl IntoIterator<Item = Value>) -> EvalResult<Self> {
        Self::from_values(values).ok_or_else(empty_entry)
    }

    /// Add a possible value. Returns `false` if it was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Add every value of `other`.
    pub fn union(&mut self, other: &MemoryEntry) {
        for value in other {
            self.insert(value.clone());
        }
    }

    /// Number of distinct possible values (at least one).
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// The only possible value, if there is exactly one.
    pub fn as_single(&self) -> Option<&Value> {
        match self.values.as_slice() {
            [value] => Some(value),
            _ => None,
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }
}

impl From<Value> for MemoryEntry {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl<'a> IntoIterator for &'a MemoryEntry {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for MemoryEntry {
    type Item = Value;
    type IntoIter = smallvec::IntoIter<[Value; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl fmt::Display for MemoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

/// Resolved keys of an array index or object field access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemberIdentifier {
    /// A finite set of concrete keys; the access is always concrete.
    Names(Vec<String>),
    /// The keys could not be determined; any member may be touched.
    Any,
}

impl MemberIdentifier {
    /// A set of concrete keys, deduplicated in first-seen order.
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        MemberIdentifier::Names(unique)
    }

    pub fn single(name: impl Into<String>) -> Self {
        MemberIdentifier::Names(vec![name.into()])
    }

    pub fn is_any(&self) -> bool {
        matches!(self, MemberIdentifier::Any)
    }

    pub fn is_always_concrete(&self) -> bool {
        !self.is_any()
    }

    /// The concrete keys; empty for [`MemberIdentifier::Any`].
    pub fn member_names(&self) -> &[String] {
        match self {
            MemberIdentifier::Names(names) => names,
            MemberIdentifier::Any => &[],
        }
    }

    /// Whether an access through this identifier may touch `name`.
    pub fn may_touch(&self, name: &str) -> bool {
        match self {
            MemberIdentifier::Names(names) => names.iter().any(|n| n == name),
            MemberIdentifier::Any => true,
        }
    }
}

impl fmt::Display for MemberIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberIdentifier::Names(names) => write!(f, "[{}]", names.join(", ")),
            MemberIdentifier::Any => f.write_str("[?]"),
        }
    }
}

#[cfg(test)]
mod tests;
