//! String conversion of entries and concatenation.
//!
//! Concatenation stringifies both sides independently of numeric semantics.
//! It never fails on data values: anything without a definite string form
//! (objects, intervals, "any" values) contributes "any string".

use wev_values::{EvalResult, MemoryEntry, Value};

use crate::conversion::to_string;
use crate::EvalContext;

/// Possible strings of an entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryStrings {
    /// Distinct concrete strings, in first-seen order.
    pub strings: Vec<String>,
    /// Whether some member has no definite string form.
    pub has_unknown: bool,
}

impl EntryStrings {
    pub fn is_always_concrete(&self) -> bool {
        !self.has_unknown
    }
}

/// String value of `value`: concrete, or "any string".
pub fn evaluate_to_string(ctx: &EvalContext<'_>, value: &Value) -> EvalResult {
    Ok(match to_string(value)? {
        Some(text) => ctx.snapshot().create_string(&text),
        None => ctx.snapshot().any_string_value(),
    })
}

/// Collect the string forms of every member of `entry`.
pub fn entry_strings(entry: &MemoryEntry) -> EvalResult<EntryStrings> {
    let mut result = EntryStrings::default();
    for value in entry {
        match to_string(value)? {
            Some(text) => {
                if !result.strings.contains(&text) {
                    result.strings.push(text);
                }
            }
            None => result.has_unknown = true,
        }
    }
    Ok(result)
}

/// String values of every member of `entry`.
pub fn evaluate_entry_to_string(ctx: &EvalContext<'_>, entry: &MemoryEntry) -> EvalResult<MemoryEntry> {
    let strings = entry_strings(entry)?;
    let outset = ctx.snapshot();
    let mut values: Vec<Value> = strings.strings.iter().map(|s| outset.create_string(s)).collect();
    if strings.has_unknown {
        values.push(outset.any_string_value());
    }
    MemoryEntry::try_from_values(values)
}

/// `left . right` on single values.
pub fn concat_values(ctx: &EvalContext<'_>, left: &Value, right: &Value) -> EvalResult {
    Ok(match (to_string(left)?, to_string(right)?) {
        (Some(mut l), Some(r)) => {
            l.push_str(&r);
            ctx.snapshot().create_string(&l)
        }
        _ => ctx.snapshot().any_string_value(),
    })
}

/// `left . right` over every pair of possible values.
pub fn concat_entries(
    ctx: &EvalContext<'_>,
    left: &MemoryEntry,
    right: &MemoryEntry,
) -> EvalResult<MemoryEntry> {
    let left = entry_strings(left)?;
    let right = entry_strings(right)?;
    let outset = ctx.snapshot();

    let mut values = Vec::new();
    for l in &left.strings {
        for r in &right.strings {
            values.push(outset.create_string(&format!("{l}{r}")));
        }
    }
    if left.has_unknown || right.has_unknown {
        values.push(outset.any_string_value());
    }
    MemoryEntry::try_from_values(values)
}
