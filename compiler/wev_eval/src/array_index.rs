//! Array indexes and array-literal keys.
//!
//! Every candidate index value resolves to a concrete key (integer or
//! string), an unknown key, or an illegal one. Illegal keys are warned about
//! and skipped. Flags summarise the whole entry; array literals use them to
//! track the implicit "next index" counter.

use bitflags::bitflags;
use std::fmt;

use wev_values::{
    invalid_expression_value, AnyKind, EntryPath, EvalResult, MemberIdentifier, MemoryEntry,
    TypeFamilies, Value, WarningCause,
};

use crate::conversion::{float_to_integer, long_to_integer};
use crate::EvalContext;

bitflags! {
    /// Properties that hold for every candidate of an index entry.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct IndexFlags: u8 {
        /// No candidate resolved to an unknown key.
        const ALWAYS_CONCRETE = 1 << 0;
        /// Every candidate is an integer key.
        const ALWAYS_INTEGER = 1 << 1;
        /// No candidate is an illegal key.
        const ALWAYS_LEGAL = 1 << 2;
    }
}

/// A concrete array key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexKey {
    Integer(i32),
    String(String),
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKey::Integer(n) => write!(f, "{n}"),
            IndexKey::String(s) => f.write_str(s),
        }
    }
}

/// An index entry after classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexClassification {
    /// Concrete keys, deduplicated by their string form.
    pub keys: Vec<IndexKey>,
    pub flags: IndexFlags,
}

impl IndexClassification {
    pub fn is_always_concrete(&self) -> bool {
        self.flags.contains(IndexFlags::ALWAYS_CONCRETE)
    }

    pub fn is_always_integer(&self) -> bool {
        self.flags.contains(IndexFlags::ALWAYS_INTEGER)
    }

    pub fn is_always_legal(&self) -> bool {
        self.flags.contains(IndexFlags::ALWAYS_LEGAL)
    }

    /// Integer keys, in first-seen order.
    pub fn integer_keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.keys.iter().filter_map(|key| match key {
            IndexKey::Integer(n) => Some(*n),
            IndexKey::String(_) => None,
        })
    }

    /// The member identifier addressed by the entry.
    pub fn identifier(&self) -> MemberIdentifier {
        if self.is_always_concrete() {
            MemberIdentifier::names(self.keys.iter().map(ToString::to_string))
        } else {
            MemberIdentifier::Any
        }
    }

    fn add_key(&mut self, key: IndexKey) {
        let name = key.to_string();
        if !self.keys.iter().any(|k| k.to_string() == name) {
            self.keys.push(key);
        }
    }
}

enum Candidate {
    Key(IndexKey),
    Unknown { integer: bool, maybe_illegal: bool },
    Illegal,
}

/// `"0"` and `-?[1-9][0-9]*` strings that fit in 32 bits.
fn canonical_integer(text: &str) -> Option<i32> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let canonical = match digits.as_bytes() {
        [b'0'] => digits.len() == text.len(),
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if canonical {
        text.parse().ok()
    } else {
        None
    }
}

fn classify(ctx: &EvalContext<'_>, value: &Value) -> EvalResult<Candidate> {
    let integer = |n: Option<i32>| match n {
        Some(n) => Candidate::Key(IndexKey::Integer(n)),
        None => Candidate::Unknown {
            integer: true,
            maybe_illegal: false,
        },
    };
    Ok(match value {
        Value::Bool(b) => Candidate::Key(IndexKey::Integer(i32::from(*b))),
        Value::Int(n) => Candidate::Key(IndexKey::Integer(*n)),
        Value::Long(n) => integer(long_to_integer(*n)),
        Value::Float(x) => integer(float_to_integer(*x)),
        Value::Resource(id) => integer(i32::try_from(id.raw()).ok()),
        Value::Str(s) => match canonical_integer(s) {
            Some(n) if ctx.options().canonical_integer_keys() => {
                Candidate::Key(IndexKey::Integer(n))
            }
            _ => Candidate::Key(IndexKey::String(s.clone())),
        },
        Value::Undefined => Candidate::Key(IndexKey::String(String::new())),
        Value::Array(_)
        | Value::Object(_)
        | Value::Any(AnyKind::Array | AnyKind::Object | AnyKind::Compound) => Candidate::Illegal,
        Value::IntInterval(_)
        | Value::LongInterval(_)
        | Value::FloatInterval(_)
        | Value::Any(
            AnyKind::Boolean
            | AnyKind::Integer
            | AnyKind::Longint
            | AnyKind::Float
            | AnyKind::Resource,
        ) => integer(None),
        Value::Any(kind) => Candidate::Unknown {
            integer: false,
            maybe_illegal: kind
                .families()
                .intersects(TypeFamilies::ARRAY | TypeFamilies::OBJECT),
        },
        Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_) => {
            return Err(invalid_expression_value(value));
        }
    })
}

/// Classify every candidate of an index entry.
#[tracing::instrument(level = "trace", skip(ctx))]
pub fn evaluate_index_entry(
    ctx: &mut EvalContext<'_>,
    entry: &MemoryEntry,
) -> EvalResult<IndexClassification> {
    classify_entry(ctx, entry, "Illegal offset type")
}

/// `illegal` is the warning reported for each illegal candidate.
fn classify_entry(
    ctx: &mut EvalContext<'_>,
    entry: &MemoryEntry,
    illegal: &str,
) -> EvalResult<IndexClassification> {
    let mut result = IndexClassification {
        keys: Vec::with_capacity(entry.count()),
        flags: IndexFlags::all(),
    };
    for value in entry {
        match classify(ctx, value)? {
            Candidate::Key(key) => {
                if matches!(key, IndexKey::String(_)) {
                    result.flags.remove(IndexFlags::ALWAYS_INTEGER);
                }
                result.add_key(key);
            }
            Candidate::Unknown {
                integer,
                maybe_illegal,
            } => {
                result.flags.remove(IndexFlags::ALWAYS_CONCRETE);
                if !integer {
                    result.flags.remove(IndexFlags::ALWAYS_INTEGER);
                }
                if maybe_illegal {
                    result.flags.remove(IndexFlags::ALWAYS_LEGAL);
                }
            }
            Candidate::Illegal => {
                result
                    .flags
                    .remove(IndexFlags::ALWAYS_LEGAL | IndexFlags::ALWAYS_INTEGER);
                ctx.warn(illegal, WarningCause::IllegalOffsetType);
            }
        }
    }
    Ok(result)
}

/// Member identifier for an index entry.
pub fn evaluate_to_identifiers(
    ctx: &mut EvalContext<'_>,
    entry: &MemoryEntry,
) -> EvalResult<MemberIdentifier> {
    evaluate_index_entry(ctx, entry).map(|class| class.identifier())
}

const ILLEGAL_IN_LITERAL: &str = "Possible illegal offset type in array initialization";

/// Keys of the items of an array literal, explicit or implicit.
///
/// `items[i]` is the key entry of item `i`, `None` when the item has no key.
/// The implicit counter starts at `{0}` and is `None` once it is unknown.
/// An item with no possible key gets an empty identifier.
#[tracing::instrument(level = "trace", skip(ctx))]
pub fn implicit_array_keys(
    ctx: &mut EvalContext<'_>,
    items: &[Option<MemoryEntry>],
) -> EvalResult<Vec<MemberIdentifier>> {
    let mut counter: Option<Vec<i32>> = Some(vec![0]);
    let mut keys = Vec::with_capacity(items.len());

    for item in items {
        match item {
            Some(entry) => {
                let class = classify_entry(ctx, entry, ILLEGAL_IN_LITERAL)?;
                counter = match counter {
                    Some(current) if class.is_always_concrete() => {
                        let next = successors(&current, class.integer_keys());
                        if class.is_always_integer() {
                            Some(next)
                        } else {
                            Some(union(current, next))
                        }
                    }
                    _ => None,
                };
                keys.push(class.identifier());
            }
            None => {
                let identifier = match counter.as_deref() {
                    None => MemberIdentifier::Any,
                    Some([]) => {
                        ctx.warn(ILLEGAL_IN_LITERAL, WarningCause::IllegalOffsetType);
                        MemberIdentifier::Names(Vec::new())
                    }
                    Some(current) => {
                        MemberIdentifier::names(current.iter().map(ToString::to_string))
                    }
                };
                if let Some(current) = &mut counter {
                    *current = current.iter().filter_map(|c| c.checked_add(1)).collect();
                }
                keys.push(identifier);
            }
        }
    }
    Ok(keys)
}

/// `{max(c, k + 1)}` over every counter value `c` and integer key `k`.
fn successors(counter: &[i32], keys: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut next = Vec::new();
    for key in keys {
        let Some(after) = key.checked_add(1) else {
            continue;
        };
        for &c in counter {
            let candidate = c.max(after);
            if !next.contains(&candidate) {
                next.push(candidate);
            }
        }
    }
    next
}

fn union(mut left: Vec<i32>, right: Vec<i32>) -> Vec<i32> {
    for value in right {
        if !left.contains(&value) {
            left.push(value);
        }
    }
    left
}

/// Build an array literal: `items` pairs an optional key entry with the
/// stored values.
pub fn evaluate_array_literal(
    ctx: &mut EvalContext<'_>,
    items: &[(Option<MemoryEntry>, MemoryEntry)],
) -> EvalResult {
    let key_entries: Vec<Option<MemoryEntry>> =
        items.iter().map(|(key, _)| key.clone()).collect();
    let keys = implicit_array_keys(ctx, &key_entries)?;

    let array = ctx.outset().create_array();
    let root = EntryPath::of_value(array.clone());
    for (key, (_, values)) in keys.into_iter().zip(items) {
        if key.member_names().is_empty() && !key.is_any() {
            continue;
        }
        ctx.outset().write_memory(&root.read_index(key), values.clone());
    }
    Ok(array)
}
