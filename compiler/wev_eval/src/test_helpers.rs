//! Test helpers for evaluator unit tests.
//!
//! Provides `Harness`, which owns an in-memory output set and a warning
//! buffer and hands out evaluation contexts borrowing them.

#![allow(clippy::unwrap_used)]

use wev_values::{
    AnalysisWarning, EntryPath, MemberIdentifier, MemoryEntry, MemoryOutputSet, OutputSet, Value,
    WarningCause,
};

use crate::{EvalContext, EvalOptions};

/// Output set, warning buffer and options for one test.
pub struct Harness {
    pub outset: MemoryOutputSet,
    pub warnings: Vec<AnalysisWarning>,
    options: EvalOptions,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_options(EvalOptions::default())
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Harness {
            outset: MemoryOutputSet::new(),
            warnings: Vec::new(),
            options,
        }
    }

    /// A context borrowing this harness.
    pub fn ctx(&mut self) -> EvalContext<'_> {
        EvalContext::new(&mut self.outset, &mut self.warnings).with_options(self.options)
    }

    /// Causes of the warnings reported so far, in order.
    pub fn causes(&self) -> Vec<WarningCause> {
        self.warnings.iter().map(|w| w.cause).collect()
    }

    /// A new array holding `elements` in order.
    pub fn array(&mut self, elements: &[(&str, Value)]) -> Value {
        let array = self.outset.create_array();
        let root = EntryPath::of_value(array.clone());
        for (key, value) in elements {
            self.outset.write_memory(
                &root.read_index(MemberIdentifier::single(*key)),
                MemoryEntry::new(value.clone()),
            );
        }
        array
    }

    /// Values stored under `key` of the array or object `container`.
    pub fn member(&self, container: &Value, key: &str) -> MemoryEntry {
        let root = EntryPath::of_value(container.clone());
        let path = match container {
            Value::Object(_) => root.read_field(MemberIdentifier::single(key)),
            _ => root.read_index(MemberIdentifier::single(key)),
        };
        self.outset.read_memory(&path)
    }
}

/// Entry holding `values`; panics if empty.
pub fn entry(values: impl IntoIterator<Item = Value>) -> MemoryEntry {
    MemoryEntry::from_values(values).unwrap()
}
