//! The output-set contract: value factory plus snapshot access.
//!
//! The evaluator never owns storage. It mints values through the factory half
//! of [`OutputSet`] and reaches array elements and object fields through the
//! snapshot half, addressing storage locations with [`EntryPath`]s.
//!
//! Scalar and "any" constructors have default bodies because they carry no
//! identity; compound constructors and every snapshot operation must be
//! provided by the host.

use crate::{
    AnyKind, ClassName, Interval, IntervalBound, MemberIdentifier, MemoryEntry, Value,
};

/// One step from a storage location to a member of the value stored there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathStep {
    /// Array element(s).
    Index(MemberIdentifier),
    /// Object field(s).
    Field(MemberIdentifier),
}

/// Address of a snapshot entry: a root value set followed by member steps.
///
/// Paths are plain data; deriving a child path never touches the snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryPath {
    root: MemoryEntry,
    steps: Vec<PathStep>,
}

impl EntryPath {
    /// Temporary entry holding a single value.
    pub fn of_value(value: Value) -> Self {
        Self::of_entry(MemoryEntry::new(value))
    }

    /// Temporary entry holding a set of values.
    pub fn of_entry(root: MemoryEntry) -> Self {
        Self {
            root,
            steps: Vec::new(),
        }
    }

    /// The entry of the element(s) selected by `index`.
    #[must_use]
    pub fn read_index(&self, index: MemberIdentifier) -> Self {
        self.with_step(PathStep::Index(index))
    }

    /// The entry of the field(s) selected by `field`.
    #[must_use]
    pub fn read_field(&self, field: MemberIdentifier) -> Self {
        self.with_step(PathStep::Field(field))
    }

    pub fn root(&self) -> &MemoryEntry {
        &self.root
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// The path without its last step, or `None` for a root path.
    pub fn parent(&self) -> Option<(EntryPath, &PathStep)> {
        let (last, init) = self.steps.split_last()?;
        let parent = Self {
            root: self.root.clone(),
            steps: init.to_vec(),
        };
        Some((parent, last))
    }

    fn with_step(&self, step: PathStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self {
            root: self.root.clone(),
            steps,
        }
    }
}

/// Interval value for `[start, end]`, collapsing a single point to its scalar.
///
/// Bounds may come in either order. `None` if a bound is unordered (NaN).
fn interval_value<T: IntervalBound>(
    start: T,
    end: T,
    wrap: fn(Interval<T>) -> Value,
) -> Option<Value> {
    Interval::spanning(start, end).map(|interval| wrap(interval).normalized())
}

/// Per-program-point factory and store of values.
pub trait OutputSet {
    // Scalars

    fn create_bool(&self, value: bool) -> Value {
        Value::Bool(value)
    }

    fn create_int(&self, value: i32) -> Value {
        Value::Int(value)
    }

    fn create_long(&self, value: i64) -> Value {
        Value::Long(value)
    }

    fn create_double(&self, value: f64) -> Value {
        Value::Float(value)
    }

    fn create_string(&self, value: &str) -> Value {
        Value::Str(value.to_owned())
    }

    // Intervals

    fn create_integer_interval(&self, start: i32, end: i32) -> Value {
        interval_value(start, end, Value::IntInterval).unwrap_or(Value::Any(AnyKind::Integer))
    }

    fn create_longint_interval(&self, start: i64, end: i64) -> Value {
        interval_value(start, end, Value::LongInterval).unwrap_or(Value::Any(AnyKind::Longint))
    }

    /// Float interval; an unordered bound degrades to "any float".
    fn create_float_interval(&self, start: f64, end: f64) -> Value {
        interval_value(start, end, Value::FloatInterval).unwrap_or(Value::Any(AnyKind::Float))
    }

    // Abstract singletons

    fn any_value(&self) -> Value {
        Value::Any(AnyKind::Value)
    }

    fn any_boolean_value(&self) -> Value {
        Value::Any(AnyKind::Boolean)
    }

    fn any_integer_value(&self) -> Value {
        Value::Any(AnyKind::Integer)
    }

    fn any_longint_value(&self) -> Value {
        Value::Any(AnyKind::Longint)
    }

    fn any_float_value(&self) -> Value {
        Value::Any(AnyKind::Float)
    }

    fn any_string_value(&self) -> Value {
        Value::Any(AnyKind::String)
    }

    fn any_array_value(&self) -> Value {
        Value::Any(AnyKind::Array)
    }

    fn any_object_value(&self) -> Value {
        Value::Any(AnyKind::Object)
    }

    fn any_resource_value(&self) -> Value {
        Value::Any(AnyKind::Resource)
    }

    fn undefined_value(&self) -> Value {
        Value::Undefined
    }

    // Compounds (identity allocation)

    /// A new, empty array.
    fn create_array(&mut self) -> Value;

    /// A new object of `class` with no fields set.
    fn create_object(&mut self, class: &ClassName) -> Value;

    /// A new resource handle.
    fn create_resource(&mut self) -> Value;

    // Snapshot access

    /// Every value possibly stored at `entry`.
    fn read_memory(&self, entry: &EntryPath) -> MemoryEntry;

    /// Store `value` at `entry`.
    fn write_memory(&mut self, entry: &EntryPath, value: MemoryEntry);

    /// Make `entry` an alias of each of `aliases`.
    fn set_aliases(&mut self, entry: &EntryPath, aliases: &[EntryPath]);

    /// Whether `entry` refers to storage that has been written.
    fn is_defined(&self, entry: &EntryPath) -> bool;

    /// Keys of every array possibly stored at `entry`, in insertion order.
    fn iterate_indexes(&self, entry: &EntryPath) -> Vec<String>;

    /// Field names of every object possibly stored at `entry`, in insertion order.
    fn iterate_fields(&self, entry: &EntryPath) -> Vec<String>;
}
