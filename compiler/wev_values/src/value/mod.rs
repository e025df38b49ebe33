//! Abstract values of the analysis.
//!
//! A `Value` is one element of the lattice: a concrete scalar or compound, a
//! bounded numeric interval, or an "any" value standing for every value of a
//! kind. Values are immutable. Compound values (arrays, objects, resources)
//! carry only an identity; their contents live in the output set and are
//! reached through the snapshot contract in [`crate::OutputSet`].
//!
//! # Equality
//!
//! Values compare structurally, with floats compared by bit pattern so that
//! `NaN` deduplicates inside a [`crate::MemoryEntry`] and `0.0`/`-0.0` stay
//! distinct (they stringify differently).

mod any_kind;
mod families;
mod interval;

use std::fmt;
use std::hash::{Hash, Hasher};

pub use any_kind::AnyKind;
pub use families::TypeFamilies;
pub use interval::{Interval, IntervalBound};

macro_rules! define_identity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw identity allocated by an output set.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// The raw identity.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_identity!(
    /// Identity of an associative array owned by an output set.
    ArrayId
);
define_identity!(
    /// Identity of an object owned by an output set.
    ObjectId
);
define_identity!(
    /// Identity of a resource handle.
    ResourceId
);

/// Resolved name of a class.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    /// Name of the built-in class used by object casts.
    pub const STD_CLASS: &'static str = "stdClass";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The built-in `stdClass`.
    pub fn std_class() -> Self {
        Self(Self::STD_CLASS.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An object identity together with its resolved class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    pub id: ObjectId,
    pub class: ClassName,
}

/// An abstract value.
#[derive(Clone, Debug)]
pub enum Value {
    // Concrete scalars
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer value.
    Int(i32),
    /// 64-bit integer value.
    Long(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Str(String),

    // Concrete compounds (identities resolved through the snapshot)
    /// Associative array.
    Array(ArrayId),
    /// Object instance.
    Object(ObjectRef),
    /// Resource handle.
    Resource(ResourceId),

    /// The null value.
    Undefined,

    // Bounded abstractions
    /// Every integer in `[start, end]`.
    IntInterval(Interval<i32>),
    /// Every long integer in `[start, end]`.
    LongInterval(Interval<i64>),
    /// Every float in `[start, end]`.
    FloatInterval(Interval<f64>),

    /// Every value of a kind.
    Any(AnyKind),

    // Analysis markers, never valid inside an expression
    /// A named function.
    Function(String),
    /// An anonymous function, by declaration index.
    LambdaFunction(u32),
    /// A class used as a value (for example in `instanceof`).
    Type(ClassName),
    /// Analysis-internal marker with a free-form tag.
    Special(String),
}

impl Value {
    /// Whether the value is a single concrete runtime value.
    pub fn is_concrete(&self) -> bool {
        matches!(
            self,
            Value::Bool(_)
                | Value::Int(_)
                | Value::Long(_)
                | Value::Float(_)
                | Value::Str(_)
                | Value::Array(_)
                | Value::Object(_)
                | Value::Resource(_)
                | Value::Undefined
        )
    }

    /// Whether the value stands for more than one runtime value.
    pub fn is_abstract(&self) -> bool {
        matches!(
            self,
            Value::IntInterval(_)
                | Value::LongInterval(_)
                | Value::FloatInterval(_)
                | Value::Any(_)
        )
    }

    /// Whether the value is an analysis marker rather than data.
    pub fn is_non_data(&self) -> bool {
        matches!(
            self,
            Value::Function(_) | Value::LambdaFunction(_) | Value::Type(_) | Value::Special(_)
        )
    }

    /// Rewrite a degenerate interval to the scalar it denotes.
    ///
    /// Every other value is returned unchanged. Evaluators call this before
    /// dispatching so `[3, 3]` behaves exactly like `3`.
    #[must_use]
    pub fn normalized(self) -> Value {
        match self {
            Value::IntInterval(interval) if interval.is_degenerate() => {
                Value::Int(interval.start())
            }
            Value::LongInterval(interval) if interval.is_degenerate() => {
                Value::Long(interval.start())
            }
            Value::FloatInterval(interval) if interval.is_degenerate() => {
                Value::Float(interval.start())
            }
            other => other,
        }
    }

    /// Runtime type families this value may belong to.
    pub fn families(&self) -> TypeFamilies {
        match self {
            Value::Bool(_) => TypeFamilies::BOOLEAN,
            Value::Int(_) | Value::IntInterval(_) => TypeFamilies::INTEGER,
            Value::Long(_) | Value::LongInterval(_) => TypeFamilies::LONGINT,
            Value::Float(_) | Value::FloatInterval(_) => TypeFamilies::FLOAT,
            Value::Str(_) => TypeFamilies::STRING,
            Value::Array(_) => TypeFamilies::ARRAY,
            Value::Object(_) => TypeFamilies::OBJECT,
            Value::Resource(_) => TypeFamilies::RESOURCE,
            Value::Undefined => TypeFamilies::NULL,
            Value::Any(kind) => kind.families(),
            Value::Function(_)
            | Value::LambdaFunction(_)
            | Value::Type(_)
            | Value::Special(_) => TypeFamilies::empty(),
        }
    }

    /// Whether the value may be an array.
    pub fn may_be_array(&self) -> bool {
        self.families().contains(TypeFamilies::ARRAY)
    }

    /// Whether the value is certainly an array.
    pub fn is_array_like(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Any(AnyKind::Array))
    }

    /// Whether the value is certainly an object.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Any(AnyKind::Object))
    }

    /// Whether the value involves 64-bit integers.
    pub fn is_long_like(&self) -> bool {
        matches!(
            self,
            Value::Long(_) | Value::LongInterval(_) | Value::Any(AnyKind::Longint)
        )
    }

    /// Human-readable kind name used in diagnostics and errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Long(_) => "long integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Resource(_) => "resource",
            Value::Undefined => "null",
            Value::IntInterval(_) => "integer interval",
            Value::LongInterval(_) => "long integer interval",
            Value::FloatInterval(_) => "float interval",
            Value::Any(kind) => kind.name(),
            Value::Function(_) => "function",
            Value::LambdaFunction(_) => "lambda function",
            Value::Type(_) => "type",
            Value::Special(_) => "special value",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) | (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Special(a), Value::Special(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Resource(a), Value::Resource(b)) => a == b,
            (Value::Undefined, Value::Undefined) => true,
            (Value::IntInterval(a), Value::IntInterval(b)) => a == b,
            (Value::LongInterval(a), Value::LongInterval(b)) => a == b,
            (Value::FloatInterval(a), Value::FloatInterval(b)) => {
                a.start().to_bits() == b.start().to_bits() && a.end().to_bits() == b.end().to_bits()
            }
            (Value::Any(a), Value::Any(b)) => a == b,
            (Value::LambdaFunction(a), Value::LambdaFunction(b)) => a == b,
            (Value::Type(a), Value::Type(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Long(n) => n.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Str(s) | Value::Function(s) | Value::Special(s) => s.hash(state),
            Value::Array(id) => id.hash(state),
            Value::Object(object) => object.hash(state),
            Value::Resource(id) => id.hash(state),
            Value::Undefined => {}
            Value::IntInterval(interval) => {
                interval.start().hash(state);
                interval.end().hash(state);
            }
            Value::LongInterval(interval) => {
                interval.start().hash(state);
                interval.end().hash(state);
            }
            Value::FloatInterval(interval) => {
                interval.start().to_bits().hash(state);
                interval.end().to_bits().hash(state);
            }
            Value::Any(kind) => kind.hash(state),
            Value::LambdaFunction(index) => index.hash(state),
            Value::Type(class) => class.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}L"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Array(id) => write!(f, "array#{}", id.raw()),
            Value::Object(object) => write!(f, "{}#{}", object.class, object.id.raw()),
            Value::Resource(id) => write!(f, "resource#{}", id.raw()),
            Value::Undefined => write!(f, "null"),
            Value::IntInterval(interval) => write!(f, "int{interval}"),
            Value::LongInterval(interval) => write!(f, "long{interval}"),
            Value::FloatInterval(interval) => write!(f, "float{interval}"),
            Value::Any(kind) => write!(f, "{}", kind.name()),
            Value::Function(name) => write!(f, "function {name}"),
            Value::LambdaFunction(index) => write!(f, "lambda#{index}"),
            Value::Type(class) => write!(f, "type {class}"),
            Value::Special(tag) => write!(f, "special {tag}"),
        }
    }
}

#[cfg(test)]
mod tests;
