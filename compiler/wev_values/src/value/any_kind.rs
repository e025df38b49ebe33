//! "Any"-of-kind abstract values and their fallback chain.

use super::TypeFamilies;

/// Kind of an "any" value: every runtime value of that kind.
///
/// Kinds form a tree rooted at [`AnyKind::Value`]. Evaluators that have no
/// dedicated rule for a kind fall back to the rule of its [`parent`](Self::parent).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnyKind {
    /// Top of the lattice.
    Value,
    /// Any boolean, number or string.
    Scalar,
    /// Any array, object or resource.
    Compound,
    Boolean,
    Integer,
    Longint,
    Float,
    String,
    Array,
    Object,
    Resource,
}

impl AnyKind {
    /// The next more general kind, or `None` for the top.
    pub const fn parent(self) -> Option<AnyKind> {
        match self {
            AnyKind::Value => None,
            AnyKind::Scalar | AnyKind::Compound => Some(AnyKind::Value),
            AnyKind::Boolean
            | AnyKind::Integer
            | AnyKind::Longint
            | AnyKind::Float
            | AnyKind::String => Some(AnyKind::Scalar),
            AnyKind::Array | AnyKind::Object | AnyKind::Resource => Some(AnyKind::Compound),
        }
    }

    /// Whether `self` is `ancestor` or one of its descendants.
    pub fn is_a(self, ancestor: AnyKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    pub const fn name(self) -> &'static str {
        match self {
            AnyKind::Value => "any value",
            AnyKind::Scalar => "any scalar",
            AnyKind::Compound => "any compound",
            AnyKind::Boolean => "any boolean",
            AnyKind::Integer => "any integer",
            AnyKind::Longint => "any long integer",
            AnyKind::Float => "any float",
            AnyKind::String => "any string",
            AnyKind::Array => "any array",
            AnyKind::Object => "any object",
            AnyKind::Resource => "any resource",
        }
    }

    /// Runtime type families covered by the kind.
    pub fn families(self) -> TypeFamilies {
        match self {
            AnyKind::Value => TypeFamilies::all(),
            AnyKind::Scalar => TypeFamilies::SCALAR,
            AnyKind::Compound => TypeFamilies::COMPOUND,
            AnyKind::Boolean => TypeFamilies::BOOLEAN,
            AnyKind::Integer => TypeFamilies::INTEGER,
            AnyKind::Longint => TypeFamilies::LONGINT,
            AnyKind::Float => TypeFamilies::FLOAT,
            AnyKind::String => TypeFamilies::STRING,
            AnyKind::Array => TypeFamilies::ARRAY,
            AnyKind::Object => TypeFamilies::OBJECT,
            AnyKind::Resource => TypeFamilies::RESOURCE,
        }
    }
}
