//! Binary, unary and increment/decrement operators.
//!
//! All types are `Copy` so evaluators can pass them by value.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // String
    Concat,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,

    // Comparison
    Equal,
    NotEqual,
    Identical,
    NotIdentical,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    // Logical
    And,
    Or,
    Xor,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Concat => ".",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Identical => "===",
            Self::NotIdentical => "!==",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Xor => "xor",
        }
    }

    /// `+ - * /` (modulo has its own integer semantics).
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    pub const fn is_bitwise(self) -> bool {
        matches!(
            self,
            Self::BitAnd | Self::BitOr | Self::BitXor | Self::ShiftLeft | Self::ShiftRight
        )
    }

    /// Loose comparisons (`==`, `<`, ...), not identity.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Equal
                | Self::NotEqual
                | Self::LessThan
                | Self::LessThanOrEqual
                | Self::GreaterThan
                | Self::GreaterThanOrEqual
        )
    }

    pub const fn is_identity(self) -> bool {
        matches!(self, Self::Identical | Self::NotIdentical)
    }

    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor)
    }
}

/// Unary operators and casts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Plus,
    Minus,
    LogicNegation,
    BitNegation,

    // Casts
    Int8Cast,
    Int16Cast,
    Int32Cast,
    Int64Cast,
    UInt8Cast,
    UInt16Cast,
    UInt32Cast,
    UInt64Cast,
    FloatCast,
    DoubleCast,
    StringCast,
    UnicodeCast,
    BinaryCast,
    BoolCast,
    ObjectCast,
    ArrayCast,
    UnsetCast,

    // Other
    Clone,
    Print,
    /// Error-suppression prefix; yields its operand.
    AtSign,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::LogicNegation => "!",
            Self::BitNegation => "~",
            Self::Int8Cast => "(int8)",
            Self::Int16Cast => "(int16)",
            Self::Int32Cast => "(int)",
            Self::Int64Cast => "(int64)",
            Self::UInt8Cast => "(uint8)",
            Self::UInt16Cast => "(uint16)",
            Self::UInt32Cast => "(uint32)",
            Self::UInt64Cast => "(uint64)",
            Self::FloatCast => "(float)",
            Self::DoubleCast => "(double)",
            Self::StringCast => "(string)",
            Self::UnicodeCast => "(unicode)",
            Self::BinaryCast => "(binary)",
            Self::BoolCast => "(bool)",
            Self::ObjectCast => "(object)",
            Self::ArrayCast => "(array)",
            Self::UnsetCast => "(unset)",
            Self::Clone => "clone",
            Self::Print => "print",
            Self::AtSign => "@",
        }
    }
}

/// Increment or decrement, prefix and postfix alike.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IncDecOp {
    Increment,
    Decrement,
}

impl IncDecOp {
    pub const fn is_increment(self) -> bool {
        matches!(self, Self::Increment)
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }
}
