//! Runtime type families.

use bitflags::bitflags;

bitflags! {
    /// Set of runtime types a value may have at run time.
    ///
    /// Used to decide identity comparisons (`===` between disjoint families is
    /// always false) and whether an abstract operand may be an array.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct TypeFamilies: u16 {
        const NULL = 1 << 0;
        const BOOLEAN = 1 << 1;
        const INTEGER = 1 << 2;
        const LONGINT = 1 << 3;
        const FLOAT = 1 << 4;
        const STRING = 1 << 5;
        const ARRAY = 1 << 6;
        const OBJECT = 1 << 7;
        const RESOURCE = 1 << 8;

        const NUMERIC = Self::INTEGER.bits() | Self::LONGINT.bits() | Self::FLOAT.bits();
        const SCALAR = Self::BOOLEAN.bits() | Self::NUMERIC.bits() | Self::STRING.bits();
        const COMPOUND = Self::ARRAY.bits() | Self::OBJECT.bits() | Self::RESOURCE.bits();
    }
}
