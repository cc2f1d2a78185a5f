//! Type index handle.
//!
//! `Idx` is the canonical type handle. All types are stored in a [`Pool`]
//! and referenced by their 32-bit index.
//!
//! # Design
//!
//! - Basic types and the `error` interface have fixed indices (0-14)
//! - Unnamed composite types are interned structurally, so two handles to
//!   `[]string` are the same `Idx`
//! - Named types are nominal: every declaration gets a fresh index
//!
//! [`Pool`]: crate::Pool

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Basic Types (indices 0-13) ===

    /// `bool`.
    pub const BOOL: Self = Self(0);
    /// `int`.
    pub const INT: Self = Self(1);
    /// `int8`.
    pub const INT8: Self = Self(2);
    /// `int16`.
    pub const INT16: Self = Self(3);
    /// `int32` (also spelled `rune`).
    pub const INT32: Self = Self(4);
    /// `int64`.
    pub const INT64: Self = Self(5);
    /// `uint`.
    pub const UINT: Self = Self(6);
    /// `uint8` (also spelled `byte`).
    pub const UINT8: Self = Self(7);
    /// `uint16`.
    pub const UINT16: Self = Self(8);
    /// `uint32`.
    pub const UINT32: Self = Self(9);
    /// `uint64`.
    pub const UINT64: Self = Self(10);
    /// `float32`.
    pub const FLOAT32: Self = Self(11);
    /// `float64`.
    pub const FLOAT64: Self = Self(12);
    /// `string`.
    pub const STRING: Self = Self(13);

    /// The predeclared `error` interface.
    pub const ERROR: Self = Self(14);

    /// Number of pre-interned types.
    pub const PRIMITIVE_COUNT: u32 = 15;

    /// Sentinel value indicating no type / invalid index.
    pub const NONE: Self = Self(u32::MAX);

    /// Create an index from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize` (for indexing into `Vec`s).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the spelling of a pre-interned type.
    ///
    /// Returns `None` for dynamic types, which need a `Pool` to render.
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("bool"),
            1 => Some("int"),
            2 => Some("int8"),
            3 => Some("int16"),
            4 => Some("int32"),
            5 => Some("int64"),
            6 => Some("uint"),
            7 => Some("uint8"),
            8 => Some("uint16"),
            9 => Some("uint32"),
            10 => Some("uint64"),
            11 => Some("float32"),
            12 => Some("float64"),
            13 => Some("string"),
            14 => Some("error"),
            _ => None,
        }
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "Idx::NONE");
        }
        match self.name() {
            Some(name) => write!(f, "Idx({name})"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

/// Kind of a predeclared basic type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
}

impl BasicKind {
    /// All basic kinds in `Idx` order.
    pub const ALL: [BasicKind; 14] = [
        BasicKind::Bool,
        BasicKind::Int,
        BasicKind::Int8,
        BasicKind::Int16,
        BasicKind::Int32,
        BasicKind::Int64,
        BasicKind::Uint,
        BasicKind::Uint8,
        BasicKind::Uint16,
        BasicKind::Uint32,
        BasicKind::Uint64,
        BasicKind::Float32,
        BasicKind::Float64,
        BasicKind::String,
    ];

    /// Parse a predeclared type name, including the `byte` and `rune` aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "bool" => BasicKind::Bool,
            "int" => BasicKind::Int,
            "int8" => BasicKind::Int8,
            "int16" => BasicKind::Int16,
            "int32" | "rune" => BasicKind::Int32,
            "int64" => BasicKind::Int64,
            "uint" => BasicKind::Uint,
            "uint8" | "byte" => BasicKind::Uint8,
            "uint16" => BasicKind::Uint16,
            "uint32" => BasicKind::Uint32,
            "uint64" => BasicKind::Uint64,
            "float32" => BasicKind::Float32,
            "float64" => BasicKind::Float64,
            "string" => BasicKind::String,
            _ => return None,
        };
        Some(kind)
    }

    /// The fixed pool index of this kind.
    pub fn idx(self) -> Idx {
        match self {
            BasicKind::Bool => Idx::BOOL,
            BasicKind::Int => Idx::INT,
            BasicKind::Int8 => Idx::INT8,
            BasicKind::Int16 => Idx::INT16,
            BasicKind::Int32 => Idx::INT32,
            BasicKind::Int64 => Idx::INT64,
            BasicKind::Uint => Idx::UINT,
            BasicKind::Uint8 => Idx::UINT8,
            BasicKind::Uint16 => Idx::UINT16,
            BasicKind::Uint32 => Idx::UINT32,
            BasicKind::Uint64 => Idx::UINT64,
            BasicKind::Float32 => Idx::FLOAT32,
            BasicKind::Float64 => Idx::FLOAT64,
            BasicKind::String => Idx::STRING,
        }
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        !matches!(
            self,
            BasicKind::Bool | BasicKind::Float32 | BasicKind::Float64 | BasicKind::String
        )
    }

    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, BasicKind::Float32 | BasicKind::Float64)
    }

    #[inline]
    pub fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }
}
