//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be stored
//! as matrix elements, together with the runtime tag used in summary
//! strings and exports.

/// Data types storable in a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataType {
    F32 = 0,
    F64 = 1,
    I32 = 2,
    I64 = 3,
    U32 = 4,
    U64 = 5,
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataType::F32 => write!(f, "f32"),
            DataType::F64 => write!(f, "f64"),
            DataType::I32 => write!(f, "i32"),
            DataType::I64 => write!(f, "i64"),
            DataType::U32 => write!(f, "u32"),
            DataType::U64 => write!(f, "u64"),
        }
    }
}

impl DataType {
    /// Get the size in bytes of this data type
    pub const fn size_bytes(&self) -> usize {
        match self {
            DataType::F32 | DataType::I32 | DataType::U32 => 4,
            DataType::F64 | DataType::I64 | DataType::U64 => 8,
        }
    }
}

/// Trait for types that can be stored as matrix elements
///
/// Matrix element types must be:
/// - Copy: can be copied without allocation
/// - PartialEq: the zero check compares against the additive identity
/// - Display: element values appear in summary log strings
pub trait MatrixElement: Copy + PartialEq + core::fmt::Display + Sized {
    /// The additive identity; values equal to it are never stored
    fn zero() -> Self;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Get the [`DataType`] tag for this element type
    fn data_type() -> DataType;

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }

    /// Convert from f64 for generic construction
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                fn zero() -> Self {
                    0 as $ty
                }

                fn data_type() -> DataType {
                    DataType::$tag
                }

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_matrix_element! {
    f32 => F32,
    f64 => F64,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
}
