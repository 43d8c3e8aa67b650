//! Member-level comparison: identity for shared values, value equality for primitives.

use std::rc::Rc;
use std::sync::Arc;

/// Compares two members of a state without looking inside them.
///
/// Implementations must be O(1) with respect to the member's contents:
/// primitives compare by value, pointers compare by address.
pub trait Identity {
    fn identical(&self, other: &Self) -> bool;
}

/// Implements [`Identity`] through `PartialEq` for value-like types.
///
/// Intended for primitives and small `Copy` types such as fieldless enums,
/// where comparing by value is as cheap as comparing by address.
///
/// ```
/// #[derive(Clone, Copy, PartialEq)]
/// enum Filter {
///     All,
///     Done,
/// }
///
/// reducer_dispatch::identity_by_eq!(Filter);
///
/// use reducer_dispatch::Identity;
/// assert!(Filter::All.identical(&Filter::All));
/// assert!(!Filter::All.identical(&Filter::Done));
/// ```
#[macro_export]
macro_rules! identity_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Identity for $ty {
                #[inline]
                fn identical(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

identity_by_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), str, String,
);

// Same-value semantics: NaN is identical to NaN, +0.0 and -0.0 are not.
impl Identity for f32 {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
    }
}

impl Identity for f64 {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Identity for &T {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: Identity> Identity for Option<T> {
    #[inline]
    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(lhs), Some(rhs)) => lhs.identical(rhs),
            (None, None) => true,
            _ => false,
        }
    }
}
