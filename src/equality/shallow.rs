//! State-level shallow comparison.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use super::identity::Identity;

/// Decides whether two states are "equal enough" that no commit is needed.
///
/// Cost is O(k) in the number of top-level members. Composites of different
/// shapes are never equal; composites of the same shape are equal when they
/// expose the same member keys and every member pair is [`Identity`]-equal.
pub trait ShallowEq {
    fn shallow_eq(&self, other: &Self) -> bool;
}

/// Free-function form of [`ShallowEq::shallow_eq`].
#[inline]
pub fn shallow_equal<S: ShallowEq + ?Sized>(a: &S, b: &S) -> bool {
    a.shallow_eq(b)
}

/// Implements [`ShallowEq`] for a struct by listing its top-level fields.
///
/// Every listed field is compared with [`Identity`], so field types must
/// implement it. Fields that are not listed are ignored.
///
/// ```
/// use std::sync::Arc;
/// use reducer_dispatch::ShallowEq;
///
/// #[derive(Clone)]
/// struct Todos {
///     filter: u8,
///     items: Arc<Vec<String>>,
/// }
///
/// reducer_dispatch::shallow_eq!(Todos { filter, items });
///
/// let items = Arc::new(vec!["milk".to_string()]);
/// let a = Todos { filter: 0, items: Arc::clone(&items) };
/// let b = Todos { filter: 0, items };
/// assert!(a.shallow_eq(&b));
/// ```
#[macro_export]
macro_rules! shallow_eq {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::ShallowEq for $ty {
            fn shallow_eq(&self, other: &Self) -> bool {
                if ::std::ptr::eq(self, other) {
                    return true;
                }
                true $(&& $crate::Identity::identical(&self.$field, &other.$field))*
            }
        }
    };
}

macro_rules! shallow_by_identity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ShallowEq for $ty {
                #[inline]
                fn shallow_eq(&self, other: &Self) -> bool {
                    self.identical(other)
                }
            }
        )*
    };
}

shallow_by_identity!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    str, String,
);

fn sequence_eq<'a, T, I>(lhs_len: usize, rhs_len: usize, pairs: I) -> bool
where
    T: Identity + 'a,
    I: Iterator<Item = (&'a T, &'a T)>,
{
    lhs_len == rhs_len && pairs.into_iter().all(|(lhs, rhs)| lhs.identical(rhs))
}

impl<T: Identity> ShallowEq for [T] {
    fn shallow_eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || sequence_eq(self.len(), other.len(), self.iter().zip(other))
    }
}

impl<T: Identity> ShallowEq for Vec<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        self.as_slice().shallow_eq(other.as_slice())
    }
}

impl<T: Identity> ShallowEq for VecDeque<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || sequence_eq(self.len(), other.len(), self.iter().zip(other))
    }
}

impl<K, V, H> ShallowEq for HashMap<K, V, H>
where
    K: Eq + Hash,
    V: Identity,
    H: BuildHasher,
{
    fn shallow_eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|rhs| value.identical(rhs)))
    }
}

impl<K: Ord, V: Identity> ShallowEq for BTreeMap<K, V> {
    fn shallow_eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        // Both sides iterate in key order, so a zip compares key sets and values at once.
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|((lk, lv), (rk, rv))| lk == rk && lv.identical(rv))
    }
}

impl<T: ShallowEq> ShallowEq for Option<T> {
    fn shallow_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(lhs), Some(rhs)) => lhs.shallow_eq(rhs),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ShallowEq + ?Sized> ShallowEq for Arc<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other) || (**self).shallow_eq(other)
    }
}

impl<T: ShallowEq + ?Sized> ShallowEq for Rc<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other) || (**self).shallow_eq(other)
    }
}
