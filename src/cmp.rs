use core::cmp::Ordering;
use core::ptr::NonNull;

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, rc::Rc, sync::Arc};

use crate::not_null::NotNull;
use crate::nullable::Nullable;

/// The null literal.
///
/// A [`NotNull`] never compares equal to it, so `nn == Null` is `false` and `nn != Null` is
/// `true` without looking at the wrapped pointer. There is no ordering against `Null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Null;

/// Shorthand for [`Null`].
pub const NULL: Null = Null;

impl<P: Nullable> PartialEq<Null> for NotNull<P> {
    #[inline]
    fn eq(&self, _: &Null) -> bool {
        false
    }
}

impl<P: Nullable> PartialEq<NotNull<P>> for Null {
    #[inline]
    fn eq(&self, _: &NotNull<P>) -> bool {
        false
    }
}

impl<P, Q> PartialEq<NotNull<Q>> for NotNull<P>
where
    P: Nullable + PartialEq<Q>,
    Q: Nullable,
{
    #[inline]
    fn eq(&self, other: &NotNull<Q>) -> bool {
        self.as_nullable() == other.as_nullable()
    }
}

impl<P: Nullable + Eq> Eq for NotNull<P> {}

impl<P, Q> PartialOrd<NotNull<Q>> for NotNull<P>
where
    P: Nullable + PartialOrd<Q>,
    Q: Nullable,
{
    #[inline]
    fn partial_cmp(&self, other: &NotNull<Q>) -> Option<Ordering> {
        self.as_nullable().partial_cmp(other.as_nullable())
    }
}

impl<P: Nullable + Ord> Ord for NotNull<P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_nullable().cmp(other.as_nullable())
    }
}

/// Comparisons between a wrapper and a bare pointer of the type it wraps, in both directions.
macro_rules! nullable_comparisons {
    ($([$($generics:tt)*] $ty:ty;)*) => {$(
        impl<$($generics)*> PartialEq<$ty> for NotNull<$ty>
        where
            $ty: Nullable + PartialEq,
        {
            #[inline]
            fn eq(&self, other: &$ty) -> bool {
                self.as_nullable() == other
            }
        }

        impl<$($generics)*> PartialEq<NotNull<$ty>> for $ty
        where
            $ty: Nullable + PartialEq,
        {
            #[inline]
            fn eq(&self, other: &NotNull<$ty>) -> bool {
                self == other.as_nullable()
            }
        }

        impl<$($generics)*> PartialOrd<$ty> for NotNull<$ty>
        where
            $ty: Nullable + PartialOrd,
        {
            #[inline]
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                self.as_nullable().partial_cmp(other)
            }
        }

        impl<$($generics)*> PartialOrd<NotNull<$ty>> for $ty
        where
            $ty: Nullable + PartialOrd,
        {
            #[inline]
            fn partial_cmp(&self, other: &NotNull<$ty>) -> Option<Ordering> {
                self.partial_cmp(other.as_nullable())
            }
        }
    )*};
}

nullable_comparisons! {
    [T] *const T;
    [T] *mut T;
    [T: ?Sized] Option<NonNull<T>>;
    ['a, T: ?Sized] Option<&'a T>;
    ['a, T: ?Sized] Option<&'a mut T>;
}

#[cfg(feature = "alloc")]
nullable_comparisons! {
    [T: ?Sized] Option<Box<T>>;
    [T: ?Sized] Option<Rc<T>>;
    [T: ?Sized] Option<Arc<T>>;
}

#[cfg(test)]
mod tests {
    use super::{Null, NULL};
    use crate::{assume_not_null, check_not_null};

    #[test]
    fn test_never_equal_to_null() {
        let x = 42;
        let sut = check_not_null(&x as *const i32).unwrap();

        assert!(!(sut == Null));
        assert!(!(Null == sut));
        assert!(sut != NULL);
        assert!(NULL != sut);
    }

    #[test]
    fn test_wrappers_with_equal_values_are_equal() {
        let x = 42;
        let a = check_not_null(&x as *const i32).unwrap();
        let b = check_not_null(&x as *const i32).unwrap();

        assert!(a == b);
        assert!(!(a != b));
    }

    #[test]
    fn test_wrappers_with_different_values_are_not_equal() {
        let xs = [1, 2];
        let a = check_not_null(&xs[0] as *const i32).unwrap();
        let b = check_not_null(&xs[1] as *const i32).unwrap();

        assert!(a != b);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a);
        assert!(b >= a);
        assert_eq!(a.cmp(&b), core::cmp::Ordering::Less);
    }

    #[test]
    fn test_wrapper_against_bare_pointer() {
        let xs = [1, 2];
        let first = &xs[0] as *const i32;
        let second = &xs[1] as *const i32;
        let sut = unsafe { assume_not_null(first) };

        assert!(sut == first);
        assert!(first == sut);
        assert!(sut != second);
        assert!(second != sut);
        assert!(sut < second);
        assert!(second > sut);
        assert!(first <= sut);
        assert!(sut >= first);
    }

    #[test]
    fn test_reference_wrappers_compare_by_value() {
        let x = 42;
        let y = 42;
        let a = check_not_null(Some(&x)).unwrap();
        let b = check_not_null(Some(&y)).unwrap();

        assert!(a == b);
        assert!(a == Some(&y));
        assert!(Some(&y) == a);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_shared_pointer_against_bare_value() {
        use alloc::rc::Rc;

        let input = Some(Rc::new(42));
        let sut = check_not_null(input.clone()).unwrap();

        assert!(sut == input);
        assert!(input == sut);
        assert!(sut != super::Null);
    }
}
