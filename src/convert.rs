//! Conversions between wrappers over different pointer types.
//!
//! Whether `NotNull<U>` may become `NotNull<T>` is decided by two traits on the pointer types.
//! [`ExplicitFrom`] means `T` can be built from `U`; such conversions have to name the target,
//! through [`NotNull::from_not_null`]. [`ImplicitFrom`] means `U` turns into `T` freely; those
//! also work with the target inferred, through [`NotNull::convert`] and, for the built-in
//! pairs, [`Into`].
//!
//! Conversions never re-check for null: a `T` built from a non-null `U` is non-null.
//!
//! A converted wrapper addresses the same element as its source, so pairs that would have to
//! reallocate are not offered. A boxed element cannot become shared in place:
//!
//! ```compile_fail
//! use std::rc::Rc;
//! use not_null::NotNull;
//!
//! let p = not_null::check_not_null(Some(Box::new(42))).unwrap();
//! let _: NotNull<Option<Rc<i32>>> = p.convert();
//! ```

use core::ptr::NonNull;

use crate::not_null::NotNull;
use crate::nullable::Nullable;

/// `Self` can be constructed from `U`.
///
/// # Safety
///
/// A non-null `U` must convert into a non-null `Self` addressing the same element.
pub unsafe trait ExplicitFrom<U: Nullable>: Nullable {
    fn explicit_from(value: U) -> Self;
}

/// `U` converts into `Self` freely.
///
/// Every `ImplicitFrom<U>` is also an [`ExplicitFrom<U>`].
///
/// # Safety
///
/// As for [`ExplicitFrom`].
pub unsafe trait ImplicitFrom<U: Nullable>: Nullable {
    fn implicit_from(value: U) -> Self;
}

unsafe impl<T, U> ExplicitFrom<U> for T
where
    T: ImplicitFrom<U>,
    U: Nullable,
{
    #[inline]
    fn explicit_from(value: U) -> Self {
        T::implicit_from(value)
    }
}

impl<T: Nullable> NotNull<T> {
    /// Converts a wrapper over a different pointer type, moving out of it.
    ///
    /// The target type has to be spelled out at the call site.
    ///
    /// ```
    /// use core::ptr::NonNull;
    /// use not_null::{check_not_null, NotNull};
    ///
    /// let mut x = 42;
    /// let p = check_not_null(&mut x as *mut i32).unwrap();
    /// let q = NotNull::<Option<NonNull<i32>>>::from_not_null(p);
    ///
    /// assert_eq!(p, q.get() as *mut i32);
    /// ```
    #[inline]
    pub fn from_not_null<U: Nullable>(other: NotNull<U>) -> Self
    where
        T: ExplicitFrom<U>,
    {
        // SAFETY: `ExplicitFrom` preserves non-nullness
        unsafe { Self::new_unchecked(T::explicit_from(other.into_nullable())) }
    }

    /// Converts a wrapper over a different pointer type, leaving `other` untouched.
    #[inline]
    pub fn from_not_null_ref<U: Nullable + Clone>(other: &NotNull<U>) -> Self
    where
        T: ExplicitFrom<U>,
    {
        Self::from_not_null(other.clone())
    }

    /// Replaces the wrapped pointer with one converted from `other`.
    ///
    /// There is no way to assign a bare pointer; only another wrapper.
    #[inline]
    pub fn assign<U: Nullable>(&mut self, other: NotNull<U>) -> &mut Self
    where
        T: ImplicitFrom<U>,
    {
        *self.value_mut() = T::implicit_from(other.into_nullable());
        self
    }

    /// Replaces the wrapped pointer with one converted from a copy of `other`.
    #[inline]
    pub fn assign_ref<U: Nullable + Clone>(&mut self, other: &NotNull<U>) -> &mut Self
    where
        T: ImplicitFrom<U>,
    {
        self.assign(other.clone())
    }
}

impl<U: Nullable> NotNull<U> {
    /// Converts into a wrapper over a pointer type `U` converts to freely.
    ///
    /// ```
    /// use not_null::{check_not_null, NotNull};
    ///
    /// let mut x = 42;
    /// let p = check_not_null(&mut x as *mut i32).unwrap();
    /// let q: NotNull<*const i32> = p.convert();
    ///
    /// assert_eq!(p.get(), q.get());
    /// ```
    #[inline]
    pub fn convert<T>(self) -> NotNull<T>
    where
        T: ImplicitFrom<U>,
    {
        // SAFETY: `ImplicitFrom` preserves non-nullness
        unsafe { NotNull::new_unchecked(T::implicit_from(self.into_nullable())) }
    }

    /// Like [`convert`](Self::convert), but leaves `self` untouched.
    #[inline]
    pub fn convert_cloned<T>(&self) -> NotNull<T>
    where
        U: Clone,
        T: ImplicitFrom<U>,
    {
        self.clone().convert()
    }
}

macro_rules! implicit_conversions {
    ($([$($generics:tt)*] $from:ty => $to:ty = |$value:ident| $convert:expr;)*) => {$(
        unsafe impl<$($generics)*> ImplicitFrom<$from> for $to {
            #[inline]
            fn implicit_from($value: $from) -> Self {
                $convert
            }
        }

        impl<$($generics)*> From<NotNull<$from>> for NotNull<$to> {
            #[inline]
            fn from(other: NotNull<$from>) -> Self {
                other.convert()
            }
        }
    )*};
}

macro_rules! explicit_conversions {
    ($([$($generics:tt)*] $from:ty => $to:ty = |$value:ident| $convert:expr;)*) => {$(
        unsafe impl<$($generics)*> ExplicitFrom<$from> for $to {
            #[inline]
            fn explicit_from($value: $from) -> Self {
                $convert
            }
        }
    )*};
}

implicit_conversions! {
    [T] *mut T => *const T = |p| p;
    [T] Option<NonNull<T>> => *mut T = |p| p.map_or(core::ptr::null_mut(), NonNull::as_ptr);
    [T] Option<NonNull<T>> => *const T = |p| p.map_or(core::ptr::null(), |p| p.as_ptr() as *const T);
    ['a, T] Option<&'a T> => *const T = |p| p.map_or(core::ptr::null(), |r| r as *const T);
    ['a, T] Option<&'a mut T> => *mut T = |p| p.map_or(core::ptr::null_mut(), |r| r as *mut T);
    ['a, T: ?Sized] Option<&'a mut T> => Option<&'a T> = |p| p.map(|r| &*r);
}

explicit_conversions! {
    [T] *const T => *mut T = |p| p as *mut T;
    [T] *mut T => Option<NonNull<T>> = |p| NonNull::new(p);
    ['a, T: ?Sized] Option<&'a T> => Option<NonNull<T>> = |p| p.map(NonNull::from);
    ['a, T: ?Sized] Option<&'a mut T> => Option<NonNull<T>> = |p| p.map(NonNull::from);
}

#[cfg(test)]
mod tests {
    use super::{ExplicitFrom, ImplicitFrom};
    use crate::{check_not_null, NotNull};
    use core::ptr::NonNull;

    fn assert_implicit<T: ImplicitFrom<U>, U: crate::Nullable>() {}
    fn assert_explicit<T: ExplicitFrom<U>, U: crate::Nullable>() {}

    #[test]
    fn test_implicit_pairs_are_explicit() {
        assert_implicit::<*const i32, *mut i32>();
        assert_explicit::<*const i32, *mut i32>();

        assert_implicit::<Option<&i32>, Option<&mut i32>>();
        assert_explicit::<Option<&i32>, Option<&mut i32>>();
    }

    #[test]
    fn test_explicit_conversion_preserves_address() {
        let x = 42;
        let p = check_not_null(&x as *const i32).unwrap();
        let q = NotNull::<*mut i32>::from_not_null(p);

        assert_eq!(p.get(), q.get());
    }

    #[test]
    fn test_explicit_conversion_by_reference() {
        let mut x = 42;
        let p = check_not_null(Some(&mut x)).unwrap();
        let address = p.get();
        let q = NotNull::<Option<NonNull<i32>>>::from_not_null(p);
        let r = NotNull::<*mut i32>::from_not_null_ref(&q);

        assert_eq!(q.get(), address);
        assert_eq!(r.get(), address);
    }

    #[test]
    fn test_implicit_conversion_preserves_address() {
        let mut x = 42;
        let address = &mut x as *mut i32 as *const i32;
        let p = check_not_null(Some(&mut x)).unwrap();
        let q: NotNull<Option<&i32>> = p.into();

        assert_eq!(q.get(), address);
        assert_eq!(*q, 42);
    }

    #[test]
    fn test_convert_cloned_leaves_source() {
        let x = 42;
        let p = check_not_null(Some(&x)).unwrap();
        let q: NotNull<*const i32> = p.convert_cloned();

        assert_eq!(*p, 42);
        assert_eq!(p.get(), q.get());
    }

    #[test]
    fn test_assign_replaces_value() {
        let x = 1;
        let mut y = 2;

        let mut sut = check_not_null(&x as *const i32).unwrap();
        let other = check_not_null(&mut y as *mut i32).unwrap();

        assert_eq!(sut.assign(other).get(), &y as *const i32);
    }

    #[test]
    fn test_assign_ref_leaves_source() {
        let x = 1;
        let mut y = 2;

        let mut sut = check_not_null(&x as *const i32).unwrap();
        let other = check_not_null(&mut y as *mut i32).unwrap();
        sut.assign_ref(&other);

        assert_eq!(sut.get(), other.get());
    }

    #[test]
    fn test_assign_from_unique_reference_preserves_address() {
        let x = 1;
        let mut y = 2;
        let address = &mut y as *mut i32 as *const i32;

        let mut sut = check_not_null(Some(&x)).unwrap();
        sut.assign(check_not_null(Some(&mut y)).unwrap());

        assert_eq!(sut.get(), address);
        assert_eq!(*sut, 2);
    }
}
