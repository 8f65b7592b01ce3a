use core::ptr::{self, NonNull};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, rc::Rc, sync::Arc};

use crate::address::ToAddress;

/// A pointer-like type with a null state.
///
/// This is the capability contract for [`NotNull`](crate::NotNull): the type can be
/// constructed in (and therefore assigned) its null state, compared against it, and resolved to
/// the address of its element.
///
/// Types that can never be null (references, `Box<T>`, `NonNull<T>`) deliberately do not
/// implement this trait; wrap their `Option` instead.
///
/// # Safety
///
/// Implementors must guarantee that
/// - `is_null()` returns `true` exactly when `to_address()` returns [`None`];
/// - a non-null value cannot become null through a shared reference;
/// - if the type implements [`Clone`], cloning a non-null value yields a non-null value that
///   resolves to the same element. [`NotNull`](crate::NotNull) is cloned through `P::clone`
///   without re-checking.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a nullable pointer",
    label = "`NotNull<{Self}>` is ill-formed",
    note = "`NotNull` only wraps pointer-like types with a null state, such as `*const T`, `Option<&T>` or `Option<Box<T>>`"
)]
pub unsafe trait Nullable: ToAddress + Sized {
    /// Returns the null state of this pointer type.
    fn null() -> Self;

    /// Returns `true` if this value is the null state.
    fn is_null(&self) -> bool {
        self.to_address().is_none()
    }
}

/// A [`Nullable`] whose non-null values always refer to a live element.
///
/// [`NotNull`](crate::NotNull) only dereferences safely through these types.
///
/// # Safety
///
/// A non-null value must point at an initialized, properly aligned element that stays valid for
/// as long as the value itself is borrowed.
pub unsafe trait SafePointer: Nullable {}

unsafe impl<T> Nullable for *const T {
    fn null() -> Self {
        ptr::null()
    }

    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

unsafe impl<T> Nullable for *mut T {
    fn null() -> Self {
        ptr::null_mut()
    }

    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

unsafe impl<T: ?Sized> Nullable for Option<NonNull<T>> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

unsafe impl<'a, T: ?Sized> Nullable for Option<&'a T> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

unsafe impl<'a, T: ?Sized> SafePointer for Option<&'a T> {}

unsafe impl<'a, T: ?Sized> Nullable for Option<&'a mut T> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

unsafe impl<'a, T: ?Sized> SafePointer for Option<&'a mut T> {}

#[cfg(feature = "alloc")]
unsafe impl<T: ?Sized> Nullable for Option<Box<T>> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T: ?Sized> SafePointer for Option<Box<T>> {}

#[cfg(feature = "alloc")]
unsafe impl<T: ?Sized> Nullable for Option<Rc<T>> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T: ?Sized> SafePointer for Option<Rc<T>> {}

#[cfg(feature = "alloc")]
unsafe impl<T: ?Sized> Nullable for Option<Arc<T>> {
    fn null() -> Self {
        None
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "alloc")]
unsafe impl<T: ?Sized> SafePointer for Option<Arc<T>> {}

#[cfg(test)]
mod tests {
    use super::Nullable;
    use core::ptr::NonNull;

    fn null_of<P: Nullable>() -> P {
        P::null()
    }

    #[test]
    fn test_null_is_null() {
        assert!(null_of::<*const i32>().is_null());
        assert!(null_of::<*mut i32>().is_null());
        assert!(Nullable::is_null(&null_of::<Option<NonNull<i32>>>()));
        assert!(Nullable::is_null(&null_of::<Option<&i32>>()));
        assert!(Nullable::is_null(&null_of::<Option<&mut i32>>()));
    }

    #[test]
    fn test_address_is_not_null() {
        let mut x = 42;

        assert!(!Nullable::is_null(&(&x as *const i32)));
        assert!(!Nullable::is_null(&Some(&x)));
        assert!(!Nullable::is_null(&Some(&mut x)));
        assert!(!Nullable::is_null(&Some(NonNull::from(&x))));
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_smart_pointer_null_state() {
        use alloc::{boxed::Box, rc::Rc, sync::Arc};

        assert!(Nullable::is_null(&null_of::<Option<Box<i32>>>()));
        assert!(Nullable::is_null(&null_of::<Option<Rc<i32>>>()));
        assert!(Nullable::is_null(&null_of::<Option<Arc<i32>>>()));

        assert!(!Nullable::is_null(&Some(Box::new(42))));
        assert!(!Nullable::is_null(&Some(Rc::new(42))));
        assert!(!Nullable::is_null(&Some(Arc::new(42))));
    }

    #[test]
    fn test_user_defined_pointer_uses_address_for_null_check() {
        use crate::address::ToAddress;

        struct Handle(Option<NonNull<u8>>);

        impl ToAddress for Handle {
            type Element = u8;

            fn to_address(&self) -> Option<NonNull<u8>> {
                self.0.to_address()
            }
        }

        unsafe impl Nullable for Handle {
            fn null() -> Self {
                Handle(None)
            }
        }

        let byte = 7u8;

        assert!(Handle::null().is_null());
        assert!(!Handle(Some(NonNull::from(&byte))).is_null());
    }
}
