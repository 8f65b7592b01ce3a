use core::ptr::NonNull;

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, rc::Rc, sync::Arc};

/// Resolves a pointer-like value down to the address of the element it points at.
///
/// Raw pointers are the base case. Smart pointers and references follow one level of
/// indirection, and `Option<X>` delegates to `X`, so nested pointer-like types resolve by
/// applying each layer in turn until a raw address is reached.
pub trait ToAddress {
    /// The type pointed at.
    type Element: ?Sized;

    /// Returns the address of the element, or [`None`] if `self` points at nothing.
    fn to_address(&self) -> Option<NonNull<Self::Element>>;
}

/// A [`ToAddress`] that can also hand out an address suitable for writing through.
///
/// Only implemented by pointer-like types with unique access to their element.
pub trait ToAddressMut: ToAddress {
    /// Returns a writable address of the element, or [`None`] if `self` points at nothing.
    fn to_address_mut(&mut self) -> Option<NonNull<Self::Element>>;
}

/// Resolves `pointer` to the raw address of its element.
pub fn to_address<P: ToAddress + ?Sized>(pointer: &P) -> Option<NonNull<P::Element>> {
    pointer.to_address()
}

impl<T: ?Sized> ToAddress for *const T {
    type Element = T;

    fn to_address(&self) -> Option<NonNull<T>> {
        NonNull::new(*self as *mut T)
    }
}

impl<T: ?Sized> ToAddress for *mut T {
    type Element = T;

    fn to_address(&self) -> Option<NonNull<T>> {
        NonNull::new(*self)
    }
}

impl<T: ?Sized> ToAddressMut for *mut T {
    fn to_address_mut(&mut self) -> Option<NonNull<T>> {
        NonNull::new(*self)
    }
}

impl<T: ?Sized> ToAddress for NonNull<T> {
    type Element = T;

    fn to_address(&self) -> Option<NonNull<T>> {
        Some(*self)
    }
}

impl<T: ?Sized> ToAddressMut for NonNull<T> {
    fn to_address_mut(&mut self) -> Option<NonNull<T>> {
        Some(*self)
    }
}

impl<'a, T: ?Sized> ToAddress for &'a T {
    type Element = T;

    fn to_address(&self) -> Option<NonNull<T>> {
        Some(NonNull::from(*self))
    }
}

impl<'a, T: ?Sized> ToAddress for &'a mut T {
    type Element = T;

    fn to_address(&self) -> Option<NonNull<T>> {
        Some(NonNull::from(&**self))
    }
}

impl<'a, T: ?Sized> ToAddressMut for &'a mut T {
    fn to_address_mut(&mut self) -> Option<NonNull<T>> {
        Some(NonNull::from(&mut **self))
    }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> ToAddress for Box<T> {
    type Element = T;

    fn to_address(&self) -> Option<NonNull<T>> {
        Some(NonNull::from(&**self))
    }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> ToAddressMut for Box<T> {
    fn to_address_mut(&mut self) -> Option<NonNull<T>> {
        Some(NonNull::from(&mut **self))
    }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> ToAddress for Rc<T> {
    type Element = T;

    fn to_address(&self) -> Option<NonNull<T>> {
        Some(NonNull::from(&**self))
    }
}

#[cfg(feature = "alloc")]
impl<T: ?Sized> ToAddress for Arc<T> {
    type Element = T;

    fn to_address(&self) -> Option<NonNull<T>> {
        Some(NonNull::from(&**self))
    }
}

impl<X: ToAddress> ToAddress for Option<X> {
    type Element = X::Element;

    fn to_address(&self) -> Option<NonNull<X::Element>> {
        self.as_ref().and_then(ToAddress::to_address)
    }
}

impl<X: ToAddressMut> ToAddressMut for Option<X> {
    fn to_address_mut(&mut self) -> Option<NonNull<X::Element>> {
        self.as_mut().and_then(ToAddressMut::to_address_mut)
    }
}
