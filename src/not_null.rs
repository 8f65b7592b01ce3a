use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use crate::address::ToAddressMut;
use crate::nullable::{Nullable, SafePointer};

/// A pointer-like value that is never null.
///
/// `NotNull<P>` lets an API state in its signature that it requires a non-null pointer, without
/// re-checking at every use. The only ways to obtain one are [`check_not_null`], which checks,
/// and [`assume_not_null`], which does not; there is no default value and no way to assign a
/// bare `P` into an existing wrapper.
///
/// The wrapper holds exactly one `P` and nothing else. Copying, cloning, moving and dropping all
/// defer to `P`: a `NotNull<*const T>` is `Copy`, a `NotNull<Option<Box<T>>>` is move-only, and a
/// `NotNull<Option<Arc<T>>>` shares ownership exactly as the `Arc` would.
///
/// # Disabled operations
///
/// Pointer arithmetic and indexing are not offered, even for raw pointers:
///
/// ```compile_fail
/// let x = [1, 2];
/// let p = not_null::check_not_null(x.as_ptr()).unwrap();
/// let _ = p + 1;
/// ```
///
/// ```compile_fail
/// let x = [1, 2];
/// let mut p = not_null::check_not_null(x.as_ptr()).unwrap();
/// p += 1;
/// ```
///
/// ```compile_fail
/// let x = [1, 2];
/// let p = not_null::check_not_null(x.as_ptr()).unwrap();
/// let _ = p[1];
/// ```
///
/// ```compile_fail
/// let x = [1, 2];
/// let p = not_null::check_not_null(unsafe { x.as_ptr().add(1) }).unwrap();
/// let _ = p - 1;
/// ```
///
/// ```compile_fail
/// let x = [1, 2];
/// let mut p = not_null::check_not_null(unsafe { x.as_ptr().add(1) }).unwrap();
/// p -= 1;
/// ```
///
/// # Ill-formed instantiations
///
/// `P` must be a nullable pointer. Wrapping a non-nullable type, the unit type or another
/// `NotNull` is rejected at compile time:
///
/// ```compile_fail
/// let _: Option<not_null::NotNull<()>> = None;
/// ```
///
/// ```compile_fail
/// let _: Option<not_null::NotNull<&i32>> = None;
/// ```
///
/// ```compile_fail
/// let _: Option<not_null::NotNull<not_null::NotNull<*const i32>>> = None;
/// ```
///
/// # Examples
///
/// ```
/// use not_null::{check_not_null, NotNull, NullContractViolation};
///
/// fn consume(name: NotNull<Option<&str>>) -> usize {
///     name.len()
/// }
///
/// fn consume_legacy(name: Option<&str>) -> Result<usize, NullContractViolation> {
///     Ok(consume(check_not_null(name)?))
/// }
///
/// assert_eq!(consume_legacy(Some("abc")), Ok(3));
/// # #[cfg(not(feature = "abort-on-violation"))]
/// assert_eq!(consume_legacy(None), Err(NullContractViolation));
/// ```
///
/// [`check_not_null`]: crate::check_not_null
/// [`assume_not_null`]: crate::assume_not_null
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct NotNull<P: Nullable> {
    value: P,
}

impl<P: Nullable> NotNull<P> {
    /// Wraps `value` without checking it.
    ///
    /// # Safety
    ///
    /// `value` must not be null.
    #[inline]
    pub(crate) const unsafe fn new_unchecked(value: P) -> Self {
        Self { value }
    }

    /// Returns the address of the element.
    #[inline]
    pub fn get(&self) -> *const P::Element {
        self.as_non_null().as_ptr()
    }

    /// Returns the address of the element as a [`NonNull`].
    #[inline]
    pub fn as_non_null(&self) -> NonNull<P::Element> {
        // SAFETY: `value` was not null when this wrapper was constructed, and `Nullable`
        // guarantees a non-null value resolves to an address.
        unsafe { self.value.to_address().unwrap_unchecked() }
    }

    /// Always `false`.
    ///
    /// Lets generic code that asks "is this null?" treat a `NotNull` like any other pointer.
    #[inline]
    pub const fn is_null(&self) -> bool {
        false
    }

    /// Returns a reference to the wrapped pointer.
    #[inline]
    pub const fn as_nullable(&self) -> &P {
        &self.value
    }

    /// Unwraps the pointer, handing its ownership to the caller.
    ///
    /// This is the only way to get a `P` back out. The wrapper is consumed; a binding that held
    /// it can only be used again after it is reassigned a fresh `NotNull`.
    #[inline]
    pub fn into_nullable(self) -> P {
        self.value
    }

    /// Returns a shared reference to the element.
    ///
    /// # Safety
    ///
    /// The element must be valid for reads for the returned lifetime, and must not be mutated
    /// through any other pointer meanwhile.
    #[inline]
    pub unsafe fn as_ref<'a>(&self) -> &'a P::Element {
        self.as_non_null().as_ref()
    }

    /// Returns a unique reference to the element.
    ///
    /// # Safety
    ///
    /// The element must be valid for reads and writes for the returned lifetime, and must not be
    /// accessed through any other pointer meanwhile.
    #[inline]
    pub unsafe fn as_mut<'a>(&mut self) -> &'a mut P::Element
    where
        P: ToAddressMut,
    {
        self.value.to_address_mut().unwrap_unchecked().as_mut()
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut P {
        &mut self.value
    }
}

impl<P: SafePointer> Deref for NotNull<P> {
    type Target = P::Element;

    #[inline]
    fn deref(&self) -> &P::Element {
        // SAFETY: `SafePointer` guarantees the element outlives the borrow of `value`.
        unsafe { self.as_non_null().as_ref() }
    }
}

impl<P: SafePointer + ToAddressMut> DerefMut for NotNull<P> {
    #[inline]
    fn deref_mut(&mut self) -> &mut P::Element {
        // SAFETY: as for `deref`, and `ToAddressMut` grants unique access.
        unsafe { self.value.to_address_mut().unwrap_unchecked().as_mut() }
    }
}

impl<P: Nullable> From<&NotNull<P>> for bool {
    /// Always `true`.
    #[inline]
    fn from(_: &NotNull<P>) -> bool {
        true
    }
}

impl<P: Nullable + Hash> Hash for NotNull<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl<P: Nullable + fmt::Debug> fmt::Debug for NotNull<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<P: Nullable> fmt::Pointer for NotNull<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.get(), f)
    }
}
