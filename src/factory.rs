use crate::error::{self, NullContractViolation};
use crate::not_null::NotNull;
use crate::nullable::Nullable;

/// Wraps `value` in a [`NotNull`] without checking it.
///
/// Use this where non-nullness is already known: the address of an object, the result of an
/// allocation that cannot fail, a field the surrounding type guarantees. If the check is not
/// free to reason away, use [`check_not_null`] instead.
///
/// # Safety
///
/// `value` must not be null. Every safe operation on the returned wrapper relies on it.
///
/// # Examples
///
/// ```
/// use not_null::assume_not_null;
///
/// let x = 5;
/// // a reference is never null
/// let nn = unsafe { assume_not_null(&x as *const i32) };
///
/// assert!(nn == &x as *const i32);
/// ```
#[inline]
pub unsafe fn assume_not_null<P: Nullable>(value: P) -> NotNull<P> {
    debug_assert!(!value.is_null(), "assume_not_null called with a null pointer");

    NotNull::new_unchecked(value)
}

/// Wraps `value` in a [`NotNull`] after checking that it is not null.
///
/// This is the only operation in the crate that checks at runtime. On a null input it returns
/// [`NullContractViolation`], or with the `abort-on-violation` feature prints the violation to
/// standard error and aborts the process.
///
/// # Examples
///
/// ```
/// use not_null::{check_not_null, NullContractViolation};
///
/// fn len(s: Option<&str>) -> Result<usize, NullContractViolation> {
///     let s = check_not_null(s)?;
///     Ok(s.len())
/// }
///
/// assert_eq!(len(Some("four")), Ok(4));
/// ```
#[inline]
pub fn check_not_null<P: Nullable>(value: P) -> Result<NotNull<P>, NullContractViolation> {
    if value.is_null() {
        return Err(error::violation(core::any::type_name::<P>()));
    }

    // SAFETY: checked above
    Ok(unsafe { NotNull::new_unchecked(value) })
}
