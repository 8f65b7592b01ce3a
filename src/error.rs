/// The message carried by every [`NullContractViolation`].
pub const MESSAGE: &str =
    "check_not_null invoked with null pointer; not_null's contract has been violated";

/// Raised by [`check_not_null`](crate::check_not_null) when its input is null.
///
/// This is not meant to be recovered from in most workflows. It exists so that a request or
/// operation which was handed a null pointer can be torn down with ordinary `?` propagation,
/// running every destructor on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("{}", MESSAGE)]
pub struct NullContractViolation;

/// Signals a failed null check.
#[cold]
#[inline(never)]
pub(crate) fn violation(pointer_type: &'static str) -> NullContractViolation {
    log::debug!("check_not_null rejected a null `{}`", pointer_type);

    raise()
}

#[cfg(not(feature = "abort-on-violation"))]
fn raise() -> NullContractViolation {
    NullContractViolation
}

/// Terminates the process after writing [`MESSAGE`] to standard error.
///
/// No destructors run in this mode.
#[cfg(feature = "abort-on-violation")]
fn raise() -> NullContractViolation {
    std::eprintln!("{}", MESSAGE);
    std::process::abort()
}
