//! Structured diagnostics, emitted through `tracing` when the `tracing`
//! feature is enabled and compiled away otherwise.

use crate::union::Side;

/// A checked accessor was called on the wrong side.
#[inline]
pub(crate) fn side_mismatch(operation: &'static str, expected: Side) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        operation,
        expected = expected.as_str(),
        found = expected.opposite().as_str(),
        "side mismatch"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (operation, expected);
}

/// An unchecked accessor is about to panic.
#[inline]
pub(crate) fn wrong_side_access(operation: &'static str, expected: Side) {
    #[cfg(feature = "tracing")]
    tracing::error!(
        operation,
        expected = expected.as_str(),
        found = expected.opposite().as_str(),
        "wrong-side access on tagged union"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (operation, expected);
}

/// A fallible constructor failed; the target union was left untouched.
#[inline]
pub(crate) fn construction_failed(operation: &'static str, side: Side) {
    #[cfg(feature = "tracing")]
    tracing::debug!(operation, side = side.as_str(), "construction failed");
    #[cfg(not(feature = "tracing"))]
    let _ = (operation, side);
}
