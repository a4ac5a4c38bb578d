use crate::error::{with_last_error_mut, FfiError, NfdrsErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `FfiError` trait.
pub(crate) fn set_last_error(error: &impl FfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl FfiError) -> NfdrsErrorCode {
    tracing::debug!(code = ?error.code(), message = error.msg(), "NFDRS FFI call rejected");
    set_last_error(error);
    error.code()
}

/// Record the outcome of a fallible boundary check.
/// Errors are stored in thread-local storage and converted to their code.
pub(crate) fn track_result<T, E: FfiError>(result: Result<T, E>) -> Result<T, NfdrsErrorCode> {
    result.map_err(|error| track_error(&error))
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = NfdrsErrorCode::Ok;
    });
}
