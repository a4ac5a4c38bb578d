use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait FfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> NfdrsErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `FfiError` for the boundary checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultFfiError {
    code: NfdrsErrorCode,
    msg: String,
}

impl DefaultFfiError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"weather"`, `"out_result"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: NfdrsErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a number that is NaN or infinite.
    ///
    /// # Arguments
    /// * `param_name` - The name of the offending field (e.g., `"temperature"`)
    /// * `value` - The invalid value
    pub fn non_finite(param_name: &str, value: f64) -> Self {
        Self {
            code: NfdrsErrorCode::InvalidParameter,
            msg: format!("Parameter '{param_name}' must be a finite number, got {value}"),
        }
    }
}

impl FfiError for DefaultFfiError {
    fn code(&self) -> NfdrsErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by NFDRS functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NfdrsErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter: a number was NaN or infinite.
    InvalidParameter = 2,
}

impl From<DefaultFfiError> for NfdrsErrorCode {
    fn from(error: DefaultFfiError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, NfdrsErrorCode)> = const { RefCell::new((None, NfdrsErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, NfdrsErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, NfdrsErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made.
///
/// # Lifetime
/// The returned pointer is valid until the next NFDRS call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// NfdrsResult result;
/// if (nfdrs_calculate_fire_danger(&weather, &result) != Ok) {
///     const char* error = nfdrs_get_last_error();
///     if (error) {
///         fprintf(stderr, "Error calculating fire danger: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn nfdrs_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code for this thread.
#[no_mangle]
pub extern "C" fn nfdrs_get_last_error_code() -> NfdrsErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
