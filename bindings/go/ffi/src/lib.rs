//! C-FFI layer for vernorm, used by Go (cgo) and other FFI consumers.
//!
//! ZERO logic here. All calls delegate to `vernorm-core`.
//!
//! # Memory Contract
//!
//! All functions that return `*mut c_char` allocate via `CString`.
//! The caller MUST free the returned string by calling `vernorm_free_string()`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Result from a vernorm FFI call.
/// If `error` is null, the call succeeded and `result` contains the output.
/// If `error` is non-null, the call failed and `error` contains the error message.
/// The caller MUST free both `result` and `error` with `vernorm_free_string()`.
#[repr(C)]
pub struct VernormResult {
    pub result: *mut c_char,
    pub error: *mut c_char,
}

impl VernormResult {
    fn ok(value: String) -> Self {
        match CString::new(value) {
            Ok(c) => VernormResult {
                result: c.into_raw(),
                error: std::ptr::null_mut(),
            },
            Err(_) => Self::err("output contains an interior NUL byte"),
        }
    }

    fn err(msg: &str) -> Self {
        let c = CString::new(msg).unwrap_or_default();
        VernormResult {
            result: std::ptr::null_mut(),
            error: c.into_raw(),
        }
    }
}

/// Helper: convert a C string pointer to a Rust &str.
/// Returns None if the pointer is null or not valid UTF-8.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Normalize a version specifier to its canonical form.
///
/// # Safety
/// `specifier` must be a valid null-terminated UTF-8 C string.
/// The caller must free the returned strings with `vernorm_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn vernorm_normalize(specifier: *const c_char) -> VernormResult {
    match cstr_to_str(specifier) {
        Some(s) => VernormResult::ok(vernorm_core::normalize(s)),
        None => VernormResult::err("null or invalid UTF-8 input"),
    }
}

/// Classify the stability of a raw version specifier.
/// The result is one of `dev`, `alpha`, `beta`, `RC`, `stable`.
///
/// # Safety
/// `specifier` must be a valid null-terminated UTF-8 C string.
/// The caller must free the returned strings with `vernorm_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn vernorm_classify_stability(specifier: *const c_char) -> VernormResult {
    match cstr_to_str(specifier) {
        Some(s) => VernormResult::ok(vernorm_core::classify_stability(s).to_string()),
        None => VernormResult::err("null or invalid UTF-8 input"),
    }
}

/// Free a string previously returned by a vernorm FFI function.
///
/// # Safety
/// `ptr` must be a pointer previously returned by a vernorm FFI function,
/// or null (in which case this is a no-op).
#[no_mangle]
pub unsafe extern "C" fn vernorm_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take(ptr: *mut c_char) -> String {
        let s = CStr::from_ptr(ptr).to_str().unwrap().to_string();
        vernorm_free_string(ptr);
        s
    }

    #[test]
    fn test_normalize_round_trip() {
        let input = CString::new("1.0.0RC1").unwrap();
        unsafe {
            let res = vernorm_normalize(input.as_ptr());
            assert!(res.error.is_null());
            assert_eq!(take(res.result), "1.0.0.0-RC1");
        }
    }

    #[test]
    fn test_classify_stability() {
        let input = CString::new("dev-master").unwrap();
        unsafe {
            let res = vernorm_classify_stability(input.as_ptr());
            assert!(res.error.is_null());
            assert_eq!(take(res.result), "dev");
        }
    }

    #[test]
    fn test_null_input_is_error() {
        unsafe {
            let res = vernorm_normalize(std::ptr::null());
            assert!(res.result.is_null());
            assert_eq!(take(res.error), "null or invalid UTF-8 input");
        }
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { vernorm_free_string(std::ptr::null_mut()) };
    }
}
