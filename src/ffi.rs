//! FFI bindings for the fitness tracker
//!
//! This module provides C-compatible functions for calling the tracker from other languages.
//! All functions use C strings (null-terminated) and return allocated memory that
//! must be freed by the caller using `tracker_free_string`.
//!
//! Package values are passed as a JSON array of numbers, e.g. `[15000, 1, 75]`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::error::TrackerError;
use crate::package::Package;
use crate::pipeline::process_package;
use crate::types::InfoMessage;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Read the code and JSON values, then run the package through the pipeline.
/// On failure the last error is set and `None` returned.
unsafe fn process_raw_package(
    workout_type: *const c_char,
    data_json: *const c_char,
) -> Option<InfoMessage> {
    clear_last_error();

    let code = match cstr_to_string(workout_type) {
        Some(s) => s,
        None => {
            set_last_error("Invalid workout_type string pointer");
            return None;
        }
    };

    let data_str = match cstr_to_string(data_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid data string pointer");
            return None;
        }
    };

    let result = serde_json::from_str::<Vec<f64>>(&data_str)
        .map_err(TrackerError::from)
        .and_then(|data| process_package(&Package::new(code, data)));

    match result {
        Ok(info) => Some(info),
        Err(e) => {
            set_last_error(&e.to_string());
            None
        }
    }
}

// ============================================================================
// Package API
// ============================================================================

/// Process a package and return the formatted workout summary.
///
/// # Safety
/// - `workout_type` and `data_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `tracker_free_string`.
/// - Returns NULL on error; call `tracker_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn tracker_package_message(
    workout_type: *const c_char,
    data_json: *const c_char,
) -> *mut c_char {
    match process_raw_package(workout_type, data_json) {
        Some(info) => string_to_cstr(&info.get_message()),
        None => ptr::null_mut(),
    }
}

/// Process a package and return the info message as a JSON object.
///
/// # Safety
/// - `workout_type` and `data_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `tracker_free_string`.
/// - Returns NULL on error; call `tracker_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn tracker_package_info(
    workout_type: *const c_char,
    data_json: *const c_char,
) -> *mut c_char {
    let info = match process_raw_package(workout_type, data_json) {
        Some(info) => info,
        None => return ptr::null_mut(),
    };

    match serde_json::to_string(&info) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by the tracker.
///
/// # Safety
/// - `ptr` must have been returned by a tracker function, or be NULL.
/// - Must not be called twice on the same pointer.
#[no_mangle]
pub unsafe extern "C" fn tracker_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next tracker function call on this thread.
/// - Do NOT free the returned pointer.
#[no_mangle]
pub unsafe extern "C" fn tracker_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the tracker library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free it.
#[no_mangle]
pub unsafe extern "C" fn tracker_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
