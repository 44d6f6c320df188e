//! C ABI for embedding runtimes.
//!
//! ```c
//! typedef struct { uint32_t width; uint32_t height; } ScreenSize;
//! int32_t screensize_get(ScreenSize *out);
//! int32_t screensize_get_with_message(ScreenSize *out, char *message, size_t capacity);
//! const char *screensize_status_message(int32_t status);
//! ```

use crate::screen::{DisplayError, ScreenSize, UNSUPPORTED_PLATFORM_MESSAGE};
use std::os::raw::c_char;

pub const STATUS_OK: i32 = 0;
pub const STATUS_UNSUPPORTED_PLATFORM: i32 = -1;
pub const STATUS_NO_DISPLAY: i32 = -2;
pub const STATUS_NULL_POINTER: i32 = -3;

fn status(error: &DisplayError) -> i32 {
    match error {
        DisplayError::UnsupportedPlatform => STATUS_UNSUPPORTED_PLATFORM,
        DisplayError::NoDisplay(_) => STATUS_NO_DISPLAY,
    }
}

/// Writes the primary display size to `out` and returns [`STATUS_OK`].
///
/// On failure a negative status is returned and `out` is left untouched.
///
/// # Safety
///
/// `out` must be null or valid for writing one `ScreenSize`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn screensize_get(out: *mut ScreenSize) -> i32 {
    unsafe { screensize_get_with_message(out, std::ptr::null_mut(), 0) }
}

/// Like [`screensize_get`], and on failure also copies the full error text,
/// including the reason a display could not be reached, into `message`.
///
/// The text is truncated to `capacity - 1` bytes and always NUL-terminated.
/// `message` is not touched on success or when it is null or `capacity` is 0.
///
/// # Safety
///
/// `out` must be null or valid for writing one `ScreenSize`. `message` must
/// be null or valid for writing `capacity` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn screensize_get_with_message(
    out: *mut ScreenSize,
    message: *mut c_char,
    capacity: usize,
) -> i32 {
    if out.is_null() {
        return STATUS_NULL_POINTER;
    }
    match crate::get_screen_size() {
        Ok(size) => {
            unsafe { out.write(size) };
            STATUS_OK
        }
        Err(error) => {
            unsafe { write_message(&error.to_string(), message, capacity) };
            status(&error)
        }
    }
}

unsafe fn write_message(text: &str, message: *mut c_char, capacity: usize) {
    if message.is_null() || capacity == 0 {
        return;
    }
    // Interior NULs would cut the C string short anyway.
    let bytes = text.as_bytes();
    let len = bytes
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(bytes.len())
        .min(capacity - 1);
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), message, len);
        message.add(len).write(0);
    }
}

/// Static description of a status code. Never null, never freed by the caller.
///
/// Static text cannot carry the reason behind [`STATUS_NO_DISPLAY`]; use
/// [`screensize_get_with_message`] for that.
#[unsafe(no_mangle)]
pub extern "C" fn screensize_status_message(status: i32) -> *const c_char {
    let message = match status {
        STATUS_OK => c"ok",
        STATUS_UNSUPPORTED_PLATFORM => UNSUPPORTED_PLATFORM_MESSAGE,
        STATUS_NO_DISPLAY => c"no display available",
        STATUS_NULL_POINTER => c"output pointer is null",
        _ => c"unknown status",
    };
    message.as_ptr()
}
