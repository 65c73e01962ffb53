//! C ABI entry points
//!
//! Declared for C callers in `include/shapeprobe.h`. The caller owns every
//! buffer passed in; nothing is retained past the call and caller memory
//! is only ever written, never read.

use std::ffi::{c_char, c_int};
use std::ptr;

use tracing::debug;

use crate::error::FormatError;
use crate::timestamp::{format_now, TIMESTAMP_CAPACITY};

/// The timestamp was written and NUL-terminated.
pub const SHAPEPROBE_OK: c_int = 0;

/// The buffer is smaller than [`TIMESTAMP_CAPACITY`]; nothing was written.
pub const SHAPEPROBE_ERR_BUFFER_TOO_SMALL: c_int = 1;

/// The buffer pointer was null.
pub const SHAPEPROBE_ERR_NULL_BUFFER: c_int = 2;

/// The local year can't be rendered in four digits; nothing was written.
pub const SHAPEPROBE_ERR_YEAR_OUT_OF_RANGE: c_int = 3;

/// Status code reported across the ABI for a formatting error.
pub fn status_code(err: &FormatError) -> c_int {
    match err {
        FormatError::BufferTooSmall { .. } => SHAPEPROBE_ERR_BUFFER_TOO_SMALL,
        FormatError::YearOutOfRange(_) => SHAPEPROBE_ERR_YEAR_OUT_OF_RANGE,
    }
}

/// Buffer capacity required by [`shapeprobe_format_now`], terminator included.
#[no_mangle]
pub extern "C" fn shapeprobe_timestamp_capacity() -> usize {
    TIMESTAMP_CAPACITY
}

/// Write the current local time as `YYYY-MM-DD HH:MM:SS\0` into `buffer`.
///
/// Returns [`SHAPEPROBE_OK`] or one of the `SHAPEPROBE_ERR_*` codes. On
/// error no byte of `buffer` is touched.
///
/// # Safety
///
/// `buffer` must be null or valid for writes of `capacity` bytes. Its
/// contents may be uninitialized.
#[no_mangle]
pub unsafe extern "C" fn shapeprobe_format_now(buffer: *mut c_char, capacity: usize) -> c_int {
    if buffer.is_null() {
        return SHAPEPROBE_ERR_NULL_BUFFER;
    }

    // Render on our own stack so the caller's (possibly uninitialized)
    // memory is never viewed as a Rust slice.
    let mut local = [0u8; TIMESTAMP_CAPACITY];
    let required = capacity.min(TIMESTAMP_CAPACITY);
    if let Err(err) = format_now(&mut local[..required]) {
        debug!(%err, capacity, "shapeprobe_format_now failed");
        return status_code(&err);
    }

    // SAFETY: the caller guarantees `buffer` is valid for `capacity` bytes,
    // and `format_now` only succeeds when `capacity >= TIMESTAMP_CAPACITY`.
    unsafe {
        ptr::copy_nonoverlapping(local.as_ptr(), buffer.cast::<u8>(), TIMESTAMP_CAPACITY);
    }
    SHAPEPROBE_OK
}
