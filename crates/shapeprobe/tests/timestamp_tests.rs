//! Timestamp formatter tests against the live clock

use shapeprobe::ffi::{shapeprobe_format_now, SHAPEPROBE_ERR_BUFFER_TOO_SMALL, SHAPEPROBE_OK};
use shapeprobe::*;

/// Check `YYYY-MM-DD HH:MM:SS` digit by digit.
fn matches_layout(text: &str) -> bool {
    text.len() == TIMESTAMP_LEN
        && text.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            10 => b == b' ',
            13 | 16 => b == b':',
            _ => b.is_ascii_digit(),
        })
}

#[test]
fn test_layout_checker() {
    assert!(matches_layout("2024-03-09 07:05:01"));
    assert!(!matches_layout("2024-3-9 7:5:1"));
    assert!(!matches_layout("2024-03-09T07:05:01"));
}

// ═══════════════════════════════════════════════════════════════════════
// format_now
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_format_now_twenty_bytes() {
    let mut buffer = [0xFFu8; 20];
    let text = format_now(&mut buffer).unwrap().to_string();

    assert!(matches_layout(&text), "unexpected layout: {text:?}");
    assert_eq!(buffer[19], 0);
    assert_eq!(&buffer[..19], text.as_bytes());
}

#[test]
fn test_format_now_capacity_five() {
    let mut buffer = [0xFFu8; 5];
    let err = format_now(&mut buffer).unwrap_err();

    assert!(matches!(
        err,
        FormatError::BufferTooSmall {
            required: 20,
            capacity: 5
        }
    ));
    assert!(buffer.iter().all(|&b| b == 0xFF));
}

#[test]
fn test_format_now_nineteen_bytes_is_too_small() {
    let mut buffer = [0u8; 19];
    assert!(matches!(
        format_now(&mut buffer),
        Err(FormatError::BufferTooSmall { .. })
    ));
}

#[test]
fn test_format_now_is_non_decreasing() {
    let mut first = [0u8; TIMESTAMP_CAPACITY];
    let mut second = [0u8; TIMESTAMP_CAPACITY];

    let a = format_now(&mut first).unwrap();
    let b = format_now(&mut second).unwrap();

    // Fixed-width, most-significant-first: byte order is time order.
    assert!(a <= b, "{a} came after {b}");
}

#[test]
fn test_snapshot_matches_display() {
    let now = Timestamp::now().unwrap();
    let mut buffer = [0u8; TIMESTAMP_CAPACITY];

    assert_eq!(now.write_into(&mut buffer).unwrap(), now.to_string());
    assert!((1..=12).contains(&now.month()));
    assert!(now.hour() < 24);
}

// ═══════════════════════════════════════════════════════════════════════
// C ABI
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_ffi_writes_into_uninitialized_buffer() {
    let mut buffer = std::mem::MaybeUninit::<[std::ffi::c_char; 32]>::uninit();
    let status = unsafe { shapeprobe_format_now(buffer.as_mut_ptr().cast(), 32) };
    assert_eq!(status, SHAPEPROBE_OK);

    // Only the first 20 bytes are initialized now.
    let bytes = unsafe { std::slice::from_raw_parts(buffer.as_ptr().cast::<u8>(), 20) };
    let text = std::str::from_utf8(&bytes[..19]).unwrap();
    assert!(matches_layout(text));
    assert_eq!(bytes[19], 0);
}

#[test]
fn test_ffi_rejects_small_buffer() {
    let mut buffer = [1 as std::ffi::c_char; 5];
    let status = unsafe { shapeprobe_format_now(buffer.as_mut_ptr(), buffer.len()) };

    assert_eq!(status, SHAPEPROBE_ERR_BUFFER_TOO_SMALL);
    assert!(buffer.iter().all(|&b| b == 1));
}
