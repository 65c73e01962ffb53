//! Wall-clock timestamps rendered into caller-owned buffers
//!
//! The layout is fixed: `YYYY-MM-DD HH:MM:SS`, 19 bytes of ASCII followed
//! by a NUL terminator. Callers supply the buffer; nothing here allocates.

use std::fmt;

use chrono::{Datelike, Local, Timelike};
use tracing::trace;

use crate::error::{FormatError, Result};

/// Length of the rendered text, terminator excluded.
pub const TIMESTAMP_LEN: usize = 19;

/// Buffer capacity needed to hold the text and its NUL terminator.
pub const TIMESTAMP_CAPACITY: usize = TIMESTAMP_LEN + 1;

const MAX_YEAR: i32 = 9999;

/// A snapshot of local wall-clock time.
///
/// Fields are ordered from most to least significant, so the derived
/// ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Timestamp {
    /// Read the local clock once.
    ///
    /// Consecutive reads are non-decreasing only while the UTC offset and
    /// the system clock hold steady. At a daylight-saving fall-back, or
    /// after the clock is stepped backwards, a later read renders an
    /// earlier wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns `YearOutOfRange` if the local year is outside 0..=9999.
    pub fn now() -> Result<Self> {
        let stamp = Self::from_datetime(&Local::now())?;
        trace!(timestamp = %stamp, "read local clock");
        Ok(stamp)
    }

    /// Take a snapshot of any chrono date-time.
    ///
    /// # Errors
    ///
    /// Returns `YearOutOfRange` if the year is outside 0..=9999.
    pub fn from_datetime<T: Datelike + Timelike>(datetime: &T) -> Result<Self> {
        let year = datetime.year();
        if !(0..=MAX_YEAR).contains(&year) {
            return Err(FormatError::YearOutOfRange(year));
        }

        // chrono keeps month/day/hour/minute/second within two digits;
        // leap seconds live in the nanosecond field.
        Ok(Self {
            year: year as u16,
            month: datetime.month() as u8,
            day: datetime.day() as u8,
            hour: datetime.hour() as u8,
            minute: datetime.minute() as u8,
            second: datetime.second() as u8,
        })
    }

    /// Four-digit year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month, 1-12
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month, 1-31
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Hour, 0-23
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute, 0-59
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second, 0-59
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Write the timestamp and a NUL terminator into `buffer`.
    ///
    /// Returns the text part (without the terminator). Bytes past
    /// [`TIMESTAMP_CAPACITY`] are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `BufferTooSmall` if `buffer` is shorter than
    /// [`TIMESTAMP_CAPACITY`]; nothing is written in that case.
    pub fn write_into<'b>(&self, buffer: &'b mut [u8]) -> Result<&'b str> {
        check_capacity(buffer.len())?;

        buffer[..TIMESTAMP_LEN].copy_from_slice(&self.render());
        buffer[TIMESTAMP_LEN] = 0;

        match std::str::from_utf8(&buffer[..TIMESTAMP_LEN]) {
            Ok(text) => Ok(text),
            Err(_) => unreachable!("rendered timestamps are ASCII"),
        }
    }

    /// Render into a fixed-size array of ASCII bytes.
    pub fn render(&self) -> [u8; TIMESTAMP_LEN] {
        let mut out = *b"0000-00-00 00:00:00";
        put_digits(&mut out[0..4], u32::from(self.year));
        put_digits(&mut out[5..7], u32::from(self.month));
        put_digits(&mut out[8..10], u32::from(self.day));
        put_digits(&mut out[11..13], u32::from(self.hour));
        put_digits(&mut out[14..16], u32::from(self.minute));
        put_digits(&mut out[17..19], u32::from(self.second));
        out
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Read the local clock and write `YYYY-MM-DD HH:MM:SS\0` into `buffer`.
///
/// The capacity is `buffer.len()`, which must be at least
/// [`TIMESTAMP_CAPACITY`]. The text is local wall-clock time, so the
/// ordering caveats of [`Timestamp::now`] apply: two calls in a row are
/// non-decreasing except across an offset change or a clock step.
///
/// # Errors
///
/// Returns `BufferTooSmall` before reading the clock if the buffer can't
/// hold the output, and `YearOutOfRange` for years outside 0..=9999.
pub fn format_now(buffer: &mut [u8]) -> Result<&str> {
    check_capacity(buffer.len())?;
    Timestamp::now()?.write_into(buffer)
}

fn check_capacity(capacity: usize) -> Result<()> {
    if capacity < TIMESTAMP_CAPACITY {
        return Err(FormatError::BufferTooSmall {
            required: TIMESTAMP_CAPACITY,
            capacity,
        });
    }
    Ok(())
}

/// Write `value` as zero-padded decimal filling `slot`.
fn put_digits(slot: &mut [u8], mut value: u32) {
    for byte in slot.iter_mut().rev() {
        *byte = b'0' + (value % 10) as u8;
        value /= 10;
    }
}
