//! IMF-fixdate formatting for the `Expires` attribute.
//!
//! Format: `Sun, 06 Nov 1994 08:49:37 GMT`

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Broken-down UTC time, printed as an HTTP-date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpDate {
    year: i64,
    /// 1-12
    month: u8,
    /// 1-31
    day: u8,
    /// 0 = Sunday
    weekday: u8,
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl HttpDate {
    /// Create from a point in time. Sub-second precision is dropped, rounding
    /// toward the earlier second (also before the epoch).
    pub fn from_system_time(time: SystemTime) -> Self {
        let secs: i128 = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i128::from(after.as_secs()),
            Err(err) => {
                let before = err.duration();
                let whole = i128::from(before.as_secs());
                if before.subsec_nanos() > 0 {
                    -whole - 1
                } else {
                    -whole
                }
            }
        };
        // Platform SystemTime ranges may exceed i64 seconds; clamp.
        let secs = secs.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
        Self::from_unix_secs(secs)
    }

    /// Create from seconds relative to the Unix epoch.
    pub fn from_unix_secs(secs: i64) -> Self {
        let days = secs.div_euclid(86400);
        let day_secs = secs.rem_euclid(86400);

        let (year, month, day) = civil_from_days(days);

        Self {
            year,
            month,
            day,
            // 1970-01-01 was a Thursday
            weekday: (days + 4).rem_euclid(7) as u8,
            hours: (day_secs / 3600) as u8,
            minutes: ((day_secs % 3600) / 60) as u8,
            seconds: (day_secs % 60) as u8,
        }
    }
}

impl From<SystemTime> for HttpDate {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

impl fmt::Display for HttpDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {:02} {} ",
            WEEKDAYS[self.weekday as usize],
            self.day,
            MONTHS[self.month as usize - 1]
        )?;
        if self.year < 0 {
            write!(f, "-{:04}", -self.year)?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            " {:02}:{:02}:{:02} GMT",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Convert days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
