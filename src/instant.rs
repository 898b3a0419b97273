//! Wall-clock instants that interoperate with time quantities
//!
//! [`TimePoint`] wraps the host monotonic clock.  Subtracting two points
//! yields a signed [`Time`] quantity; adding or subtracting a [`Time`] shifts
//! a point.  Shifts that the platform clock cannot represent are dropped with
//! a warning rather than panicking.

use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::time::{Duration, Instant};

use tracing::warn;

use crate::units::Time;

const CENTURY: Duration = Duration::from_secs(100 * 365 * 24 * 3600);

/// A point on the monotonic clock.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct TimePoint(Instant);

impl TimePoint {
    /// The current instant.
    pub fn now() -> Self {
        Self(Instant::now())
    }

    /// A point far before now, as a "before everything" sentinel.
    ///
    /// The platform clock may not reach back a full century (on Linux the
    /// monotonic clock starts at boot), so this backs off to the largest
    /// reachable offset.
    pub fn distant_past() -> Self {
        let now = Instant::now();
        let past = [CENTURY, Duration::from_secs(24 * 3600), Duration::ZERO]
            .iter()
            .find_map(|d| now.checked_sub(*d));
        Self(past.unwrap_or(now))
    }

    /// A point a century after now, as an "after everything" sentinel.
    pub fn distant_future() -> Self {
        let now = Instant::now();
        Self(now.checked_add(CENTURY).unwrap_or(now))
    }

    /// The underlying `std::time::Instant`.
    pub fn into_inner(self) -> Instant {
        self.0
    }

    fn shifted(self, offset: Time) -> Self {
        let Ok(magnitude) = offset.abs().try_to_std() else {
            warn!(
                seconds = offset.to_seconds(),
                "time point shift is not representable, leaving the point unchanged"
            );
            return self;
        };
        let inner = if offset >= Time::ZERO {
            self.0.checked_add(magnitude)
        } else {
            self.0.checked_sub(magnitude)
        };
        match inner {
            Some(instant) => Self(instant),
            None => {
                warn!(
                    seconds = offset.to_seconds(),
                    "time point shift overflows the platform clock, leaving the point unchanged"
                );
                self
            }
        }
    }
}

impl From<Instant> for TimePoint {
    fn from(instant: Instant) -> Self {
        Self(instant)
    }
}

/// The signed duration from `rhs` to `self`.
impl Sub for TimePoint {
    type Output = Time;

    fn sub(self, rhs: Self) -> Time {
        if self.0 >= rhs.0 {
            Time::from_std(self.0 - rhs.0)
        } else {
            -Time::from_std(rhs.0 - self.0)
        }
    }
}

impl Add<Time> for TimePoint {
    type Output = Self;

    fn add(self, offset: Time) -> Self {
        self.shifted(offset)
    }
}

impl Sub<Time> for TimePoint {
    type Output = Self;

    fn sub(self, offset: Time) -> Self {
        self.shifted(-offset)
    }
}

impl AddAssign<Time> for TimePoint {
    fn add_assign(&mut self, offset: Time) {
        *self = self.shifted(offset);
    }
}

impl SubAssign<Time> for TimePoint {
    fn sub_assign(&mut self, offset: Time) {
        *self = self.shifted(-offset);
    }
}

/// Blocks the calling thread for the given duration.  Zero, negative and
/// non-finite durations return immediately.
pub fn sleep(duration: Time) {
    if let Ok(delay) = duration.try_to_std() {
        std::thread::sleep(delay);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{TimePoint, sleep};
    use crate::units::Time;

    #[test]
    fn shifting_and_differencing() {
        let t0 = TimePoint::now();
        let t1 = t0 + Time::from_milliseconds(250.0);
        assert!(t1 > t0);
        assert_relative_eq!((t1 - t0).to_milliseconds(), 250.0, max_relative = 1e-9);
        // The reverse difference is negative.
        assert_relative_eq!((t0 - t1).to_milliseconds(), -250.0, max_relative = 1e-9);
        assert_eq!(t1 - Time::from_milliseconds(250.0), t0);
    }

    #[test]
    fn compound_shift() {
        let t0 = TimePoint::now();
        let mut t = t0;
        t += Time::from_seconds(2.0);
        t -= Time::from_seconds(1.0);
        assert_relative_eq!((t - t0).to_seconds(), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn sentinels_bracket_now() {
        let now = TimePoint::now();
        assert!(TimePoint::distant_past() <= now);
        assert!(TimePoint::distant_future() > now);
    }

    #[test]
    fn unrepresentable_shift_is_ignored() {
        let t0 = TimePoint::now();
        assert_eq!(t0 + Time::from_seconds(f64::NAN), t0);
    }

    #[test]
    fn negative_sleep_returns_immediately() {
        sleep(Time::from_seconds(-1.0));
    }
}
