//! Human-scale text rendering
//!
//! Pure presentation on top of the unit accessors: each impl picks a display
//! unit from the magnitude so a reading stays in a comfortable range, then
//! formats value and symbol.  Nothing here participates in the dimensional
//! algebra.

use core::fmt;

use crate::units::{Dimensionless, Frequency, Length, Mass, Speed, Surface, Time};

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.to_meters();
        if m.abs() >= 1.0 {
            write!(f, "{m} m")
        } else if m.abs() >= 1e-2 {
            write!(f, "{} cm", self.to_centimeters())
        } else {
            write!(f, "{} mm", self.to_millimeters())
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m_s = self.to_meters_per_second();
        if m_s.abs() >= 1.0 {
            write!(f, "{m_s} m/s")
        } else if m_s.abs() >= 1e-2 {
            write!(f, "{} cm/s", self.to_centimeters_per_second())
        } else {
            write!(f, "{} mm/s", self.to_millimeters_per_second())
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_seconds();
        if s.abs() >= 3600.0 {
            write!(f, "{} h", self.to_hours())
        } else if s.abs() >= 60.0 {
            write!(f, "{} min", self.to_minutes())
        } else if s.abs() >= 1.0 {
            write!(f, "{s} s")
        } else if s.abs() >= 1e-3 {
            write!(f, "{} ms", self.to_milliseconds())
        } else if s.abs() >= 1e-6 {
            write!(f, "{} us", self.to_microseconds())
        } else {
            write!(f, "{} ns", self.to_nanoseconds())
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m²", self.to_square_meters())
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.to_kilograms())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s⁻¹", self.to_hertz())
    }
}

/// A dimensionless value prints as its bare number (the turn fraction, for
/// angles).
impl fmt::Display for Dimensionless {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use crate::units::{Angle, Frequency, Length, Mass, Speed, Surface, Time};

    #[test]
    fn length_scales_with_magnitude() {
        assert_eq!(format!("{}", Length::from_meters(2.5)), "2.5 m");
        assert_eq!(format!("{}", Length::from_meters(0.25)), "25 cm");
        assert_eq!(format!("{}", Length::from_meters(0.002)), "2 mm");
        assert_eq!(format!("{}", Length::from_meters(-3.0)), "-3 m");
    }

    #[test]
    fn time_scales_with_magnitude() {
        assert_eq!(format!("{}", Time::from_hours(2.0)), "2 h");
        assert_eq!(format!("{}", Time::from_seconds(90.0)), "1.5 min");
        assert_eq!(format!("{}", Time::from_seconds(2.0)), "2 s");
        assert_eq!(format!("{}", Time::from_milliseconds(5.0)), "5 ms");
        assert_eq!(format!("{}", Time::from_microseconds(5.0)), "5 us");
        assert_eq!(format!("{}", Time::from_nanoseconds(5.0)), "5 ns");
    }

    #[test]
    fn fixed_unit_renderings() {
        assert_eq!(format!("{}", Speed::from_meters_per_second(1.5)), "1.5 m/s");
        assert_eq!(format!("{}", Surface::from_square_meters(2.0)), "2 m²");
        assert_eq!(format!("{}", Mass::from_kilograms(70.0)), "70 kg");
        assert_eq!(format!("{}", Frequency::from_hertz(50.0)), "50 s⁻¹");
        assert_eq!(format!("{}", Angle::from_turns(0.5)), "0.5");
    }
}
