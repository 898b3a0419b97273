//! Unit vocabularies for the recognized dimensions
//!
//! Each physical unit the crate knows by name is a type alias of
//! [`Quantity`] at a concrete dimension, refined with inherent factories and
//! accessors.  Factories normalize into the dimension's base unit on
//! construction, accessors denormalize on read, and every scale factor is the
//! exact inverse of its counterpart.
//!
//! Base units are the SI base: kilograms, meters, seconds.  The dimensionless
//! family stores turn fractions (1.0 = one revolution) and the frequency
//! family stores hertz, which keeps `1.0 / Time == Frequency` and the generic
//! phase trig coherent; radian factories and accessors carry the 2π factor.

use core::f64::consts::TAU;

use thiserror::Error;

use crate::dimension::{
    DimFrequency, DimLength, DimMass, DimNone, DimSpeed, DimSurface, DimTime,
};
use crate::quantity::Quantity;

/// A pure number.  Also represents an angle, stored as a turn fraction.
pub type Dimensionless = Quantity<DimNone>;

/// An angle, stored as a fraction of a full turn.
pub type Angle = Dimensionless;

/// A length, stored in meters.
pub type Length = Quantity<DimLength>;

/// Synonym for [`Length`].
pub type Distance = Length;

/// A duration, stored in seconds.
pub type Time = Quantity<DimTime>;

/// Synonym for [`Time`].
pub type Duration = Time;

/// A mass, stored in kilograms.
pub type Mass = Quantity<DimMass>;

/// A speed, stored in meters per second.
pub type Speed = Quantity<DimSpeed>;

/// A surface area, stored in square meters.
pub type Surface = Quantity<DimSurface>;

/// A frequency, stored in hertz.  Also represents an angular speed, one hertz
/// being one turn per second.
pub type Frequency = Quantity<DimFrequency>;

/// Synonym for [`Frequency`].
pub type AngularSpeed = Frequency;

/// Error converting a [`Time`] into a `std::time::Duration`.
#[derive(Error, Debug)]
pub enum TimeError {
    #[error("duration is negative: {seconds} s")]
    Negative { seconds: f64 },
    #[error("duration is not representable as std::time::Duration")]
    Unrepresentable(#[from] std::time::TryFromFloatSecsError),
}

impl Length {
    pub const fn from_millimeters(mm: f64) -> Self {
        Self::from_value(mm / 1e3)
    }

    pub const fn from_centimeters(cm: f64) -> Self {
        Self::from_value(cm / 1e2)
    }

    pub const fn from_decimeters(dm: f64) -> Self {
        Self::from_value(dm / 10.0)
    }

    pub const fn from_meters(m: f64) -> Self {
        Self::from_value(m)
    }

    pub const fn from_kilometers(km: f64) -> Self {
        Self::from_value(km * 1e3)
    }

    pub const fn to_millimeters(self) -> f64 {
        self.value() * 1e3
    }

    pub const fn to_centimeters(self) -> f64 {
        self.value() * 1e2
    }

    pub const fn to_decimeters(self) -> f64 {
        self.value() * 10.0
    }

    pub const fn to_meters(self) -> f64 {
        self.value()
    }

    pub const fn to_kilometers(self) -> f64 {
        self.value() / 1e3
    }
}

impl Surface {
    pub const fn from_square_millimeters(mm2: f64) -> Self {
        Self::from_value(mm2 / 1e6)
    }

    pub const fn from_square_centimeters(cm2: f64) -> Self {
        Self::from_value(cm2 / 1e4)
    }

    pub const fn from_square_decimeters(dm2: f64) -> Self {
        Self::from_value(dm2 / 1e2)
    }

    pub const fn from_square_meters(m2: f64) -> Self {
        Self::from_value(m2)
    }

    pub const fn to_square_millimeters(self) -> f64 {
        self.value() * 1e6
    }

    pub const fn to_square_centimeters(self) -> f64 {
        self.value() * 1e4
    }

    pub const fn to_square_decimeters(self) -> f64 {
        self.value() * 1e2
    }

    pub const fn to_square_meters(self) -> f64 {
        self.value()
    }
}

impl Mass {
    pub const fn from_grams(g: f64) -> Self {
        Self::from_value(g / 1e3)
    }

    pub const fn from_kilograms(kg: f64) -> Self {
        Self::from_value(kg)
    }

    pub const fn to_grams(self) -> f64 {
        self.value() * 1e3
    }

    pub const fn to_kilograms(self) -> f64 {
        self.value()
    }
}

impl Time {
    pub const fn from_nanoseconds(ns: f64) -> Self {
        Self::from_value(ns / 1e9)
    }

    pub const fn from_microseconds(us: f64) -> Self {
        Self::from_value(us / 1e6)
    }

    pub const fn from_milliseconds(ms: f64) -> Self {
        Self::from_value(ms / 1e3)
    }

    pub const fn from_seconds(s: f64) -> Self {
        Self::from_value(s)
    }

    pub const fn from_minutes(min: f64) -> Self {
        Self::from_value(min * 60.0)
    }

    pub const fn from_hours(h: f64) -> Self {
        Self::from_value(h * 3600.0)
    }

    pub const fn to_nanoseconds(self) -> f64 {
        self.value() * 1e9
    }

    pub const fn to_microseconds(self) -> f64 {
        self.value() * 1e6
    }

    pub const fn to_milliseconds(self) -> f64 {
        self.value() * 1e3
    }

    pub const fn to_seconds(self) -> f64 {
        self.value()
    }

    pub const fn to_minutes(self) -> f64 {
        self.value() / 60.0
    }

    pub const fn to_hours(self) -> f64 {
        self.value() / 3600.0
    }

    /// Builds a duration from an integer nanosecond count, the native
    /// high-resolution interval representation.
    pub const fn from_nanos(ns: i64) -> Self {
        Self::from_nanoseconds(ns as f64)
    }

    /// The duration as an integer nanosecond count, rounded to nearest and
    /// saturating at the `i64` range.
    pub fn to_nanos(self) -> i64 {
        self.to_nanoseconds().round() as i64
    }

    /// Builds a duration from a `std::time::Duration`.
    pub fn from_std(d: std::time::Duration) -> Self {
        Self::from_seconds(d.as_secs_f64())
    }

    /// The duration as a `std::time::Duration`, which cannot represent
    /// negative or non-finite values.
    pub fn try_to_std(self) -> Result<std::time::Duration, TimeError> {
        let seconds = self.to_seconds();
        if seconds < 0.0 {
            return Err(TimeError::Negative { seconds });
        }
        Ok(std::time::Duration::try_from_secs_f64(seconds)?)
    }
}

impl Speed {
    pub const fn from_millimeters_per_second(mm_s: f64) -> Self {
        Self::from_value(mm_s / 1e3)
    }

    pub const fn from_centimeters_per_second(cm_s: f64) -> Self {
        Self::from_value(cm_s / 1e2)
    }

    pub const fn from_decimeters_per_second(dm_s: f64) -> Self {
        Self::from_value(dm_s / 10.0)
    }

    pub const fn from_meters_per_second(m_s: f64) -> Self {
        Self::from_value(m_s)
    }

    pub const fn from_kilometers_per_hour(km_h: f64) -> Self {
        Self::from_value(km_h / 3.6)
    }

    pub const fn to_millimeters_per_second(self) -> f64 {
        self.value() * 1e3
    }

    pub const fn to_centimeters_per_second(self) -> f64 {
        self.value() * 1e2
    }

    pub const fn to_decimeters_per_second(self) -> f64 {
        self.value() * 10.0
    }

    pub const fn to_meters_per_second(self) -> f64 {
        self.value()
    }

    pub const fn to_kilometers_per_hour(self) -> f64 {
        self.value() * 3.6
    }
}

impl Angle {
    pub const fn from_radians(rad: f64) -> Self {
        Self::from_value(rad / TAU)
    }

    pub const fn from_milliradians(mrad: f64) -> Self {
        Self::from_value(mrad / 1e3 / TAU)
    }

    pub const fn from_degrees(deg: f64) -> Self {
        Self::from_value(deg / 360.0)
    }

    pub const fn from_turns(turns: f64) -> Self {
        Self::from_value(turns)
    }

    pub const fn to_radians(self) -> f64 {
        self.value() * TAU
    }

    pub const fn to_milliradians(self) -> f64 {
        self.value() * 1e3 * TAU
    }

    pub const fn to_degrees(self) -> f64 {
        self.value() * 360.0
    }

    pub const fn to_turns(self) -> f64 {
        self.value()
    }

    /// The same angle reduced to `[0, 2π)`.
    ///
    /// An angle already in range comes back bit-identical, so the reduction
    /// is idempotent.  A negative remainder gets one turn added and a second
    /// modulo, which folds the upper boundary onto zero when the addition
    /// rounds up to a full turn.
    pub fn to_range_0_2pi(self) -> Self {
        let turn = Self::from_turns(1.0);
        let r = self % turn;
        if r < Self::ZERO { (r + turn) % turn } else { r }
    }

    /// The same angle reduced to `[-π, π)`.  An input of exactly π comes
    /// back as -π.
    pub fn to_range_minus_pi_pi(self) -> Self {
        let reduced = self.to_range_0_2pi();
        if reduced >= Self::from_turns(0.5) {
            reduced - Self::from_turns(1.0)
        } else {
            reduced
        }
    }
}

/// A dimensionless quantity decays to its plain numeric value.
impl From<Dimensionless> for f64 {
    fn from(q: Dimensionless) -> f64 {
        q.value()
    }
}

impl Frequency {
    pub const fn from_hertz(hz: f64) -> Self {
        Self::from_value(hz)
    }

    pub const fn from_radians_per_second(rad_s: f64) -> Self {
        Self::from_value(rad_s / TAU)
    }

    pub const fn from_milliradians_per_second(mrad_s: f64) -> Self {
        Self::from_value(mrad_s / 1e3 / TAU)
    }

    pub const fn from_degrees_per_second(deg_s: f64) -> Self {
        Self::from_value(deg_s / 360.0)
    }

    pub const fn to_hertz(self) -> f64 {
        self.value()
    }

    pub const fn to_radians_per_second(self) -> f64 {
        self.value() * TAU
    }

    pub const fn to_milliradians_per_second(self) -> f64 {
        self.value() * 1e3 * TAU
    }

    pub const fn to_degrees_per_second(self) -> f64 {
        self.value() * 360.0
    }
}

/// The angle of the vector `(x, y)`, in the plane both lengths live in.
pub fn atan2(y: Length, x: Length) -> Angle {
    Angle::from_radians(y.to_meters().atan2(x.to_meters()))
}

/// The edge length of a square with the given surface.
pub fn sqrt(s: Surface) -> Length {
    Length::from_meters(s.to_square_meters().sqrt())
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    use anyhow::Result;
    use approx::{assert_relative_eq, relative_eq};
    use quickcheck_macros::quickcheck;

    use super::{Angle, Frequency, Length, Mass, Speed, Surface, Time, TimeError, atan2, sqrt};

    // One test per named unit: construct from the external unit, read it
    // back, and check the placement of the scale factor against the base
    // magnitude.
    macro_rules! round_trip {
        ($($name:ident: $ty:ident, $from:ident / $to:ident, $per_base:expr;)*) => {
            $(paste::paste! {
                #[test]
                fn [<round_trip_ $name>]() {
                    let q = $ty::$from(2.5);
                    assert_relative_eq!(q.$to(), 2.5, max_relative = 1e-9);
                    assert_relative_eq!(q.value() * $per_base, 2.5, max_relative = 1e-9);
                }
            })*
        };
    }

    round_trip! {
        millimeters: Length, from_millimeters / to_millimeters, 1e3;
        centimeters: Length, from_centimeters / to_centimeters, 1e2;
        decimeters: Length, from_decimeters / to_decimeters, 10.0;
        meters: Length, from_meters / to_meters, 1.0;
        kilometers: Length, from_kilometers / to_kilometers, 1e-3;
        square_millimeters: Surface, from_square_millimeters / to_square_millimeters, 1e6;
        square_centimeters: Surface, from_square_centimeters / to_square_centimeters, 1e4;
        square_decimeters: Surface, from_square_decimeters / to_square_decimeters, 1e2;
        square_meters: Surface, from_square_meters / to_square_meters, 1.0;
        grams: Mass, from_grams / to_grams, 1e3;
        kilograms: Mass, from_kilograms / to_kilograms, 1.0;
        nanoseconds: Time, from_nanoseconds / to_nanoseconds, 1e9;
        microseconds: Time, from_microseconds / to_microseconds, 1e6;
        milliseconds: Time, from_milliseconds / to_milliseconds, 1e3;
        seconds: Time, from_seconds / to_seconds, 1.0;
        minutes: Time, from_minutes / to_minutes, 1.0 / 60.0;
        hours: Time, from_hours / to_hours, 1.0 / 3600.0;
        millimeters_per_second: Speed, from_millimeters_per_second / to_millimeters_per_second, 1e3;
        centimeters_per_second: Speed, from_centimeters_per_second / to_centimeters_per_second, 1e2;
        decimeters_per_second: Speed, from_decimeters_per_second / to_decimeters_per_second, 10.0;
        meters_per_second: Speed, from_meters_per_second / to_meters_per_second, 1.0;
        kilometers_per_hour: Speed, from_kilometers_per_hour / to_kilometers_per_hour, 3.6;
        radians: Angle, from_radians / to_radians, TAU;
        milliradians: Angle, from_milliradians / to_milliradians, 1e3 * TAU;
        degrees: Angle, from_degrees / to_degrees, 360.0;
        turns: Angle, from_turns / to_turns, 1.0;
        hertz: Frequency, from_hertz / to_hertz, 1.0;
        radians_per_second: Frequency, from_radians_per_second / to_radians_per_second, TAU;
        milliradians_per_second: Frequency, from_milliradians_per_second / to_milliradians_per_second, 1e3 * TAU;
        degrees_per_second: Frequency, from_degrees_per_second / to_degrees_per_second, 360.0;
    }

    #[test]
    fn concrete_scale_factors() {
        assert_relative_eq!(Length::from_kilometers(1.0).to_meters(), 1000.0);
        assert_relative_eq!(Length::from_centimeters(1.0).to_millimeters(), 10.0);
        assert_relative_eq!(Time::from_hours(1.0).to_minutes(), 60.0);
        assert_relative_eq!(Mass::from_grams(500.0).to_kilograms(), 0.5);
        assert_relative_eq!(Speed::from_kilometers_per_hour(36.0).to_meters_per_second(), 10.0);
    }

    #[quickcheck]
    fn round_trip_is_lossless_up_to_rounding(v: f64) -> bool {
        // Keep clear of the overflow region for the *1e3 units.
        if !v.is_finite() || v.abs() > 1e300 {
            return true;
        }
        relative_eq!(Length::from_kilometers(v).to_kilometers(), v, max_relative = 1e-9)
            && relative_eq!(Time::from_hours(v).to_hours(), v, max_relative = 1e-9)
            && relative_eq!(Angle::from_degrees(v).to_degrees(), v, max_relative = 1e-9)
    }

    #[test]
    fn hertz_and_radians_per_second_differ_by_tau() {
        assert_relative_eq!(Frequency::from_hertz(1.0).to_radians_per_second(), TAU);
        assert_relative_eq!(Frequency::from_radians_per_second(TAU).to_hertz(), 1.0);
    }

    #[test]
    fn angle_over_time_is_angular_speed() {
        let w: Frequency = Angle::from_radians(1.0) / Time::from_seconds(1.0);
        assert_relative_eq!(w.to_radians_per_second(), 1.0, max_relative = 1e-12);
        let a: Angle = Frequency::from_radians_per_second(1.0) * Time::from_seconds(1.0);
        assert_relative_eq!(a.to_radians(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn angle_normalization_lands_in_interval() {
        for rad in [-7.0, -PI, -0.1, 0.0, 0.1, PI, 5.5, 12.0, 100.0] {
            let reduced = Angle::from_radians(rad).to_range_0_2pi();
            assert!(
                reduced.to_radians() >= 0.0 && reduced.to_radians() < TAU,
                "{rad} reduced to {}",
                reduced.to_radians()
            );
        }
    }

    #[quickcheck]
    fn angle_normalization_is_idempotent(rad: f64) -> bool {
        if !rad.is_finite() {
            return true;
        }
        let once = Angle::from_radians(rad).to_range_0_2pi();
        once.to_range_0_2pi() == once
    }

    #[test]
    fn angle_upper_boundaries_fold_onto_lower() {
        assert_relative_eq!(Angle::from_radians(TAU).to_range_0_2pi().to_radians(), 0.0);
        assert_relative_eq!(
            Angle::from_radians(PI).to_range_minus_pi_pi().to_radians(),
            -PI,
            max_relative = 1e-12
        );
    }

    #[test]
    fn signed_angle_normalization() {
        assert_relative_eq!(
            Angle::from_radians(3.0 * FRAC_PI_2)
                .to_range_minus_pi_pi()
                .to_radians(),
            -FRAC_PI_2,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            Angle::from_radians(-FRAC_PI_2)
                .to_range_minus_pi_pi()
                .to_radians(),
            -FRAC_PI_2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn dimensionless_decays_to_scalar() {
        let ratio: f64 = Angle::from_turns(0.75).into();
        assert_eq!(ratio, 0.75);
    }

    #[test]
    fn angle_trig_reads_in_radians() {
        assert_relative_eq!(Angle::from_radians(FRAC_PI_2).sin(), 1.0);
        assert_relative_eq!(Angle::from_degrees(180.0).cos(), -1.0);
        assert!(Angle::from_degrees(180.0).sin_approx().abs() < 1e-10);
    }

    #[test]
    fn atan2_and_sqrt_helpers() {
        let a = atan2(Length::from_meters(1.0), Length::from_meters(1.0));
        assert_relative_eq!(a.to_degrees(), 45.0, max_relative = 1e-12);
        let edge = sqrt(Surface::from_square_meters(9.0));
        assert_relative_eq!(edge.to_meters(), 3.0);
    }

    #[test]
    fn nanosecond_interop() {
        let t = Time::from_nanos(1_500_000_000);
        assert_relative_eq!(t.to_seconds(), 1.5);
        assert_eq!(t.to_nanos(), 1_500_000_000);
        assert_eq!(Time::from_seconds(-2e-9).to_nanos(), -2);
    }

    #[test]
    fn std_duration_interop() -> Result<()> {
        let t = Time::from_std(std::time::Duration::from_millis(1500));
        assert_relative_eq!(t.to_seconds(), 1.5);
        assert_eq!(t.try_to_std()?, std::time::Duration::from_millis(1500));
        Ok(())
    }

    #[test]
    fn negative_duration_does_not_convert() {
        let err = Time::from_seconds(-1.0).try_to_std().unwrap_err();
        assert!(matches!(err, TimeError::Negative { .. }));
        assert!(Time::from_seconds(f64::NAN).try_to_std().is_err());
    }
}
