//! Unit constants for literal-like construction
//!
//! Each constant is the quantity worth one of the named unit, so multiplying
//! a bare number by it reads like a suffixed literal:
//!
//! ```
//! use typed_units::consts::{DEG, KM, S};
//!
//! let leg = 1.5 * KM;
//! let pace = leg / (340.0 * S);
//! let bearing = 45.0 * DEG;
//! assert_eq!(leg.to_meters(), 1500.0);
//! assert_eq!(bearing.to_degrees(), 45.0);
//! ```
//!
//! This is pure sugar over the named factories; there is nothing here a
//! factory call cannot do.

use crate::units::{Angle, Frequency, Length, Mass, Speed, Surface, Time};

// Lengths
pub const MM: Length = Length::from_millimeters(1.0);
pub const CM: Length = Length::from_centimeters(1.0);
pub const DM: Length = Length::from_decimeters(1.0);
pub const M: Length = Length::from_meters(1.0);
pub const KM: Length = Length::from_kilometers(1.0);

// Surfaces
pub const MM2: Surface = Surface::from_square_millimeters(1.0);
pub const CM2: Surface = Surface::from_square_centimeters(1.0);
pub const DM2: Surface = Surface::from_square_decimeters(1.0);
pub const M2: Surface = Surface::from_square_meters(1.0);

// Masses
pub const G: Mass = Mass::from_grams(1.0);
pub const KG: Mass = Mass::from_kilograms(1.0);

// Durations
pub const NS: Time = Time::from_nanoseconds(1.0);
pub const US: Time = Time::from_microseconds(1.0);
pub const MS: Time = Time::from_milliseconds(1.0);
pub const S: Time = Time::from_seconds(1.0);
pub const MIN: Time = Time::from_minutes(1.0);
pub const HR: Time = Time::from_hours(1.0);

// Speeds
pub const MM_S: Speed = Speed::from_millimeters_per_second(1.0);
pub const CM_S: Speed = Speed::from_centimeters_per_second(1.0);
pub const DM_S: Speed = Speed::from_decimeters_per_second(1.0);
pub const M_S: Speed = Speed::from_meters_per_second(1.0);
pub const KPH: Speed = Speed::from_kilometers_per_hour(1.0);

// Angles
pub const MRAD: Angle = Angle::from_milliradians(1.0);
pub const RAD: Angle = Angle::from_radians(1.0);
pub const DEG: Angle = Angle::from_degrees(1.0);
pub const TURN: Angle = Angle::from_turns(1.0);

// Frequencies and angular speeds
pub const HZ: Frequency = Frequency::from_hertz(1.0);
pub const MRAD_S: Frequency = Frequency::from_milliradians_per_second(1.0);
pub const RAD_S: Frequency = Frequency::from_radians_per_second(1.0);
pub const DEG_S: Frequency = Frequency::from_degrees_per_second(1.0);
