//! Compile-time dimensional analysis for physical quantities.
//!
//! Represents lengths, durations, masses, angles, speeds, frequencies and
//! surfaces as mutually incompatible types, so that dimensionally
//! inconsistent expressions are rejected by the compiler instead of producing
//! silently wrong numbers at run time.  A [`Quantity`] carries its dimension
//! as three type-level integer exponents (mass, length, time); multiplying or
//! dividing quantities computes the exponents of the result type, so a
//! `Speed` times a `Time` *is* a `Length` as far as the type checker is
//! concerned.
//!
//! ```
//! use typed_units::{Length, Speed, Time};
//!
//! let distance = Length::from_kilometers(1.2);
//! let elapsed = Time::from_minutes(5.0);
//! let pace: Speed = distance / elapsed;
//! assert_eq!(pace.to_meters_per_second(), 4.0);
//!
//! // A ratio of same-dimension quantities is a plain number.
//! let ratio: f64 = Time::from_seconds(10.0) / Time::from_seconds(2.0);
//! assert_eq!(ratio, 5.0);
//! ```
//!
//! Mixing dimensions does not compile:
//!
//! ```compile_fail
//! use typed_units::{Length, Time};
//!
//! let _ = Length::from_meters(1.0) + Time::from_seconds(1.0);
//! ```
//!
//! ```compile_fail
//! use typed_units::{Angle, Time};
//!
//! // 1/s is a Frequency, not an Angle.
//! let _: Angle = 1.0 / Time::from_seconds(1.0);
//! ```
//!
//! Magnitudes are stored in the dimension's base unit (SI base, turn
//! fractions for angles): factories normalize on the way in, accessors
//! denormalize on the way out, and [`consts`] provides unit constants so
//! `5.0 * M` reads like a suffixed literal.  Comparisons are exact over the
//! stored `f64`; apply a tolerance through the [`approx`] traits where
//! needed.
//!
//! # Feature flags
//!
//! - `narrowing-checks` (default) logs a `tracing` warning when
//!   [`Quantity::value_as`] narrows a magnitude that does not fit the target
//!   type

pub mod consts;
pub mod dimension;
mod display;
mod instant;
mod quantity;
pub mod trig;
mod units;

pub use instant::{TimePoint, sleep};
pub use quantity::{NarrowingError, Quantity};
pub use units::{
    Angle, AngularSpeed, Dimensionless, Distance, Duration, Frequency, Length, Mass, Speed,
    Surface, Time, TimeError, atan2, sqrt,
};
