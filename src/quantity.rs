//! The generic dimensioned quantity
//!
//! [`Quantity<D>`] wraps a single `f64` magnitude expressed in the base unit
//! of its dimension `D`.  Same-dimension arithmetic, scalar scaling and
//! comparisons are generic over `D`; multiplication and division between
//! quantities compute the result dimension from the exponents, so `Speed *
//! Time` is a `Length` and adding a `Length` to a `Time` does not compile.
//!
//! Comparisons are exact over the stored scalar, with no tolerance applied.
//! Use the [`approx`] traits implemented here when a fuzzy comparison is
//! wanted.  NaN and infinities are not special-cased anywhere; they propagate
//! per ordinary IEEE semantics.

use core::any::type_name;
use core::f64::consts::TAU;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, relative_eq};
use num_traits::{Bounded, NumCast, Zero};
use thiserror::Error;
use typenum::{Diff, Integer, Negate, Sum};

use crate::dimension::{Dim, Reduce};
use crate::trig;

/// Error from [`Quantity::try_value_as`] when the magnitude does not fit the
/// requested numeric type.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("magnitude {value} is not representable as {target}")]
pub struct NarrowingError {
    pub value: f64,
    pub target: &'static str,
}

/// A physical quantity of dimension `D`, stored in that dimension's base
/// unit.
///
/// Plain value type: every operator yields a new instance, compound
/// assignment mutates only the receiver, and copies never alias.
pub struct Quantity<D> {
    raw: f64,
    _dim: PhantomData<D>,
}

impl<D> Quantity<D> {
    /// Wraps a raw base-unit magnitude.
    ///
    /// A length created with `1.0` is one meter long; prefer the named
    /// factories on the unit aliases for anything not already in base units.
    pub const fn from_value(raw: f64) -> Self {
        Self {
            raw,
            _dim: PhantomData,
        }
    }

    /// The zero-magnitude quantity of this dimension.
    pub const ZERO: Self = Self::from_value(0.0);

    /// The largest representable magnitude, as an "effectively infinite"
    /// sentinel.
    pub const MAX: Self = Self::from_value(f64::MAX);

    /// The raw base-unit magnitude.
    pub const fn value(self) -> f64 {
        self.raw
    }

    /// The magnitude narrowed to `T`, clamping when it does not fit.
    ///
    /// Narrowing a magnitude outside `T`'s range completes anyway with the
    /// nearest bound of `T` (zero for NaN) and reports the loss through a
    /// `tracing` warning; the warning is compiled out without the
    /// `narrowing-checks` feature.  Use [`Quantity::try_value_as`] to treat
    /// the loss as an error instead.
    pub fn value_as<T>(self) -> T
    where
        T: NumCast + Bounded,
    {
        match T::from(self.raw) {
            Some(v) => v,
            None => {
                #[cfg(feature = "narrowing-checks")]
                tracing::warn!(
                    magnitude = self.raw,
                    requested = type_name::<T>(),
                    "quantity magnitude is not representable in the requested type, clamping"
                );
                if self.raw > 0.0 {
                    T::max_value()
                } else if self.raw < 0.0 {
                    T::min_value()
                } else {
                    // NaN compares false both ways.
                    T::from(0u8).unwrap_or_else(T::min_value)
                }
            }
        }
    }

    /// The magnitude narrowed to `T`, or an error when it does not fit.
    pub fn try_value_as<T>(self) -> Result<T, NarrowingError>
    where
        T: NumCast,
    {
        T::from(self.raw).ok_or(NarrowingError {
            value: self.raw,
            target: type_name::<T>(),
        })
    }

    /// Magnitude with the sign stripped.
    pub fn abs(self) -> Self {
        if self >= Self::ZERO { self } else { -self }
    }

    /// Sine of the magnitude taken as a phase fraction of a full turn, so a
    /// magnitude of `1.0` is one revolution.
    ///
    /// The angle family stores turn fractions, which lets it use this
    /// directly; on other dimensions the phase reading is the caller's
    /// business.
    pub fn sin(self) -> f64 {
        (self.raw * TAU).sin()
    }

    /// Cosine of the magnitude taken as a phase fraction of a full turn.
    pub fn cos(self) -> f64 {
        (self.raw * TAU).cos()
    }

    /// Like [`Quantity::sin`] but usable in constant expressions, via the
    /// approximation in [`crate::trig`].
    pub const fn sin_approx(self) -> f64 {
        trig::sin(self.raw * TAU)
    }

    /// Like [`Quantity::cos`] but usable in constant expressions.
    pub const fn cos_approx(self) -> f64 {
        trig::cos(self.raw * TAU)
    }
}

// Manual impls of the usual value-type traits: deriving them would put
// spurious bounds on the phantom dimension parameter.

impl<D> Clone for Quantity<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Quantity<D> {}

impl<D> Default for Quantity<D> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<D> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.raw.partial_cmp(&other.raw)
    }
}

impl<Kg, M, S> fmt::Debug for Quantity<Dim<Kg, M, S>>
where
    Kg: Integer,
    M: Integer,
    S: Integer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quantity<kg^{} m^{} s^{}>({})",
            Kg::I32,
            M::I32,
            S::I32,
            self.raw
        )
    }
}

// Same-dimension arithmetic.

impl<D> Add for Quantity<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_value(self.raw + rhs.raw)
    }
}

impl<D> AddAssign for Quantity<D> {
    fn add_assign(&mut self, rhs: Self) {
        self.raw += rhs.raw;
    }
}

impl<D> Sub for Quantity<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_value(self.raw - rhs.raw)
    }
}

impl<D> SubAssign for Quantity<D> {
    fn sub_assign(&mut self, rhs: Self) {
        self.raw -= rhs.raw;
    }
}

impl<D> Neg for Quantity<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_value(-self.raw)
    }
}

/// IEEE remainder of two same-dimension quantities.  There is deliberately no
/// cross-dimension remainder.
impl<D> Rem for Quantity<D> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self::from_value(self.raw % rhs.raw)
    }
}

impl<D> RemAssign for Quantity<D> {
    fn rem_assign(&mut self, rhs: Self) {
        self.raw %= rhs.raw;
    }
}

impl<D> Zero for Quantity<D> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.raw == 0.0
    }
}

// Scalar scaling.  Scalar operands are always plain `f64`, never another
// quantity, so these never collide with the dimension-combining operators.

impl<D> Mul<f64> for Quantity<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_value(self.raw * rhs)
    }
}

impl<D> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;

    fn mul(self, rhs: Quantity<D>) -> Quantity<D> {
        Quantity::from_value(self * rhs.raw)
    }
}

impl<D> MulAssign<f64> for Quantity<D> {
    fn mul_assign(&mut self, rhs: f64) {
        self.raw *= rhs;
    }
}

impl<D> Div<f64> for Quantity<D> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_value(self.raw / rhs)
    }
}

impl<D> DivAssign<f64> for Quantity<D> {
    fn div_assign(&mut self, rhs: f64) {
        self.raw /= rhs;
    }
}

/// A scalar divided by a quantity inverts the dimension: `1.0 / Time` is a
/// `Frequency`.
impl<Kg, M, S> Div<Quantity<Dim<Kg, M, S>>> for f64
where
    Kg: Neg,
    M: Neg,
    S: Neg,
{
    type Output = Quantity<Dim<Negate<Kg>, Negate<M>, Negate<S>>>;

    fn div(self, rhs: Quantity<Dim<Kg, M, S>>) -> Self::Output {
        Quantity::from_value(self / rhs.raw)
    }
}

// Dimension-combining multiplication and division.

impl<Kg1, M1, S1, Kg2, M2, S2> Mul<Quantity<Dim<Kg2, M2, S2>>> for Quantity<Dim<Kg1, M1, S1>>
where
    Kg1: Add<Kg2>,
    M1: Add<M2>,
    S1: Add<S2>,
{
    type Output = Quantity<Dim<Sum<Kg1, Kg2>, Sum<M1, M2>, Sum<S1, S2>>>;

    fn mul(self, rhs: Quantity<Dim<Kg2, M2, S2>>) -> Self::Output {
        Quantity::from_value(self.raw * rhs.raw)
    }
}

/// Division subtracts exponents.  When the operands share a dimension the
/// quotient collapses to bare `f64` through [`Reduce`] rather than becoming a
/// dimensionless quantity: a ratio of two lengths is just a number.
impl<Kg1, M1, S1, Kg2, M2, S2> Div<Quantity<Dim<Kg2, M2, S2>>> for Quantity<Dim<Kg1, M1, S1>>
where
    Kg1: Sub<Kg2>,
    M1: Sub<M2>,
    S1: Sub<S2>,
    Dim<Diff<Kg1, Kg2>, Diff<M1, M2>, Diff<S1, S2>>: Reduce,
{
    type Output = <Dim<Diff<Kg1, Kg2>, Diff<M1, M2>, Diff<S1, S2>> as Reduce>::Output;

    fn div(self, rhs: Quantity<Dim<Kg2, M2, S2>>) -> Self::Output {
        <Dim<Diff<Kg1, Kg2>, Diff<M1, M2>, Diff<S1, S2>> as Reduce>::reduce(self.raw / rhs.raw)
    }
}

// Fuzzy comparison support, for callers who need a tolerance on top of the
// exact operators.

impl<D> AbsDiffEq for Quantity<D> {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.raw.abs_diff_eq(&other.raw, epsilon)
    }
}

impl<D> RelativeEq for Quantity<D> {
    fn default_max_relative() -> Self::Epsilon {
        f64::EPSILON
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        relative_eq!(
            self.raw,
            other.raw,
            epsilon = epsilon,
            max_relative = max_relative
        )
    }
}
