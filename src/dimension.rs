//! Type-level dimension vectors
//!
//! A dimension is a triple of signed integer exponents over the SI base
//! quantities mass, length and time, carried entirely in the type system via
//! [`typenum`] integers.  Dimensions have no runtime representation; they
//! exist so that the arithmetic on [`Quantity`](crate::Quantity) can compute
//! result dimensions at compile time and reject mismatched operands outright.

use core::marker::PhantomData;
use core::ops::BitAnd;

use typenum::{And, B0, B1, Eq, IsEqual, N1, P1, P2, Z0};

use crate::quantity::Quantity;

/// A physical dimension with the given mass, length and time exponents.
///
/// `Kg`, `M` and `S` are `typenum` integers.  Two dimensions are the same
/// type if and only if all three exponents match, which is what makes
/// cross-dimension addition a type error.
pub struct Dim<Kg, M, S>(PhantomData<(Kg, M, S)>);

/// The dimension of a pure number, also used for angles.
pub type DimNone = Dim<Z0, Z0, Z0>;

/// Mass: kg¹.
pub type DimMass = Dim<P1, Z0, Z0>;

/// Length: m¹.
pub type DimLength = Dim<Z0, P1, Z0>;

/// Surface: m².
pub type DimSurface = Dim<Z0, P2, Z0>;

/// Time: s¹.
pub type DimTime = Dim<Z0, Z0, P1>;

/// Speed: m¹ s⁻¹.
pub type DimSpeed = Dim<Z0, P1, N1>;

/// Frequency and angular speed: s⁻¹.
pub type DimFrequency = Dim<Z0, Z0, N1>;

/// Type-level test for the all-zero dimension, as a `typenum` bit.
pub type IsDimensionless<Kg, M, S> = And<And<Eq<Kg, Z0>, Eq<M, Z0>>, Eq<S, Z0>>;

/// Maps a quotient dimension onto the representation of its values.
///
/// Any dimension with a nonzero exponent keeps its values wrapped in
/// [`Quantity`]; the all-zero dimension collapses to bare `f64`, so that a
/// ratio of two same-dimension quantities is a plain number rather than a
/// dimensionless quantity.  Division on `Quantity` routes its result through
/// this trait.
pub trait Reduce {
    type Output;

    fn reduce(raw: f64) -> Self::Output;
}

/// Dispatch helper for [`Reduce`], keyed on a type-level bit.
///
/// The two impls cannot overlap because they are selected by distinct bit
/// types, which stands in for the specialization the underlying scheme needs.
pub trait ReduceIf<B> {
    type Output;

    fn reduce(raw: f64) -> Self::Output;
}

impl<D> ReduceIf<B1> for D {
    type Output = f64;

    fn reduce(raw: f64) -> f64 {
        raw
    }
}

impl<Kg, M, S> ReduceIf<B0> for Dim<Kg, M, S> {
    type Output = Quantity<Dim<Kg, M, S>>;

    fn reduce(raw: f64) -> Self::Output {
        Quantity::from_value(raw)
    }
}

impl<Kg, M, S> Reduce for Dim<Kg, M, S>
where
    Kg: IsEqual<Z0>,
    M: IsEqual<Z0>,
    S: IsEqual<Z0>,
    Eq<Kg, Z0>: BitAnd<Eq<M, Z0>>,
    And<Eq<Kg, Z0>, Eq<M, Z0>>: BitAnd<Eq<S, Z0>>,
    Self: ReduceIf<IsDimensionless<Kg, M, S>>,
{
    type Output = <Self as ReduceIf<IsDimensionless<Kg, M, S>>>::Output;

    fn reduce(raw: f64) -> Self::Output {
        <Self as ReduceIf<IsDimensionless<Kg, M, S>>>::reduce(raw)
    }
}
