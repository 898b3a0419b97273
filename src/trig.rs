//! Constant-evaluable trigonometric approximation
//!
//! `f64::sin` is not callable in const contexts, so quantities that need a
//! sine at compile time use this triple-angle recursion instead: fold
//! negative inputs with `sin(x) = sin(π − x)`, answer `x` directly below a
//! small-angle threshold, and otherwise rebuild the result from `sin(x/3)`
//! with the exact identity `sin(3u) = 3 sin(u) − 4 sin³(u)`.
//!
//! Relative error against `f64::sin` stays below 1e-10 for representative
//! inputs (see the tests); the recursion compounds the small-angle error
//! geometrically, so no accuracy guarantee is made over the whole real line.

use core::f64::consts::{FRAC_PI_2, PI};

const SMALL_ANGLE: f64 = 1e-6;

/// Approximate sine, usable in constant expressions.  NaN and infinities
/// yield NaN, as with `f64::sin`.
pub const fn sin(x: f64) -> f64 {
    // Non-finite inputs satisfy neither branch condition below and would
    // recurse without ever reaching the small-angle cutoff.
    if !x.is_finite() {
        return f64::NAN;
    }
    if x < 0.0 {
        return sin(PI - x);
    }
    if x < SMALL_ANGLE {
        return x;
    }
    let s = sin(x / 3.0);
    3.0 * s - 4.0 * s * s * s
}

/// Approximate cosine, derived as `sin(π/2 − x)`.
pub const fn cos(x: f64) -> f64 {
    sin(FRAC_PI_2 - x)
}

// The whole point is const evaluation, so exercise it at compile time too.
const _: () = {
    assert!(sin(PI) < 1e-10 && sin(PI) > -1e-10);
    assert!(cos(FRAC_PI_2) < 1e-10 && cos(FRAC_PI_2) > -1e-10);
    assert!(sin(FRAC_PI_2) > 1.0 - 1e-10);
    assert!(cos(PI) < -(1.0 - 1e-10));
};
