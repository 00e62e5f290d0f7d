//! # Quadrature
//!
//! Closed form Newton-Cotes rules over a uniform partition of `[lower, upper]`.
//!
//! These are deterministic finite sums, there is no iteration or convergence state.
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

mod simpson;
mod trapezoid;

use num_traits::Float;

use crate::errors::{Error, NumResult};

pub use self::simpson::simpson;
pub use self::trapezoid::trapezoidal;

/// Bounds must be finite and there must be at least one subinterval.
fn check_partition<T: Float>(lower: T, upper: T, intervals: usize) -> NumResult<()> {
    if !lower.is_finite() || !upper.is_finite() {
        Err(Error::ValueError(
            "Integration bounds must be finite.".into(),
        ))?;
    }
    if intervals == 0 {
        Err(Error::ValueError(
            "Number of intervals (n) must be at least 1.".into(),
        ))?;
    }
    Ok(())
}

/// Width of each of the `intervals` subintervals.
fn step_size<T: Float>(lower: T, upper: T, intervals: usize) -> T {
    (upper - lower) / T::from(intervals).unwrap()
}

/// Position of the `idx`-th node of the partition.
#[inline(always)]
fn node<T: Float>(lower: T, step: T, idx: usize) -> T {
    lower + T::from(idx).unwrap() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_partition() {
        assert!(check_partition(0.0, 1.0, 1).is_ok());
        assert!(check_partition(0.0, 1.0, 0).is_err());
        assert!(check_partition(f64::NAN, 1.0, 4).is_err());
        assert!(check_partition(0.0, f64::INFINITY, 4).is_err());
    }

    #[test]
    fn test_nodes() {
        let h = step_size(0.0, 1.0, 4);
        assert_eq!(h, 0.25);
        assert_eq!(node(0.0, h, 0), 0.0);
        assert_eq!(node(0.0, h, 3), 0.75);
        assert_eq!(node(0.0, h, 4), 1.0);
    }
}
