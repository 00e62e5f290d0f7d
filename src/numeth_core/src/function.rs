//! # Function
//!
//! Real valued functions of one real variable, as consumed by the root finders and
//! quadrature rules.
//!
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

use num_traits::Float;

use crate::errors::NumResult;

/// Default step size used for central difference derivatives.
pub const DEFAULT_DIFF_STEP: f64 = 1e-5;

/// A pure function of a single real variable.
///
/// Evaluation may fail, for example when the input is outside the domain of the
/// function. Failures are returned as errors rather than as NaN, and are never
/// swallowed by the methods in this crate.
///
/// Any closure of the form `Fn(T) -> NumResult<T>` is a [`Function`].
///
/// ```
///     use numeth_core::{errors::NumResult, function::Function};
///     let f = |x: f64| -> NumResult<f64> { Ok(x * x) };
///     assert_eq!(f.eval(3.0).unwrap(), 9.0);
///     let d = f.derivative(3.0, 1e-5).unwrap();
///     assert!((d - 6.0).abs() < 1e-8);
/// ```
pub trait Function<T: Float> {
    /// Evaluate the function at `x`.
    ///
    /// # Errors
    /// Fails when `x` is outside the domain of the function.
    fn eval(&self, x: T) -> NumResult<T>;

    /// Central difference approximation of the derivative at `x`.
    ///
    /// `(f(x + step) - f(x - step)) / (2 step)`
    ///
    /// The truncation error is O(step^2), smaller steps trade that for rounding
    /// error. [`DEFAULT_DIFF_STEP`] is a reasonable choice for `f64`.
    ///
    /// # Errors
    /// Fails if either evaluation fails.
    fn derivative(&self, x: T, step: T) -> NumResult<T> {
        let upper = self.eval(x + step)?;
        let lower = self.eval(x - step)?;
        Ok((upper - lower) / (step + step))
    }
}

impl<T, F> Function<T> for F
where
    T: Float,
    F: Fn(T) -> NumResult<T>,
{
    #[inline(always)]
    fn eval(&self, x: T) -> NumResult<T> {
        self(x)
    }
}

/// [`DEFAULT_DIFF_STEP`] converted to `T`.
#[must_use]
#[allow(
    clippy::missing_panics_doc,
    reason = "By construction this cannot panic."
)]
pub fn default_step<T: Float>() -> T {
    T::from(DEFAULT_DIFF_STEP).unwrap()
}
