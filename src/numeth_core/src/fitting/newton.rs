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

use crate::errors::{Error, NumResult};
use crate::fitting::{
    ErrorEstimate, RootResult, StopReason, check_finite, check_max_iterations, check_tolerance,
};
use crate::function::{Function, default_step};

/// Solve root using the Newton-Raphson method.
///
/// The derivative is approximated by a central difference with the default step of
/// [`crate::function::DEFAULT_DIFF_STEP`], see [`newton_raphson_with_step`] to tune
/// it.
///
/// ```
///     use numeth_core::fitting::{newton_raphson, StopReason};
///     let f = |x: f64| Ok(x * x - 4.0);
///     let res = newton_raphson(f, 1e-6, 3.0, 100).unwrap();
///     assert!((res.estimate - 2.0).abs() < 1e-9);
///     assert_eq!(res.stop_reason, StopReason::ToleranceReached);
/// ```
///
/// # Errors
/// Fails if the tolerance is not positive, `max_iterations` is zero, the initial
/// guess is not finite, or any evaluation of `func` fails.
pub fn newton_raphson<T>(
    func: impl Function<T>,
    tolerance: T,
    initial_guess: T,
    max_iterations: usize,
) -> NumResult<RootResult<T>>
where
    T: Float,
{
    newton_raphson_with_step(
        func,
        tolerance,
        initial_guess,
        max_iterations,
        default_step(),
    )
}

/// Solve root using the Newton-Raphson method, with an explicit step size for the
/// central difference derivative.
///
/// An exactly zero derivative stops the method with [`StopReason::DerivativeZero`],
/// returning the last estimate.
///
/// # Errors
/// Fails if the tolerance or step is not positive, `max_iterations` is zero, the
/// initial guess is not finite, or any evaluation of `func` fails.
pub fn newton_raphson_with_step<T>(
    func: impl Function<T>,
    tolerance: T,
    initial_guess: T,
    max_iterations: usize,
    step: T,
) -> NumResult<RootResult<T>>
where
    T: Float,
{
    check_finite("Initial guess", initial_guess)?;
    check_tolerance(tolerance)?;
    check_max_iterations(max_iterations)?;
    if !step.is_finite() || step <= T::zero() {
        Err(Error::ValueError(
            "Derivative step must be finite and greater than 0.".into(),
        ))?;
    }

    let mut current = initial_guess;
    let mut previous: Option<T> = None;
    let mut errors = ErrorEstimate::unresolved();

    for iteration in 1..=max_iterations {
        let f_eval = func.eval(current)?;
        let d_eval = func.derivative(current, step)?;

        // Derivative is 0, cannot solve
        if d_eval == T::zero() {
            return Ok(RootResult {
                estimate: current,
                errors: ErrorEstimate::between(current, previous),
                iterations: iteration,
                stop_reason: StopReason::DerivativeZero,
            });
        }

        let next = current - f_eval / d_eval;
        errors = ErrorEstimate::between(next, Some(current));
        if errors.absolute < tolerance {
            return Ok(RootResult {
                estimate: next,
                errors,
                iterations: iteration,
                stop_reason: StopReason::ToleranceReached,
            });
        }
        previous = Some(current);
        current = next;
    }

    Ok(RootResult {
        estimate: current,
        errors,
        iterations: max_iterations,
        stop_reason: StopReason::MaxIterationsReached,
    })
}
