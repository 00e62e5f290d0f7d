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
use crate::fitting::{
    ErrorEstimate, RootResult, StopReason, check_finite, check_max_iterations, check_tolerance,
};
use crate::function::Function;

/// Solve root using fixed point iteration, `x_{n+1} = map(x_n)`.
///
/// `func` is the function whose root is desired, it is only used as a secondary
/// stopping criterion. The iteration converges only if `|map'(x)| < 1` near the fixed
/// point, this is not checked. Divergence shows up as
/// [`StopReason::MaxIterationsReached`] with a large estimate.
///
/// ```
///     use numeth_core::fitting::fixed_point;
///     let f = |x: f64| Ok(x * x - 3.0);
///     let g = |x: f64| Ok(x / 2.0 + 1.5 / x);
///     let res = fixed_point(f, g, 1e-6, 3.0, 50).unwrap();
///     assert!((res.estimate - 3.0_f64.sqrt()).abs() < 1e-6);
///     assert!(res.is_converged());
/// ```
///
/// # Errors
/// Fails if the tolerance is not positive, `max_iterations` is zero, the initial
/// guess is not finite, or any evaluation of `func` or `map` fails.
pub fn fixed_point<T>(
    func: impl Function<T>,
    map: impl Function<T>,
    tolerance: T,
    initial_guess: T,
    max_iterations: usize,
) -> NumResult<RootResult<T>>
where
    T: Float,
{
    check_finite("Initial guess", initial_guess)?;
    check_tolerance(tolerance)?;
    check_max_iterations(max_iterations)?;

    let mut current = initial_guess;
    let mut next = initial_guess;
    let mut errors = ErrorEstimate::unresolved();

    for iteration in 1..=max_iterations {
        next = map.eval(current)?;
        errors = ErrorEstimate::between(next, Some(current));

        if errors.absolute < tolerance {
            return Ok(RootResult {
                estimate: next,
                errors,
                iterations: iteration,
                stop_reason: StopReason::ConvergedFixedPoint,
            });
        }

        if func.eval(next)?.abs() < tolerance {
            return Ok(RootResult {
                estimate: next,
                errors,
                iterations: iteration,
                stop_reason: StopReason::ApproximateRootFound,
            });
        }
        current = next;
    }

    Ok(RootResult {
        estimate: next,
        errors,
        iterations: max_iterations,
        stop_reason: StopReason::MaxIterationsReached,
    })
}

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::fitting::{StopReason, fixed_point};

    #[test]
    fn test_fixed_point_newton_map() {
        let f = |x: f64| Ok(x * x - 3.0);
        let g = |x: f64| Ok(x / 2.0 + 1.5 / x);
        let res = fixed_point(f, g, 1e-6, 3.0, 50).unwrap();
        assert!((res.estimate - 1.732).abs() < 1e-3);
        assert_eq!(res.stop_reason, StopReason::ApproximateRootFound);
        assert_eq!(res.iterations, 4);
    }

    #[test]
    fn test_fixed_point_converged() {
        // f is never near zero so only the step size can stop the iteration.
        let f = |x: f64| Ok(x * x - 100.0);
        let g = |x: f64| Ok(x.cos());
        let res = fixed_point(f, g, 1e-8, 1.0, 1000).unwrap();
        assert_eq!(res.stop_reason, StopReason::ConvergedFixedPoint);
        assert!((res.estimate - res.estimate.cos()).abs() < 1e-7);
        assert!(res.errors.absolute < 1e-8);
    }

    #[test]
    fn test_fixed_point_max_iterations() {
        let f = |x: f64| Ok(x * x - 3.0);
        let g = |x: f64| Ok(x / 2.0 + 1.0);
        let res = fixed_point(f, g, 0.01, 3.0, 5).unwrap();
        assert_eq!(res.stop_reason, StopReason::MaxIterationsReached);
        assert_eq!(res.iterations, 5);
        assert_eq!(res.estimate, 2.03125);
        assert_eq!(res.errors.absolute, 0.03125);
    }

    #[test]
    fn test_fixed_point_diverges() {
        let f = |x: f64| Ok(x);
        let g = |x: f64| Ok(2.0 * x);
        let res = fixed_point(f, g, 1e-6, 1.0, 10).unwrap();
        assert_eq!(res.stop_reason, StopReason::MaxIterationsReached);
        assert_eq!(res.estimate, 1024.0);
    }

    #[test]
    fn test_fixed_point_evaluation_failure() {
        let f = |x: f64| Ok(x);
        let g = |x: f64| {
            if x > 0.0 {
                Ok(x - 2.0)
            } else {
                Err(Error::evaluation(x, "outside domain"))
            }
        };
        let res = fixed_point(f, g, 1e-6, 3.0, 10);
        assert!(matches!(res, Err(Error::Evaluation { .. })));
    }

    #[test]
    fn test_fixed_point_repeatable() {
        let f = |x: f64| Ok(x * x - 3.0);
        let g = |x: f64| Ok(x / 2.0 + 1.5 / x);
        let a = fixed_point(f, g, 1e-12, 3.0, 50).unwrap();
        let b = fixed_point(f, g, 1e-12, 3.0, 50).unwrap();
        assert_eq!(a.estimate.to_bits(), b.estimate.to_bits());
        assert_eq!(a.iterations, b.iterations);
    }
}
