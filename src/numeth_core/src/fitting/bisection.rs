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

/// Number of halvings needed to shrink `[lower, upper]` below `tolerance`.
///
/// `ceil(log2(|upper - lower| / tolerance))`, or zero if the interval is already
/// within tolerance.
///
/// ```
///     use numeth_core::fitting::bisection_bound;
///     assert_eq!(bisection_bound(0.0, 3.0, 0.01), 9);
///     assert_eq!(bisection_bound(0.0, 0.5, 1.0), 0);
/// ```
#[must_use]
pub fn bisection_bound<T: Float>(lower: T, upper: T, tolerance: T) -> usize {
    let n = ((upper - lower).abs() / tolerance).log2().ceil();
    if n > T::zero() {
        n.to_usize().unwrap_or(usize::MAX)
    } else {
        0
    }
}

/// Solve root using the bisection method.
///
/// `lower` and `upper` must bracket a sign change of `func`. This is not verified,
/// an interval without a sign change will silently converge to one of its ends.
///
/// The number of iterations is bounded by the smaller of `max_iterations` and
/// [`bisection_bound`]. Which of the two is tighter decides the stop reason reported
/// if the bound is exhausted: [`StopReason::ToleranceReached`] when the tolerance
/// bound wins, [`StopReason::MaxIterationsReached`] otherwise.
///
/// ```
///     use numeth_core::fitting::{bisection, StopReason};
///     let f = |x: f64| Ok(x * x - 4.0);
///     let res = bisection(f, 0.0, 3.0, 0.01, 100).unwrap();
///     assert!((res.estimate - 2.0).abs() < 0.01);
///     assert_eq!(res.stop_reason, StopReason::ToleranceReached);
///     assert!(res.iterations <= 9);
/// ```
///
/// # Errors
/// Fails if the tolerance is not positive, `max_iterations` is zero, a bound is
/// not finite, or any evaluation of `func` fails.
pub fn bisection<T>(
    func: impl Function<T>,
    lower: T,
    upper: T,
    tolerance: T,
    max_iterations: usize,
) -> NumResult<RootResult<T>>
where
    T: Float,
{
    check_finite("Lower bound", lower)?;
    check_finite("Upper bound", upper)?;
    check_tolerance(tolerance)?;
    check_max_iterations(max_iterations)?;

    let two = T::one() + T::one();

    let tolerance_bound = bisection_bound(lower, upper, tolerance);
    let (bound, exhausted) = if tolerance_bound <= max_iterations {
        (tolerance_bound, StopReason::ToleranceReached)
    } else {
        (max_iterations, StopReason::MaxIterationsReached)
    };

    let mut lower = lower;
    let mut upper = upper;
    let mut mid = (lower + upper) / two;
    let mut previous: Option<T> = None;
    let mut errors = ErrorEstimate::unresolved();

    for iteration in 1..=bound {
        mid = (lower + upper) / two;

        let f_mid = func.eval(mid)?;
        if f_mid == T::zero() {
            return Ok(RootResult {
                estimate: mid,
                errors: ErrorEstimate::between(mid, previous),
                iterations: iteration,
                stop_reason: StopReason::ExactRootFound,
            });
        }

        let f_lower = func.eval(lower)?;
        if f_lower == T::zero() {
            return Ok(RootResult {
                estimate: lower,
                errors: ErrorEstimate::between(lower, previous),
                iterations: iteration,
                stop_reason: StopReason::ExactRootFound,
            });
        }

        // root is in whichever half still has a sign change
        if f_lower * f_mid < T::zero() {
            upper = mid;
        } else {
            lower = mid;
        }

        errors = ErrorEstimate::between(mid, previous);
        if errors.absolute < tolerance {
            return Ok(RootResult {
                estimate: mid,
                errors,
                iterations: iteration,
                stop_reason: StopReason::ToleranceReached,
            });
        }
        previous = Some(mid);
    }

    Ok(RootResult {
        estimate: mid,
        errors,
        iterations: bound,
        stop_reason: exhausted,
    })
}

#[cfg(test)]
mod tests {
    use crate::errors::Error;
    use crate::fitting::{StopReason, bisection, bisection_bound};

    #[test]
    fn test_bisection() {
        let f = |x: f64| Ok(x * x - 4.0);
        let res = bisection(f, 0.0, 3.0, 0.01, 100).unwrap();
        assert!((res.estimate - 2.0).abs() < 0.01);
        assert_eq!(res.iterations, 9);
        assert_eq!(res.stop_reason, StopReason::ToleranceReached);
        assert!(res.errors.absolute < 0.01);
    }

    #[test]
    fn test_bisection_iteration_bound() {
        let cases: [(fn(f64) -> f64, f64, f64); 4] = [
            (|x| x * x - 4.0, 0.0, 3.0),
            (f64::sin, 3.0, 4.0),
            (|x| x.powi(3) - 2.0 * x - 5.0, 2.0, 3.0),
            (|x| x.exp() - 2.0, -1.0, 5.0),
        ];
        for (f, a, b) in cases {
            let tol = 1e-8;
            let res = bisection(|x| Ok(f(x)), a, b, tol, 1000).unwrap();
            assert!(res.iterations <= bisection_bound(a, b, tol));
            assert!(f(res.estimate).abs() < 1e-6, "f={}", f(res.estimate));
            assert!(res.is_converged());
        }
    }

    #[test]
    fn test_bisection_max_iterations() {
        let f = |x: f64| Ok(x * x - 4.0);
        let res = bisection(f, 0.0, 3.0, 1e-10, 5).unwrap();
        assert_eq!(res.iterations, 5);
        assert_eq!(res.stop_reason, StopReason::MaxIterationsReached);
        assert!(!res.is_converged());
    }

    #[test]
    fn test_bisection_exact_midpoint() {
        let f = |x: f64| Ok(x - 1.0);
        let res = bisection(f, 0.0, 2.0, 1e-6, 100).unwrap();
        assert_eq!(res.estimate, 1.0);
        assert_eq!(res.iterations, 1);
        assert_eq!(res.stop_reason, StopReason::ExactRootFound);
        assert!(res.errors.absolute.is_infinite());
    }

    #[test]
    fn test_bisection_exact_lower() {
        let f = |x: f64| Ok(x);
        let res = bisection(f, 0.0, 3.0, 1e-6, 100).unwrap();
        assert_eq!(res.estimate, 0.0);
        assert_eq!(res.iterations, 1);
        assert_eq!(res.stop_reason, StopReason::ExactRootFound);
    }

    #[test]
    fn test_bisection_within_tolerance() {
        let f = |x: f64| Ok(x - 0.1);
        let res = bisection(f, 0.0, 0.5, 1.0, 100).unwrap();
        assert_eq!(res.iterations, 0);
        assert_eq!(res.estimate, 0.25);
        assert_eq!(res.stop_reason, StopReason::ToleranceReached);
    }

    #[test]
    fn test_bisection_invalid_arguments() {
        let f = |x: f64| Ok(x);
        assert!(matches!(
            bisection(f, -1.0, 1.0, 0.0, 10),
            Err(Error::ValueError(_))
        ));
        assert!(matches!(
            bisection(f, -1.0, 1.0, 1e-3, 0),
            Err(Error::ValueError(_))
        ));
        assert!(matches!(
            bisection(f, f64::NEG_INFINITY, 1.0, 1e-3, 10),
            Err(Error::ValueError(_))
        ));
    }

    #[test]
    fn test_bisection_evaluation_failure() {
        let f = |x: f64| {
            if x < 1.0 {
                Err(Error::evaluation(x, "outside domain"))
            } else {
                Ok(x - 2.0)
            }
        };
        let res = bisection(f, 0.0, 3.0, 1e-3, 100);
        assert!(matches!(res, Err(Error::Evaluation { .. })));
    }

    #[test]
    fn test_bisection_repeatable() {
        let f = |x: f64| Ok(x.cos() - x);
        let a = bisection(f, 0.0, 1.0, 1e-9, 100).unwrap();
        let b = bisection(f, 0.0, 1.0, 1e-9, 100).unwrap();
        assert_eq!(a.estimate.to_bits(), b.estimate.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_bisection_f32() {
        let f = |x: f32| Ok(x * x - 2.0);
        let res = bisection(f, 0.0, 2.0, 1e-4, 100).unwrap();
        assert!((res.estimate - 2.0_f32.sqrt()).abs() < 1e-3);
    }
}
