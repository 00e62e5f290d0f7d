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

use num_traits::{Float, NumAssignOps};

use crate::errors::NumResult;
use crate::function::Function;
use crate::quadrature::{check_partition, node, step_size};

/// Integrate `func` over `[lower, upper]` with the composite trapezoidal rule.
///
/// `h [ (f(a) + f(b)) / 2 + sum_{i=1}^{n-1} f(a + i h) ]` with `h = (b - a) / n`.
///
/// Exact for linear functions, the error is O(h^2) otherwise.
///
/// ```
///     use numeth_core::quadrature::trapezoidal;
///     let f = |x: f64| Ok(x * x);
///     let area = trapezoidal(f, 0.0, 1.0, 10).unwrap();
///     assert!((area - 0.335).abs() < 1e-12);
/// ```
///
/// # Errors
/// Fails if a bound is not finite, `intervals` is zero, or any evaluation of `func`
/// fails.
pub fn trapezoidal<T>(func: impl Function<T>, lower: T, upper: T, intervals: usize) -> NumResult<T>
where
    T: Float + NumAssignOps,
{
    check_partition(lower, upper, intervals)?;

    let two = T::one() + T::one();
    let step = step_size(lower, upper, intervals);

    let mut total = (func.eval(lower)? + func.eval(upper)?) / two;
    for idx in 1..intervals {
        total += func.eval(node(lower, step, idx))?;
    }
    Ok(total * step)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use crate::errors::Error;
    use crate::quadrature::trapezoidal;

    #[test]
    fn test_trapezoidal_square() {
        let f = |x: f64| Ok(x * x);
        let area = trapezoidal(f, 0.0, 1.0, 10).unwrap();
        assert!((area - 1.0 / 3.0).abs() < 2e-3);
        assert!(area > 1.0 / 3.0);
    }

    #[test]
    fn test_trapezoidal_linear_exact() {
        let f = |x: f64| Ok(3.0 * x - 1.0);
        let area = trapezoidal(f, -2.0, 4.0, 3).unwrap();
        assert!((area - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoidal_single_interval() {
        let f = |x: f64| Ok(x.exp());
        let area = trapezoidal(f, 0.0, 1.0, 1).unwrap();
        assert!((area - (1.0 + 1.0_f64.exp()) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_trapezoidal_reversed_bounds() {
        let f = |x: f64| Ok(x.sin());
        let forward = trapezoidal(f, 0.0, PI, 200).unwrap();
        let backward = trapezoidal(f, PI, 0.0, 200).unwrap();
        assert!((forward - 2.0).abs() < 1e-4);
        assert!((forward + backward).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoidal_invalid() {
        let f = |x: f64| Ok(x);
        assert!(matches!(
            trapezoidal(f, 0.0, 1.0, 0),
            Err(Error::ValueError(_))
        ));
    }

    #[test]
    fn test_trapezoidal_evaluation_failure() {
        let f = |x: f64| {
            if x == 0.0 {
                Err(Error::evaluation(x, "division by zero"))
            } else {
                Ok(1.0 / x)
            }
        };
        assert!(matches!(
            trapezoidal(f, 0.0, 1.0, 4),
            Err(Error::Evaluation { .. })
        ));
    }

    #[test]
    fn test_trapezoidal_repeatable() {
        let f = |x: f64| Ok((-x * x).exp());
        let a = trapezoidal(f, -1.0, 2.0, 37).unwrap();
        let b = trapezoidal(f, -1.0, 2.0, 37).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
