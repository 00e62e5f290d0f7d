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

use crate::errors::{Error, NumResult};
use crate::function::Function;
use crate::quadrature::{check_partition, node, step_size};

/// Integrate `func` over `[lower, upper]` with the composite Simpson's 1/3 rule.
///
/// `(h / 3) [ f(a) + f(b) + 4 sum_{odd i} f(a + i h) + 2 sum_{even 0<i<n} f(a + i h) ]`
/// with `h = (b - a) / n`.
///
/// Exact for polynomials up to cubic order, the error is O(h^4) otherwise.
///
/// ```
///     use numeth_core::quadrature::simpson;
///     let f = |x: f64| Ok(x * x);
///     let area = simpson(f, 0.0, 1.0, 10).unwrap();
///     assert!((area - 1.0 / 3.0).abs() < 1e-12);
///
///     // odd number of intervals is not allowed
///     assert!(simpson(f, 0.0, 1.0, 9).is_err());
/// ```
///
/// # Errors
/// Fails if `intervals` is odd or zero, or a bound is not finite. These are checked
/// before `func` is ever evaluated. Also fails if any evaluation of `func` fails.
pub fn simpson<T>(func: impl Function<T>, lower: T, upper: T, intervals: usize) -> NumResult<T>
where
    T: Float + NumAssignOps,
{
    if intervals % 2 != 0 {
        Err(Error::ValueError(
            "Number of intervals (n) must be even for Simpson's 1/3 rule.".into(),
        ))?;
    }
    check_partition(lower, upper, intervals)?;

    let two = T::one() + T::one();
    let three = two + T::one();
    let four = two + two;
    let step = step_size(lower, upper, intervals);

    let mut odd = T::zero();
    for idx in (1..intervals).step_by(2) {
        odd += func.eval(node(lower, step, idx))?;
    }
    let mut even = T::zero();
    for idx in (2..intervals).step_by(2) {
        even += func.eval(node(lower, step, idx))?;
    }

    let total = func.eval(lower)? + func.eval(upper)? + four * odd + two * even;
    Ok(total * step / three)
}
