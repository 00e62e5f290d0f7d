//! # Fitting
//! Iterative root finding.
//!
//! All root finders share the same contract: they advance a single estimate, measure
//! progress with [`ErrorEstimate::between`], and terminate with a [`RootResult`]
//! carrying exactly one [`StopReason`]. Non-convergence is never an error, callers
//! must inspect [`RootResult::stop_reason`].
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

mod bisection;
mod fixed_point;
mod newton;

use std::fmt;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, NumResult};

pub use self::bisection::{bisection, bisection_bound};
pub use self::fixed_point::fixed_point;
pub use self::newton::{newton_raphson, newton_raphson_with_step};

/// Reason a root finder terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopReason {
    /// Successive estimates agree to within the tolerance, or for bisection the
    /// tolerance derived iteration bound was exhausted.
    ToleranceReached,

    /// Fixed point iteration stopped moving.
    ConvergedFixedPoint,

    /// Fixed point iteration landed where `|f(x)|` is below the tolerance.
    ApproximateRootFound,

    /// Iteration cap reached without meeting any other condition.
    MaxIterationsReached,

    /// Newton-Raphson encountered a zero derivative and cannot proceed.
    DerivativeZero,

    /// The function evaluated to exactly zero.
    ExactRootFound,
}

impl StopReason {
    /// Did the method arrive at a root (or fixed point)?
    #[must_use]
    pub fn is_converged(&self) -> bool {
        !matches!(self, Self::MaxIterationsReached | Self::DerivativeZero)
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ToleranceReached => "Converged to the root",
            Self::ConvergedFixedPoint => "Converged to the fixed point",
            Self::ApproximateRootFound => "Approximate root found",
            Self::MaxIterationsReached => "Maximum iterations reached",
            Self::DerivativeZero => "Derivative is zero, method fails",
            Self::ExactRootFound => "Exact root found",
        };
        f.write_str(msg)
    }
}

/// Absolute and relative error of an estimate.
///
/// Infinite errors are serialized as the strings `"inf"`, so they survive formats
/// such as JSON which have no representation for them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Float + Serialize",
    deserialize = "T: Float + Deserialize<'de>"
))]
pub struct ErrorEstimate<T> {
    /// Absolute error.
    #[serde(with = "non_finite")]
    pub absolute: T,

    /// Absolute error divided by the magnitude of the estimate.
    #[serde(with = "non_finite")]
    pub relative: T,
}

impl<T: Float> ErrorEstimate<T> {
    /// Error between successive iterates.
    ///
    /// Without a previous iterate there is nothing to compare against, so the
    /// absolute error is infinite. The relative error is infinite whenever `current`
    /// is zero.
    ///
    /// ```
    ///     use numeth_core::fitting::ErrorEstimate;
    ///     let err = ErrorEstimate::<f64>::between(1.5, Some(1.0));
    ///     assert_eq!(err.absolute, 0.5);
    ///     assert!((err.relative - 1.0 / 3.0).abs() < 1e-15);
    ///     assert!(ErrorEstimate::<f64>::between(1.5, None).absolute.is_infinite());
    /// ```
    #[must_use]
    pub fn between(current: T, previous: Option<T>) -> Self {
        let absolute = previous.map_or_else(T::infinity, |prev| (current - prev).abs());
        let relative = if current == T::zero() {
            T::infinity()
        } else {
            absolute / current.abs()
        };
        Self { absolute, relative }
    }

    /// Error of an estimate against a known reference value, such as an analytic
    /// root.
    ///
    /// Relative error is taken with respect to the reference, and is infinite when
    /// the reference is zero.
    #[must_use]
    pub fn against_reference(estimate: T, reference: T) -> Self {
        let absolute = (estimate - reference).abs();
        let relative = if reference == T::zero() {
            T::infinity()
        } else {
            absolute / reference.abs()
        };
        Self { absolute, relative }
    }

    /// Both errors infinite, no information about the estimate.
    #[must_use]
    pub fn unresolved() -> Self {
        Self {
            absolute: T::infinity(),
            relative: T::infinity(),
        }
    }
}

/// Terminal state of a root finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Float + Serialize",
    deserialize = "T: Float + Deserialize<'de>"
))]
pub struct RootResult<T> {
    /// Best estimate of the root at termination.
    #[serde(with = "non_finite")]
    pub estimate: T,

    /// Error between the final two iterates.
    pub errors: ErrorEstimate<T>,

    /// Number of iterations performed.
    pub iterations: usize,

    /// Why the method stopped.
    pub stop_reason: StopReason,
}

impl<T: Float> RootResult<T> {
    /// Shorthand for `self.stop_reason.is_converged()`.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.stop_reason.is_converged()
    }
}

/// Serde representation of floats which writes non-finite values as strings.
mod non_finite {
    use num_traits::Float;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Number(T),
        Text(String),
    }

    pub(super) fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Float + Serialize,
        S: Serializer,
    {
        if value.is_nan() {
            serializer.serialize_str("nan")
        } else if value.is_infinite() && value.is_sign_positive() {
            serializer.serialize_str("inf")
        } else if value.is_infinite() {
            serializer.serialize_str("-inf")
        } else {
            value.serialize(serializer)
        }
    }

    pub(super) fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Float + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        match Repr::<T>::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(T::infinity()),
                "-inf" => Ok(T::neg_infinity()),
                "nan" => Ok(T::nan()),
                _ => Err(D::Error::custom(format!(
                    "expected a number, 'inf', '-inf' or 'nan', found '{text}'"
                ))),
            },
        }
    }
}

/// Tolerance must be finite and strictly positive.
pub(crate) fn check_tolerance<T: Float>(tolerance: T) -> NumResult<()> {
    if !tolerance.is_finite() || tolerance <= T::zero() {
        Err(Error::ValueError(
            "Tolerance must be finite and greater than 0.".into(),
        ))?;
    }
    Ok(())
}

/// At least one iteration must be allowed.
pub(crate) fn check_max_iterations(max_iterations: usize) -> NumResult<()> {
    if max_iterations == 0 {
        Err(Error::ValueError(
            "Maximum number of iterations must be at least 1.".into(),
        ))?;
    }
    Ok(())
}

/// Inputs such as bounds and initial guesses must be finite.
pub(crate) fn check_finite<T: Float>(name: &str, value: T) -> NumResult<()> {
    if !value.is_finite() {
        Err(Error::ValueError(format!("{name} must be finite.")))?;
    }
    Ok(())
}
