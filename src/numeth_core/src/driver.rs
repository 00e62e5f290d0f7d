//! # Driver
//!
//! Run the root finders and quadrature rules on a configured problem and package
//! the results for printing.
//!
//! Independent problems share no state, so batches are solved in parallel.
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

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{QuadratureConfig, RootConfig};
use crate::errors::NumResult;
use crate::expr::Expr;
use crate::fitting::{
    ErrorEstimate, RootResult, bisection, fixed_point, newton_raphson_with_step,
};
use crate::quadrature::{simpson, trapezoidal};

/// Available root finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RootMethod {
    /// [`bisection`]
    Bisection,

    /// [`fixed_point`]
    FixedPoint,

    /// [`newton_raphson_with_step`]
    NewtonRaphson,
}

impl RootMethod {
    /// All root finders, in reporting order.
    pub const ALL: [Self; 3] = [Self::Bisection, Self::FixedPoint, Self::NewtonRaphson];

    /// Human readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bisection => "Bisection Method",
            Self::FixedPoint => "Fixed Point Method",
            Self::NewtonRaphson => "Newton-Raphson Method",
        }
    }
}

impl fmt::Display for RootMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Available quadrature rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuadratureMethod {
    /// [`trapezoidal`]
    Trapezoidal,

    /// [`simpson`]
    Simpson,
}

impl QuadratureMethod {
    /// All quadrature rules, in reporting order.
    pub const ALL: [Self; 2] = [Self::Trapezoidal, Self::Simpson];

    /// Human readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trapezoidal => "Trapezoidal Rule",
            Self::Simpson => "Simpson's 1/3 Rule",
        }
    }
}

impl fmt::Display for QuadratureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single root finder on a configured problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootReport {
    /// Method which was run.
    pub method: RootMethod,

    /// Text of the function the method iterated on.
    pub function: String,

    /// Terminal state of the method.
    pub result: RootResult<f64>,

    /// Known root, if one was configured.
    pub reference_root: Option<f64>,

    /// Error of the estimate against the known root, if one was configured.
    pub reference_error: Option<ErrorEstimate<f64>>,
}

impl fmt::Display for RootReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Results:", self.method)?;
        writeln!(f, "Function: {}", self.function)?;
        writeln!(f, "Root reached: {}", self.result.estimate)?;
        writeln!(f, "Iterations: {}", self.result.iterations)?;
        writeln!(f, "Stop Reason: {}", self.result.stop_reason)?;
        writeln!(f, "Step Error: {}", self.result.errors.absolute)?;
        write!(f, "Relative Step Error: {:.6}", self.result.errors.relative)?;
        if let (Some(root), Some(err)) = (self.reference_root, self.reference_error) {
            writeln!(f)?;
            writeln!(f, "True root: {root}")?;
            writeln!(f, "Magnitude of Error: {}", err.absolute)?;
            write!(f, "Relative Error: {:.6}", err.relative)?;
        }
        Ok(())
    }
}

/// Outcome of a single quadrature rule on a configured problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadratureReport {
    /// Rule which was used.
    pub method: QuadratureMethod,

    /// Text of the integrand.
    pub function: String,

    /// Lower limit of integration.
    pub lower: f64,

    /// Upper limit of integration.
    pub upper: f64,

    /// Number of subintervals.
    pub intervals: usize,

    /// Approximate value of the integral.
    pub value: f64,
}

impl fmt::Display for QuadratureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Result: {}", self.method, self.value)
    }
}

/// Parsed functions of a root finding problem.
#[derive(Debug, Clone, PartialEq)]
pub struct RootProblem {
    /// Parsed [`RootConfig::function`].
    pub function: Expr,

    /// Parsed [`RootConfig::iteration_map`].
    pub iteration_map: Expr,
}

impl RootProblem {
    /// Parse the expressions of a configuration.
    ///
    /// # Errors
    /// Fails if either expression does not parse.
    pub fn try_new(config: &RootConfig) -> NumResult<Self> {
        Ok(Self {
            function: Expr::parse(&config.function)?,
            iteration_map: Expr::parse(&config.iteration_map)?,
        })
    }
}

/// Run one root finder.
///
/// # Errors
/// Fails if the configuration violates a checked precondition of the method, or if
/// the function cannot be evaluated somewhere along the way.
pub fn run_root_method(
    method: RootMethod,
    config: &RootConfig,
    problem: &RootProblem,
) -> NumResult<RootReport> {
    let func = problem.function.as_function();
    let (result, function) = match method {
        RootMethod::Bisection => (
            bisection(
                func,
                config.lower_bound,
                config.upper_bound,
                config.tolerance,
                config.max_iterations,
            )?,
            &config.function,
        ),
        RootMethod::FixedPoint => (
            fixed_point(
                func,
                problem.iteration_map.as_function(),
                config.tolerance,
                config.initial_guess,
                config.max_iterations,
            )?,
            &config.iteration_map,
        ),
        RootMethod::NewtonRaphson => (
            newton_raphson_with_step(
                func,
                config.tolerance,
                config.initial_guess,
                config.max_iterations,
                config.derivative_step,
            )?,
            &config.function,
        ),
    };

    let reference_error = config
        .reference_root
        .map(|root| ErrorEstimate::against_reference(result.estimate, root));

    Ok(RootReport {
        method,
        function: function.clone(),
        result,
        reference_root: config.reference_root,
        reference_error,
    })
}

/// Outcome of one root finder, failures are kept per method.
pub type RootOutcome = (RootMethod, NumResult<RootReport>);

/// Outcome of one quadrature rule, failures are kept per method.
pub type QuadratureOutcome = (QuadratureMethod, NumResult<QuadratureReport>);

/// Run every root finder on the configured problem.
///
/// A method which fails does not stop the others, its error is reported alongside
/// the method.
///
/// ```
///     use numeth_core::config::RootConfig;
///     use numeth_core::driver::run_root_methods;
///     let outcomes = run_root_methods(&RootConfig::default()).unwrap();
///     assert_eq!(outcomes.len(), 3);
///     assert!(outcomes.iter().all(|(_, report)| report.is_ok()));
/// ```
///
/// # Errors
/// Fails if either expression of the configuration does not parse.
pub fn run_root_methods(config: &RootConfig) -> NumResult<Vec<RootOutcome>> {
    let problem = RootProblem::try_new(config)?;
    Ok(RootMethod::ALL
        .iter()
        .map(|method| (*method, run_root_method(*method, config, &problem)))
        .collect())
}

/// Solve many independent root finding problems in parallel.
///
/// Output order matches input order, each problem succeeds or fails on its own.
#[must_use]
pub fn run_batch(configs: &[RootConfig]) -> Vec<NumResult<Vec<RootOutcome>>> {
    configs.par_iter().map(run_root_methods).collect()
}

/// Run one quadrature rule.
///
/// # Errors
/// Fails if the configuration violates a checked precondition of the rule, such as
/// an odd number of intervals for Simpson's rule, or if the integrand cannot be
/// evaluated.
pub fn run_quadrature_method(
    method: QuadratureMethod,
    config: &QuadratureConfig,
    integrand: &Expr,
) -> NumResult<QuadratureReport> {
    let func = integrand.as_function();
    let value = match method {
        QuadratureMethod::Trapezoidal => {
            trapezoidal(func, config.lower, config.upper, config.intervals)?
        }
        QuadratureMethod::Simpson => simpson(func, config.lower, config.upper, config.intervals)?,
    };
    Ok(QuadratureReport {
        method,
        function: config.function.clone(),
        lower: config.lower,
        upper: config.upper,
        intervals: config.intervals,
        value,
    })
}

/// Run every quadrature rule on the configured integral.
///
/// A rule which fails, such as Simpson's rule with an odd number of intervals,
/// does not stop the others.
///
/// # Errors
/// Fails if the integrand does not parse.
pub fn run_quadrature_methods(config: &QuadratureConfig) -> NumResult<Vec<QuadratureOutcome>> {
    let integrand = Expr::parse(&config.function)?;
    Ok(QuadratureMethod::ALL
        .iter()
        .map(|method| (*method, run_quadrature_method(*method, config, &integrand)))
        .collect())
}
