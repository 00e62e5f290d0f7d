//! # Configuration
//!
//! Problem definitions for the driver, with documented defaults.
//!
//! Every field may be omitted from a configuration file, missing values fall back
//! to the defaults below.
//!
//! ```
//!     use numeth_core::config::Config;
//!     let config = Config::from_json(r#"{"roots": {"function": "x**2 - 4"}}"#).unwrap();
//!     assert_eq!(config.roots.function, "x**2 - 4");
//!     assert_eq!(config.roots.max_iterations, 5);
//!     assert_eq!(config.quadrature.intervals, 10);
//! ```
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

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::NumResult;
use crate::function::DEFAULT_DIFF_STEP;

/// Default function whose root is searched for.
pub const DEFAULT_ROOT_FUNCTION: &str = "x**2 - 3";

/// Default fixed point iteration map.
pub const DEFAULT_ITERATION_MAP: &str = "x/2 + 1";

/// Default lower bound of the bisection bracket.
pub const DEFAULT_LOWER_BOUND: f64 = 1.0;

/// Default upper bound of the bisection bracket.
pub const DEFAULT_UPPER_BOUND: f64 = 2.0;

/// Default tolerance of all root finders.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Default initial guess of the open methods.
pub const DEFAULT_INITIAL_GUESS: f64 = 3.0;

/// Default iteration cap of all root finders.
pub const DEFAULT_MAX_ITERATIONS: usize = 5;

/// Default integrand.
pub const DEFAULT_INTEGRAND: &str = "x**2";

/// Default number of quadrature subintervals.
pub const DEFAULT_INTERVALS: usize = 10;

/// Parameters shared by the root finders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RootConfig {
    /// Function whose root is desired, see [`crate::expr`] for the syntax.
    ///
    /// Defaults to [`DEFAULT_ROOT_FUNCTION`].
    pub function: String,

    /// Iteration map `g` for fixed point iteration.
    ///
    /// Defaults to [`DEFAULT_ITERATION_MAP`].
    pub iteration_map: String,

    /// Lower end of the bisection bracket, defaults to [`DEFAULT_LOWER_BOUND`].
    pub lower_bound: f64,

    /// Upper end of the bisection bracket, defaults to [`DEFAULT_UPPER_BOUND`].
    pub upper_bound: f64,

    /// Convergence tolerance, defaults to [`DEFAULT_TOLERANCE`].
    pub tolerance: f64,

    /// Starting point for fixed point and Newton-Raphson iteration.
    ///
    /// Defaults to [`DEFAULT_INITIAL_GUESS`].
    pub initial_guess: f64,

    /// Iteration cap, defaults to [`DEFAULT_MAX_ITERATIONS`].
    pub max_iterations: usize,

    /// Central difference step for Newton-Raphson, defaults to
    /// [`DEFAULT_DIFF_STEP`].
    pub derivative_step: f64,

    /// Known root to compare estimates against, if any.
    pub reference_root: Option<f64>,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            function: DEFAULT_ROOT_FUNCTION.into(),
            iteration_map: DEFAULT_ITERATION_MAP.into(),
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            tolerance: DEFAULT_TOLERANCE,
            initial_guess: DEFAULT_INITIAL_GUESS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            derivative_step: DEFAULT_DIFF_STEP,
            reference_root: None,
        }
    }
}

/// Parameters of the quadrature rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuadratureConfig {
    /// Integrand, defaults to [`DEFAULT_INTEGRAND`].
    pub function: String,

    /// Lower limit of integration, defaults to 0.
    pub lower: f64,

    /// Upper limit of integration, defaults to 1.
    pub upper: f64,

    /// Number of subintervals, defaults to [`DEFAULT_INTERVALS`].
    pub intervals: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            function: DEFAULT_INTEGRAND.into(),
            lower: 0.0,
            upper: 1.0,
            intervals: DEFAULT_INTERVALS,
        }
    }
}

/// Complete driver configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root finding problem.
    pub roots: RootConfig,

    /// Integration problem.
    pub quadrature: QuadratureConfig,
}

impl Config {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not a valid configuration.
    pub fn from_path(path: impl AsRef<Path>) -> NumResult<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a configuration from JSON text.
    ///
    /// # Errors
    /// Fails if the text is not a valid configuration.
    pub fn from_json(text: &str) -> NumResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.roots.function, "x**2 - 3");
        assert_eq!(config.roots.iteration_map, "x/2 + 1");
        assert_eq!(config.roots.lower_bound, 1.0);
        assert_eq!(config.roots.upper_bound, 2.0);
        assert_eq!(config.roots.tolerance, 0.01);
        assert_eq!(config.roots.initial_guess, 3.0);
        assert_eq!(config.roots.max_iterations, 5);
        assert_eq!(config.roots.derivative_step, 1e-5);
        assert_eq!(config.roots.reference_root, None);
        assert_eq!(config.quadrature.function, "x**2");
        assert_eq!(config.quadrature.intervals, 10);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(
            r#"{"roots": {"tolerance": 1e-6, "reference_root": 1.7320508075688772},
                "quadrature": {"intervals": 20, "upper": 2.0}}"#,
        )
        .unwrap();
        assert_eq!(config.roots.tolerance, 1e-6);
        assert_eq!(config.roots.reference_root, Some(1.7320508075688772));
        assert_eq!(config.roots.function, DEFAULT_ROOT_FUNCTION);
        assert_eq!(config.quadrature.intervals, 20);
        assert_eq!(config.quadrature.upper, 2.0);
        assert_eq!(config.quadrature.lower, 0.0);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Config::from_json(r#"{"roots": {"tolerance": "small"}}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"roots": {"tolerence": 0.1}}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::from_path("/this/path/does/not/exist.json"),
            Err(Error::IOError(_))
        ));
    }
}
