//! # Errors
//!
//! Errors emitted by `numeth_core`.
//!
//! Failure to converge is not an error, it is reported through
//! [`crate::fitting::StopReason`] on the returned result.
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

/// Result type used throughout the crate.
pub type NumResult<T> = Result<T, Error>;

/// Possible errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A checked precondition on the inputs was violated.
    #[error("Invalid argument: {0}")]
    ValueError(String),

    /// The user supplied function could not be evaluated at `x`.
    #[error("Function evaluation failed at x={x}: {reason}")]
    Evaluation {
        /// Input at which evaluation failed.
        x: f64,

        /// Description of the failure.
        reason: String,
    },

    /// A function definition could not be parsed.
    #[error("Failed to parse function: {0}")]
    Parse(String),

    /// Reading a file failed.
    #[error("IO error: {0}")]
    IOError(String),

    /// Configuration contents were not valid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Results could not be written out.
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl Error {
    /// Construct an evaluation error from anything convertible to `f64`.
    pub fn evaluation<T: num_traits::ToPrimitive>(x: T, reason: impl Into<String>) -> Self {
        Self::Evaluation {
            x: x.to_f64().unwrap_or(f64::NAN),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Config(error.to_string())
    }
}
