//! # Expressions
//!
//! Real valued functions of `x` defined by text, such as `"x**2 - 3"`.
//!
//! Text is parsed into an [`Expr`] tree over a small numeric grammar, nothing the
//! caller writes is ever executed. Supported:
//!
//! - numbers, including scientific notation (`1.5e-3`)
//! - the variable `x`, and the constants `pi` and `e`
//! - `+`, `-`, `*`, `/`, and powers written as `^` or `**`
//! - unary `+` and `-`, parentheses
//! - `sqrt`, `exp`, `ln`, `log` (natural), `log10`, `sin`, `cos`, `tan`, `abs`
//!
//! Powers are right associative and bind tighter than a leading minus, so
//! `-x**2` is `-(x**2)`.
//!
//! Text longer than 4096 characters, or nested more than 64 levels deep through
//! parentheses, calls, signs and powers, is rejected with [`Error::Parse`].
//!
//! ```
//!     use numeth_core::expr::Expr;
//!     let expr: Expr = "x**2 - 3".parse().unwrap();
//!     assert_eq!(expr.eval(2.0).unwrap(), 1.0);
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

mod parser;

use std::f64::consts::{E, PI};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, NumResult};

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition.
    Add,

    /// Subtraction.
    Sub,

    /// Multiplication.
    Mul,

    /// Division.
    Div,

    /// Exponentiation.
    Pow,
}

impl BinaryOp {
    /// Symbol used when printing.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, String> {
        let val = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => {
                if rhs == 0.0 {
                    return Err("division by zero".into());
                }
                lhs / rhs
            }
            Self::Pow => {
                if lhs < 0.0 && rhs.fract() != 0.0 {
                    return Err(format!(
                        "negative base {lhs} raised to fractional power {rhs}"
                    ));
                }
                if lhs == 0.0 && rhs < 0.0 {
                    return Err("zero raised to a negative power".into());
                }
                lhs.powf(rhs)
            }
        };
        if !val.is_finite() && lhs.is_finite() && rhs.is_finite() {
            return Err(format!("'{}' produced a non-finite value", self.symbol()));
        }
        Ok(val)
    }
}

/// Whitelisted functions of a single argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Square root.
    Sqrt,

    /// Exponential.
    Exp,

    /// Natural logarithm, spelled `ln` or `log`.
    Ln,

    /// Base 10 logarithm.
    Log10,

    /// Sine.
    Sin,

    /// Cosine.
    Cos,

    /// Tangent.
    Tan,

    /// Absolute value.
    Abs,
}

impl Builtin {
    /// Look up a function by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::Sqrt),
            "exp" => Some(Self::Exp),
            "ln" | "log" => Some(Self::Ln),
            "log10" => Some(Self::Log10),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "abs" => Some(Self::Abs),
            _ => None,
        }
    }

    /// Name used when printing.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Abs => "abs",
        }
    }

    fn apply(&self, arg: f64) -> Result<f64, String> {
        let val = match self {
            Self::Sqrt => {
                if arg < 0.0 {
                    return Err(format!("square root of negative value {arg}"));
                }
                arg.sqrt()
            }
            Self::Ln | Self::Log10 => {
                if arg <= 0.0 {
                    return Err(format!("logarithm of non-positive value {arg}"));
                }
                if *self == Self::Ln {
                    arg.ln()
                } else {
                    arg.log10()
                }
            }
            Self::Exp => arg.exp(),
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Tan => arg.tan(),
            Self::Abs => arg.abs(),
        };
        if !val.is_finite() && arg.is_finite() {
            return Err(format!("{} produced a non-finite value", self.name()));
        }
        Ok(val)
    }
}

/// Named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// Ratio of a circle's circumference to its diameter.
    Pi,

    /// Euler's number.
    E,
}

impl Constant {
    /// Numeric value.
    #[must_use]
    pub fn value(&self) -> f64 {
        match self {
            Self::Pi => PI,
            Self::E => E,
        }
    }
}

/// Parsed expression tree of a function of `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal number.
    Number(f64),

    /// The independent variable `x`.
    Variable,

    /// Named constant.
    Constant(Constant),

    /// Unary negation.
    Negate(Box<Expr>),

    /// Binary operation.
    Binary(BinaryOp, Box<Expr>, Box<Expr>),

    /// Call of a whitelisted function.
    Call(Builtin, Box<Expr>),
}

impl Expr {
    /// Parse an expression from text.
    ///
    /// # Errors
    /// [`Error::Parse`] if the text is not a valid expression.
    pub fn parse(text: &str) -> NumResult<Self> {
        parser::parse(text)
    }

    /// Construct a binary operation node.
    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Evaluate the expression at `x`.
    ///
    /// # Errors
    /// [`Error::Evaluation`] when `x` is outside the domain of the expression, for
    /// example the square root of a negative number or a division by zero.
    pub fn eval(&self, x: f64) -> NumResult<f64> {
        let val = match self {
            Self::Number(val) => *val,
            Self::Variable => x,
            Self::Constant(c) => c.value(),
            Self::Negate(arg) => -arg.eval(x)?,
            Self::Binary(op, lhs, rhs) => op
                .apply(lhs.eval(x)?, rhs.eval(x)?)
                .map_err(|reason| Error::evaluation(x, reason))?,
            Self::Call(func, arg) => func
                .apply(arg.eval(x)?)
                .map_err(|reason| Error::evaluation(x, reason))?,
        };
        Ok(val)
    }

    /// Borrow this expression as a closure usable by the root finders and
    /// quadrature rules.
    ///
    /// ```
    ///     use numeth_core::expr::Expr;
    ///     use numeth_core::quadrature::simpson;
    ///     let expr = Expr::parse("x^2").unwrap();
    ///     let area = simpson(expr.as_function(), 0.0, 1.0, 10).unwrap();
    ///     assert!((area - 1.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn as_function(&self) -> impl Fn(f64) -> NumResult<f64> + '_ {
        move |x| self.eval(x)
    }
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(val) => write!(f, "{val}"),
            Self::Variable => f.write_str("x"),
            Self::Constant(Constant::Pi) => f.write_str("pi"),
            Self::Constant(Constant::E) => f.write_str("e"),
            Self::Negate(arg) => write!(f, "(-{arg})"),
            Self::Binary(op, lhs, rhs) => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Self::Call(func, arg) => write!(f, "{}({arg})", func.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str, x: f64) -> NumResult<f64> {
        Expr::parse(text)?.eval(x)
    }

    #[test]
    fn test_eval_polynomial() {
        assert_eq!(eval("x**2 - 3", 2.0).unwrap(), 1.0);
        assert_eq!(eval("x^2 - 4", 3.0).unwrap(), 5.0);
        assert_eq!(eval("x/2 + 1.5/x", 3.0).unwrap(), 2.0);
    }

    #[test]
    fn test_eval_functions() {
        assert!((eval("sqrt(x)", 9.0).unwrap() - 3.0).abs() < 1e-15);
        assert!((eval("exp(ln(x))", 2.5).unwrap() - 2.5).abs() < 1e-14);
        assert!((eval("log(e)", 0.0).unwrap() - 1.0).abs() < 1e-15);
        assert!((eval("log10(x)", 1000.0).unwrap() - 3.0).abs() < 1e-15);
        assert!((eval("sin(pi/2) + cos(0) + tan(0)", 0.0).unwrap() - 2.0).abs() < 1e-15);
        assert_eq!(eval("abs(x)", -4.0).unwrap(), 4.0);
    }

    #[test]
    fn test_domain_errors() {
        for (text, x) in [
            ("sqrt(x)", -1.0),
            ("1 / x", 0.0),
            ("ln(x)", 0.0),
            ("log10(x)", -2.0),
            ("x ** 0.5", -4.0),
            ("x ** -1", 0.0),
            ("exp(x)", 1000.0),
        ] {
            match eval(text, x) {
                Err(Error::Evaluation { x: at, .. }) => assert_eq!(at, x),
                other => panic!("{text} at {x} gave {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_base_integer_power() {
        assert_eq!(eval("x**3", -2.0).unwrap(), -8.0);
    }

    #[test]
    fn test_display_round_trip() {
        let expr = Expr::parse("-x**2 + 3*sin(x)/2").unwrap();
        let printed = expr.to_string();
        assert_eq!(printed, "((-(x ^ 2)) + ((3 * sin(x)) / 2))");
        let reparsed: Expr = printed.parse().unwrap();
        assert_eq!(expr, reparsed);
    }

    #[test]
    fn test_as_function() {
        let expr = Expr::parse("x - 1").unwrap();
        let f = expr.as_function();
        assert_eq!(f(3.0).unwrap(), 2.0);
    }
}
