//! Grammar for [`Expr`], lowest precedence first:
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := unary (("*" | "/") unary)*
//! unary      := ("-" | "+") unary | power
//! power      := atom (("**" | "^") unary)?
//! atom       := number | identifier | identifier "(" expression ")" | "(" expression ")"
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

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric0, char, multispace0, one_of},
    combinator::{all_consuming, cut, map, map_res, not, opt, recognize, value},
    error::ErrorKind,
    multi::many0,
    number::complete::recognize_float,
    sequence::{delimited, pair, preceded, terminated},
};

use crate::errors::{Error, NumResult};
use crate::expr::{BinaryOp, Builtin, Constant, Expr};

/// Deepest nesting of parentheses, calls, signs and powers accepted.
pub(super) const MAX_DEPTH: usize = 64;

/// Longest text accepted, this also bounds the depth of long operator chains.
pub(super) const MAX_LENGTH: usize = 4096;

/// Parse the full text, trailing input is an error.
pub(super) fn parse(text: &str) -> NumResult<Expr> {
    if text.len() > MAX_LENGTH {
        Err(Error::Parse(format!(
            "expression is longer than {MAX_LENGTH} characters"
        )))?;
    }
    match all_consuming(|input| expression(input, 0)).parse(text) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => {
            let remaining = err.input.trim();
            if err.code == ErrorKind::TooLarge {
                Err(Error::Parse(format!(
                    "'{text}' is nested deeper than {MAX_DEPTH} levels"
                )))
            } else if remaining.is_empty() {
                Err(Error::Parse(format!(
                    "'{text}' ended before the expression was complete"
                )))
            } else {
                Err(Error::Parse(format!(
                    "'{text}' has unexpected input at '{remaining}'"
                )))
            }
        }
        Err(nom::Err::Incomplete(_)) => Err(Error::Parse(format!("'{text}' is incomplete"))),
    }
}

/// Strip surrounding whitespace from a token.
fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

/// Refuse to descend past [`MAX_DEPTH`], this is not recoverable by other branches.
fn check_depth(input: &str, depth: usize) -> IResult<&str, ()> {
    if depth > MAX_DEPTH {
        return Err(nom::Err::Failure(nom::error::Error::new(
            input,
            ErrorKind::TooLarge,
        )));
    }
    Ok((input, ()))
}

/// Left fold a chain of operations at the same precedence.
fn fold_chain(first: Expr, rest: Vec<(BinaryOp, Expr)>) -> Expr {
    rest.into_iter()
        .fold(first, |lhs, (op, rhs)| Expr::binary(op, lhs, rhs))
}

fn expression(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, ()) = check_depth(input, depth)?;
    let (input, first) = term(input, depth)?;
    let (input, rest) = many0(pair(additive_op, |i| term(i, depth))).parse(input)?;
    Ok((input, fold_chain(first, rest)))
}

fn additive_op(input: &str) -> IResult<&str, BinaryOp> {
    ws(alt((
        value(BinaryOp::Add, char('+')),
        value(BinaryOp::Sub, char('-')),
    )))
    .parse(input)
}

fn term(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, first) = unary(input, depth)?;
    let (input, rest) = many0(pair(multiplicative_op, |i| unary(i, depth))).parse(input)?;
    Ok((input, fold_chain(first, rest)))
}

fn multiplicative_op(input: &str) -> IResult<&str, BinaryOp> {
    // a lone '*', "**" belongs to power
    ws(alt((
        value(BinaryOp::Mul, terminated(char('*'), not(char('*')))),
        value(BinaryOp::Div, char('/')),
    )))
    .parse(input)
}

fn unary(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, ()) = check_depth(input, depth)?;
    alt((
        map(preceded(ws(char('-')), |i| unary(i, depth + 1)), |arg| {
            Expr::Negate(Box::new(arg))
        }),
        preceded(ws(char('+')), |i| unary(i, depth + 1)),
        |i| power(i, depth),
    ))
    .parse(input)
}

fn power(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, base) = atom(input, depth)?;
    let (input, exponent) = opt(preceded(ws(alt((tag("**"), tag("^")))), |i| {
        unary(i, depth + 1)
    }))
    .parse(input)?;
    match exponent {
        Some(exponent) => Ok((input, Expr::binary(BinaryOp::Pow, base, exponent))),
        None => Ok((input, base)),
    }
}

fn atom(input: &str, depth: usize) -> IResult<&str, Expr> {
    alt((
        number,
        |i| identifier(i, depth),
        delimited(
            ws(char('(')),
            |i| expression(i, depth + 1),
            ws(char(')')),
        ),
    ))
    .parse(input)
}

fn number(input: &str) -> IResult<&str, Expr> {
    // signs are unary operators, not part of the literal
    let literal = preceded(not(one_of("+-")), recognize_float);
    ws(map_res(literal, |text: &str| text.parse::<f64>().map(Expr::Number))).parse(input)
}

fn identifier(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (rest, name) = ws(recognize(pair(alpha1, alphanumeric0))).parse(input)?;

    if let Some(func) = Builtin::from_name(name) {
        let (rest, arg) = cut(delimited(
            ws(char('(')),
            |i| expression(i, depth + 1),
            ws(char(')')),
        ))
        .parse(rest)?;
        return Ok((rest, Expr::Call(func, Box::new(arg))));
    }

    match name {
        "x" => Ok((rest, Expr::Variable)),
        "pi" => Ok((rest, Expr::Constant(Constant::Pi))),
        "e" => Ok((rest, Expr::Constant(Constant::E))),
        // Unknown names are never valid, do not let alternatives retry.
        _ => Err(nom::Err::Failure(nom::error::Error::new(
            input.trim_start(),
            ErrorKind::Verify,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse("3").unwrap(), Expr::Number(3.0));
        assert_eq!(parse(" 2.5 ").unwrap(), Expr::Number(2.5));
        assert_eq!(parse(".5").unwrap(), Expr::Number(0.5));
        assert_eq!(parse("1.5e-3").unwrap(), Expr::Number(1.5e-3));
        assert_eq!(parse("2E2").unwrap(), Expr::Number(200.0));
        assert_eq!(parse("7.").unwrap(), Expr::Number(7.0));
    }

    #[test]
    fn test_decimal_at_end_of_input() {
        assert_eq!(parse("0.5").unwrap(), Expr::Number(0.5));
        assert_eq!(parse("3 * 0.5").unwrap().eval(0.0).unwrap(), 1.5);
        assert_eq!(
            parse("2 ** 2.5").unwrap().eval(0.0).unwrap(),
            2.0_f64.powf(2.5)
        );
        assert_eq!(parse("x**2 - 0.5").unwrap().eval(1.0).unwrap(), 0.5);
        assert_eq!(parse("1.5e-3").unwrap(), Expr::Number(1.5e-3));
        assert!(matches!(
            parse("x ** 0.5").unwrap().eval(-4.0),
            Err(Error::Evaluation { .. })
        ));
    }

    #[test]
    fn test_nesting_limit() {
        let nested = |depth: usize| format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse(&nested(MAX_DEPTH)).unwrap(), Expr::Variable);
        assert!(matches!(parse(&nested(MAX_DEPTH + 1)), Err(Error::Parse(_))));
        assert!(matches!(parse(&nested(100_000)), Err(Error::Parse(_))));

        let signs = format!("{}x", "-".repeat(1000));
        assert!(matches!(parse(&signs), Err(Error::Parse(_))));

        let powers = format!("x{}", "**x".repeat(1000));
        assert!(matches!(parse(&powers), Err(Error::Parse(_))));

        let calls = format!("{}x{}", "sin(".repeat(1000), ")".repeat(1000));
        assert!(matches!(parse(&calls), Err(Error::Parse(_))));
    }

    #[test]
    fn test_length_limit() {
        let long_sum = format!("x{}", "+x".repeat(MAX_LENGTH));
        match parse(&long_sum) {
            Err(Error::Parse(msg)) => assert!(msg.contains("longer than")),
            other => panic!("long input gave {other:?}"),
        }

        // the longest accepted chain still evaluates
        let sum = format!("x{}", "+x".repeat((MAX_LENGTH - 1) / 2));
        let expr = parse(&sum).unwrap();
        assert_eq!(expr.eval(1.0).unwrap(), ((MAX_LENGTH - 1) / 2 + 1) as f64);
    }

    #[test]
    fn test_precedence() {
        // 1 + (2 * 3)
        assert_eq!(
            parse("1 + 2 * 3").unwrap(),
            Expr::binary(
                BinaryOp::Add,
                Expr::Number(1.0),
                Expr::binary(BinaryOp::Mul, Expr::Number(2.0), Expr::Number(3.0)),
            )
        );
        // (8 - 2) - 1
        assert_eq!(parse("8 - 2 - 1").unwrap().eval(0.0).unwrap(), 5.0);
        // (8 / 4) / 2
        assert_eq!(parse("8 / 4 / 2").unwrap().eval(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_power() {
        // right associative
        assert_eq!(parse("2 ** 3 ** 2").unwrap().eval(0.0).unwrap(), 512.0);
        assert_eq!(parse("2^3^2").unwrap().eval(0.0).unwrap(), 512.0);
        // binds tighter than unary minus
        assert_eq!(parse("-x**2").unwrap().eval(3.0).unwrap(), -9.0);
        // negative exponent
        assert_eq!(parse("2**-1").unwrap().eval(0.0).unwrap(), 0.5);
        assert_eq!(parse("2 * x ** 2").unwrap().eval(3.0).unwrap(), 18.0);
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(parse("x").unwrap(), Expr::Variable);
        assert_eq!(parse("pi").unwrap(), Expr::Constant(Constant::Pi));
        assert_eq!(parse("e").unwrap(), Expr::Constant(Constant::E));
        assert_eq!(
            parse("sqrt( x )").unwrap(),
            Expr::Call(Builtin::Sqrt, Box::new(Expr::Variable))
        );
        assert_eq!(
            parse("log10(x)").unwrap(),
            Expr::Call(Builtin::Log10, Box::new(Expr::Variable))
        );
    }

    #[test]
    fn test_parenthesis() {
        assert_eq!(parse("(1 + 2) * 3").unwrap().eval(0.0).unwrap(), 9.0);
        assert_eq!(parse("-(x - 1)").unwrap().eval(3.0).unwrap(), -2.0);
        assert_eq!(parse("+x").unwrap(), Expr::Variable);
    }

    #[test]
    fn test_rejects_invalid() {
        for text in [
            "",
            "   ",
            "x +",
            "2x",
            "(x",
            "x)",
            "y",
            "foo(x)",
            "sqrt x",
            "x ** ",
            "__import__('os')",
            "x; 1",
            "inf",
            "nan",
        ] {
            assert!(
                matches!(parse(text), Err(Error::Parse(_))),
                "{text:?} should not parse"
            );
        }
    }
}
