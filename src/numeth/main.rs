//! # numeth
//! Command line driver which runs every root finder and quadrature rule on a
//! configured problem and prints the results.
//!
//! ```text
//! numeth [--json] [CONFIG.json]
//! ```
//!
//! Without a configuration file the defaults of [`numeth_core::config`] are used.

use std::fmt::Display;
use std::process::ExitCode;

use itertools::Itertools;
use numeth_core::prelude::*;
use serde::Serialize;
use serde_json::{Value, json};

const USAGE: &str = "Usage: numeth [--json] [CONFIG.json]";

fn main() -> ExitCode {
    let mut as_json = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            _ if path.is_none() => path = Some(arg),
            _ => {
                eprintln!("Unexpected argument '{arg}'\n{USAGE}");
                return ExitCode::FAILURE;
            }
        }
    }

    match run(path.as_deref(), as_json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: Option<&str>, as_json: bool) -> NumResult<()> {
    let config = match path {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };

    let roots = run_root_methods(&config.roots)?;
    let integrals = run_quadrature_methods(&config.quadrature)?;

    if as_json {
        let roots = roots
            .iter()
            .map(|(method, res)| json_entry(method, res))
            .collect::<NumResult<Vec<_>>>()?;
        let integrals = integrals
            .iter()
            .map(|(method, res)| json_entry(method, res))
            .collect::<NumResult<Vec<_>>>()?;
        let output = json!({"roots": roots, "quadrature": integrals});
        println!(
            "{}",
            serde_json::to_string_pretty(&output).map_err(output_error)?
        );
    } else {
        println!(
            "{}\n",
            roots
                .iter()
                .map(|(method, res)| text_entry(method, res))
                .join("\n\n")
        );
        println!(
            "{}",
            integrals
                .iter()
                .map(|(method, res)| text_entry(method, res))
                .join("\n")
        );
    }
    Ok(())
}

fn output_error(err: serde_json::Error) -> Error {
    Error::Output(err.to_string())
}

fn text_entry<T: Display>(method: impl Display, res: &NumResult<T>) -> String {
    match res {
        Ok(report) => report.to_string(),
        Err(err) => format!("{method} failed: {err}"),
    }
}

fn json_entry<T: Serialize>(method: impl Display, res: &NumResult<T>) -> NumResult<Value> {
    match res {
        Ok(report) => serde_json::to_value(report).map_err(output_error),
        Err(err) => Ok(json!({"method": method.to_string(), "error": err.to_string()})),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_json_entry_failure_is_output_error() {
        // JSON objects need string keys
        let bad: NumResult<HashMap<(u8, u8), u8>> = Ok(HashMap::from([((1, 2), 3)]));
        assert!(matches!(
            json_entry(RootMethod::Bisection, &bad),
            Err(Error::Output(_))
        ));
    }

    #[test]
    fn test_json_entry_method_error() {
        let res: NumResult<f64> = Err(Error::ValueError("bad".into()));
        let value = json_entry(QuadratureMethod::Simpson, &res).unwrap();
        assert_eq!(value["method"], "Simpson's 1/3 Rule");
        assert_eq!(value["error"], "Invalid argument: bad");
    }

    #[test]
    fn test_text_entry() {
        let res: NumResult<f64> = Err(Error::ValueError("bad".into()));
        assert_eq!(
            text_entry(RootMethod::NewtonRaphson, &res),
            "Newton-Raphson Method failed: Invalid argument: bad"
        );
        assert_eq!(text_entry(RootMethod::Bisection, &Ok(1.5)), "1.5");
    }
}
