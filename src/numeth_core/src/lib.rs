//! # numeth Core
//! Classic iterative root finders and closed form quadrature rules for real valued
//! functions of one real variable.
//!
//! - [`fitting`]: bisection, fixed point iteration and Newton-Raphson, all
//!   reporting a uniform [`fitting::RootResult`].
//! - [`quadrature`]: trapezoidal and Simpson's 1/3 rules.
//! - [`expr`]: safe parsing of function definitions such as `"x**2 - 3"`.
//! - [`driver`] and [`config`]: run every method on a configured problem.
//!
//! Functions are anything implementing [`function::Function`], which includes any
//! closure `Fn(T) -> NumResult<T>`. Evaluation failures are propagated, never
//! hidden behind NaN.
//!
//! ```
//!     use numeth_core::prelude::*;
//!     let f = |x: f64| Ok(x * x - 4.0);
//!     let res = newton_raphson(f, 1e-6, 3.0, 100).unwrap();
//!     assert_eq!(res.stop_reason, StopReason::ToleranceReached);
//!     assert!((res.estimate - 2.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod driver;
pub mod errors;
pub mod expr;
pub mod fitting;
pub mod function;
pub mod quadrature;

/// Common useful imports
pub mod prelude {
    pub use crate::config::{Config, QuadratureConfig, RootConfig};
    pub use crate::driver::{
        QuadratureMethod, QuadratureOutcome, QuadratureReport, RootMethod, RootOutcome,
        RootReport, run_batch, run_quadrature_methods, run_root_methods,
    };
    pub use crate::errors::{Error, NumResult};
    pub use crate::expr::Expr;
    pub use crate::fitting::{
        ErrorEstimate, RootResult, StopReason, bisection, fixed_point, newton_raphson,
        newton_raphson_with_step,
    };
    pub use crate::function::{DEFAULT_DIFF_STEP, Function};
    pub use crate::quadrature::{simpson, trapezoidal};
}
