//! Declarative loading of an executable's configuration from environment variables.
//!
//! Register variables on a [`VarSet`] in order, each with a typed value, a
//! requirement and a description, then parse the environment once at startup.
//! All invalid values and all missing required variables are reported together
//! in a single [`Error`]. The same set renders itself as a commented shell
//! script, which doubles as documentation of every supported variable.
//!
//! ```rust
//! use std::collections::HashMap;
//! use env_loadr::{new_bool, new_int, new_string, optional, required, when_true, VarSet};
//!
//! let mut vars = VarSet::new();
//! vars.add("PORT", required(), new_int(0), "Port to listen on");
//! let debug = vars.add("DEBUG", optional(), new_bool(false), "Verbose logging");
//! vars.add("LOG_PATH", when_true(debug), new_string(""), "Where debug logs go");
//!
//! let env = HashMap::from([
//!     ("PORT".to_string(), "8080".to_string()),
//!     ("DEBUG".to_string(), "true".to_string()),
//! ]);
//! let error = vars.try_parse_from(&env).unwrap_err();
//! assert_eq!(error.missing_keys(), vec!["LOG_PATH"]);
//! ```

pub mod error;
pub mod lookup;
pub mod process;
mod render;
pub mod requirement;
pub mod scalar;
pub mod set;
pub mod value;
pub mod var;

// Re-export main types
pub use error::{print_error, Error, InvalidValue, MissingVar, ParseError};
pub use lookup::{Lookup, ProcessEnv};
pub use process::{print_env_arg, PrintAction, EXIT_INVALID_ENV, EXIT_PRINTED, PRINT_ENV_ARG};
pub use render::EMPTY_PLACEHOLDER;
pub use requirement::{optional, required, when_false, when_true, Requirement};
pub use scalar::{parse_bool, Scalar};
pub use set::{VarInfo, VarSet};
pub use value::{
    bool_var, duration_var, int64_var, int_var, new_bool, new_duration, new_int, new_int64,
    new_string, string_var, Bound, Owned, Value,
};
pub use var::{Parsed, Var, VarId};
