use crate::error::ParseError;
use std::time::Duration;

/// A plain value type that can be read from and written back to an environment string.
///
/// `render_env` must produce text that `parse_env` accepts and that yields the
/// same value again, though not necessarily the same text (`on` renders as `true`).
///
/// # Example
/// ```rust
/// use env_loadr::{ParseError, Scalar};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Mode {
///     Prod,
///     Dev,
/// }
///
/// impl Scalar for Mode {
///     fn parse_env(raw: &str) -> Result<Self, ParseError> {
///         match raw {
///             "prod" => Ok(Mode::Prod),
///             "dev" => Ok(Mode::Dev),
///             _ => Err(ParseError::custom("expected 'dev' or 'prod'")),
///         }
///     }
///
///     fn render_env(&self) -> String {
///         match self {
///             Mode::Prod => "prod".to_string(),
///             Mode::Dev => "dev".to_string(),
///         }
///     }
/// }
///
/// assert_eq!(Mode::parse_env("dev").unwrap(), Mode::Dev);
/// ```
pub trait Scalar: Clone + 'static {
    fn parse_env(raw: &str) -> Result<Self, ParseError>;

    fn render_env(&self) -> String;
}

impl Scalar for String {
    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.to_string())
    }

    fn render_env(&self) -> String {
        self.clone()
    }
}

impl Scalar for bool {
    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        parse_bool(raw)
    }

    fn render_env(&self) -> String {
        self.to_string()
    }
}

/// Accepts the usual spellings of true/false in the three common casings
pub fn parse_bool(raw: &str) -> Result<bool, ParseError> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" | "on" | "On" | "ON" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" | "off" | "Off" | "OFF" => Ok(false),
        _ => Err(ParseError::InvalidBool),
    }
}

macro_rules! impl_scalar_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                fn parse_env(raw: &str) -> Result<Self, ParseError> {
                    Ok(raw.parse::<$ty>()?)
                }

                fn render_env(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Scalar for Duration {
    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(humantime::parse_duration(raw)?)
    }

    fn render_env(&self) -> String {
        // humantime separates units with spaces, which would split the shell word
        humantime::format_duration(*self)
            .to_string()
            .replace(' ', "")
    }
}
