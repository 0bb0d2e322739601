use crate::{error::ParseError, scalar::Scalar};
use std::{any::Any, fmt, ops::Deref, time::Duration};

/// A typed value a variable parses into
pub trait Value {
    /// What `get` hands back for programmatic use
    type Output: 'static;

    /// Replaces the current value with one parsed from `raw`.
    ///
    /// On error the current value is left unchanged.
    fn set(&mut self, raw: &str) -> Result<(), ParseError>;

    /// The current value as environment text, empty if there is nothing to show
    fn render(&self) -> String;

    fn get(&self) -> Self::Output;
}

/// Object-safe face of [`Value`] the registry stores
pub(crate) trait AnyValue {
    fn set_raw(&mut self, raw: &str) -> Result<(), ParseError>;
    fn render_raw(&self) -> String;
    fn get_any(&self) -> Box<dyn Any>;
}

impl<V: Value> AnyValue for V {
    fn set_raw(&mut self, raw: &str) -> Result<(), ParseError> {
        Value::set(self, raw)
    }

    fn render_raw(&self) -> String {
        Value::render(self)
    }

    fn get_any(&self) -> Box<dyn Any> {
        Box::new(Value::get(self))
    }
}

/// A value owned by its variable, starting from a default
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Owned<T>(T);

impl<T: Scalar> Owned<T> {
    pub fn new(default: T) -> Self {
        Self(default)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Scalar> Value for Owned<T> {
    type Output = T;

    fn set(&mut self, raw: &str) -> Result<(), ParseError> {
        self.0 = T::parse_env(raw)?;
        Ok(())
    }

    fn render(&self) -> String {
        self.0.render_env()
    }

    fn get(&self) -> T {
        self.0.clone()
    }
}

// Allow using Owned<T> as &T
impl<T> Deref for Owned<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AsRef<T> for Owned<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

/// A value stored in the caller's own variable.
///
/// Parsing writes straight through to the borrowed storage, so the caller sees
/// the result once the registry holding this value is dropped.
pub struct Bound<'a, T>(&'a mut T);

impl<'a, T: Scalar> Bound<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Self(target)
    }
}

impl<T: Scalar> Value for Bound<'_, T> {
    type Output = T;

    fn set(&mut self, raw: &str) -> Result<(), ParseError> {
        *self.0 = T::parse_env(raw)?;
        Ok(())
    }

    fn render(&self) -> String {
        self.0.render_env()
    }

    fn get(&self) -> T {
        self.0.clone()
    }
}

impl<T> Deref for Bound<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Bound<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bound").field(&self.0).finish()
    }
}

pub fn new_string(default: impl Into<String>) -> Owned<String> {
    Owned::new(default.into())
}

pub fn string_var(target: &mut String) -> Bound<'_, String> {
    Bound::new(target)
}

pub fn new_bool(default: bool) -> Owned<bool> {
    Owned::new(default)
}

pub fn bool_var(target: &mut bool) -> Bound<'_, bool> {
    Bound::new(target)
}

pub fn new_int(default: isize) -> Owned<isize> {
    Owned::new(default)
}

pub fn int_var(target: &mut isize) -> Bound<'_, isize> {
    Bound::new(target)
}

pub fn new_int64(default: i64) -> Owned<i64> {
    Owned::new(default)
}

pub fn int64_var(target: &mut i64) -> Bound<'_, i64> {
    Bound::new(target)
}

pub fn new_duration(default: Duration) -> Owned<Duration> {
    Owned::new(default)
}

pub fn duration_var(target: &mut Duration) -> Bound<'_, Duration> {
    Bound::new(target)
}
