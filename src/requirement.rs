use crate::var::{Parsed, VarId};
use std::fmt;

/// Decides whether an unset variable is an error.
///
/// Evaluated only after every variable in the registry has been parsed, so a
/// predicate may read any other variable's final value through [`Parsed`].
pub struct Requirement<'a>(Box<dyn Fn(&Parsed<'_, '_>) -> bool + 'a>);

impl<'a> Requirement<'a> {
    /// Builds a requirement from an arbitrary predicate
    ///
    /// # Example
    /// ```rust
    /// use env_loadr::{new_int, new_string, Requirement, VarSet};
    ///
    /// let mut vars = VarSet::new();
    /// let workers = vars.add("WORKERS", false, new_int(1), "Worker count");
    /// vars.add(
    ///     "QUEUE_URL",
    ///     Requirement::custom(move |parsed| parsed.get(workers).unwrap_or(0) > 1),
    ///     new_string(""),
    ///     "Queue shared by the workers",
    /// );
    /// ```
    pub fn custom(predicate: impl Fn(&Parsed<'_, '_>) -> bool + 'a) -> Self {
        Self(Box::new(predicate))
    }

    pub fn evaluate(&self, parsed: &Parsed<'_, '_>) -> bool {
        (self.0)(parsed)
    }
}

impl From<bool> for Requirement<'_> {
    fn from(required: bool) -> Self {
        Self::custom(move |_| required)
    }
}

impl fmt::Debug for Requirement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Requirement(..)")
    }
}

/// Always required
pub fn required() -> Requirement<'static> {
    Requirement::from(true)
}

/// Never required
pub fn optional() -> Requirement<'static> {
    Requirement::from(false)
}

/// Required when the given flag ended up true.
///
/// Very often a feature is switched on by a master on/off variable and a
/// handful of its settings only matter while it is on.
pub fn when_true(flag: VarId<bool>) -> Requirement<'static> {
    Requirement::custom(move |parsed| parsed.get(flag).unwrap_or(false))
}

/// Required when the given flag ended up false
pub fn when_false(flag: VarId<bool>) -> Requirement<'static> {
    Requirement::custom(move |parsed| parsed.get(flag).map(|on| !on).unwrap_or(false))
}
