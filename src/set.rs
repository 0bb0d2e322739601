use crate::{
    error::{Error, InvalidValue, MissingVar},
    lookup::{Lookup, ProcessEnv},
    render::{markdown_table, write_entry, DocRow},
    requirement::Requirement,
    value::Value,
    var::{Parsed, Var, VarId},
};
use std::{fmt, fs, io, path::Path};
use tracing::{debug, trace};

/// Metadata about a registered variable, for documentation and tooling
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarInfo {
    /// Environment variable key
    pub key: String,
    /// Human-readable description
    pub description: String,
    /// Current value as environment text
    pub value: String,
    /// Whether the last parse found a value for this variable
    pub specified: bool,
    /// Requirement evaluated against the current values
    pub required: bool,
}

/// An ordered set of environment variable definitions.
///
/// The order matters both when printing (obviously) and when validating,
/// because requirement predicates may refer to the values of other variables.
/// Variables can only be added, never removed.
///
/// # Example
/// ```rust
/// use std::collections::HashMap;
/// use env_loadr::{new_bool, new_int, new_string, optional, required, when_true, VarSet};
///
/// let mut vars = VarSet::new();
/// let port = vars.add("PORT", required(), new_int(0), "Port to listen on");
/// let debug = vars.add("DEBUG", optional(), new_bool(false), "Verbose logging");
/// vars.add("LOG_PATH", when_true(debug), new_string(""), "Where debug logs go");
///
/// let env = HashMap::from([("PORT".to_string(), "8080".to_string())]);
/// vars.try_parse_from(&env).unwrap();
/// assert_eq!(vars.get(port), Some(8080));
/// ```
#[derive(Debug, Default)]
pub struct VarSet<'a> {
    vars: Vec<Var<'a>>,
}

impl<'a> VarSet<'a> {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Appends a variable definition and returns a handle to it.
    ///
    /// `required` decides, after parsing, whether leaving the variable unset is
    /// an error. Use [`required`](crate::required), [`optional`](crate::optional),
    /// [`when_true`](crate::when_true), [`when_false`](crate::when_false), a
    /// plain `bool`, or [`Requirement::custom`].
    ///
    /// Nothing is validated here: empty and duplicate keys are accepted, and
    /// duplicates each read the same environment value independently.
    pub fn add<V: Value + 'a>(
        &mut self,
        key: impl Into<String>,
        required: impl Into<Requirement<'a>>,
        value: V,
        description: impl Into<String>,
    ) -> VarId<V::Output> {
        let index = self.vars.len();
        self.vars.push(Var {
            key: key.into(),
            required: required.into(),
            value: Box::new(value),
            description: description.into(),
            specified: false,
        });
        VarId::new(index)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Var<'a>> {
        self.vars.iter()
    }

    pub fn var<T>(&self, id: VarId<T>) -> Option<&Var<'a>> {
        self.vars.get(id.index())
    }

    /// Current typed value of a variable
    pub fn get<T: 'static>(&self, id: VarId<T>) -> Option<T> {
        self.parsed().get(id)
    }

    pub fn is_specified<T>(&self, id: VarId<T>) -> bool {
        self.parsed().is_specified(id)
    }

    /// Read-only view of the current values, as requirement predicates see it
    pub fn parsed(&self) -> Parsed<'_, 'a> {
        Parsed::new(&self.vars)
    }

    /// Parses the current process environment
    pub fn try_parse(&mut self) -> Result<(), Error> {
        self.try_parse_from(&ProcessEnv)
    }

    /// Parses values returned by `lookup`.
    ///
    /// Every present value is parsed first, in registration order, collecting
    /// all parse failures. Only then are the requirements of the unset
    /// variables evaluated, so each predicate sees the final values of all
    /// variables. A key that is absent or maps to an empty string counts as
    /// unset and keeps its default. A required variable whose value failed to
    /// parse is reported both as invalid and as missing.
    pub fn try_parse_from<L: Lookup + ?Sized>(&mut self, lookup: &L) -> Result<(), Error> {
        let mut invalid_values = Vec::new();

        for var in self.vars.iter_mut() {
            let Some(raw) = lookup.lookup(&var.key).filter(|raw| !raw.is_empty()) else {
                trace!(key = %var.key, "environment variable not set");
                continue;
            };

            match var.value.set_raw(&raw) {
                Ok(()) => {
                    trace!(key = %var.key, "parsed environment variable");
                    var.specified = true;
                }
                Err(source) => {
                    debug!(key = %var.key, error = %source, "invalid environment variable");
                    invalid_values.push(InvalidValue {
                        key: var.key.clone(),
                        source,
                    });
                }
            }
        }

        let parsed = Parsed::new(&self.vars);
        let missing_vars: Vec<MissingVar> = self
            .vars
            .iter()
            .enumerate()
            .filter(|(_, var)| !var.specified && var.required.evaluate(&parsed))
            .map(|(index, var)| MissingVar {
                index,
                key: var.key.clone(),
                description: var.description.clone(),
                value: var.render(),
            })
            .collect();

        debug!(
            variables = self.vars.len(),
            invalid = invalid_values.len(),
            missing = missing_vars.len(),
            "parsed environment"
        );

        match Error::from_parts(invalid_values, missing_vars) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Writes the shell script form of all variables to `out`
    pub fn write_script(&self, out: &mut impl io::Write) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Snapshot of every variable's metadata
    pub fn describe(&self) -> Vec<VarInfo> {
        let parsed = self.parsed();
        self.vars
            .iter()
            .map(|var| VarInfo {
                key: var.key.clone(),
                description: var.description.clone(),
                value: var.render(),
                specified: var.specified,
                required: var.required.evaluate(&parsed),
            })
            .collect()
    }

    /// Markdown documentation of all variables
    pub fn render_markdown(&self) -> String {
        let parsed = self.parsed();
        markdown_table(self.vars.iter().map(|var| DocRow {
            key: &var.key,
            description: &var.description,
            value: var.render(),
            required: var.required.evaluate(&parsed),
        }))
    }

    /// Write configuration documentation to a markdown file
    ///
    /// # Example
    /// ```no_run
    /// use env_loadr::{new_int, optional, VarSet};
    ///
    /// let mut vars = VarSet::new();
    /// vars.add("PORT", optional(), new_int(8080), "Server port");
    /// vars.write_docs("CONFIG.md").unwrap();
    /// ```
    pub fn write_docs(&self, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, self.render_markdown())
    }
}

/// Shell script that defines every variable, with descriptions as comments
impl fmt::Display for VarSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.vars {
            write_entry(f, &var.key, &var.description, &var.render())?;
        }
        Ok(())
    }
}

impl<'s, 'a> IntoIterator for &'s VarSet<'a> {
    type Item = &'s Var<'a>;
    type IntoIter = std::slice::Iter<'s, Var<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
