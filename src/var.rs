use crate::{requirement::Requirement, value::AnyValue};
use std::{fmt, marker::PhantomData};

/// Typed handle to a variable registered in a [`VarSet`](crate::VarSet).
///
/// Returned by `VarSet::add`; pass it to requirement builders such as
/// [`when_true`](crate::when_true) or to `VarSet::get` to read the parsed value.
pub struct VarId<T> {
    index: usize,
    _type: PhantomData<fn() -> T>,
}

impl<T> VarId<T> {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            _type: PhantomData,
        }
    }

    /// Position of the variable in registration order
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Clone for VarId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VarId<T> {}

impl<T> PartialEq for VarId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for VarId<T> {}

impl<T> fmt::Debug for VarId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VarId").field(&self.index).finish()
    }
}

/// One registered environment variable
pub struct Var<'a> {
    pub(crate) key: String,
    pub(crate) required: Requirement<'a>,
    pub(crate) value: Box<dyn AnyValue + 'a>,
    pub(crate) description: String,
    pub(crate) specified: bool,
}

impl Var<'_> {
    /// Environment variable key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable description, may span several lines
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether a parse pass found a non-empty, valid value for this variable
    pub fn is_specified(&self) -> bool {
        self.specified
    }

    /// Current value as environment text
    pub fn render(&self) -> String {
        self.value.render_raw()
    }
}

impl fmt::Debug for Var<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Var")
            .field("key", &self.key)
            .field("description", &self.description)
            .field("specified", &self.specified)
            .finish_non_exhaustive()
    }
}

/// Read-only view of a registry after all present values have been parsed.
///
/// Requirement predicates receive this, so they always observe post-parse
/// values no matter where the variable they read sits in registration order.
#[derive(Clone, Copy)]
pub struct Parsed<'s, 'a> {
    vars: &'s [Var<'a>],
}

impl<'s, 'a> Parsed<'s, 'a> {
    pub(crate) fn new(vars: &'s [Var<'a>]) -> Self {
        Self { vars }
    }

    /// Current value of the variable, `None` if the handle belongs to another registry
    pub fn get<T: 'static>(&self, id: VarId<T>) -> Option<T> {
        let var = self.vars.get(id.index)?;
        var.value.get_any().downcast::<T>().ok().map(|value| *value)
    }

    pub fn is_specified<T>(&self, id: VarId<T>) -> bool {
        self.vars
            .get(id.index)
            .map(|var| var.specified)
            .unwrap_or(false)
    }

    pub fn render<T>(&self, id: VarId<T>) -> Option<String> {
        self.vars.get(id.index).map(Var::render)
    }

    /// Looks a variable up by key; the last registration wins for duplicate keys
    pub fn var(&self, key: &str) -> Option<&'s Var<'a>> {
        self.vars.iter().rev().find(|var| var.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{requirement::optional, value::new_int};

    fn var(key: &str, value: isize) -> Var<'static> {
        Var {
            key: key.to_string(),
            required: optional(),
            value: Box::new(new_int(value)),
            description: String::new(),
            specified: false,
        }
    }

    #[test]
    fn test_var_id_is_copy_and_comparable() {
        let id: VarId<bool> = VarId::new(3);
        let copy = id;
        assert_eq!(id, copy);
        assert_eq!(copy.index(), 3);
        assert_eq!(format!("{:?}", id), "VarId(3)");
    }

    #[test]
    fn test_parsed_get_typed() {
        let vars = vec![var("A", 1), var("B", 2)];
        let parsed = Parsed::new(&vars);

        assert_eq!(parsed.get(VarId::<isize>::new(1)), Some(2));
        assert_eq!(parsed.get(VarId::<bool>::new(1)), None);
        assert_eq!(parsed.get(VarId::<isize>::new(9)), None);
    }

    #[test]
    fn test_parsed_render_and_specified() {
        let mut vars = vec![var("A", 10)];
        vars[0].specified = true;
        let parsed = Parsed::new(&vars);

        assert_eq!(parsed.render(VarId::<isize>::new(0)).as_deref(), Some("10"));
        assert!(parsed.is_specified(VarId::<isize>::new(0)));
        assert!(!parsed.is_specified(VarId::<isize>::new(1)));
    }

    #[test]
    fn test_parsed_var_by_key_last_wins() {
        let vars = vec![var("DUP", 1), var("OTHER", 2), var("DUP", 3)];
        let parsed = Parsed::new(&vars);

        assert_eq!(parsed.var("DUP").map(Var::render).as_deref(), Some("3"));
        assert!(parsed.var("MISSING").is_none());
    }

    #[test]
    fn test_var_debug_skips_value() {
        let var = var("PORT", 8080);
        let debug_output = format!("{:?}", var);
        assert!(debug_output.contains("PORT"));
        assert!(!debug_output.contains("8080"));
    }
}
