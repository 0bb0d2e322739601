use std::{
    collections::{BTreeMap, HashMap},
    env,
    hash::BuildHasher,
};

/// Source of raw environment values.
///
/// `None` and `Some("")` both mean the variable is unset; there is no way to
/// deliberately set a variable to the empty string.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        // Lossy: invalid UTF-8 sequences come back as U+FFFD
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        self(key)
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
