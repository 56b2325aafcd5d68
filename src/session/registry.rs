use indexmap::IndexMap;
use tracing::debug;

use crate::{
    error::RegistryError,
    value::{Atom, Element, Pair, SetValue},
};

/// The name of the universal set, which cannot be deleted.
pub const UNIVERSE: &str = "U";

/// Stores named sets for a session.
///
/// Names are case-insensitive: they are trimmed and upper-cased before every
/// lookup. Bindings keep their insertion order, which is the order they are
/// listed in. The algebra never reads the registry; callers resolve names
/// here and pass the sets on.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    bindings: IndexMap<String, SetValue>,
}

impl Registry {
    /// Creates a registry without any bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the preset sets `U`, `A`, `B`, `C`, `D`,
    /// `E`, `A2`, `B2`, `C2` and the relation `R`.
    ///
    /// The digits in `U`, `A`, `B` and `C` are text, while `E`, `A2`, `C2`
    /// and `R` use integers.
    ///
    /// # Example
    /// ```
    /// use relset::{algebra::is_reflexive, session::registry::Registry};
    ///
    /// let registry = Registry::with_presets();
    /// let r = registry.get("R").unwrap();
    /// let a2 = registry.get("a2").unwrap();
    ///
    /// assert!(is_reflexive(r, a2).unwrap());
    /// ```
    #[must_use]
    pub fn with_presets() -> Self {
        let mut registry = Self::new();

        registry.put(UNIVERSE,
                     texts(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "1", "2", "3",
                             "4", "5"]));
        registry.put("A", texts(&["a", "1", "3", "d", "g", "h", "4", "5"]));
        registry.put("B", texts(&["2", "1", "4", "e", "f", "g", "k"]));
        registry.put("C", texts(&["b", "d", "f", "h", "k", "2", "4"]));
        registry.put("D", SetValue::new());
        registry.put("E", pairs(&[(1.into(), "a".into()), (2.into(), "b".into()), (3.into(), "c".into())]));
        registry.put("A2",
                     [Atom::from(1), Atom::from("a"), Atom::from("b")].into_iter()
                                                                        .map(Element::Atom)
                                                                        .collect());
        registry.put("B2", texts(&["a", "b", "c"]));
        registry.put("C2", (1..=3).map(|i| Element::Atom(Atom::Integer(i))).collect());
        registry.put("R",
                     pairs(&[(1.into(), 1.into()),
                             ("a".into(), "a".into()),
                             ("b".into(), "b".into()),
                             (1.into(), "a".into()),
                             ("a".into(), 1.into()),
                             ("a".into(), "b".into()),
                             ("b".into(), "a".into()),
                             (1.into(), "b".into()),
                             ("b".into(), 1.into())]));

        registry
    }

    /// Normalizes a set name the way every registry method does.
    #[must_use]
    pub fn normalize(name: &str) -> String {
        name.trim().to_uppercase()
    }

    /// Looks up the set bound to `name`.
    ///
    /// # Errors
    /// Returns `RegistryError::UndefinedBinding` if no set has that name.
    pub fn get(&self, name: &str) -> Result<&SetValue, RegistryError> {
        let name = Self::normalize(name);
        self.bindings
            .get(&name)
            .ok_or(RegistryError::UndefinedBinding { name })
    }

    /// Binds `set` to `name`, returning the set it replaces, if any.
    pub fn put(&mut self, name: &str, set: SetValue) -> Option<SetValue> {
        let name = Self::normalize(name);
        debug!(name, size = set.len(), "binding set");
        self.bindings.insert(name, set)
    }

    /// Removes the binding for `name` and returns its set.
    ///
    /// # Errors
    /// Returns a `RegistryError` if:
    /// - `name` is the universal set,
    /// - no set has that name.
    pub fn delete(&mut self, name: &str) -> Result<SetValue, RegistryError> {
        let name = Self::normalize(name);
        if name == UNIVERSE {
            return Err(RegistryError::ProtectedBinding { name });
        }

        debug!(name, "deleting set");
        self.bindings
            .shift_remove(&name)
            .ok_or(RegistryError::UndefinedBinding { name })
    }

    /// Returns `true` if a set is bound to `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(&Self::normalize(name))
    }

    /// Iterates over the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SetValue)> {
        self.bindings.iter().map(|(name, set)| (name.as_str(), set))
    }

    /// Returns the bound names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn texts(items: &[&str]) -> SetValue {
    items.iter().map(|&s| Element::Atom(Atom::from(s))).collect()
}

fn pairs(items: &[(Atom, Atom)]) -> SetValue {
    items.iter()
         .map(|(first, second)| Element::from(Pair::new(first.clone(), second.clone())))
         .collect()
}
