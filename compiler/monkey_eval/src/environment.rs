//! Variable scopes.
//!
//! An [`Environment`] is a handle to one `Scope` plus, through it, the
//! chain of enclosing scopes. Handles are cheap to clone, and a closure keeps
//! the scope it was defined in alive by holding one. `let` always binds in
//! the innermost scope; lookup walks outward.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::value::Value;

/// A single-threaded shared cell.
///
/// Wraps `Rc<RefCell<T>>` so every scope allocation goes through
/// `LocalScope::new`. Not `Send`; the interpreter runs on one thread.
#[repr(transparent)]
pub(crate) struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope and a link to the enclosing one.
#[derive(Default)]
pub(crate) struct Scope {
    bindings: FxHashMap<Rc<str>, Value>,
    outer: Option<Environment>,
}

/// Handle to a scope chain.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// Create a root scope with no bindings.
    pub fn new() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// Create an empty scope whose lookups fall back to `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                outer: Some(outer.clone()),
            }),
        }
    }

    /// Look `name` up, innermost scope first.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let outer = {
                let scope = current.scope.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                scope.outer.clone()
            };
            current = outer?;
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn set(&self, name: Rc<str>, value: Value) {
        self.scope.borrow_mut().bindings.insert(name, value);
    }

    /// Every name visible from this scope, innermost first.
    ///
    /// Names within one scope are sorted; a shadowed name is listed once.
    pub fn names(&self) -> Vec<Rc<str>> {
        let mut seen = FxHashSet::default();
        let mut names = Vec::new();
        let mut current = Some(self.clone());

        while let Some(env) = current {
            let scope = env.scope.borrow();
            let mut local: Vec<Rc<str>> = scope
                .bindings
                .keys()
                .filter(|name| seen.insert(Rc::clone(name)))
                .cloned()
                .collect();
            local.sort_unstable();
            names.extend(local);
            current = scope.outer.clone();
        }

        names
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Scopes can be reachable from their own bindings through closures, so
// Debug prints names only.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Rc<str> {
        Rc::from(s)
    }

    #[test]
    fn test_set_and_get() {
        let env = Environment::new();
        env.set(name("x"), Value::Integer(42));
        assert_eq!(env.get("x"), Some(Value::Integer(42)));
        assert_eq!(env.get("y"), None);
    }

    #[test]
    fn test_enclosed_sees_outer() {
        let outer = Environment::new();
        outer.set(name("x"), Value::Integer(1));

        let inner = Environment::enclosed(&outer);
        assert_eq!(inner.get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn test_shadowing_does_not_touch_outer() {
        let outer = Environment::new();
        outer.set(name("x"), Value::Integer(1));

        let inner = Environment::enclosed(&outer);
        inner.set(name("x"), Value::Integer(2));

        assert_eq!(inner.get("x"), Some(Value::Integer(2)));
        assert_eq!(outer.get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn test_outer_updates_are_visible() {
        let outer = Environment::new();
        let inner = Environment::enclosed(&outer);
        outer.set(name("late"), Value::Boolean(true));
        assert_eq!(inner.get("late"), Some(Value::Boolean(true)));
    }

    #[test]
    fn test_names_innermost_first() {
        let outer = Environment::new();
        outer.set(name("b"), Value::Null);
        outer.set(name("a"), Value::Null);

        let inner = Environment::enclosed(&outer);
        inner.set(name("z"), Value::Null);
        inner.set(name("a"), Value::Null);

        let names: Vec<String> = inner.names().iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["a", "z", "b"]);
    }

    #[test]
    fn test_clones_share_scope() {
        let env = Environment::new();
        let alias = env.clone();
        alias.set(name("x"), Value::Integer(7));
        assert_eq!(env.get("x"), Some(Value::Integer(7)));
    }
}
