//! Evaluation environment.

use crate::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A chain of scope frames mapping symbols to values.
///
/// Cloning an `Environment` shares the frame: a closure that captures its
/// defining environment sees every later `define`/`set!` applied to it.
/// Parent links only ever point outward, so the chain is acyclic by
/// construction.
#[derive(Clone)]
pub struct Environment {
    bindings: Rc<RefCell<HashMap<String, Value>>>,
    parent: Option<Box<Environment>>,
}

impl Environment {
    /// Create a new empty root environment.
    pub fn new() -> Self {
        Self {
            bindings: Rc::new(RefCell::new(HashMap::new())),
            parent: None,
        }
    }

    /// Create a child frame whose parent is this environment.
    pub fn child(&self) -> Self {
        Self {
            bindings: Rc::new(RefCell::new(HashMap::new())),
            parent: Some(Box::new(self.clone())),
        }
    }

    /// Create or overwrite a binding in this frame only.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Look a symbol up through the frame chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.get(name);
        }
        None
    }

    /// Rewrite an existing binding in the first frame that holds it.
    ///
    /// Returns `false` if no frame in the chain defines `name`; unlike
    /// [`define`](Self::define) this never creates a binding.
    pub fn assign(&self, name: &str, value: Value) -> bool {
        if self.bindings.borrow().contains_key(name) {
            self.bindings.borrow_mut().insert(name.to_owned(), value);
            return true;
        }
        match &self.parent {
            Some(parent) => parent.assign(name, value),
            None => false,
        }
    }

    /// True if `other` is the same frame (not merely an equal one).
    pub fn same_frame(&self, other: &Environment) -> bool {
        Rc::ptr_eq(&self.bindings, &other.bindings)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
