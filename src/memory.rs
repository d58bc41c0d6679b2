//! In-memory host element
//!
//! A detached node that only carries a `class` attribute. It can optionally
//! expose a native token list backed by that same attribute.

use crate::element::{Element, TokenList};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct Node {
    class_name: RefCell<String>,
    native_tokens: bool,
}

/// Handle to an in-memory element. Clones share the same node.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    node: Rc<Node>,
}

impl MemoryElement {
    /// Element without a native class set; the attribute fallback is used
    pub fn new(class_name: impl Into<String>) -> Self {
        Self::build(class_name.into(), false)
    }

    /// Element that exposes a native class set
    pub fn with_native_tokens(class_name: impl Into<String>) -> Self {
        Self::build(class_name.into(), true)
    }

    fn build(class_name: String, native_tokens: bool) -> Self {
        Self {
            node: Rc::new(Node {
                class_name: RefCell::new(class_name),
                native_tokens,
            }),
        }
    }

    pub fn has_native_tokens(&self) -> bool {
        self.node.native_tokens
    }
}

impl Element for MemoryElement {
    type Tokens = MemoryTokenList;

    fn class_name(&self) -> String {
        self.node.class_name.borrow().clone()
    }

    fn set_class_name(&self, value: &str) {
        *self.node.class_name.borrow_mut() = value.to_string();
    }

    fn class_list(&self) -> Option<MemoryTokenList> {
        self.node.native_tokens.then(|| MemoryTokenList {
            node: Rc::clone(&self.node),
        })
    }
}

/// Native class set of a [`MemoryElement`].
///
/// Writes serialize the attribute as an ordered set: duplicates collapse and
/// runs of whitespace become a single space.
#[derive(Debug, Clone)]
pub struct MemoryTokenList {
    node: Rc<Node>,
}

impl MemoryTokenList {
    fn tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        for token in self.node.class_name.borrow().split_whitespace() {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
        tokens
    }

    fn store(&self, tokens: &[String]) {
        *self.node.class_name.borrow_mut() = tokens.join(" ");
    }
}

impl TokenList for MemoryTokenList {
    fn add(&self, name: &str) {
        let mut tokens = self.tokens();
        if !name.is_empty() && !tokens.iter().any(|t| t == name) {
            tokens.push(name.to_string());
        }
        self.store(&tokens);
    }

    fn remove(&self, name: &str) {
        let mut tokens = self.tokens();
        tokens.retain(|t| t != name);
        self.store(&tokens);
    }

    fn toggle(&self, name: &str) {
        if self.contains(name) {
            self.remove(name);
        } else {
            self.add(name);
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.node
            .class_name
            .borrow()
            .split_whitespace()
            .any(|t| t == name)
    }
}
