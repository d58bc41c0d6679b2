use crate::element::{index_of, Element, TokenList};
use crate::errors::{ClassListError, Result};
use regex::Regex;
use std::fmt;

/// Argument to [`ClassList::remove`]: an exact class name or a pattern.
#[derive(Debug, Clone, Copy)]
pub enum Removal<'a> {
    Name(&'a str),
    Pattern(&'a Regex),
}

impl<'a> From<&'a str> for Removal<'a> {
    fn from(name: &'a str) -> Self {
        Removal::Name(name)
    }
}

impl<'a> From<&'a String> for Removal<'a> {
    fn from(name: &'a String) -> Self {
        Removal::Name(name.as_str())
    }
}

impl<'a> From<&'a Regex> for Removal<'a> {
    fn from(pattern: &'a Regex) -> Self {
        Removal::Pattern(pattern)
    }
}

/// One class operation, expressed as data so it can be broadcast.
#[derive(Debug, Clone, Copy)]
pub enum Op<'a> {
    Add(&'a str),
    Remove(Removal<'a>),
    RemoveMatching(&'a Regex),
    Toggle(&'a str),
    Swap(&'a str, &'a str),
    Array,
    Has(&'a str),
}

/// What a single [`Op`] produced on one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Mutating operations return the wrapper itself
    Chained,
    Classes(Vec<String>),
    Present(bool),
}

impl Outcome {
    pub fn into_classes(self) -> Option<Vec<String>> {
        match self {
            Outcome::Classes(classes) => Some(classes),
            _ => None,
        }
    }

    pub fn into_present(self) -> Option<bool> {
        match self {
            Outcome::Present(present) => Some(present),
            _ => None,
        }
    }
}

/// How a [`ClassList`] reaches the element's classes. Fixed at construction.
enum Backing<T> {
    Native(T),
    Attribute,
}

/// Class manipulation for exactly one element.
///
/// Uses the element's native class set when it has one and otherwise
/// rewrites the `class` attribute as a space-separated string.
pub struct ClassList<'a, E: Element> {
    el: &'a E,
    backing: Backing<E::Tokens>,
}

impl<'a, E: Element> ClassList<'a, E> {
    /// Wrap `el`. Fails with [`ClassListError::InvalidElement`] when absent.
    pub fn new(el: impl Into<Option<&'a E>>) -> Result<Self> {
        let el = el.into().ok_or(ClassListError::InvalidElement)?;

        let backing = match el.class_list() {
            Some(tokens) => Backing::Native(tokens),
            None => Backing::Attribute,
        };
        tracing::debug!(
            native = matches!(backing, Backing::Native(_)),
            "wrapped element"
        );

        Ok(Self { el, backing })
    }

    /// The wrapped element
    pub fn element(&self) -> &'a E {
        self.el
    }

    /// Whether operations go through the native class set
    pub fn is_native(&self) -> bool {
        matches!(self.backing, Backing::Native(_))
    }

    /// Add class `name` if not already present.
    pub fn add(&self, name: &str) -> &Self {
        if let Backing::Native(tokens) = &self.backing {
            tokens.add(name);
            return self;
        }

        let mut arr = self.array();
        if index_of(&arr, name).is_none() {
            arr.push(name.to_string());
        }
        self.write(&arr);

        self
    }

    /// Remove class `name` when present, or every class matching a pattern.
    pub fn remove<'r>(&self, target: impl Into<Removal<'r>>) -> &Self {
        let name = match target.into() {
            Removal::Pattern(re) => return self.remove_matching(re),
            Removal::Name(name) => name,
        };

        if let Backing::Native(tokens) = &self.backing {
            tokens.remove(name);
            return self;
        }

        let mut arr = self.array();
        if let Some(i) = index_of(&arr, name) {
            arr.remove(i);
        }
        self.write(&arr);

        self
    }

    /// Remove every class matching `re`.
    ///
    /// Works from the attribute snapshot even in native mode; each match is
    /// then removed by name through the normal `remove` path.
    pub fn remove_matching(&self, re: &Regex) -> &Self {
        for name in self.array() {
            if re.is_match(&name) {
                self.remove(name.as_str());
            }
        }

        self
    }

    /// Toggle class `name`.
    pub fn toggle(&self, name: &str) -> &Self {
        if let Backing::Native(tokens) = &self.backing {
            tokens.toggle(name);
            return self;
        }

        if self.has(name) {
            self.remove(name)
        } else {
            self.add(name)
        }
    }

    /// Swap `old_name` for `new_name`. Not atomic.
    pub fn swap(&self, old_name: &str, new_name: &str) -> &Self {
        self.remove(old_name).add(new_name)
    }

    /// Current classes, read straight from the `class` attribute.
    pub fn array(&self) -> Vec<String> {
        self.el
            .class_name()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Check if class `name` is present.
    pub fn has(&self, name: &str) -> bool {
        match &self.backing {
            Backing::Native(tokens) => tokens.contains(name),
            Backing::Attribute => index_of(&self.array(), name).is_some(),
        }
    }

    /// Alias for [`ClassList::has`]
    pub fn contains(&self, name: &str) -> bool {
        self.has(name)
    }

    /// Run one operation and report what it produced.
    pub fn apply(&self, op: Op<'_>) -> Outcome {
        match op {
            Op::Add(name) => {
                self.add(name);
            }
            Op::Remove(target) => {
                self.remove(target);
            }
            Op::RemoveMatching(re) => {
                self.remove_matching(re);
            }
            Op::Toggle(name) => {
                self.toggle(name);
            }
            Op::Swap(old_name, new_name) => {
                self.swap(old_name, new_name);
            }
            Op::Array => return Outcome::Classes(self.array()),
            Op::Has(name) => return Outcome::Present(self.has(name)),
        }
        Outcome::Chained
    }

    fn write(&self, classes: &[String]) {
        let value = classes.join(" ");
        tracing::trace!(class = %value, "rewriting class attribute");
        self.el.set_class_name(&value);
    }
}

impl<E: Element> fmt::Debug for ClassList<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassList")
            .field("native", &self.is_native())
            .field("classes", &self.array())
            .finish()
    }
}
