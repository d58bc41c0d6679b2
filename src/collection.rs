use crate::class_list::{ClassList, Op, Outcome, Removal};
use crate::element::Element;
use crate::errors::Result;
use regex::Regex;
use std::fmt;

/// The same class operations as [`ClassList`], applied to many elements.
///
/// Every call is broadcast to each member in input order.
pub struct Collection<'a, E: Element> {
    lists: Vec<ClassList<'a, E>>,
}

impl<'a, E: Element> Collection<'a, E> {
    /// Wrap each element. An absent entry fails the whole collection.
    pub fn new<I, T>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Option<&'a E>>,
    {
        let lists = elements
            .into_iter()
            .map(ClassList::new)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(elements = lists.len(), "built class list collection");

        Ok(Self { lists })
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ClassList<'a, E>> {
        self.lists.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassList<'a, E>> {
        self.lists.iter()
    }

    /// Apply `op` to every member and collect each member's outcome.
    pub fn broadcast(&self, op: Op<'_>) -> Vec<Outcome> {
        self.lists.iter().map(|list| list.apply(op)).collect()
    }

    pub fn add(&self, name: &str) -> &Self {
        self.broadcast(Op::Add(name));
        self
    }

    pub fn remove<'r>(&self, target: impl Into<Removal<'r>>) -> &Self {
        self.broadcast(Op::Remove(target.into()));
        self
    }

    pub fn remove_matching(&self, re: &Regex) -> &Self {
        self.broadcast(Op::RemoveMatching(re));
        self
    }

    pub fn toggle(&self, name: &str) -> &Self {
        self.broadcast(Op::Toggle(name));
        self
    }

    pub fn swap(&self, old_name: &str, new_name: &str) -> &Self {
        self.broadcast(Op::Swap(old_name, new_name));
        self
    }

    /// Classes of each member, in input order
    pub fn array(&self) -> Vec<Vec<String>> {
        self.broadcast(Op::Array)
            .into_iter()
            .filter_map(Outcome::into_classes)
            .collect()
    }

    /// Membership of `name` for each member, in input order
    pub fn has(&self, name: &str) -> Vec<bool> {
        self.broadcast(Op::Has(name))
            .into_iter()
            .filter_map(Outcome::into_present)
            .collect()
    }

    pub fn contains(&self, name: &str) -> Vec<bool> {
        self.has(name)
    }
}

impl<E: Element> fmt::Debug for Collection<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lists.iter()).finish()
    }
}
