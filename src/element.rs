//! Host capability seams
//!
//! The wrapper never owns elements. Hosts hand out cheap handles (`&self`
//! everywhere) and keep their own interior mutability, the way DOM bindings do.

/// Native class-membership set attached to an element (a `classList`).
pub trait TokenList {
    /// Add `name` if not already present
    fn add(&self, name: &str);

    /// Remove `name` when present
    fn remove(&self, name: &str);

    /// Flip membership of `name`
    fn toggle(&self, name: &str);

    /// Check if `name` is present
    fn contains(&self, name: &str) -> bool;
}

/// A node in the host document that carries a `class` attribute.
pub trait Element {
    /// Handle to the native class set, when the host exposes one
    type Tokens: TokenList;

    /// Current value of the `class` attribute
    fn class_name(&self) -> String;

    /// Overwrite the `class` attribute
    fn set_class_name(&self, value: &str);

    /// Native class set, or `None` when only the attribute is available
    fn class_list(&self) -> Option<Self::Tokens>;
}

/// Position of the first item equal to `value`.
pub fn index_of<T, U>(items: &[T], value: &U) -> Option<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    items.iter().position(|item| item == value)
}
