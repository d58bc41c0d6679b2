//! Browser host
//!
//! `web_sys::Element` always has a `classList`, so wrapped browser elements
//! run in native mode.

use crate::element::{Element, TokenList};
use web_sys::DomTokenList;

impl Element for web_sys::Element {
    type Tokens = DomTokenList;

    fn class_name(&self) -> String {
        web_sys::Element::class_name(self)
    }

    fn set_class_name(&self, value: &str) {
        web_sys::Element::set_class_name(self, value)
    }

    fn class_list(&self) -> Option<DomTokenList> {
        Some(web_sys::Element::class_list(self))
    }
}

impl TokenList for DomTokenList {
    fn add(&self, name: &str) {
        if let Err(err) = self.add_1(name) {
            tracing::warn!(?err, name, "classList.add rejected class name");
        }
    }

    fn remove(&self, name: &str) {
        if let Err(err) = self.remove_1(name) {
            tracing::warn!(?err, name, "classList.remove rejected class name");
        }
    }

    fn toggle(&self, name: &str) {
        if let Err(err) = DomTokenList::toggle(self, name) {
            tracing::warn!(?err, name, "classList.toggle rejected class name");
        }
    }

    fn contains(&self, name: &str) -> bool {
        DomTokenList::contains(self, name)
    }
}
