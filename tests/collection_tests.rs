use dom_classlist::{classes, Classes, Collection, Element, Listing, MemoryElement, Presence, Target};
use regex::Regex;

#[test]
fn test_add_reaches_every_element() {
    let els = vec![
        MemoryElement::new("a"),
        MemoryElement::new("b"),
        MemoryElement::with_native_tokens("c"),
    ];
    let collection = Collection::new(&els).unwrap();
    collection.add("x");

    for el in &els {
        assert!(el.class_name().split(' ').any(|c| c == "x"));
    }
    assert_eq!(collection.has("x"), vec![true, true, true]);
}

#[test]
fn test_array_is_in_input_order() {
    let els = vec![
        MemoryElement::new("first"),
        MemoryElement::new("second"),
        MemoryElement::new("third"),
    ];
    let collection = Collection::new(&els).unwrap();
    assert_eq!(
        collection.array(),
        vec![vec!["first"], vec!["second"], vec!["third"]]
    );
}

#[test]
fn test_toggle_flips_each_element_independently() {
    let els = vec![MemoryElement::new("open"), MemoryElement::new("")];
    let collection = Collection::new(&els).unwrap();
    collection.toggle("open");
    assert_eq!(collection.has("open"), vec![false, true]);
}

#[test]
fn test_remove_by_pattern_on_collection() {
    let els = vec![
        MemoryElement::new("is-a keep"),
        MemoryElement::with_native_tokens("is-b is-c"),
    ];
    let collection = Collection::new(&els).unwrap();
    let re = Regex::new("^is-").unwrap();
    collection.remove(&re);
    assert_eq!(collection.array(), vec![vec!["keep".to_string()], Vec::new()]);
}

#[test]
fn test_chaining_returns_collection() {
    let els = vec![MemoryElement::new("a"), MemoryElement::new("a")];
    let collection = Collection::new(&els).unwrap();
    let has = collection.add("b").swap("a", "c").remove("b").contains("c");
    assert_eq!(has, vec![true, true]);
}

#[test]
fn test_factory_collection_aggregates() {
    let els = vec![MemoryElement::new("a"), MemoryElement::new("b"), MemoryElement::new("c")];
    let wrapped = classes(Target::node_list(&els)).unwrap();
    assert!(matches!(wrapped, Classes::Collection(_)));

    wrapped.add("x");
    match wrapped.array() {
        Listing::Many(lists) => {
            assert_eq!(lists.len(), 3);
            assert_eq!(lists[1], vec!["b", "x"]);
        }
        Listing::Single(_) => panic!("Expected one listing per element"),
    }
    assert_eq!(wrapped.has("x"), Presence::Many(vec![true, true, true]));
}

#[test]
fn test_factory_empty_collection_is_noop() {
    let els: Vec<MemoryElement> = Vec::new();
    let wrapped = classes(Target::node_list(&els)).unwrap();
    assert_eq!(wrapped.add("x").toggle("y").has("x"), Presence::Many(Vec::new()));
    assert_eq!(wrapped.array(), Listing::Many(Vec::new()));
}
