pub mod class_list;
pub mod collection;
pub mod config;
pub mod element;
pub mod errors;
pub mod memory;
pub mod report;
#[cfg(feature = "web")]
pub mod web;
#[cfg(feature = "cli")]
pub mod args;

pub use class_list::{ClassList, Op, Outcome, Removal};
pub use collection::Collection;
pub use config::{ClassScript, Step};
pub use element::{index_of, Element, TokenList};
pub use errors::{ClassListError, Result};
pub use memory::{MemoryElement, MemoryTokenList};
pub use report::{ElementReport, Report, ReportBuilder};
#[cfg(feature = "cli")]
pub use args::{ApplyArgs, Cli, Commands, PipeArgs, ScriptArgs};

use regex::Regex;
use std::fmt;

/// What the caller handed to [`classes`]
pub enum Target<'a, E> {
    Element(Option<&'a E>),
    Array(Vec<&'a E>),
}

impl<'a, E> Target<'a, E> {
    /// Materialize a node-list-like sequence into a plain array
    pub fn node_list<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a E>,
    {
        Target::Array(nodes.into_iter().collect())
    }
}

impl<'a, E> From<&'a E> for Target<'a, E> {
    fn from(el: &'a E) -> Self {
        Target::Element(Some(el))
    }
}

impl<'a, E> From<Option<&'a E>> for Target<'a, E> {
    fn from(el: Option<&'a E>) -> Self {
        Target::Element(el)
    }
}

impl<'a, E> From<Vec<&'a E>> for Target<'a, E> {
    fn from(elements: Vec<&'a E>) -> Self {
        Target::Array(elements)
    }
}

/// Aggregate of `array()` calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Single(Vec<String>),
    Many(Vec<Vec<String>>),
}

/// Aggregate of `has()` calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    Single(bool),
    Many(Vec<bool>),
}

/// A wrapped element or a wrapped collection, with one shared operation set
pub enum Classes<'a, E: Element> {
    Single(ClassList<'a, E>),
    Collection(Collection<'a, E>),
}

/// Wrap an element, or an array of elements, for class manipulation.
///
/// Arrays produce a [`Collection`]; anything else is a single element and
/// fails with [`ClassListError::InvalidElement`] when absent.
pub fn classes<'a, E: Element>(target: impl Into<Target<'a, E>>) -> Result<Classes<'a, E>> {
    match target.into() {
        Target::Array(elements) => Ok(Classes::Collection(Collection::new(elements)?)),
        Target::Element(el) => Ok(Classes::Single(ClassList::new(el)?)),
    }
}

impl<'a, E: Element> Classes<'a, E> {
    /// Apply `op` and return one outcome per wrapped element
    pub fn broadcast(&self, op: Op<'_>) -> Vec<Outcome> {
        match self {
            Classes::Single(list) => vec![list.apply(op)],
            Classes::Collection(collection) => collection.broadcast(op),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Classes::Single(_) => 1,
            Classes::Collection(collection) => collection.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
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

    pub fn array(&self) -> Listing {
        match self {
            Classes::Single(list) => Listing::Single(list.array()),
            Classes::Collection(collection) => Listing::Many(collection.array()),
        }
    }

    pub fn has(&self, name: &str) -> Presence {
        match self {
            Classes::Single(list) => Presence::Single(list.has(name)),
            Classes::Collection(collection) => Presence::Many(collection.has(name)),
        }
    }

    pub fn contains(&self, name: &str) -> Presence {
        self.has(name)
    }
}

impl<E: Element> fmt::Debug for Classes<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classes::Single(list) => f.debug_tuple("Single").field(list).finish(),
            Classes::Collection(collection) => f.debug_tuple("Collection").field(collection).finish(),
        }
    }
}

/// Run `script` over one in-memory element per class attribute.
///
/// A single attribute is wrapped as a single element, several as a
/// collection. Returns the resulting attributes one per line, or the JSON
/// report when `json` is set.
pub fn render<S: AsRef<str>>(attributes: &[S], script: &ClassScript, json: bool) -> Result<String> {
    let elements: Vec<MemoryElement> = attributes
        .iter()
        .map(|attr| script.element(attr.as_ref()))
        .collect();

    let target = match elements.as_slice() {
        [el] => classes(el)?,
        _ => classes(Target::node_list(&elements))?,
    };
    script.run(&target)?;

    if json {
        let report = ReportBuilder::new(script).build(&elements)?;
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }

    let mut output = String::new();
    for el in &elements {
        output.push_str(&el.class_name());
        output.push('\n');
    }
    Ok(output)
}

/// Read class attributes from `reader`, one element per line, and write the
/// rendered result to `writer`. Blank input writes nothing.
#[cfg(feature = "cli")]
pub async fn process_pipe<R, W>(mut reader: R, mut writer: W, script: &ClassScript, json: bool) -> Result<()>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .await
        .map_err(|e| ClassListError::InvalidInput(format!("Failed to read input: {}", e)))?;

    // Empty input, empty output
    if input.trim().is_empty() {
        return Ok(());
    }

    let attributes: Vec<&str> = input.lines().collect();
    let output = render(attributes.as_slice(), script, json)?;

    writer.write_all(output.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

/// Handle pipe command - read class attributes from stdin, write results to stdout
#[cfg(feature = "cli")]
pub async fn handle_pipe_command(args: PipeArgs) -> Result<()> {
    let script = args.script.load()?;
    process_pipe(tokio::io::stdin(), tokio::io::stdout(), &script, args.script.json).await
}
