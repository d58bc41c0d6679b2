use crate::class_list::ClassList;
use crate::config::ClassScript;
use crate::element::Element;
use crate::errors::Result;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata for the generated report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Crate version
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: DateTime<Utc>,

    /// Number of elements the script ran against
    pub elements: usize,

    /// Whether elements used a native class set
    pub native_tokens: bool,

    /// Number of steps applied
    pub steps: usize,
}

/// Final state of one element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementReport {
    /// Classes after the script ran, in attribute order
    pub classes: Vec<String>,

    /// Membership of each probed class name
    #[serde(skip_serializing_if = "IndexMap::is_empty", default)]
    pub probes: IndexMap<String, bool>,
}

/// Complete report structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub metadata: ReportMetadata,

    /// One entry per element, in input order
    pub elements: Vec<ElementReport>,

    /// How many elements carry each class, in first-seen order
    pub class_counts: IndexMap<String, usize>,
}

/// Builder for [`Report`]
pub struct ReportBuilder<'s> {
    script: &'s ClassScript,
    generated_at: DateTime<Utc>,
}

impl<'s> ReportBuilder<'s> {
    pub fn new(script: &'s ClassScript) -> Self {
        Self {
            script,
            generated_at: Utc::now(),
        }
    }

    /// Override the generation timestamp
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    /// Read the current classes of `elements` into a report
    pub fn build<E: Element>(self, elements: &[E]) -> Result<Report> {
        let mut class_counts: IndexMap<String, usize> = IndexMap::new();
        let mut entries: Vec<ElementReport> = Vec::with_capacity(elements.len());

        for el in elements {
            let list = ClassList::new(el)?;
            let classes = list.array();

            let mut seen: Vec<&str> = Vec::new();
            for class in &classes {
                if !seen.contains(&class.as_str()) {
                    seen.push(class);
                    *class_counts.entry(class.clone()).or_insert(0) += 1;
                }
            }

            let probes = self
                .script
                .probes
                .iter()
                .map(|probe| (probe.clone(), list.has(probe)))
                .collect();

            entries.push(ElementReport { classes, probes });
        }

        Ok(Report {
            metadata: ReportMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at: self.generated_at,
                elements: elements.len(),
                native_tokens: self.script.native_tokens,
                steps: self.script.steps.len(),
            },
            elements: entries,
            class_counts,
        })
    }
}
