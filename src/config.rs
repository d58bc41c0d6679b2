use crate::element::Element;
use crate::errors::{ClassListError, Result};
use crate::memory::MemoryElement;
use crate::Classes;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// A sequence of class operations to run against wrapped elements
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassScript {
    /// Give in-memory elements a native class set instead of the attribute fallback
    pub native_tokens: bool,

    /// Operations, applied in order
    pub steps: Vec<Step>,

    /// Class names to check after the steps ran (reported only)
    pub probes: Vec<String>,
}

/// One class operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Add { name: String },
    Remove { name: String },
    RemoveMatching { pattern: String },
    Toggle { name: String },
    Swap { from: String, to: String },
}

impl Step {
    /// Apply this step to every wrapped element
    pub fn apply<E: Element>(&self, target: &Classes<'_, E>) -> Result<()> {
        match self {
            Step::Add { name } => {
                target.add(name);
            }
            Step::Remove { name } => {
                target.remove(name);
            }
            Step::RemoveMatching { pattern } => {
                let re = Regex::new(pattern)?;
                target.remove_matching(&re);
            }
            Step::Toggle { name } => {
                target.toggle(name);
            }
            Step::Swap { from, to } => {
                target.swap(from, to);
            }
        }
        Ok(())
    }
}

impl FromStr for Step {
    type Err = ClassListError;

    /// Parse the inline form: `add:NAME`, `remove:NAME`,
    /// `remove-matching:REGEX`, `toggle:NAME` or `swap:OLD:NEW`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ClassListError::InvalidInput(format!("Invalid step '{}'", s));

        let (op, arg) = s.split_once(':').ok_or_else(invalid)?;
        if arg.is_empty() {
            return Err(invalid());
        }

        let step = match op {
            "add" => Step::Add { name: arg.to_string() },
            "remove" => Step::Remove { name: arg.to_string() },
            "remove-matching" | "remove_matching" => Step::RemoveMatching {
                pattern: arg.to_string(),
            },
            "toggle" => Step::Toggle { name: arg.to_string() },
            "swap" => {
                let (from, to) = arg.split_once(':').ok_or_else(invalid)?;
                if from.is_empty() || to.is_empty() {
                    return Err(invalid());
                }
                Step::Swap {
                    from: from.to_string(),
                    to: to.to_string(),
                }
            }
            _ => return Err(invalid()),
        };

        Ok(step)
    }
}

impl ClassScript {
    /// Load a script from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClassListError::ConfigError {
                message: format!("Failed to read script file {}: {}", path.display(), e),
            })?;

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load a script from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClassListError::ConfigError {
                message: format!("Failed to read script file {}: {}", path.display(), e),
            })?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Load a script from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(ClassListError::ConfigError {
                message: format!(
                    "Unsupported script file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Append the steps and probes of `other`; native mode sticks once enabled
    pub fn merge(mut self, other: Self) -> Self {
        self.native_tokens |= other.native_tokens;
        self.steps.extend(other.steps);
        for probe in other.probes {
            if !self.probes.contains(&probe) {
                self.probes.push(probe);
            }
        }
        self
    }

    /// In-memory element for `class_name`, in the mode this script asks for
    pub fn element(&self, class_name: &str) -> MemoryElement {
        if self.native_tokens {
            MemoryElement::with_native_tokens(class_name)
        } else {
            MemoryElement::new(class_name)
        }
    }

    /// Apply every step, in order, to `target`
    pub fn run<E: Element>(&self, target: &Classes<'_, E>) -> Result<()> {
        for step in &self.steps {
            tracing::debug!(?step, elements = target.len(), "applying step");
            step.apply(target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{classes, Listing};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_script() {
        let script = ClassScript::default();
        assert!(script.steps.is_empty());
        assert!(!script.native_tokens);
    }

    #[test]
    fn test_yaml_script_loading() {
        let yaml_content = r##"
native_tokens: true
steps:
  - op: add
    name: active
  - op: remove_matching
    pattern: "^tmp-"
  - op: swap
    from: closed
    to: open
probes:
  - active
"##;

        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        file.write_all(yaml_content.as_bytes()).unwrap();

        let script = ClassScript::from_file(file.path()).unwrap();
        assert!(script.native_tokens);
        assert_eq!(script.steps.len(), 3);
        assert_eq!(script.steps[0], Step::Add { name: "active".to_string() });
        assert_eq!(
            script.steps[2],
            Step::Swap { from: "closed".to_string(), to: "open".to_string() }
        );
        assert_eq!(script.probes, vec!["active"]);
    }

    #[test]
    fn test_json_script_loading() {
        let json_content = r##"{
  "steps": [
    { "op": "toggle", "name": "hidden" }
  ]
}"##;

        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(json_content.as_bytes()).unwrap();

        let script = ClassScript::from_file(file.path()).unwrap();
        assert!(!script.native_tokens);
        assert_eq!(script.steps, vec![Step::Toggle { name: "hidden".to_string() }]);
    }

    #[test]
    fn test_malformed_scripts_report_parser_errors() {
        let mut yaml = NamedTempFile::with_suffix(".yml").unwrap();
        yaml.write_all(b"steps:\n  - op: explode\n    name: a\n").unwrap();
        let result = ClassScript::from_file(yaml.path());
        assert!(matches!(result, Err(ClassListError::Yaml(_))));

        let mut json = NamedTempFile::with_suffix(".json").unwrap();
        json.write_all(b"{ \"steps\": [").unwrap();
        let result = ClassScript::from_file(json.path());
        assert!(matches!(result, Err(ClassListError::Json(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = NamedTempFile::with_suffix(".toml").unwrap();
        let result = ClassScript::from_file(file.path());
        assert!(matches!(result, Err(ClassListError::ConfigError { .. })));
    }

    #[test]
    fn test_inline_steps() {
        assert_eq!("add:x".parse::<Step>().unwrap(), Step::Add { name: "x".to_string() });
        assert_eq!(
            "remove-matching:^is-".parse::<Step>().unwrap(),
            Step::RemoveMatching { pattern: "^is-".to_string() }
        );
        assert_eq!(
            "swap:a:b".parse::<Step>().unwrap(),
            Step::Swap { from: "a".to_string(), to: "b".to_string() }
        );
        assert!("add".parse::<Step>().is_err());
        assert!("add:".parse::<Step>().is_err());
        assert!("swap:a".parse::<Step>().is_err());
        assert!("explode:a".parse::<Step>().is_err());
    }

    #[test]
    fn test_run_applies_steps_in_order() {
        let script = ClassScript {
            steps: vec![
                "add:b".parse().unwrap(),
                "swap:a:c".parse().unwrap(),
                "toggle:b".parse().unwrap(),
            ],
            ..Default::default()
        };
        let el = script.element("a");
        let target = classes(&el).unwrap();
        script.run(&target).unwrap();
        assert_eq!(target.array(), Listing::Single(vec!["c".to_string()]));
    }

    #[test]
    fn test_bad_pattern_is_reported() {
        let script = ClassScript {
            steps: vec![Step::RemoveMatching { pattern: "(".to_string() }],
            ..Default::default()
        };
        let el = script.element("a");
        let target = classes(&el).unwrap();
        assert!(matches!(script.run(&target), Err(ClassListError::Pattern(_))));
    }

    #[test]
    fn test_merge() {
        let base = ClassScript {
            steps: vec![Step::Add { name: "a".to_string() }],
            probes: vec!["a".to_string()],
            ..Default::default()
        };
        let other = ClassScript {
            native_tokens: true,
            steps: vec![Step::Add { name: "b".to_string() }],
            probes: vec!["a".to_string(), "b".to_string()],
        };

        let merged = base.merge(other);
        assert!(merged.native_tokens);
        assert_eq!(merged.steps.len(), 2);
        assert_eq!(merged.probes, vec!["a", "b"]);
    }
}
