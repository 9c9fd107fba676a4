//! Test templates and the registry that holds them.
//!
//! A template is a YAML document with one text section per part of the
//! generated file. Rendering is plain placeholder substitution:
//!
//! | section                   | placeholders                     |
//! |---------------------------|----------------------------------|
//! | `header`, `footer`        | `{contract_name}`                |
//! | `test_open`, `test_close` | `{test_name}`                    |
//! | `actor`                   | `{actor}`                        |
//! | `delay`                   | `{seconds}`                      |
//! | `invoke`                  | `{function}`, `{args}`           |
//!
//! Any other brace is copied through, so Solidity blocks need no escaping.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use runes_core::Instruction;

pub const SUPPORTED_TEMPLATE_VERSION: u32 = 1;

/// Template used when none is requested.
pub const DEFAULT_TEMPLATE: &str = "enigmadark";

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("basic", include_str!("../templates/basic.yaml")),
    ("enigmadark", include_str!("../templates/enigmadark.yaml")),
];

const EXTERNAL_EXTENSIONS: &[&str] = &[".tmpl", ".yaml", ".yml"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    #[serde(default = "default_template_version")]
    pub version: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub test_open: String,
    #[serde(default)]
    pub actor: String,
    #[serde(default)]
    pub delay: String,
    #[serde(default)]
    pub invoke: String,
    #[serde(default)]
    pub test_close: String,
    #[serde(default)]
    pub separator: String,
    #[serde(default)]
    pub footer: String,
}

fn default_template_version() -> u32 {
    SUPPORTED_TEMPLATE_VERSION
}

/// Everything a template needs to render one test file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderData {
    pub contract_name: String,
    pub groups: Vec<RenderGroup>,
}

/// One test function: its name and body instructions.
#[derive(Debug, Clone, Serialize)]
pub struct RenderGroup {
    pub test_name: String,
    pub instructions: Vec<Instruction>,
}

impl Template {
    pub fn parse(raw: &str) -> Result<Self> {
        let template: Self = serde_yaml::from_str(raw).context("Invalid YAML template")?;
        if template.version != SUPPORTED_TEMPLATE_VERSION {
            bail!(
                "template version {} is not supported (expected {})",
                template.version,
                SUPPORTED_TEMPLATE_VERSION
            );
        }
        Ok(template)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read external template {}", path.display()))?;
        Self::parse(&raw)
            .with_context(|| format!("failed to parse external template {}", path.display()))
    }

    pub fn render(&self, data: &RenderData) -> String {
        let contract = [("contract_name", data.contract_name.as_str())];
        let mut out = fill(&self.header, &contract);

        for (i, group) in data.groups.iter().enumerate() {
            if i > 0 {
                out.push_str(&self.separator);
            }
            let test = [("test_name", group.test_name.as_str())];
            out.push_str(&fill(&self.test_open, &test));
            for instruction in &group.instructions {
                out.push_str(&self.render_instruction(instruction));
            }
            out.push_str(&fill(&self.test_close, &test));
        }

        out.push_str(&fill(&self.footer, &contract));
        out
    }

    fn render_instruction(&self, instruction: &Instruction) -> String {
        match instruction {
            Instruction::ActorSwitch { actor } => fill(&self.actor, &[("actor", actor.as_str())]),
            Instruction::Delay { seconds } => {
                fill(&self.delay, &[("seconds", seconds.as_str())])
            }
            Instruction::Invoke { function, .. } => {
                let args = instruction.param_list();
                fill(
                    &self.invoke,
                    &[("function", function.as_str()), ("args", args.as_str())],
                )
            }
        }
    }
}

/// Replace `{key}` placeholders in one pass. Substituted text is not rescanned.
fn fill(section: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(section.len());
    let mut rest = section;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Whether a `--template` argument names a file rather than a registered template.
pub fn is_template_path(arg: &str) -> bool {
    arg.contains('/')
        || arg.contains('\\')
        || EXTERNAL_EXTENSIONS.iter().any(|ext| arg.ends_with(ext))
}

/// Registry name for an external template file: its file name without extension.
pub fn external_template_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    EXTERNAL_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .map(str::to_string)
        .unwrap_or(name)
}

/// Named templates available to the generator.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the built-in templates.
    pub fn load(&mut self) -> Result<()> {
        for (name, raw) in BUILTIN_TEMPLATES {
            let template =
                Template::parse(raw).with_context(|| format!("failed to parse template {name}"))?;
            self.register(name, template);
        }
        Ok(())
    }

    pub fn load_external(&mut self, name: &str, path: &Path) -> Result<()> {
        let template = Template::from_path(path)?;
        self.register(name, template);
        Ok(())
    }

    pub fn register(&mut self, name: &str, template: Template) {
        self.templates.insert(name.to_string(), template);
    }

    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates.get(name).ok_or_else(|| {
            anyhow!(
                "template '{}' not found. Available templates: {}",
                name,
                self.names().join(", ")
            )
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }
}
