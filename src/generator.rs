//! Foundry test generation from replay groups.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use runes_core::{sequence, ReplayGroup};

use crate::templates::{
    external_template_name, is_template_path, RenderData, RenderGroup, TemplateRegistry,
    DEFAULT_TEMPLATE,
};
use crate::utils::write_text_file;

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub contract_name: String,
    pub output_file: PathBuf,
    pub replay_groups: Vec<ReplayGroup>,
    /// Registered template name or path to a template file. `None` selects
    /// [`DEFAULT_TEMPLATE`].
    pub template: Option<String>,
}

/// Render `config.replay_groups` into a Foundry test file at `config.output_file`.
///
/// `registry` should already hold the built-in templates; an external template
/// named by path is loaded into it.
pub fn generate_foundry_test(config: &GenerateConfig, registry: &mut TemplateRegistry) -> Result<()> {
    if config.replay_groups.is_empty() {
        bail!("no replay groups to generate");
    }

    let template_name = select_template(config.template.as_deref(), registry)?;
    let template = registry.get(&template_name)?;

    let data = render_data(&config.contract_name, &config.replay_groups);
    let text = template.render(&data);

    write_text_file(&config.output_file, &text)
        .with_context(|| format!("failed to write test file {}", config.output_file.display()))?;

    info!(
        output = %config.output_file.display(),
        template = %template_name,
        tests = config.replay_groups.len(),
        "generated foundry test"
    );
    Ok(())
}

fn select_template(requested: Option<&str>, registry: &mut TemplateRegistry) -> Result<String> {
    let name = requested.unwrap_or(DEFAULT_TEMPLATE);
    if !is_template_path(name) {
        return Ok(name.to_string());
    }

    let path = Path::new(name);
    let registered = external_template_name(path);
    registry
        .load_external(&registered, path)
        .context("failed to load external template")?;
    debug!(path = %path.display(), name = %registered, "loaded external template");
    Ok(registered)
}

/// Sequence every group's calls into the data a template renders.
pub fn render_data(contract_name: &str, groups: &[ReplayGroup]) -> RenderData {
    RenderData {
        contract_name: contract_name.to_string(),
        groups: groups
            .iter()
            .map(|group| RenderGroup {
                test_name: group.test_name.clone(),
                instructions: sequence(&group.calls),
            })
            .collect(),
    }
}

/// Names of the built-in templates.
pub fn available_templates() -> Result<Vec<String>> {
    let mut registry = TemplateRegistry::new();
    registry.load()?;
    Ok(registry.names())
}
