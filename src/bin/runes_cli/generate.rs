//! Generate command - turn Echidna reproducers into a Foundry test file

use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use runes::discovery::discover_replay_files;
use runes::generator::{generate_foundry_test, GenerateConfig};
use runes::output::{
    contract_name_for, is_valid_contract_name, normalize_contract_name, resolve_output_path,
    DEFAULT_CONTRACT_NAME,
};
use runes::replay::{assign_test_names, process_files};
use runes::report::ProcessingReport;
use runes::templates::{TemplateRegistry, DEFAULT_TEMPLATE};
use runes::utils::print_json;

#[derive(Parser, Debug)]
#[command(about = "Generate a Foundry test file from reproducer files")]
pub struct GenerateCmd {
    /// Reproducer file, or a reproducers directory (newest batch is used)
    pub input: PathBuf,

    /// Output file or directory. A directory (or a path ending in `/`) gets
    /// the next free `ReplayTest_<n>.t.sol`
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<String>,

    /// Built-in template name or path to a template file
    #[arg(long, short, env = "RUNES_TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Name of the generated contract (default: derived from the output file)
    #[arg(long, value_name = "NAME")]
    pub contract_name: Option<String>,
}

impl GenerateCmd {
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("path does not exist: {}", self.input.display());
        }
        if self.template.trim().is_empty() {
            bail!("--template cannot be empty");
        }
        if let Some(name) = &self.contract_name {
            if name.trim().is_empty() {
                bail!("--contract-name cannot be empty");
            }
            let normalized = normalize_contract_name(name);
            if !is_valid_contract_name(&normalized) {
                bail!("--contract-name '{name}' is not a valid Solidity identifier");
            }
        }
        Ok(())
    }

    pub fn execute(&self, json_output: bool) -> Result<()> {
        self.validate()?;

        let files = discover_replay_files(&self.input)?;
        let paths: Vec<PathBuf> = files.into_iter().map(|f| f.path).collect();

        let mut report = ProcessingReport::new();
        let mut groups = match process_files(&paths, &mut report) {
            Ok(groups) => groups,
            Err(err) => {
                if json_output {
                    print_json(&GenerateOutput::failed(report, &err))?;
                } else {
                    println!("{report}");
                }
                return Err(err);
            }
        };
        assign_test_names(&mut groups);

        let output_file =
            resolve_output_path(self.output.as_deref().unwrap_or_default(), groups.len() > 1);
        let contract_name = self.contract_name_for(&output_file);
        let test_names: Vec<String> = groups.iter().map(|g| g.test_name.clone()).collect();

        let config = GenerateConfig {
            contract_name: contract_name.clone(),
            output_file: output_file.clone(),
            replay_groups: groups,
            template: Some(self.template.clone()),
        };

        let mut registry = TemplateRegistry::new();
        registry.load()?;
        generate_foundry_test(&config, &mut registry)?;

        let output = GenerateOutput {
            success: true,
            output_file: Some(output_file),
            contract_name: Some(contract_name),
            template: Some(self.template.clone()),
            tests: test_names,
            report,
            error: None,
        };
        if json_output {
            print_json(&output)?;
        } else {
            output.print_human();
        }
        Ok(())
    }

    fn contract_name_for(&self, output_file: &Path) -> String {
        match &self.contract_name {
            Some(name) => normalize_contract_name(name),
            None => contract_name_for(output_file, DEFAULT_CONTRACT_NAME),
        }
    }
}

// =============================================================================
// Output Types
// =============================================================================

#[derive(serde::Serialize)]
struct GenerateOutput {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    contract_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<String>,
    tests: Vec<String>,
    report: ProcessingReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl GenerateOutput {
    fn failed(report: ProcessingReport, err: &anyhow::Error) -> Self {
        Self {
            success: false,
            output_file: None,
            contract_name: None,
            template: None,
            tests: Vec::new(),
            report,
            error: Some(format!("{err:#}")),
        }
    }

    fn print_human(&self) {
        println!("{}", self.report);
        if let Some(path) = &self.output_file {
            println!(
                "\n\x1b[32m✓\x1b[0m Generated {} ({} test{}, contract {}, template {})",
                path.display(),
                self.tests.len(),
                if self.tests.len() == 1 { "" } else { "s" },
                self.contract_name.as_deref().unwrap_or(DEFAULT_CONTRACT_NAME),
                self.template.as_deref().unwrap_or(DEFAULT_TEMPLATE),
            );
        }
    }
}
