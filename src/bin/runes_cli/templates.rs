//! Templates command - list the built-in test templates

use anyhow::Result;
use clap::Parser;

use runes::generator::available_templates;
use runes::templates::DEFAULT_TEMPLATE;
use runes::utils::print_json;

#[derive(Parser, Debug)]
#[command(about = "List the built-in templates")]
pub struct TemplatesCmd {}

#[derive(serde::Serialize)]
struct TemplatesOutput {
    templates: Vec<String>,
    default: &'static str,
}

impl TemplatesCmd {
    pub fn execute(&self, json_output: bool) -> Result<()> {
        let output = TemplatesOutput {
            templates: available_templates()?,
            default: DEFAULT_TEMPLATE,
        };

        if json_output {
            return print_json(&output);
        }

        println!("Available builtin templates:");
        for name in &output.templates {
            if name == DEFAULT_TEMPLATE {
                println!("  - {name} (default)");
            } else {
                println!("  - {name}");
            }
        }
        println!("\nUsage:");
        println!("  --template basic                 # Use basic template");
        println!("  --template enigmadark            # Use enigmadark template (default)");
        println!("  --template /path/to/custom.yaml  # Use custom template file");
        println!("\nThe RUNES_TEMPLATE environment variable sets the default.");
        Ok(())
    }
}
