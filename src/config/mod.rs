pub mod cli;
pub mod site_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio-render")]
#[command(about = "Render published portfolio records into public page documents")]
pub struct CliConfig {
    #[arg(long, default_value = "./portfolios.json")]
    pub records_file: String,

    #[arg(long, default_value = "./public")]
    pub output_path: String,

    #[arg(long, default_value = "https://folio.example.com")]
    pub base_url: String,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub output_formats: Vec<String>,

    #[arg(long, help = "Force one template category for every record")]
    pub template: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn records_file(&self) -> &str {
        &self.records_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn template_override(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_base_url("base_url", &self.base_url)?;
        validation::validate_path("records_file", &self.records_file)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("output_formats", &self.output_formats)?;
        Ok(())
    }
}
