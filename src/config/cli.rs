use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hsl2hex")]
#[command(about = "Rewrite HSL custom-property declarations into hex color literals")]
pub struct NormalizeConfig {
    /// Stylesheet to rewrite; reads standard input when omitted
    pub input: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for NormalizeConfig {
    fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "update-version")]
#[command(about = "Synchronize the project version across package.json and tauri.conf.json")]
pub struct SyncConfig {
    /// Explicit next version; patch-increments the current version when omitted
    pub new_version: Option<String>,

    #[arg(long, default_value = "package.json")]
    pub manifest: String,

    #[arg(long, default_value = "src-tauri/tauri.conf.json")]
    pub app_config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for SyncConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("manifest", &self.manifest)?;
        validation::validate_path("app_config", &self.app_config)?;
        if let Some(version) = &self.new_version {
            validation::validate_non_empty_string("new_version", version)?;
        }
        Ok(())
    }
}
