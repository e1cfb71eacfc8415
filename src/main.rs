use anyhow::Context;
use clap::Parser;
use std::io::Read;
use theme_tools::utils::{logger, validation::Validate};
use theme_tools::{normalize_stylesheet, NormalizeConfig};

fn main() -> anyhow::Result<()> {
    let config = NormalizeConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hsl2hex");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let content = match config.input.as_deref() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stylesheet: {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            buffer
        }
    };

    match normalize_stylesheet(&content) {
        Ok(output) => {
            print!("{}", output);
            tracing::info!("✅ Stylesheet normalized");
        }
        Err(e) => {
            tracing::error!("❌ Normalization failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
