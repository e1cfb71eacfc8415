use clap::Parser;
use theme_tools::utils::{logger, validation::Validate};
use theme_tools::{SyncConfig, VersionSynchronizer};

fn main() -> anyhow::Result<()> {
    let config = SyncConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting update-version");
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

    let synchronizer = VersionSynchronizer::new(&config.manifest, &config.app_config);

    match synchronizer.run(config.new_version.as_deref()) {
        Ok(next) => {
            tracing::info!("✅ Version updated to {}", next);
            println!("✅ Version updated to: {}", next);
        }
        Err(e) => {
            tracing::error!("❌ Version update failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
