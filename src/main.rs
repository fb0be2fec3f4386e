use clap::Parser;
use valida_cpf::config::toml_config::LogFormat;
use valida_cpf::core::ConfigProvider;
use valida_cpf::utils::error::{CpfError, ErrorSeverity};
use valida_cpf::utils::{logger, validation::Validate};
use valida_cpf::{CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 有指定 TOML 檔時以檔案設定為基礎，明確的參數優先
    let toml_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut toml_config) => {
                config.apply_overrides(&mut toml_config);
                Some(toml_config)
            }
            Err(e) => exit_with(&e),
        },
        None => None,
    };

    let (verbose, json_logs) = match &toml_config {
        Some(toml_config) => (
            config.verbose || toml_config.verbose(),
            config.json_logs || toml_config.log_format() == LogFormat::Json,
        ),
        None => (config.verbose, config.json_logs),
    };

    // 初始化日誌
    logger::init_cli_logger(verbose, json_logs);

    tracing::info!("Starting valida-cpf");
    if verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = match &toml_config {
        Some(toml_config) => {
            tracing::info!("📄 Using configuration file {:?}", config.config);
            run(toml_config).await
        }
        None => run(&config).await,
    };

    if let Err(e) = result {
        exit_with(&e);
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> valida_cpf::Result<()> {
    config.validate()?;
    valida_cpf::serve(config).await
}

fn exit_with(e: &CpfError) -> ! {
    tracing::error!(
        "❌ valida-cpf failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
