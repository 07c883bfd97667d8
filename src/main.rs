use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use syntax_tour::utils::error::ErrorSeverity;
use syntax_tour::utils::{logger, validation::Validate};
use syntax_tour::{CliConfig, DemoRunner, Result};

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting syntax-tour");
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("❌ Demo failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            ExitCode::from(exit_code)
        }
    }
}

fn run(cli: &CliConfig) -> Result<()> {
    let config = cli.resolve()?;

    // 驗證配置
    config.validate()?;

    let runner = DemoRunner::from_config(&config);
    tracing::debug!("Prepared {} sections", runner.section_count());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out, cli.format)?;
    out.flush()?;

    tracing::info!("✅ Demo completed");
    Ok(())
}
