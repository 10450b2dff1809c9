use clap::Parser;
use isprime::utils::{logger, validation::Validate};
use isprime::{CheckEngine, CheckError, CliConfig, ConfigProvider, TrialDivision};

fn main() {
    let mut config = CliConfig::parse();

    // Config problems are reported before logging exists.
    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    if let Err(e) = config.merge_file() {
        exit_with(&e);
    }

    logger::init_cli_logger(config.verbose());
    tracing::debug!("CLI config: {:?}", config);

    let engine = CheckEngine::with_prompt(TrialDivision, config.prompt());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match engine.run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(report) => {
            tracing::info!("Checked {}: {:?}", report.number, report.verdict);
        }
        Err(e) => {
            tracing::error!("Check failed: {} (Category: {:?})", e, e.category());
            exit_with(&e);
        }
    }
}

fn exit_with(e: &CheckError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
