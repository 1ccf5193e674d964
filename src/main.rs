use anyhow::Context;
use clap::Parser;
use pattern_demos::utils::{logger, validation::Validate};
use pattern_demos::{CliConfig, DemoKind, DemoRunner, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pattern-demos");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut runner = DemoRunner::new(config, stdout.lock());

    if cli.json {
        runner
            .write_json_report()
            .context("failed to write composite report")?;
        if cli.demo == DemoKind::All {
            runner.run_facade().context("failed to print menus")?;
        }
    } else {
        runner
            .run(cli.demo)
            .with_context(|| format!("failed to run {:?} demo", cli.demo))?;
    }

    tracing::info!("✅ Done");
    Ok(())
}

fn load_config(cli: &CliConfig) -> pattern_demos::Result<TomlConfig> {
    cli.validate()?;
    let config = cli.load()?;
    config.validate()?;
    Ok(config)
}
