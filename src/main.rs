use clap::Parser;
use interlinear::{
    cli::Cli,
    headless::{Headless, EXIT_REJECTED},
};
use interlinear_core::{config::Config, render, Document};
use std::io::{IsTerminal, Write};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("interlinear-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("interlinear debug log started: tail -f {}", path.display());
    }

    let config = if cli.no_config {
        Config::defaults()
    } else {
        Config::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load config, using defaults");
            Config::defaults()
        })
    };
    let fold = cli.fold(&config);

    if cli.is_headless(std::io::stdout().is_terminal()) {
        let output = Headless {
            file: cli.file.clone(),
            term: cli.term.clone().unwrap_or_default(),
            format: cli.format(),
            fold,
            render: (&config.ui).into(),
        }
        .run()?;
        std::io::stdout().write_all(output.stdout.as_bytes())?;
        std::io::stderr().write_all(output.stderr.as_bytes())?;
        return Ok(ExitCode::from(output.code));
    }

    let document = match cli.file.as_deref().map(Document::from_path).transpose() {
        Ok(document) => document,
        Err(err) => {
            eprintln!("{}", render::render_error(&err));
            return Ok(ExitCode::from(EXIT_REJECTED));
        }
    };
    let startup = interlinear_tui::Startup { document, term: cli.term };
    interlinear_tui::run(config, fold, startup)?;
    Ok(ExitCode::SUCCESS)
}
