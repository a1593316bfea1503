//! Command-line arguments.

use clap::{Parser, ValueEnum};
use interlinear_core::{config::Config, Fold};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "interlinear",
    version,
    about = "Busca palabras griegas que contengan una secuencia de letras en un texto interlineal español-griego"
)]
pub struct Cli {
    /// Archivo de texto interlineal (UTF-8).
    pub file: Option<PathBuf>,

    /// Secuencia de letras a buscar, por ejemplo σπ.
    #[arg(short, long)]
    pub term: Option<String>,

    /// Imprime los resultados en este formato en lugar de abrir la TUI.
    #[arg(long, value_enum)]
    pub format: Option<Format>,

    /// Imprime los resultados en stdout en lugar de abrir la TUI.
    #[arg(long)]
    pub headless: bool,

    /// Solo ignora mayúsculas; espíritus y acentos deben coincidir.
    #[arg(long)]
    pub strict_accents: bool,

    /// Escribe registros de depuración en $TMPDIR/interlinear-debug.log.
    #[arg(long)]
    pub debug: bool,

    /// Ignora ~/.config/interlinear/config.toml y usa los valores por defecto.
    #[arg(long)]
    pub no_config: bool,
}

impl Cli {
    /// Headless when asked for explicitly, when an output format is given, or
    /// when stdout is not a terminal.
    pub fn is_headless(&self, stdout_is_terminal: bool) -> bool {
        self.headless || self.format.is_some() || !stdout_is_terminal
    }

    /// `--strict-accents` wins over the `[search]` config section.
    pub fn fold(&self, config: &Config) -> Fold {
        if self.strict_accents {
            Fold::Case
        } else {
            config.search.fold()
        }
    }

    pub fn format(&self) -> Format {
        self.format.unwrap_or(Format::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("interlinear").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn file_and_term() {
        let cli = parse(&["juan.txt", "-t", "σπ"]);
        assert_eq!(cli.file, Some(PathBuf::from("juan.txt")));
        assert_eq!(cli.term.as_deref(), Some("σπ"));
        assert_eq!(cli.format(), Format::Text);
    }

    #[test]
    fn format_implies_headless() {
        let cli = parse(&["--format", "json"]);
        assert!(cli.is_headless(true));
        let cli = parse(&[]);
        assert!(!cli.is_headless(true));
        assert!(cli.is_headless(false));
    }

    #[test]
    fn strict_accents_overrides_config() {
        let config = Config::defaults();
        assert_eq!(parse(&[]).fold(&config), Fold::Accents);
        assert_eq!(parse(&["--strict-accents"]).fold(&config), Fold::Case);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["interlinear", "--format", "xml"]).is_err());
    }
}
