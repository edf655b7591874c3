//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Interactive wizard that turns a short interview into an AI-generated
/// résumé.
#[derive(Debug, Parser)]
#[command(name = "vitae", version, about)]
pub struct Args {
    /// Screen to open the wizard at: /, /perguntas, /respostas or /gerar.
    #[arg(long, value_name = "ROUTE", default_value = "/")]
    pub start_at: String,

    /// Directory exported documents are written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub export_dir: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["vitae"]);
        assert_eq!(args.start_at, "/");
        assert_eq!(args.export_dir, PathBuf::from("."));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_start_at_and_export_dir() {
        let args = Args::parse_from(["vitae", "--start-at", "/gerar", "--export-dir", "/tmp/out"]);
        assert_eq!(args.start_at, "/gerar");
        assert_eq!(args.export_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_verbosity_accumulates() {
        let args = Args::parse_from(["vitae", "-vv"]);
        assert_eq!(args.verbose, 2);
    }
}
