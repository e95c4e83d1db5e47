//! Command line.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "stripblankimports",
    version,
    about = "Remove blank lines from Go import blocks, then run goimports",
    long_about = None
)]
pub struct Cli {
    /// Rewrite files in place instead of printing to stdout.
    #[arg(short, long)]
    pub write: bool,

    #[arg(short, long, help = "Verbose logging")]
    pub verbose: bool,

    /// Value passed to goimports as `-local`.
    #[arg(short, long, env = "STRIPBLANKIMPORTS_LOCAL", default_value = "")]
    pub local: String,

    /// Path to the goimports executable.
    #[arg(
        short = 'p',
        long,
        env = "STRIPBLANKIMPORTS_GOIMPORTS",
        default_value = "goimports"
    )]
    pub goimports: PathBuf,

    /// Go source files to process.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let Ok(cli) = Cli::try_parse_from(["stripblankimports", "a.go", "b.go"]) else {
            panic!("valid arguments");
        };
        assert!(!cli.write);
        assert!(!cli.verbose);
        assert_eq!(cli.paths, vec![PathBuf::from("a.go"), PathBuf::from("b.go")]);
    }

    #[test]
    fn short_flags() {
        let Ok(cli) = Cli::try_parse_from([
            "stripblankimports",
            "-w",
            "-v",
            "-l",
            "example.com/me",
            "-p",
            "/opt/goimports",
            "main.go",
        ]) else {
            panic!("valid arguments");
        };
        assert!(cli.write);
        assert!(cli.verbose);
        assert_eq!(cli.local, "example.com/me");
        assert_eq!(cli.goimports, PathBuf::from("/opt/goimports"));
    }

    #[test]
    fn paths_are_required() {
        assert!(Cli::try_parse_from(["stripblankimports", "-w"]).is_err());
    }
}
