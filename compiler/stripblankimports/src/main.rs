//! stripblankimports CLI

use std::io;
use std::process::ExitCode;

use clap::Parser;
use stripblankimports::{
    init_tracing, run_stdout, run_write_back, Cli, Goimports, Pipeline, RunSummary, SquashStage,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let goimports = Goimports::new(cli.goimports, cli.local);
    let summary = if cli.write {
        run_write_back(&cli.paths, &SquashStage::default(), &goimports)
    } else {
        let pipeline = Pipeline::new().stage(SquashStage::default()).stage(goimports);
        match run_stdout(&cli.paths, &pipeline, &mut io::stdout().lock()) {
            Ok(summary) => summary,
            Err(err) => {
                eprintln!("error writing output: {err}");
                return ExitCode::FAILURE;
            }
        }
    };

    let RunSummary {
        transformed,
        passed_through,
        failed,
    } = summary;
    tracing::info!(transformed, passed_through, failed, "done");
    ExitCode::SUCCESS
}
