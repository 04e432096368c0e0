use clap::Parser;
use logsift::cli::{Cli, StartupError};
use logsift::{Runner, build_operations, expand_inputs, logging, merge_results, report};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<(), StartupError> {
    let config = cli.validate()?;

    let files = expand_inputs(&config.inputs);
    let mut ops = build_operations(&config.operations);
    let runner = Runner { mode: config.mode };
    runner.run(&files, &mut ops);

    let results = merge_results(&ops);
    report::write_report(&config.output, &results)
        .map_err(|_| StartupError::OutputWrite(config.output.display().to_string()))?;
    Ok(())
}
