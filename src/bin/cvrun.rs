use std::process::ExitCode;

use cvrun::{
    build::{BuildOrchestrator, BuildRequest},
    cli::{Commands, ParsedCli, parse_cli_from},
    config::cvrun_config,
    diagnostics::{print_error, report_error},
    error::Error,
    runner::SystemRunner,
    utils::{exit_code_byte, init_logging},
};

fn build(args: &cvrun::cli::BuildArgs) -> Result<i32, Error> {
    let config = cvrun_config()?;
    let request = BuildRequest::try_from(args)?;
    tracing::debug!("{:?}", request);

    let mut orchestrator = BuildOrchestrator::new(config, SystemRunner);
    match orchestrator.run(&request) {
        Ok(outcome) => Ok(outcome.exit_code(config.propagate_exit_status())),
        Err(err) => {
            report_error(&err, config.library_package());
            Ok(1)
        }
    }
}

fn main() -> ExitCode {
    let command = match parse_cli_from(std::env::args_os()) {
        ParsedCli::Run(command) => command,
        ParsedCli::Exit {
            message,
            to_stderr,
            code,
        } => {
            if to_stderr {
                eprint!("{message}");
            } else {
                print!("{message}");
            }
            return ExitCode::from(code as u8);
        }
    };

    let code = match command {
        Commands::Build(args) => {
            if let Err(err) = init_logging(args.verbose) {
                print_error(&err.to_string());
                return ExitCode::FAILURE;
            }
            build(&args).unwrap_or_else(|err| {
                print_error(&err.to_string());
                1
            })
        }
    };

    ExitCode::from(exit_code_byte(code))
}
