use std::io;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{Shell, generate};
use cvrun::cli::Cli;

/// Which binary to generate completions for
#[derive(Clone, Debug, ValueEnum)]
enum BinName {
    Cvrun,
}

/// Generate shell completions for cvrun
#[derive(Parser, Debug)]
#[command(
    name = "cvrun-completions",
    about = "Generate shell completions for cvrun",
    version
)]
struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(long, value_enum)]
    shell: Shell,

    /// Binary to generate completions for
    #[arg(long, value_enum, default_value = "cvrun")]
    bin: BinName,
}

fn main() {
    let args = CompletionArgs::parse();

    let mut cmd = match args.bin {
        BinName::Cvrun => Cli::command(),
    };

    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, &bin_name, &mut io::stdout());
}
