mod cli;
mod color;
mod command;
mod config;
mod dart;
mod error;
mod operation;
mod output;
mod site;

use std::process::ExitCode;

use color::ColorScheme;

fn main() -> ExitCode {
    let args = cli::parse();

    let color_choice = if args.generate.no_color {
        clap::ColorChoice::Never
    } else {
        args.generate.color
    };
    color::init(color_choice);

    let result = match args.command {
        None => command::generate(args.generate),
        Some(cli::Command::Schema) => command::schema(),
        Some(cli::Command::Completions { shell }) => command::completions(shell),
        Some(cli::Command::Man) => command::man(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", ColorScheme::error("Error:"));
            ExitCode::FAILURE
        }
    }
}
