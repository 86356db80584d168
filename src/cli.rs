use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "sitegen")]
#[command(about = "Generate the Dart site list from api_sites.json")]
#[command(version = VERSION_STRING)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "\
INPUT FORMAT:
    {
      \"siteKey\": {
        \"name\": \"Display name\",      # Optional, defaults to the key
        \"api\": \"https://...\",        # Optional, defaults to ''
        \"detail\": \"https://...\",     # Optional, string or null
        \"adult\": false               # Optional, defaults to false
      }
    }

SETTINGS:
    sitegen reads sitegen.toml from the current directory when present:

    [paths]
    input = \"../config/api_sites.json\"
    output = \"../lib/config/api_config.dart\"

    [dart]
    type_name = \"ApiSite\"
    list_name = \"apiSites\"
    import = \"../models/api_site.dart\"
    source_label = \"config/api_sites.json\"   # File named in the header comment

    Paths are relative to the settings file. Command-line flags win.

COLOR OUTPUT:
    --color=always    Always use colors
    --color=never     Never use colors (or use --no-color)
    --color=auto      Auto-detect terminal (default)

    Environment:
    NO_COLOR          When set to non-empty value, disables colors (https://no-color.org/)

EXAMPLES:
    sitegen
        Regenerate ../lib/config/api_config.dart from ../config/api_sites.json

    sitegen -i config/api_sites.json -o lib/config/api_config.dart
        Use explicit paths

    sitegen --check
        Fail if the generated file is out of date (for CI)

    sitegen --stdout | less
        Preview the generated source without writing it")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

const VERSION_STRING: &str = env!("SITEGEN_VERSION_LABEL");

/// Available subcommands. Without one, sitegen generates the Dart file.
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the JSON Schema of the site config input
    Schema,

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Generate man page
    Man,
}

/// Arguments for generating the Dart file.
#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    /// Site config JSON to read
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Dart file to generate
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Settings file (defaults to ./sitegen.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verify the generated file is up to date without writing it
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the generated source to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,

    // --- Shared Options ---
    /// Suppress output
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Shared Options")]
    pub quiet: bool,

    /// Print progress details to stderr
    #[arg(short, long, help_heading = "Shared Options")]
    pub verbose: bool,

    /// When to use colored output (always, auto, never)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        conflicts_with = "no_color",
        help_heading = "Shared Options"
    )]
    pub color: clap::ColorChoice,

    /// Disable colored output (equivalent to --color=never)
    #[arg(long, help_heading = "Shared Options")]
    pub no_color: bool,
}

/// Parse CLI arguments.
pub(crate) fn parse() -> Cli {
    Cli::parse()
}

/// Build CLI for completion/man generation.
pub(crate) fn build() -> clap::Command {
    Cli::command()
}
