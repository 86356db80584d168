use crate::cli::GenerateArgs;
use crate::config;
use crate::dart;
use crate::error::{Error, Result};
use crate::operation;
use crate::output::Output;
use crate::site;

use std::io::{self, Write};

/// Generate the Dart site list, or verify it with `--check`.
pub(crate) fn run(args: GenerateArgs) -> Result<()> {
    let output = Output::new(args.quiet, args.verbose);

    let settings = config::load(args.config.as_deref())?.with_overrides(args.input, args.output);

    // Render fully before the destination is touched.
    let sites = site::load(&settings.input)?;
    output.detail(&format!(
        "Loaded {} sites from {}",
        sites.len(),
        settings.input.display()
    ));

    let source = dart::render(&sites, &settings.style);

    if args.stdout {
        io::stdout().write_all(source.as_bytes())?;
        return Ok(());
    }

    if args.check {
        if !operation::is_up_to_date(&settings.output, &source)? {
            return Err(Error::OutOfDate {
                path: settings.output,
            });
        }
        output.up_to_date(&settings.output);
        return Ok(());
    }

    operation::write_atomic(&settings.output, &source)?;
    output.detail(&format!("Rendered {} bytes", source.len()));
    output.generated(&settings.output);
    Ok(())
}
