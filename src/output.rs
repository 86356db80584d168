use crate::color::ColorScheme;

use std::path::Path;

/// Output manager that respects quiet and verbose modes.
#[derive(Debug, Clone)]
pub(crate) struct Output {
    quiet: bool,
    verbose: bool,
}

impl Output {
    /// Create a new Output instance.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// Print a labelled path on stdout (suppressed in quiet mode).
    fn labelled(&self, label: &str, path: &Path) {
        if !self.quiet {
            println!(
                "{} {}",
                ColorScheme::success_label(label),
                ColorScheme::path(&path.display().to_string())
            );
        }
    }

    /// Print the confirmation for a written file.
    pub fn generated(&self, path: &Path) {
        self.labelled("Generated:", path);
    }

    /// Print the confirmation for a file that passed `--check`.
    pub fn up_to_date(&self, path: &Path) {
        self.labelled("Up to date:", path);
    }

    /// Print a progress detail on stderr (verbose mode only).
    pub fn detail(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", ColorScheme::dimmed(message));
        }
    }
}
