use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{AnsiColors, DynColors, Style};

static STDOUT_COLOR: AtomicBool = AtomicBool::new(true);
static STDERR_COLOR: AtomicBool = AtomicBool::new(true);

/// Stream a styled string is written to.
#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Resolve whether each output stream is colored from the CLI choice.
///
/// Priority: --color flag > NO_COLOR env > terminal detection
pub(crate) fn init(choice: clap::ColorChoice) {
    STDOUT_COLOR.store(
        resolve(choice, std::io::stdout().is_terminal()),
        Ordering::Relaxed,
    );
    STDERR_COLOR.store(
        resolve(choice, std::io::stderr().is_terminal()),
        Ordering::Relaxed,
    );
}

fn resolve(choice: clap::ColorChoice, is_terminal: bool) -> bool {
    match choice {
        clap::ColorChoice::Always => true,
        clap::ColorChoice::Never => false,
        clap::ColorChoice::Auto => {
            // https://no-color.org/: "when present and not an empty string"
            let no_color = std::env::var("NO_COLOR").is_ok_and(|val| !val.is_empty());
            !no_color && is_terminal
        }
    }
}

/// Semantic colors for CLI output. `success_label` and `path` go to stdout;
/// `error` and `dimmed` go to stderr.
pub(crate) struct ColorScheme;

impl ColorScheme {
    pub fn success_label(text: &str) -> String {
        apply_style(
            Style::new().color(DynColors::Ansi(AnsiColors::Green)).bold(),
            text,
            Stream::Stdout,
        )
    }

    pub fn path(text: &str) -> String {
        apply_style(
            Style::new().color(DynColors::Ansi(AnsiColors::Cyan)),
            text,
            Stream::Stdout,
        )
    }

    pub fn error(text: &str) -> String {
        apply_style(
            Style::new().color(DynColors::Ansi(AnsiColors::Red)).bold(),
            text,
            Stream::Stderr,
        )
    }

    pub fn dimmed(text: &str) -> String {
        apply_style(Style::new().dimmed(), text, Stream::Stderr)
    }
}

fn apply_style(style: Style, text: &str, stream: Stream) -> String {
    let enabled = match stream {
        Stream::Stdout => &STDOUT_COLOR,
        Stream::Stderr => &STDERR_COLOR,
    };
    if enabled.load(Ordering::Relaxed) {
        style.style(text).to_string()
    } else {
        text.to_string()
    }
}
