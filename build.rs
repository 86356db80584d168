use std::env;
use std::process::Command;

fn main() {
    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".to_string());
    let short_hash = git_output(&["rev-parse", "--short=7", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string());

    let exact_tag = git_output(&["describe", "--tags", "--exact-match", "HEAD"])
        .filter(|tag| tag == &format!("v{version}"));

    let version_label = match (&exact_tag, short_hash.as_str()) {
        (Some(_), _) | (None, "unknown") => format!("v{version}"),
        (None, _) => format!("v{version} dev {short_hash}"),
    };

    println!("cargo:rustc-env=SITEGEN_VERSION_LABEL={version_label}");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if stdout.is_empty() { None } else { Some(stdout) }
}
