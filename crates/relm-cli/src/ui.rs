//! Terminal output.
//!
//! Status lines go to stderr so that stdout stays clean for `list`,
//! `versions` and `current`, which are meant to be piped.

use relm_core::Reporter;
use relm_schema::Build;
use std::io::{IsTerminal, Write};
use std::path::Path;

/// Reporter that writes human-readable progress to stderr.
#[derive(Debug)]
pub struct TerminalReporter {
    quiet: bool,
    interactive: bool,
}

impl TerminalReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            interactive: std::io::stderr().is_terminal(),
        }
    }

    fn line(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{msg}");
        }
    }
}

impl Reporter for TerminalReporter {
    fn downloading(&self, build: &Build, current: u64, total: Option<u64>) {
        if self.quiet {
            return;
        }
        if current == 0 {
            self.line(&format!(
                "Downloading {} {} ({}/{})",
                build.name, build.version, build.os, build.arch
            ));
            return;
        }
        if self.interactive {
            let progress = match total {
                Some(total) if total > 0 => {
                    format!("{} / {}", format_size(current), format_size(total))
                }
                _ => format_size(current),
            };
            let mut stderr = std::io::stderr().lock();
            write!(stderr, "\r  {progress}\x1b[K").ok();
            stderr.flush().ok();
        }
    }

    fn extracting(&self, build: &Build) {
        if self.interactive && !self.quiet {
            eprint!("\r\x1b[K");
        }
        self.line(&format!("Extracting {} from {}", build.name, build.filename));
    }

    fn installed(&self, build: &Build, path: &Path) {
        self.line(&format!(
            "Installed {} {} -> {}",
            build.name,
            build.version,
            path.display()
        ));
    }

    fn activated(&self, link: &Path, target: &Path) {
        self.line(&format!(
            "Activated {} -> {}",
            link.display(),
            target.display()
        ));
    }

    fn info(&self, msg: &str) {
        self.line(msg);
    }
}

/// Render a byte count with a binary unit suffix.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KiB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MiB");
    }
}
