//! Rendering of defect records to the terminal.

use std::io::Write;

use crate::cli::VerbosityLevel;
use crate::defect::Defect;

/// Writes defect log lines and tracks the error/warning classification.
///
/// The canonical line content comes from [`Defect::log_entry`]; this layer
/// only decides which lines to show and whether to color the severity tag.
pub struct Output {
    verbosity: VerbosityLevel,
    show_colors: bool,
}

impl Output {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            show_colors: atty::is(atty::Stream::Stdout),
        }
    }

    /// Constructor with explicit color control, for non-tty callers and tests.
    pub fn with_colors(verbosity: VerbosityLevel, show_colors: bool) -> Self {
        Self {
            verbosity,
            show_colors,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.show_colors {
            format!("\x1b[{}m{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    /// Render one defect line; only the leading severity tag is colored.
    pub fn format_defect(&self, defect: &Defect, threshold: i32) -> String {
        let entry = defect.log_entry(threshold);

        if !self.show_colors {
            return entry;
        }

        let tag = format!("({})", defect.severity_label(threshold));
        let color = if defect.is_error(threshold) { "31" } else { "33" };

        match entry.strip_prefix(tag.as_str()) {
            Some(rest) => format!("{}{}", self.colorize(&tag, color), rest),
            None => entry,
        }
    }

    /// Print defect lines in document order.
    ///
    /// Quiet mode suppresses entries classified as warnings. Returns whether
    /// any defect met the error threshold, which drives the exit status.
    pub fn print_defects<W: Write>(
        &self,
        writer: &mut W,
        defects: &[Defect],
        threshold: i32,
    ) -> std::io::Result<bool> {
        let mut any_error = false;

        for defect in defects {
            let is_error = defect.is_error(threshold);
            any_error = any_error || is_error;

            if self.verbosity == VerbosityLevel::Quiet && !is_error {
                continue;
            }

            writeln!(writer, "{}", self.format_defect(defect, threshold))?;
        }

        Ok(any_error)
    }

    /// Error/warning counts for verbose runs.
    pub fn format_summary(&self, defects: &[Defect], threshold: i32) -> String {
        let errors = defects.iter().filter(|d| d.is_error(threshold)).count();
        let warnings = defects.len() - errors;

        format!(
            "Report summary:\n  Total entries: {}\n  {} {}\n  {} {}",
            defects.len(),
            self.colorize("Errors:", "31"),
            errors,
            self.colorize("Warnings:", "33"),
            warnings
        )
    }
}
