//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use super::formatter::SanitizeReport;
use anyhow::Result;
use console::Term;
use console::style;
use vitrine_core::BundleFile;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_sanitize_result(&self, report: &SanitizeReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Bundle sanitized: {}",
                style("✓").green().bold(),
                report.output_dir.display()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Bundle sanitized: {}", report.output_dir.display()));
        }

        let _ = self
            .term
            .write_line(&format!("  Files written: {}", report.files_written));
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Directories: {}",
                report.directories_created
            ));
        }

        Ok(())
    }

    fn format_file_list(
        &self,
        files: &[BundleFile],
        long: bool,
        human_readable: bool,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if !long {
            for file in files {
                let _ = self.term.write_line(&file.path);
            }
            return Ok(());
        }

        let mut total_size: u64 = 0;
        for file in files {
            let size = file.data.len() as u64;
            total_size += size;

            let size_str = if human_readable {
                Self::format_size(size)
            } else {
                size.to_string()
            };

            let type_char = if file.is_directory() { "d" } else { "-" };

            let _ = self.term.write_line(&format!(
                "{} {:>10}  {:<26} {}",
                type_char, size_str, file.media_type, file.path
            ));
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line(&format!(
            "Total: {} records, {}",
            Self::format_number(files.len()),
            Self::format_size(total_size)
        ));

        Ok(())
    }

    fn format_document(&self, html: &str) -> Result<()> {
        // The document is the product; it prints even in quiet mode.
        let _ = self.term.write_line(html);
        Ok(())
    }

    fn format_cover_result(&self, cover: Option<&str>) -> Result<()> {
        match cover {
            Some(url) => {
                let _ = self.term.write_line(url);
            }
            None => {
                self.format_warning("no cover image reference found");
            }
        }
        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_success(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("✓").green().bold()));
        } else {
            let _ = self.term.write_line(message);
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
