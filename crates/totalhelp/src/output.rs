//! Emitting a rendered document.
//!
//! Text and Markdown go to stdout. HTML is written to a kept temporary file
//! whose location is reported on stderr, and can optionally be opened in the
//! system browser.

use std::io::Write;
use std::path::PathBuf;

use console::{style, Term};

use crate::error::TotalHelpError;
use crate::render::Format;

/// Print `doc` or persist it, depending on `format`.
///
/// `open_browser` is only honoured for HTML. A failure to write the HTML
/// file falls back to printing the page on stdout.
pub fn print_output(doc: &str, format: Format, open_browser: bool) {
    match format {
        Format::Html => match write_html(doc) {
            Ok(path) => {
                let url = format!("file://{}", path.display());
                eprintln!("HTML help written to: {url}");
                if open_browser {
                    if let Err(e) = totalhelp_exec::open_in_browser(&url) {
                        tracing::warn!(error = %e, "could not open browser");
                        eprintln!("Warning: Could not open web browser: {e}");
                    }
                }
            }
            Err(e) => {
                eprintln!("Error writing temporary HTML file: {e}");
                println!("{doc}");
            }
        },
        Format::Text if Term::stdout().features().colors_supported() => {
            println!("{}", style_text(doc));
        }
        _ => println!("{doc}"),
    }
}

/// Write `doc` to a new `.html` file in the temp directory and keep it.
pub fn write_html(doc: &str) -> Result<PathBuf, TotalHelpError> {
    let mut file = tempfile::Builder::new()
        .prefix("totalhelp-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(doc.as_bytes())?;
    file.flush()?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    let path = path.canonicalize().unwrap_or(path);
    tracing::debug!(path = %path.display(), "wrote html document");
    Ok(path)
}

/// Bold the `$ prog ... --help` banners and their underlines.
fn style_text(doc: &str) -> String {
    let mut out = Vec::new();
    let mut previous_was_banner = false;
    for line in doc.lines() {
        let is_banner = line.starts_with("$ ") && line.ends_with(" --help");
        let is_underline =
            previous_was_banner && !line.is_empty() && line.chars().all(|c| c == '=');
        if is_banner || is_underline {
            out.push(style(line).bold().to_string());
        } else {
            out.push(line.to_string());
        }
        previous_was_banner = is_banner;
    }
    out.join("\n")
}
