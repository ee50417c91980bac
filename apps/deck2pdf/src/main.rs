mod convert;

use crate::convert::convert_html_to_pdf;

// The two deck variants this tool exists to export. No CLI flags; the
// filenames are part of the deck build, not user input.
const INTERACTIVE_HTML: &str = "mailsmith_deck_interactive.html";
const INTERACTIVE_PDF: &str = "mailsmith_deck_interactive.pdf";
const PRINT_HTML: &str = "mailsmith_deck_print.html";
const PRINT_PDF: &str = "mailsmith_deck.pdf";

fn main() {
    println!("Starting HTML to PDF conversion...");
    println!("{}", "=".repeat(50));

    let interactive_ok = run_conversion(INTERACTIVE_HTML, INTERACTIVE_PDF, true);
    let print_ok = run_conversion(PRINT_HTML, PRINT_PDF, false);

    println!("{}", "=".repeat(50));
    if interactive_ok || print_ok {
        println!("PDF conversion completed");
        if interactive_ok {
            println!("Interactive version: {INTERACTIVE_PDF}");
        }
        if print_ok {
            println!("Print-friendly version: {PRINT_PDF}");
        }
    } else {
        println!("PDF conversion failed");
    }
}

/// Runs one conversion, reporting failure instead of propagating it so the
/// remaining file still gets attempted.
fn run_conversion(html_file: &str, output_file: &str, slide_mode: bool) -> bool {
    match convert_html_to_pdf(html_file, output_file, slide_mode) {
        Ok(()) => {
            println!("Successfully created: {output_file}");
            true
        }
        Err(e) => {
            println!("Error converting {html_file}: {e:#}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_reports_failure_without_panicking() {
        assert!(!run_conversion("definitely_missing_deck.html", "out.pdf", true));
    }
}
