//! HTML-to-PDF conversion through headless Chromium.
//!
//! The browser engine does all rendering work; this module only drives
//! navigation and the DevTools print-to-PDF call.

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};

// A4 paper in inches, the unit the DevTools protocol expects.
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;
const MARGIN_IN: f64 = 0.5;

/// Extra wait after load so CSS animations and transitions settle. This is
/// also the only bound on a page that never finishes loading quietly.
const SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Converts one HTML file to PDF with its styling preserved.
///
/// `slide_mode` switches to a landscape page and a larger viewport for
/// multi-slide interactive decks. A fresh browser is launched per file.
pub fn convert_html_to_pdf(html_file: &str, output_file: &str, slide_mode: bool) -> Result<()> {
    let path = Path::new(html_file);
    if !path.exists() {
        bail!("HTML file '{html_file}' not found");
    }

    println!("Converting {html_file} to PDF...");

    let (width, height) = window_size(slide_mode);
    let launch_options = LaunchOptions::default_builder()
        .headless(true)
        .window_size(Some((width, height)))
        .build()
        .map_err(|e| anyhow!("invalid browser launch options: {e}"))?;
    let browser = Browser::new(launch_options).context("failed to launch headless browser")?;

    let tab = browser.new_tab().context("failed to open browser tab")?;

    let url = file_url(path)?;
    tab.navigate_to(&url)
        .and_then(|t| t.wait_until_navigated())
        .context("navigation failed")?;

    // Load events alone miss late transitions; give the page a moment.
    std::thread::sleep(SETTLE_DELAY);

    if slide_mode {
        println!("Capturing interactive slides...");
        let slide_count = tab
            .find_elements(".slide")
            .map(|slides| slides.len())
            .unwrap_or(0);
        println!("Found {slide_count} slides");
    }

    let pdf = tab
        .print_to_pdf(Some(print_options(slide_mode)))
        .context("PDF export failed")?;

    std::fs::write(output_file, pdf)
        .with_context(|| format!("failed to write '{output_file}'"))?;

    Ok(())
}

/// Viewport per mode: slide capture wants a full-HD window, the print-friendly
/// flow a narrower one.
fn window_size(slide_mode: bool) -> (u32, u32) {
    if slide_mode {
        (1920, 1080)
    } else {
        (1200, 800)
    }
}

/// file:// URL for a local path, canonicalized so relative inputs work.
fn file_url(path: &Path) -> Result<String> {
    let absolute = path
        .canonicalize()
        .with_context(|| format!("cannot resolve path '{}'", path.display()))?;
    Ok(format!("file://{}", absolute.display()))
}

/// Fixed print settings: A4, backgrounds on, half-inch margins all around.
/// Landscape only for slide decks.
fn print_options(slide_mode: bool) -> PrintToPdfOptions {
    PrintToPdfOptions {
        landscape: Some(slide_mode),
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        margin_left: Some(MARGIN_IN),
        margin_right: Some(MARGIN_IN),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_fails_before_browser_launch() {
        let err = convert_html_to_pdf("no_such_deck.html", "out.pdf", false).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_file_url_is_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("deck.html");
        std::fs::write(&file, "<html></html>").unwrap();

        let url = file_url(&file).unwrap();
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("deck.html"));
    }

    #[test]
    fn test_file_url_rejects_missing_path() {
        assert!(file_url(Path::new("missing/deck.html")).is_err());
    }

    #[test]
    fn test_slide_mode_prints_landscape() {
        let opts = print_options(true);
        assert_eq!(opts.landscape, Some(true));
        assert_eq!(opts.print_background, Some(true));
        assert_eq!(opts.paper_width, Some(A4_WIDTH_IN));
        assert_eq!(opts.paper_height, Some(A4_HEIGHT_IN));
    }

    #[test]
    fn test_print_mode_is_portrait_with_same_margins() {
        let opts = print_options(false);
        assert_eq!(opts.landscape, Some(false));
        for margin in [
            opts.margin_top,
            opts.margin_bottom,
            opts.margin_left,
            opts.margin_right,
        ] {
            assert_eq!(margin, Some(MARGIN_IN));
        }
    }

    #[test]
    fn test_window_size_per_mode() {
        assert_eq!(window_size(true), (1920, 1080));
        assert_eq!(window_size(false), (1200, 800));
    }
}
