use std::path::PathBuf;
use std::str::FromStr;

use crate::error::PlotError;
use crate::figure::Figure;

/// A backend that displays finished figures.
///
/// Plotting functions build a `Figure` and make exactly one `show` call on the
/// renderer they are given.
pub trait Renderer {
    fn show(&mut self, figure: &Figure) -> Result<(), PlotError>;

    /// Human readable backend name, used in log output.
    fn name(&self) -> &str {
        "renderer"
    }
}

/// Opens the figure in the system browser through plotly.
#[derive(Debug, Default, Clone)]
pub struct BrowserRenderer;

impl Renderer for BrowserRenderer {
    fn show(&mut self, figure: &Figure) -> Result<(), PlotError> {
        figure.to_plot()?.show();
        Ok(())
    }

    fn name(&self) -> &str {
        "browser"
    }
}

/// Writes each figure to a standalone HTML file, overwriting previous output.
#[derive(Debug, Clone)]
pub struct HtmlFileRenderer {
    path: PathBuf,
}

impl HtmlFileRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Renderer for HtmlFileRenderer {
    fn show(&mut self, figure: &Figure) -> Result<(), PlotError> {
        let html = figure.to_plot()?.to_html();
        std::fs::write(&self.path, html)?;
        log::debug!("Wrote figure to {}", self.path.display());
        Ok(())
    }

    fn name(&self) -> &str {
        "html"
    }
}

/// Keeps every shown figure in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub figures: Vec<Figure>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }
}

impl Renderer for RecordingRenderer {
    fn show(&mut self, figure: &Figure) -> Result<(), PlotError> {
        self.figures.push(figure.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "record"
    }
}

/// Which backend to build with `build_renderer`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderTarget {
    #[default]
    Browser,
    HtmlFile(PathBuf),
    Record,
}

impl FromStr for RenderTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(path) = s.strip_prefix("html:") {
            if path.is_empty() {
                return Err("html target requires a file path, e.g. html:figure.html".to_string());
            }
            return Ok(RenderTarget::HtmlFile(PathBuf::from(path)));
        }
        match s.to_lowercase().as_str() {
            "browser" => Ok(RenderTarget::Browser),
            "record" => Ok(RenderTarget::Record),
            _ => Err(format!(
                "Unknown render target: {}. Expected 'browser', 'record' or 'html:<path>'",
                s
            )),
        }
    }
}

/// Build a boxed renderer for `target`.
pub fn build_renderer(target: RenderTarget) -> Box<dyn Renderer> {
    match target {
        RenderTarget::Browser => Box::new(BrowserRenderer),
        RenderTarget::HtmlFile(path) => Box::new(HtmlFileRenderer::new(path)),
        RenderTarget::Record => Box::new(RecordingRenderer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_target_from_str() {
        assert_eq!("browser".parse::<RenderTarget>().unwrap(), RenderTarget::Browser);
        assert_eq!("Record".parse::<RenderTarget>().unwrap(), RenderTarget::Record);
        assert_eq!(
            "html:out/p.html".parse::<RenderTarget>().unwrap(),
            RenderTarget::HtmlFile(PathBuf::from("out/p.html"))
        );
        assert!("html:".parse::<RenderTarget>().is_err());
        assert!("png".parse::<RenderTarget>().is_err());
    }

    #[test]
    fn factory_builds_requested_backend() {
        assert_eq!(build_renderer(RenderTarget::Browser).name(), "browser");
        assert_eq!(build_renderer(RenderTarget::Record).name(), "record");
        assert_eq!(
            build_renderer(RenderTarget::HtmlFile(PathBuf::from("x.html"))).name(),
            "html"
        );
    }
}
