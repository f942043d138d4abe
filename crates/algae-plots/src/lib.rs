//! algae-plots: plotting helpers for algae biomass / nutrient trajectories.
//!
//! The crate draws externally computed trajectories of a two-variable system,
//! a biomass density P(t) and a nutrient density N(t), as time series on twin
//! y-axes or in the P-N phase plane. Figures are assembled in a small charting
//! model (`figure`), converted to `plotly::Plot`, and handed to a `Renderer`
//! backend (browser, standalone HTML file, or an in-memory recorder).
//!
//! No simulation happens here; callers bring their own arrays.
pub mod config;
pub mod equilibria;
pub mod error;
pub mod figure;
pub mod plots;
pub mod render;
pub mod trajectory;

pub use config::{FigureConfig, NullclineDomain, PhasePlaneParams};
pub use error::PlotError;
pub use figure::{Axes, CurveId, Figure, LineStyle};
pub use plots::{
    dual_axis_panel, multi_trajectory_figure, multi_trajectory_panel, multi_trajectory_panel_with,
    phase_plane_figure, phase_plane_plot, single_trajectory_figure, single_trajectory_plot,
};
pub use render::{
    build_renderer, BrowserRenderer, HtmlFileRenderer, RecordingRenderer, RenderTarget, Renderer,
};
pub use trajectory::Trajectory;
