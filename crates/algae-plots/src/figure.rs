//! A small charting model on top of plotly.
//!
//! `Figure` records panels, axes, curves and reference lines in plain Rust
//! values so they can be inspected before anything is drawn, then converts
//! everything to a `plotly::Plot` in one pass (`Figure::to_plot`).
//!
//! Axes are addressed with the `Axes` handle: a pair of 1-based plotly axis
//! ids (`x`, `x2`, ... / `y`, `y2`, ...). A twin axis shares the x id of its
//! parent and gets a fresh y id overlaying the parent's y axis.
use plotly::common::{Anchor, AxisSide, Font, Line, Mode};
use plotly::layout::{Annotation, Axis, Layout, Shape, ShapeLine, ShapeType};
use plotly::{Plot, Scatter};

use crate::config::FigureConfig;
use crate::error::PlotError;

/// Highest axis id per direction that the plotly layout exposes.
pub const MAX_AXES: usize = 8;

/// Opaque handle to a pair of axes inside a `Figure`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Axes {
    x: usize,
    y: usize,
}

impl Axes {
    pub fn x_id(&self) -> usize {
        self.x
    }

    pub fn y_id(&self) -> usize {
        self.y
    }

    /// Plotly trace reference for the x axis, e.g. `x` or `x2`.
    pub fn x_ref(&self) -> String {
        axis_ref('x', self.x)
    }

    /// Plotly trace reference for the y axis, e.g. `y` or `y4`.
    pub fn y_ref(&self) -> String {
        axis_ref('y', self.y)
    }
}

fn axis_ref(letter: char, id: usize) -> String {
    if id == 1 {
        letter.to_string()
    } else {
        format!("{}{}", letter, id)
    }
}

/// Layout state of one axis.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AxisSpec {
    pub label: Option<String>,
    /// Colour of the tick labels.
    pub tick_color: Option<String>,
    pub domain: Option<(f64, f64)>,
    /// Id of the perpendicular axis this one is attached to.
    pub anchor: Option<usize>,
    /// Id of the same-direction axis this one is drawn over (twin axes).
    pub overlaying: Option<usize>,
    pub opposite_side: bool,
    pub auto_margin: bool,
}

/// Stroke colour and optional legend label of a curve.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LineStyle {
    pub color: Option<String>,
    pub label: Option<String>,
}

impl LineStyle {
    pub fn color(color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            label: None,
        }
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

/// Index of a curve inside its figure, returned by `Figure::plot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveId(usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    pub axes: Axes,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: LineStyle,
    pub in_legend: bool,
}

/// A line at constant y spanning the full width of its panel.
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalLine {
    pub axes: Axes,
    pub y: f64,
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
struct Panel {
    axes: Axes,
    title: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    x_axes: Vec<AxisSpec>,
    y_axes: Vec<AxisSpec>,
    panels: Vec<Panel>,
    curves: Vec<Curve>,
    hlines: Vec<HorizontalLine>,
    size: Option<(usize, usize)>,
    show_legend: bool,
}

impl Figure {
    /// A figure with a single panel.
    pub fn new() -> (Self, Axes) {
        let mut figure = Self::empty();
        let axes = figure.add_panel(None);
        (figure, axes)
    }

    /// A figure with `ncols` side-by-side panels sized by `config`.
    pub fn subplots(ncols: usize, config: &FigureConfig) -> (Self, Vec<Axes>) {
        let mut figure = Self::empty();
        figure.size = Some((config.width, config.height));

        let ncols = ncols.max(1);
        let gap = if ncols > 1 {
            config.horizontal_spacing
        } else {
            0.0
        };
        let width = (1.0 - gap * (ncols - 1) as f64) / ncols as f64;

        let axes = (0..ncols)
            .map(|i| {
                let lo = i as f64 * (width + gap);
                figure.add_panel(Some((lo, lo + width)))
            })
            .collect();
        (figure, axes)
    }

    fn empty() -> Self {
        Self {
            x_axes: Vec::new(),
            y_axes: Vec::new(),
            panels: Vec::new(),
            curves: Vec::new(),
            hlines: Vec::new(),
            size: None,
            show_legend: false,
        }
    }

    fn add_panel(&mut self, domain: Option<(f64, f64)>) -> Axes {
        self.x_axes.push(AxisSpec {
            domain,
            ..AxisSpec::default()
        });
        let x = self.x_axes.len();
        self.y_axes.push(AxisSpec {
            anchor: Some(x),
            ..AxisSpec::default()
        });
        let axes = Axes {
            x,
            y: self.y_axes.len(),
        };
        self.x_axes[x - 1].anchor = Some(axes.y);
        self.panels.push(Panel { axes, title: None });
        axes
    }

    fn x_spec_mut(&mut self, axes: Axes) -> Result<&mut AxisSpec, PlotError> {
        axes.x
            .checked_sub(1)
            .and_then(|i| self.x_axes.get_mut(i))
            .ok_or_else(|| PlotError::UnknownAxes(axes.x_ref()))
    }

    fn y_spec_mut(&mut self, axes: Axes) -> Result<&mut AxisSpec, PlotError> {
        axes.y
            .checked_sub(1)
            .and_then(|i| self.y_axes.get_mut(i))
            .ok_or_else(|| PlotError::UnknownAxes(axes.y_ref()))
    }

    /// Fails unless both axes of `axes` exist in this figure.
    pub fn check_axes(&self, axes: Axes) -> Result<(), PlotError> {
        self.x_axis(axes)
            .ok_or_else(|| PlotError::UnknownAxes(axes.x_ref()))?;
        self.y_axis(axes)
            .ok_or_else(|| PlotError::UnknownAxes(axes.y_ref()))?;
        Ok(())
    }

    /// Create a second y axis sharing `axes`' x axis, drawn on the opposite side.
    pub fn twinx(&mut self, axes: Axes) -> Result<Axes, PlotError> {
        self.check_axes(axes)?;
        self.y_axes.push(AxisSpec {
            anchor: Some(axes.x),
            overlaying: Some(axes.y),
            opposite_side: true,
            ..AxisSpec::default()
        });
        let twin = Axes {
            x: axes.x,
            y: self.y_axes.len(),
        };
        log::trace!("Created twin axis {} over {}", twin.y_ref(), axes.y_ref());
        Ok(twin)
    }

    /// Add a line through `(x[i], y[i])` on `axes`.
    pub fn plot(
        &mut self,
        axes: Axes,
        x: Vec<f64>,
        y: Vec<f64>,
        style: LineStyle,
    ) -> Result<CurveId, PlotError> {
        self.check_axes(axes)?;
        self.curves.push(Curve {
            axes,
            x,
            y,
            style,
            in_legend: false,
        });
        Ok(CurveId(self.curves.len() - 1))
    }

    pub fn axhline(&mut self, axes: Axes, y: f64, color: &str) -> Result<(), PlotError> {
        self.check_axes(axes)?;
        self.hlines.push(HorizontalLine {
            axes,
            y,
            color: Some(color.to_string()),
        });
        Ok(())
    }

    pub fn set_xlabel(&mut self, axes: Axes, label: &str) -> Result<(), PlotError> {
        self.x_spec_mut(axes)?.label = Some(label.to_string());
        Ok(())
    }

    pub fn set_ylabel(&mut self, axes: Axes, label: &str) -> Result<(), PlotError> {
        self.y_spec_mut(axes)?.label = Some(label.to_string());
        Ok(())
    }

    /// Colour the y tick labels of `axes`.
    pub fn set_ytick_color(&mut self, axes: Axes, color: &str) -> Result<(), PlotError> {
        self.y_spec_mut(axes)?.tick_color = Some(color.to_string());
        Ok(())
    }

    /// Title of the panel `axes` belongs to (twin axes share their parent's panel).
    pub fn set_title(&mut self, axes: Axes, title: &str) -> Result<(), PlotError> {
        let panel = self
            .panels
            .iter_mut()
            .find(|p| p.axes.x == axes.x)
            .ok_or_else(|| PlotError::UnknownAxes(axes.x_ref()))?;
        panel.title = Some(title.to_string());
        Ok(())
    }

    /// Show one legend box listing `curves` in the given order.
    pub fn legend(&mut self, curves: &[CurveId]) -> Result<(), PlotError> {
        if let Some(missing) = curves.iter().find(|id| id.0 >= self.curves.len()) {
            return Err(PlotError::UnknownCurve(missing.0));
        }
        for id in curves {
            self.curves[id.0].in_legend = true;
        }
        self.show_legend = true;
        Ok(())
    }

    /// Let plotly grow the margins so labels and tick text are never clipped.
    pub fn tight_layout(&mut self) {
        for spec in self.x_axes.iter_mut().chain(self.y_axes.iter_mut()) {
            spec.auto_margin = true;
        }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn curve(&self, id: CurveId) -> Option<&Curve> {
        self.curves.get(id.0)
    }

    /// Curves drawn on exactly these axes, in drawing order.
    pub fn curves_on(&self, axes: Axes) -> impl Iterator<Item = &Curve> + '_ {
        self.curves.iter().filter(move |c| c.axes == axes)
    }

    pub fn hlines(&self) -> &[HorizontalLine] {
        &self.hlines
    }

    pub fn x_axis(&self, axes: Axes) -> Option<&AxisSpec> {
        axes.x.checked_sub(1).and_then(|i| self.x_axes.get(i))
    }

    pub fn y_axis(&self, axes: Axes) -> Option<&AxisSpec> {
        axes.y.checked_sub(1).and_then(|i| self.y_axes.get(i))
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn title(&self, axes: Axes) -> Option<&str> {
        self.panels
            .iter()
            .find(|p| p.axes.x == axes.x)
            .and_then(|p| p.title.as_deref())
    }

    pub fn size(&self) -> Option<(usize, usize)> {
        self.size
    }

    pub fn shows_legend(&self) -> bool {
        self.show_legend
    }

    /// Convert the figure into a plotly plot.
    ///
    /// A single panel's title becomes the layout title; with several panels
    /// each title is placed as an annotation above its panel.
    pub fn to_plot(&self) -> Result<Plot, PlotError> {
        let mut plot = Plot::new();

        for curve in &self.curves {
            let mut trace = Scatter::new(curve.x.clone(), curve.y.clone())
                .mode(Mode::Lines)
                .x_axis(&curve.axes.x_ref())
                .y_axis(&curve.axes.y_ref())
                .show_legend(curve.in_legend);
            if let Some(color) = &curve.style.color {
                trace = trace.line(Line::new().color(color.clone()));
            }
            if let Some(label) = &curve.style.label {
                trace = trace.name(label.as_str());
            }
            plot.add_trace(trace);
        }

        let mut layout = Layout::new().show_legend(self.show_legend);
        if let Some((width, height)) = self.size {
            layout = layout.width(width).height(height);
        }

        for (i, spec) in self.x_axes.iter().enumerate() {
            layout = with_x_axis(layout, i + 1, build_axis(spec, 'y'))?;
        }
        for (i, spec) in self.y_axes.iter().enumerate() {
            layout = with_y_axis(layout, i + 1, build_axis(spec, 'x'))?;
        }

        if let [panel] = self.panels.as_slice() {
            if let Some(title) = &panel.title {
                layout = layout.title(title.as_str());
            }
        } else {
            for panel in &self.panels {
                let Some(title) = &panel.title else { continue };
                let (lo, hi) = self.x_axes[panel.axes.x - 1].domain.unwrap_or((0.0, 1.0));
                layout.add_annotation(
                    Annotation::new()
                        .text(title.as_str())
                        .x_ref("paper")
                        .y_ref("paper")
                        .x((lo + hi) / 2.0)
                        .y(1.0)
                        .x_anchor(Anchor::Center)
                        .y_anchor(Anchor::Bottom)
                        .show_arrow(false),
                );
            }
        }

        for hline in &self.hlines {
            let mut line = ShapeLine::new();
            if let Some(color) = &hline.color {
                line = line.color(color.clone());
            }
            layout.add_shape(
                Shape::new()
                    .shape_type(ShapeType::Line)
                    .x_ref(&format!("{} domain", hline.axes.x_ref()))
                    .y_ref(&hline.axes.y_ref())
                    .x0(0.0)
                    .x1(1.0)
                    .y0(hline.y)
                    .y1(hline.y)
                    .line(line),
            );
        }

        plot.set_layout(layout);
        log::debug!(
            "Converted figure: {} panel(s), {} curve(s), {} reference line(s)",
            self.panels.len(),
            self.curves.len(),
            self.hlines.len()
        );
        Ok(plot)
    }
}

/// `anchor_letter` is the direction of the axis this one is anchored to.
fn build_axis(spec: &AxisSpec, anchor_letter: char) -> Axis {
    let mut axis = Axis::new().auto_margin(spec.auto_margin);
    if let Some(label) = &spec.label {
        axis = axis.title(label.as_str());
    }
    if let Some(color) = &spec.tick_color {
        axis = axis.tick_font(Font::new().color(color.clone()));
    }
    if let Some((lo, hi)) = spec.domain {
        axis = axis.domain(&[lo, hi]);
    }
    if let Some(anchor) = spec.anchor {
        axis = axis.anchor(&axis_ref(anchor_letter, anchor));
    }
    if let Some(parent) = spec.overlaying {
        // overlaying always refers to an axis of the same direction
        let letter = if anchor_letter == 'x' { 'y' } else { 'x' };
        axis = axis.overlaying(&axis_ref(letter, parent));
    }
    if spec.opposite_side {
        axis = axis.side(if anchor_letter == 'x' {
            AxisSide::Right
        } else {
            AxisSide::Top
        });
    }
    axis
}

fn with_x_axis(layout: Layout, id: usize, axis: Axis) -> Result<Layout, PlotError> {
    Ok(match id {
        1 => layout.x_axis(axis),
        2 => layout.x_axis2(axis),
        3 => layout.x_axis3(axis),
        4 => layout.x_axis4(axis),
        5 => layout.x_axis5(axis),
        6 => layout.x_axis6(axis),
        7 => layout.x_axis7(axis),
        8 => layout.x_axis8(axis),
        n => return Err(PlotError::TooManyAxes(n)),
    })
}

fn with_y_axis(layout: Layout, id: usize, axis: Axis) -> Result<Layout, PlotError> {
    Ok(match id {
        1 => layout.y_axis(axis),
        2 => layout.y_axis2(axis),
        3 => layout.y_axis3(axis),
        4 => layout.y_axis4(axis),
        5 => layout.y_axis5(axis),
        6 => layout.y_axis6(axis),
        7 => layout.y_axis7(axis),
        8 => layout.y_axis8(axis),
        n => return Err(PlotError::TooManyAxes(n)),
    })
}
