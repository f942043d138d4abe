//! Time-series and phase-plane views of algae/nutrient trajectories.
//!
//! Every `*_plot` / `*_panel` entry point builds its figure with the matching
//! `*_figure` function and hands it to the renderer with a single `show`
//! call. The `*_figure` builders are public so callers can inspect or further
//! annotate a figure before showing it.
use ndarray::Array1;

use crate::config::{FigureConfig, PhasePlaneParams};
use crate::equilibria::EquilibriumModel;
use crate::error::PlotError;
use crate::figure::{Axes, Figure, LineStyle};
use crate::render::Renderer;
use crate::trajectory::Trajectory;

pub const TIME_LABEL: &str = "time (days)";
pub const P_LABEL: &str = "P(t)";
pub const N_LABEL: &str = "N(t)";
pub const TIME_PLOT_TITLE: &str = "Algae Biomass and Nutritional Density Over Time";
pub const PHASE_PLANE_TITLE: &str = "Phase-Plane of P(t) and N(t)";

pub const P_COLOR: &str = "blue";
pub const N_COLOR: &str = "red";
pub const EQUILIBRIUM_COLOR: &str = "black";

fn show(renderer: &mut dyn Renderer, figure: &Figure) -> Result<(), PlotError> {
    log::debug!("Showing figure with the {} backend", renderer.name());
    renderer.show(figure)
}

/// P(t) and N(t) of one trajectory on a shared time axis with twin y-scales.
pub fn single_trajectory_figure(
    trajectory: &Trajectory,
    time: &Array1<f64>,
) -> Result<Figure, PlotError> {
    trajectory.check_time(time)?;

    let (mut figure, ax1) = Figure::new();
    let p_line = figure.plot(
        ax1,
        time.to_vec(),
        trajectory.p().to_vec(),
        LineStyle::color(P_COLOR).label(P_LABEL),
    )?;
    figure.set_xlabel(ax1, TIME_LABEL)?;
    figure.set_ylabel(ax1, P_LABEL)?;
    figure.set_ytick_color(ax1, P_COLOR)?;

    let ax2 = figure.twinx(ax1)?;
    figure.set_ylabel(ax2, N_LABEL)?;
    let n_line = figure.plot(
        ax2,
        time.to_vec(),
        trajectory.n().to_vec(),
        LineStyle::color(N_COLOR).label(N_LABEL),
    )?;
    figure.set_ytick_color(ax2, N_COLOR)?;

    figure.legend(&[p_line, n_line])?;
    figure.set_title(ax1, TIME_PLOT_TITLE)?;
    figure.tight_layout();
    Ok(figure)
}

pub fn single_trajectory_plot(
    trajectory: &Trajectory,
    time: &Array1<f64>,
    renderer: &mut dyn Renderer,
) -> Result<(), PlotError> {
    let figure = single_trajectory_figure(trajectory, time)?;
    show(renderer, &figure)
}

/// Draw P(t) on `axes` and N(t) on a new twin axis, without a legend.
///
/// Returns `(primary, secondary)` so the caller can keep annotating, e.g.
/// with a panel title.
pub fn dual_axis_panel(
    figure: &mut Figure,
    axes: Axes,
    time: &Array1<f64>,
    trajectory: &Trajectory,
) -> Result<(Axes, Axes), PlotError> {
    trajectory.check_time(time)?;

    let twin = figure.twinx(axes)?;

    figure.plot(axes, time.to_vec(), trajectory.p().to_vec(), LineStyle::color(P_COLOR))?;
    figure.set_xlabel(axes, TIME_LABEL)?;
    figure.set_ylabel(axes, P_LABEL)?;
    figure.set_ytick_color(axes, P_COLOR)?;

    figure.plot(twin, time.to_vec(), trajectory.n().to_vec(), LineStyle::color(N_COLOR))?;
    figure.set_ylabel(twin, N_LABEL)?;
    figure.set_ytick_color(twin, N_COLOR)?;

    Ok((axes, twin))
}

/// Title used for each multi-panel subplot.
pub fn initial_p_title(trajectory: &Trajectory) -> String {
    format!("P(0) = {}", trajectory.initial_p())
}

/// Three trajectories side by side, each on its own twin-axis panel.
pub fn multi_trajectory_figure(
    time: &Array1<f64>,
    trajectories: [&Trajectory; 3],
    config: &FigureConfig,
) -> Result<Figure, PlotError> {
    for trajectory in trajectories {
        trajectory.check_time(time)?;
    }

    let (mut figure, panels) = Figure::subplots(trajectories.len(), config);
    for (ax, trajectory) in panels.into_iter().zip(trajectories) {
        let (primary, _) = dual_axis_panel(&mut figure, ax, time, trajectory)?;
        figure.set_title(primary, &initial_p_title(trajectory))?;
    }

    figure.tight_layout();
    Ok(figure)
}

pub fn multi_trajectory_panel(
    time: &Array1<f64>,
    x1: &Trajectory,
    x2: &Trajectory,
    x3: &Trajectory,
    renderer: &mut dyn Renderer,
) -> Result<(), PlotError> {
    multi_trajectory_panel_with(time, x1, x2, x3, &FigureConfig::default(), renderer)
}

pub fn multi_trajectory_panel_with(
    time: &Array1<f64>,
    x1: &Trajectory,
    x2: &Trajectory,
    x3: &Trajectory,
    config: &FigureConfig,
    renderer: &mut dyn Renderer,
) -> Result<(), PlotError> {
    let figure = multi_trajectory_figure(time, [x1, x2, x3], config)?;
    show(renderer, &figure)
}

/// N(t) against P(t), optionally with the equilibrium overlay.
///
/// The overlay is not guarded against a zero nutrient level: infinities and
/// NaNs are drawn as whatever plotly makes of them.
pub fn phase_plane_figure(
    trajectory: &Trajectory,
    plot_equilibria: bool,
    params: &PhasePlaneParams,
) -> Result<Figure, PlotError> {
    let (mut figure, ax) = Figure::new();
    figure.plot(
        ax,
        trajectory.p().to_vec(),
        trajectory.n().to_vec(),
        LineStyle::default(),
    )?;
    figure.set_xlabel(ax, P_LABEL)?;
    figure.set_ylabel(ax, N_LABEL)?;

    if plot_equilibria {
        let model = EquilibriumModel::from_initial_nutrient(params, trajectory.initial_n());
        let (p_eq, n_eq) = model.nullcline(trajectory.n(), params.nullcline_domain);
        let level = model.horizontal_level();
        log::trace!("Equilibrium overlay: beta={} Q={} level={}", model.beta, model.q, level);

        let non_finite = p_eq.iter().filter(|v| !v.is_finite()).count();
        if non_finite > 0 || !level.is_finite() {
            log::warn!(
                "Equilibrium overlay contains {} non-finite nullcline point(s), level={} (N(0)={})",
                non_finite,
                level,
                trajectory.initial_n()
            );
        }

        figure.plot(ax, p_eq, n_eq, LineStyle::color(EQUILIBRIUM_COLOR))?;
        figure.axhline(ax, level, EQUILIBRIUM_COLOR)?;
    }

    figure.set_title(ax, PHASE_PLANE_TITLE)?;
    Ok(figure)
}

pub fn phase_plane_plot(
    trajectory: &Trajectory,
    plot_equilibria: bool,
    params: &PhasePlaneParams,
    renderer: &mut dyn Renderer,
) -> Result<(), PlotError> {
    let figure = phase_plane_figure(trajectory, plot_equilibria, params)?;
    show(renderer, &figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> (Trajectory, Array1<f64>) {
        let traj = Trajectory::new(array![[1.0, 2.0, 3.0], [5.0, 5.0, 5.0]]).unwrap();
        (traj, array![0.0, 1.0, 2.0])
    }

    #[test]
    fn initial_p_title_uses_display_formatting() {
        let traj = Trajectory::from_rows(vec![0.25, 1.0], vec![1.0, 1.0]).unwrap();
        assert_eq!(initial_p_title(&traj), "P(0) = 0.25");
        let whole = Trajectory::from_rows(vec![2.0], vec![1.0]).unwrap();
        assert_eq!(initial_p_title(&whole), "P(0) = 2");
    }

    #[test]
    fn single_figure_has_twin_axes_and_combined_legend() {
        let (traj, time) = sample();
        let fig = single_trajectory_figure(&traj, &time).unwrap();
        assert_eq!(fig.curves().len(), 2);
        assert!(fig.curves().iter().all(|c| c.in_legend));
        assert!(fig.shows_legend());
        let labels: Vec<_> = fig
            .curves()
            .iter()
            .map(|c| c.style.label.as_deref().unwrap())
            .collect();
        assert_eq!(labels, vec![P_LABEL, N_LABEL]);
        assert_ne!(fig.curves()[0].axes, fig.curves()[1].axes);
        assert_eq!(fig.curves()[0].axes.x_id(), fig.curves()[1].axes.x_id());
    }

    #[test]
    fn phase_plane_without_overlay_has_one_curve() {
        let (traj, _) = sample();
        let fig = phase_plane_figure(&traj, false, &PhasePlaneParams::default()).unwrap();
        assert_eq!(fig.curves().len(), 1);
        assert!(fig.hlines().is_empty());
        assert!(!fig.shows_legend());
    }
}
