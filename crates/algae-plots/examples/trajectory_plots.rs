use algae_plots::render::HtmlFileRenderer;
use algae_plots::{
    multi_trajectory_panel, phase_plane_plot, single_trajectory_plot, PhasePlaneParams, Trajectory,
};
use anyhow::Result;
use ndarray::{array, Array1};

fn main() -> Result<()> {
    env_logger::init();

    // Hand-written samples of a decaying bloom; any solver output works the same way
    let time: Array1<f64> = array![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
    let low = Trajectory::new(array![
        [0.5, 0.9, 1.4, 1.7, 1.6, 1.3],
        [5.0, 4.6, 3.9, 3.1, 2.6, 2.4]
    ])?;
    let mid = Trajectory::new(array![
        [1.0, 1.8, 2.4, 2.2, 1.7, 1.3],
        [5.0, 4.1, 3.0, 2.3, 2.0, 1.9]
    ])?;
    let high = Trajectory::new(array![
        [2.0, 2.9, 2.6, 1.9, 1.4, 1.1],
        [5.0, 3.4, 2.2, 1.8, 1.7, 1.7]
    ])?;

    let out_dir = std::env::temp_dir();

    let mut renderer = HtmlFileRenderer::new(out_dir.join("algae_time_plot.html"));
    single_trajectory_plot(&mid, &time, &mut renderer)?;

    let mut renderer = HtmlFileRenderer::new(out_dir.join("algae_multi_panel.html"));
    multi_trajectory_panel(&time, &low, &mid, &high, &mut renderer)?;

    let mut renderer = HtmlFileRenderer::new(out_dir.join("algae_phase_plane.html"));
    phase_plane_plot(&mid, true, &PhasePlaneParams::default(), &mut renderer)?;

    println!("Figures written to {}", out_dir.display());
    Ok(())
}
