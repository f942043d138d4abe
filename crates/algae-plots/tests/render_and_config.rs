//! Integration tests for render backends and parameter configuration.

use algae_plots::render::HtmlFileRenderer;
use algae_plots::{
    build_renderer, phase_plane_plot, single_trajectory_plot, FigureConfig, NullclineDomain,
    PhasePlaneParams, PlotError, RenderTarget, Trajectory,
};
use ndarray::array;

fn trajectory() -> Trajectory {
    Trajectory::new(array![[1.0, 2.0, 3.0], [5.0, 5.0, 5.0]]).unwrap()
}

// ---------------------------------------------------------------------------
// HTML backend
// ---------------------------------------------------------------------------

#[test]
fn html_renderer_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("time_plot.html");
    let mut renderer = HtmlFileRenderer::new(path.clone());
    single_trajectory_plot(&trajectory(), &array![0.0, 1.0, 2.0], &mut renderer).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("Algae Biomass and Nutritional Density Over Time"));
}

#[test]
fn html_renderer_missing_directory_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("phase.html");
    let mut renderer = HtmlFileRenderer::new(path);
    let err = phase_plane_plot(&trajectory(), true, &PhasePlaneParams::default(), &mut renderer)
        .unwrap_err();
    assert!(matches!(err, PlotError::Io(_)));
}

#[test]
fn html_renderer_directory_path_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut renderer = HtmlFileRenderer::new(dir.path());
    let err = single_trajectory_plot(&trajectory(), &array![0.0, 1.0, 2.0], &mut renderer)
        .unwrap_err();
    assert!(matches!(err, PlotError::Io(_)));
    assert!(dir.path().is_dir());
}

#[test]
fn boxed_renderer_from_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("phase.html");
    let target: RenderTarget = format!("html:{}", path.display()).parse().unwrap();
    let mut renderer = build_renderer(target);
    phase_plane_plot(&trajectory(), false, &PhasePlaneParams::default(), renderer.as_mut())
        .unwrap();
    assert!(path.exists());
}

// ---------------------------------------------------------------------------
// PhasePlaneParams / FigureConfig
// ---------------------------------------------------------------------------

#[test]
fn phase_plane_params_defaults() {
    let params = PhasePlaneParams::default();
    assert_eq!(params.alpha, 0.0);
    assert_eq!(params.rho, 1e-3);
    assert_eq!(params.gamma, 0.0);
    assert_eq!(params.sigma, 0.1);
    assert_eq!(params.beta_n0, 0.1);
    assert_eq!(params.q_n0, 7.5e-3);
    assert_eq!(params.nullcline_domain, NullclineDomain::TrajectorySamples);
}

#[test]
fn phase_plane_params_deserialize_without_domain() {
    let json = r#"{"alpha": 0.0, "rho": 0.002, "gamma": 0.01, "sigma": 0.2, "betaN0": 0.1, "QN0": 0.0075}"#;
    let params: PhasePlaneParams = serde_json::from_str(json).unwrap();
    assert_eq!(params.rho, 0.002);
    assert_eq!(params.gamma, 0.01);
    assert_eq!(params.nullcline_domain, NullclineDomain::TrajectorySamples);
}

#[test]
fn phase_plane_params_serialize_model_names() {
    let json = serde_json::to_string_pretty(&PhasePlaneParams::default()).unwrap();
    assert!(json.contains("betaN0"));
    assert!(json.contains("QN0"));
    assert!(json.contains("nullcline_domain"));
}

#[test]
fn figure_config_default_is_ten_by_three() {
    let cfg = FigureConfig::default();
    assert_eq!((cfg.width, cfg.height), (1000, 300));
    assert!(cfg.horizontal_spacing > 0.0 && cfg.horizontal_spacing < 1.0);
}
