use horizon_app::platform::PlatformDirs;
use horizon_app::run_headless;
use horizon_config::{ArcSchedule, Config};

#[test]
fn default_scene_counts() {
    let summary = run_headless(&Config::default(), 1).unwrap();
    // Horizon, photon ring and 24 arcs.
    assert_eq!(summary.nodes, 26);
    assert_eq!(summary.particle_effects, 2);

    let sphere_vertices = 31 * 31;
    let ring_vertices = 2 * 500 - 2;
    let arc_vertices = 24 * (2 * 500 - 2);
    assert_eq!(summary.vertices, sphere_vertices + ring_vertices + arc_vertices);
}

#[test]
fn full_turn_wraps_to_zero() {
    let summary = run_headless(&Config::default(), 36).unwrap();
    assert_eq!(summary.updates, 36);
    assert!(summary.horizon_rotation.y.abs() < 1e-9);
    assert_eq!(summary.transform_updates, 36);
}

#[test]
fn unwrapped_angles_keep_growing() {
    let mut config = Config::default();
    config.animation.wrap_angles = false;
    let summary = run_headless(&config, 40).unwrap();
    assert!((summary.horizon_rotation.y - 400.0).abs() < 1e-9);
}

#[test]
fn particles_and_arcs_can_be_disabled() {
    let mut config = Config::default();
    config.particles.enabled = false;
    config.arcs.count = 0;
    let summary = run_headless(&config, 3).unwrap();
    assert_eq!(summary.nodes, 2);
    assert_eq!(summary.particle_effects, 0);
}

#[test]
fn runs_are_deterministic() {
    let mut config = Config::default();
    config.arcs.schedule = ArcSchedule::SquaredRamp;
    config.animation.spin_degrees_per_tick = 7.5;
    let a = run_headless(&config, 100).unwrap();
    let b = run_headless(&config, 100).unwrap();
    assert_eq!(a, b);
}

#[test]
fn config_round_trips_through_platform_dirs() {
    let tmp = tempfile::tempdir().unwrap();
    let dirs = PlatformDirs::resolve_with_root(tmp.path());
    dirs.create_all().unwrap();

    let mut config = Config::load_or_create(&dirs.config_dir).unwrap();
    config.arcs.count = 4;
    config.save(&dirs.config_dir).unwrap();

    let loaded = Config::load_or_create(&dirs.config_dir).unwrap();
    let summary = run_headless(&loaded, 2).unwrap();
    assert_eq!(summary.nodes, 6);
}
