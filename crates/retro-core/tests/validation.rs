use retro_core::scene::defaults::default_scene;
use retro_core::{OrbitingBody, RetroError, Sampler};

fn rejects(scene: retro_core::Scene, needle: &str) {
    match Sampler::new(scene) {
        Err(RetroError::Validation(msg)) => assert!(msg.contains(needle), "{msg}"),
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("scene with bad {needle} was accepted"),
    }
}

#[test]
fn default_scene_is_valid() {
    assert!(Sampler::new(default_scene()).is_ok());
}

#[test]
fn non_positive_body_parameters() {
    let mut s = default_scene();
    s.observed = OrbitingBody::new("Mars", 1.524, 0.0);
    rejects(s, "period");

    let mut s = default_scene();
    s.reference = OrbitingBody::new("Earth", -1.0, 1.0);
    rejects(s, "radius");

    let mut s = default_scene();
    s.observed = OrbitingBody::new("Mars", f64::NAN, 1.88);
    rejects(s, "radius");
}

#[test]
fn clock_parameters() {
    let mut s = default_scene();
    s.duration = 0.0;
    rejects(s, "duration");

    let mut s = default_scene();
    s.frame_rate = -30.0;
    rejects(s, "frame rate");

    let mut s = default_scene();
    s.duration = 0.01;
    s.frame_rate = 1.0;
    rejects(s, "zero frames");
}

#[test]
fn view_ranges() {
    let mut s = default_scene();
    s.view.x_range = (3.0, -3.0);
    rejects(s, "x range");

    let mut s = default_scene();
    s.view.y_range = (1.0, 1.0);
    rejects(s, "y range");
}
