// crates/retro-core/src/scene/defaults.rs

use crate::kinematics::body::OrbitingBody;
use crate::render::ViewConfig;
use crate::scene::scene::Scene;

pub const SCENE_VERSION: u16 = 1;

const DAYS_PER_YEAR: f64 = 365.25;

/// Mean orbital radius (AU) and sidereal period (days).
/// Mars is special-cased below to the rounded 1.88 y of the classic demo.
const PRESETS: &[(&str, f64, f64)] = &[
    ("mercury", 0.387, 87.97),
    ("venus", 0.723, 224.70),
    ("earth", 1.0, 365.25),
    ("mars", 1.524, 686.98),
    ("jupiter", 5.203, 4332.82),
    ("saturn", 9.537, 10759.0),
    ("uranus", 19.19, 30685.0),
    ("neptune", 30.07, 60190.0),
];

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(n, _, _)| *n)
}

/// Look up a planet by (case-insensitive) name.
pub fn preset(name: &str) -> Option<OrbitingBody> {
    let key = name.trim().to_ascii_lowercase();
    match key.as_str() {
        "earth" => return Some(earth()),
        "mars" => return Some(mars()),
        _ => {}
    }
    PRESETS
        .iter()
        .find(|(n, _, _)| *n == key)
        .map(|(n, r, days)| OrbitingBody::new(capitalize(n), *r, days / DAYS_PER_YEAR))
}

pub fn earth() -> OrbitingBody {
    OrbitingBody::new("Earth", 1.0, 1.0)
}

pub fn mars() -> OrbitingBody {
    OrbitingBody::new("Mars", 1.524, 1.88)
}

/// Mars seen from Earth over 30 years at 30 frames per year, ±3 AU view.
pub fn default_scene() -> Scene {
    Scene {
        version: SCENE_VERSION,
        reference: earth(),
        observed: mars(),
        duration: 30.0,
        frame_rate: 30.0,
        view: ViewConfig::default(),
    }
}

fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        Some(f) => f.to_ascii_uppercase().to_string() + c.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve() {
        for n in preset_names() {
            let b = preset(n).unwrap();
            assert!(b.orbital_radius() > 0.0 && b.orbital_period() > 0.0, "{n}");
        }
        assert_eq!(preset("MARS").unwrap(), mars());
        assert_eq!(preset(" Jupiter ").unwrap().name(), "Jupiter");
        assert!(preset("pluto").is_none());
    }
}
