// crates/retro-core/src/analysis/mod.rs
//
// Retrograde detection on a sampled trajectory.
//
// The apparent longitude of the observed body is atan2(y, x) of its
// relative position. Unwrapped across frames it mostly increases (prograde);
// the observed body is retrograde wherever it decreases. Between two frames
// the longitude is assumed to move by less than half a turn, so the step is
// folded into (-π, π] before accumulating.

use std::f64::consts::{PI, TAU};

use crate::kinematics::{body::OrbitingBody, vec2::Vec2};

/// One maximal run of decreasing apparent longitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetroSpan {
    /// Last prograde frame before the turn-around.
    pub start_frame: usize,
    /// Last frame of the decreasing run.
    pub end_frame: usize,
    pub start_t: f64,
    pub end_t: f64,
    /// Longitude swept backwards, radians (> 0).
    pub swept: f64,
}

impl RetroSpan {
    pub fn mid_t(&self) -> f64 {
        0.5 * (self.start_t + self.end_t)
    }

    pub fn duration(&self) -> f64 {
        self.end_t - self.start_t
    }
}

pub fn apparent_longitude(p: Vec2) -> f64 {
    p.angle()
}

/// Continuous apparent longitude, starting at `atan2` of the first point.
pub fn unwrapped_longitudes(points: &[Vec2]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len());
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return out;
    };

    let mut acc = apparent_longitude(*first);
    let mut prev = acc;
    out.push(acc);
    for p in iter {
        let a = apparent_longitude(*p);
        acc += fold_half_turn(a - prev);
        prev = a;
        out.push(acc);
    }
    out
}

/// Maximal decreasing runs of the unwrapped longitude.
///
/// A run still open at the last frame is closed there.
pub fn retrograde_spans(points: &[Vec2], time_step: f64) -> Vec<RetroSpan> {
    let lon = unwrapped_longitudes(points);
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    let close = |start: usize, end: usize, spans: &mut Vec<RetroSpan>| {
        spans.push(RetroSpan {
            start_frame: start,
            end_frame: end,
            start_t: start as f64 * time_step,
            end_t: end as f64 * time_step,
            swept: lon[start] - lon[end],
        });
    };

    for i in 1..lon.len() {
        let decreasing = lon[i] < lon[i - 1];
        match (decreasing, open) {
            (true, None) => open = Some(i - 1),
            (false, Some(start)) => {
                close(start, i - 1, &mut spans);
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        close(start, lon.len() - 1, &mut spans);
    }
    spans
}

/// Time between successive alignments of the two bodies, in years.
/// `None` when both share the same period (they never realign).
pub fn synodic_period(reference: &OrbitingBody, observed: &OrbitingBody) -> Option<f64> {
    let d = (1.0 / reference.orbital_period() - 1.0 / observed.orbital_period()).abs();
    if d == 0.0 || !d.is_finite() {
        None
    } else {
        Some(1.0 / d)
    }
}

fn fold_half_turn(d: f64) -> f64 {
    let r = (d + PI).rem_euclid(TAU) - PI;
    // rem_euclid maps +π to -π; keep +π.
    if r == -PI && d > 0.0 {
        PI
    } else {
        r
    }
}
