use crate::error::{Result, RetroError};
use crate::kinematics::{body::OrbitingBody, clock::frame_count_for};
use crate::render::ViewConfig;
use crate::scene::scene::Scene;

pub fn validate_scene(s: &Scene) -> Result<()> {
    validate_body(&s.reference)?;
    validate_body(&s.observed)?;
    validate_clock(s.duration, s.frame_rate)?;
    validate_view(&s.view)?;
    Ok(())
}

pub fn validate_body(b: &OrbitingBody) -> Result<()> {
    if !positive(b.orbital_radius()) {
        return Err(RetroError::Validation(format!(
            "{}: orbital radius must be finite and > 0 (got {})",
            b.name(),
            b.orbital_radius()
        )));
    }
    // Period is the divisor of the angular velocity.
    if !positive(b.orbital_period()) {
        return Err(RetroError::Validation(format!(
            "{}: orbital period must be finite and > 0 (got {})",
            b.name(),
            b.orbital_period()
        )));
    }
    Ok(())
}

pub fn validate_clock(duration: f64, frame_rate: f64) -> Result<()> {
    if !positive(duration) {
        return Err(RetroError::Validation(format!(
            "duration must be finite and > 0 (got {duration})"
        )));
    }
    if !positive(frame_rate) {
        return Err(RetroError::Validation(format!(
            "frame rate must be finite and > 0 (got {frame_rate})"
        )));
    }
    if frame_count_for(duration, frame_rate) == 0 {
        return Err(RetroError::Validation(format!(
            "duration * frame_rate rounds to zero frames ({duration} * {frame_rate})"
        )));
    }
    Ok(())
}

pub fn validate_view(v: &ViewConfig) -> Result<()> {
    let (x0, x1) = v.x_range;
    let (y0, y1) = v.y_range;
    if !(x0.is_finite() && x1.is_finite() && x0 < x1) {
        return Err(RetroError::Validation("view x range must satisfy min < max".into()));
    }
    if !(y0.is_finite() && y1.is_finite() && y0 < y1) {
        return Err(RetroError::Validation("view y range must satisfy min < max".into()));
    }
    Ok(())
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
