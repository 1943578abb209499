use retro_core::scene::defaults::default_scene;
use retro_core::{FrameRenderer, FrameState, Sampler, Scene, Vec2, ViewConfig};

#[derive(Default)]
struct Recorder {
    setups: Vec<String>,
    frames: Vec<(u64, usize, Vec2)>,
    finished: usize,
    stop_after: Option<usize>,
    fail_at: Option<u64>,
}

impl FrameRenderer for Recorder {
    type Error = String;

    fn setup(&mut self, view: &ViewConfig) -> Result<(), String> {
        self.setups.push(view.title.clone());
        Ok(())
    }

    fn render_frame(&mut self, frame: &FrameState, trace: &[Vec2]) -> Result<(), String> {
        if self.fail_at == Some(frame.index) {
            return Err(format!("boom at {}", frame.index));
        }
        assert_eq!(trace.last(), Some(&frame.relative));
        self.frames.push((frame.index, trace.len(), frame.relative));
        Ok(())
    }

    fn should_stop(&self) -> bool {
        self.stop_after.map_or(false, |n| self.frames.len() >= n)
    }

    fn finish(&mut self) -> Result<(), String> {
        self.finished += 1;
        Ok(())
    }
}

fn small() -> Scene {
    let mut s = default_scene();
    s.duration = 1.0;
    s.frame_rate = 12.0;
    s
}

#[test]
fn drive_renders_every_frame_in_order() {
    let mut s = Sampler::new(small()).unwrap();
    let mut r = Recorder::default();
    let n = s.drive(&mut r).unwrap();

    assert_eq!(n, 12);
    assert_eq!(r.setups, vec![default_scene().view.title]);
    assert_eq!(r.finished, 1);
    for (k, (idx, len, _)) in r.frames.iter().enumerate() {
        assert_eq!(*idx, k as u64);
        assert_eq!(*len, k + 1);
    }
    assert!(s.is_finished());
}

#[test]
fn drive_stops_when_renderer_asks() {
    let mut s = Sampler::new(small()).unwrap();
    let mut r = Recorder {
        stop_after: Some(4),
        ..Default::default()
    };
    assert_eq!(s.drive(&mut r).unwrap(), 4);
    assert_eq!(r.finished, 1);
    assert_eq!(s.trajectory().len(), 4);
    assert!(!s.is_finished());
}

#[test]
fn drive_propagates_render_errors() {
    let mut s = Sampler::new(small()).unwrap();
    let mut r = Recorder {
        fail_at: Some(3),
        ..Default::default()
    };
    let err = s.drive(&mut r).unwrap_err();
    assert_eq!(err, "boom at 3");
    assert_eq!(r.frames.len(), 3);
    assert_eq!(r.finished, 0);
}
