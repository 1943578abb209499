use retro_core::analysis::{retrograde_spans, synodic_period, unwrapped_longitudes};
use retro_core::scene::defaults::{default_scene, earth, mars};
use retro_core::Sampler;

fn default_run() -> Sampler {
    let mut s = Sampler::new(default_scene()).unwrap();
    s.by_ref().for_each(drop);
    s
}

#[test]
fn mars_synodic_period() {
    let p = synodic_period(&earth(), &mars()).unwrap();
    assert!((p - 1.0 / (1.0 - 1.0 / 1.88)).abs() < 1e-12);
    assert!(synodic_period(&earth(), &earth()).is_none());
}

#[test]
fn mostly_prograde() {
    let s = default_run();
    let lon = unwrapped_longitudes(s.trajectory().points());
    assert_eq!(lon.len(), 900);
    assert!(lon[lon.len() - 1] > lon[0]);
}

#[test]
fn loops_recur_at_synodic_period() {
    let s = default_run();
    let dt = s.clock().time_step();
    let spans = retrograde_spans(s.trajectory().points(), dt);

    // t = 0 is an opposition, so the run opens mid-loop; 30 years hold 15 loops.
    assert_eq!(spans.len(), 15);
    assert_eq!(spans[0].start_frame, 0);
    assert_eq!(spans[14].end_frame, 899);

    let synodic = synodic_period(s.reference(), s.observed()).unwrap();
    let interior = &spans[1..spans.len() - 1];
    for pair in interior.windows(2) {
        let gap = pair[1].mid_t() - pair[0].mid_t();
        assert!((gap - synodic).abs() < 0.05, "gap {gap} vs synodic {synodic}");
    }
    for sp in interior {
        assert!(sp.swept > 0.2 && sp.swept < 0.35, "{sp:?}");
        assert!(sp.duration() > 0.1 && sp.duration() < 0.3, "{sp:?}");
    }
}
