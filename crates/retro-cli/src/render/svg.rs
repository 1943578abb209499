// crates/retro-cli/src/render/svg.rs

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use retro_core::{FrameRenderer, FrameState, Vec2, ViewConfig};

use crate::render::sync_trace;

const SIZE: f64 = 600.0;
const MARGIN: f64 = 60.0;

/// Writes one static figure of the finished run on `finish()`.
pub struct SvgRenderer {
    path: PathBuf,
    reference_name: String,
    observed_name: String,
    view: ViewConfig,
    trace: Vec<Vec2>,
}

impl SvgRenderer {
    pub fn new(path: impl Into<PathBuf>, reference_name: &str, observed_name: &str) -> Self {
        Self {
            path: path.into(),
            reference_name: reference_name.to_string(),
            observed_name: observed_name.to_string(),
            view: ViewConfig::default(),
            trace: Vec::new(),
        }
    }
}

impl FrameRenderer for SvgRenderer {
    type Error = anyhow::Error;

    fn setup(&mut self, view: &ViewConfig) -> anyhow::Result<()> {
        self.view = view.clone();
        self.trace.clear();
        Ok(())
    }

    fn render_frame(&mut self, _frame: &FrameState, trace: &[Vec2]) -> anyhow::Result<()> {
        sync_trace(&mut self.trace, trace);
        Ok(())
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        let doc = render_svg(&self.view, &self.trace, &self.reference_name, &self.observed_name);
        std::fs::write(&self.path, doc).with_context(|| format!("write svg: {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), points = self.trace.len(), "svg written");
        Ok(())
    }
}

struct Axes {
    x_range: (f64, f64),
    y_range: (f64, f64),
}

impl Axes {
    fn px(&self, x: f64) -> f64 {
        MARGIN + (x - self.x_range.0) / (self.x_range.1 - self.x_range.0) * (SIZE - 2.0 * MARGIN)
    }

    fn py(&self, y: f64) -> f64 {
        MARGIN + (self.y_range.1 - y) / (self.y_range.1 - self.y_range.0) * (SIZE - 2.0 * MARGIN)
    }
}

/// Full SVG document: axes box and grid from the view, reference body fixed
/// at the origin, the trace polyline and the last observed point.
pub fn render_svg(view: &ViewConfig, trace: &[Vec2], reference_name: &str, observed_name: &str) -> String {
    let f = Axes {
        x_range: view.x_range,
        y_range: view.y_range,
    };
    let lo = MARGIN;
    let hi = SIZE - MARGIN;
    let mut s = String::with_capacity(4096 + trace.len() * 24);

    // fmt::Write into a String cannot fail.
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}">"#
    );
    let _ = writeln!(s, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        s,
        r#"<defs><clipPath id="plot"><rect x="{lo}" y="{lo}" width="{w}" height="{w}"/></clipPath></defs>"#,
        w = hi - lo
    );

    // grid + tick labels
    let _ = writeln!(s, r##"<g stroke="#dddddd" stroke-width="1">"##);
    for x in ticks(view.x_range) {
        let _ = writeln!(s, r#"<line x1="{0:.2}" y1="{lo}" x2="{0:.2}" y2="{hi}"/>"#, f.px(x));
    }
    for y in ticks(view.y_range) {
        let _ = writeln!(s, r#"<line x1="{lo}" y1="{0:.2}" x2="{hi}" y2="{0:.2}"/>"#, f.py(y));
    }
    let _ = writeln!(s, "</g>");
    let _ = writeln!(s, r#"<g font-family="sans-serif" font-size="11" fill="black">"#);
    for x in ticks(view.x_range) {
        let _ = writeln!(
            s,
            r#"<text x="{:.2}" y="{}" text-anchor="middle">{}</text>"#,
            f.px(x),
            hi + 16.0,
            tick_label(x)
        );
    }
    for y in ticks(view.y_range) {
        let _ = writeln!(
            s,
            r#"<text x="{}" y="{:.2}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            lo - 6.0,
            f.py(y),
            tick_label(y)
        );
    }
    let _ = writeln!(s, "</g>");
    let _ = writeln!(
        s,
        r#"<rect x="{lo}" y="{lo}" width="{w}" height="{w}" fill="none" stroke="black"/>"#,
        w = hi - lo
    );

    // title + axis labels
    let _ = writeln!(
        s,
        r#"<text x="{}" y="{}" font-family="sans-serif" font-size="15" text-anchor="middle">{}</text>"#,
        SIZE / 2.0,
        MARGIN / 2.0,
        escape(&view.title)
    );
    let _ = writeln!(
        s,
        r#"<text x="{}" y="{}" font-family="sans-serif" font-size="13" text-anchor="middle">{}</text>"#,
        SIZE / 2.0,
        SIZE - 14.0,
        escape(&view.x_label)
    );
    let _ = writeln!(
        s,
        r#"<text x="16" y="{0}" font-family="sans-serif" font-size="13" text-anchor="middle" transform="rotate(-90 16 {0})">{1}</text>"#,
        SIZE / 2.0,
        escape(&view.y_label)
    );

    // trace, observed point, reference body
    let _ = writeln!(s, r#"<g clip-path="url(#plot)">"#);
    if trace.len() > 1 {
        let _ = write!(s, r#"<polyline fill="none" stroke="red" stroke-width="1" points=""#);
        for (k, p) in trace.iter().enumerate() {
            if k > 0 {
                s.push(' ');
            }
            let _ = write!(s, "{:.2},{:.2}", f.px(p.x), f.py(p.y));
        }
        let _ = writeln!(s, r#""/>"#);
    }
    if let Some(p) = trace.last() {
        let _ = writeln!(
            s,
            r#"<circle cx="{:.2}" cy="{:.2}" r="5" fill="red"/>"#,
            f.px(p.x),
            f.py(p.y)
        );
    }
    let _ = writeln!(
        s,
        r#"<circle cx="{:.2}" cy="{:.2}" r="7" fill="blue"/>"#,
        f.px(0.0),
        f.py(0.0)
    );
    let _ = writeln!(s, "</g>");

    // legend
    let _ = writeln!(
        s,
        r##"<g font-family="sans-serif" font-size="12"><rect x="{0}" y="{1}" width="130" height="44" fill="white" stroke="#999999"/><circle cx="{2}" cy="{3}" r="6" fill="blue"/><text x="{4}" y="{5}">{6} (fixed)</text><circle cx="{2}" cy="{7}" r="5" fill="red"/><text x="{4}" y="{8}">{9}</text></g>"##,
        hi - 140.0,
        lo + 10.0,
        hi - 128.0,
        lo + 22.0,
        hi - 116.0,
        lo + 26.0,
        escape(reference_name),
        lo + 42.0,
        lo + 46.0,
        escape(observed_name)
    );

    let _ = writeln!(s, "</svg>");
    s
}

/// Tick positions at a 1-2-5 step giving roughly six intervals.
fn ticks(range: (f64, f64)) -> Vec<f64> {
    let (a, b) = range;
    let raw = (b - a) / 6.0;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|st| *st >= raw)
        .unwrap_or(10.0 * mag);

    let mut out = Vec::new();
    let mut v = (a / step).ceil() * step;
    while v <= b + step * 1e-9 {
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        v += step;
    }
    out
}

fn tick_label(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
