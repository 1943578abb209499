// crates/retro-core/src/scene/format.rs

use crate::error::{Result, RetroError};
use crate::kinematics::body::OrbitingBody;
use crate::render::ViewConfig;
use crate::scene::checksum::{blake3_16, crc32, hex16};
use crate::scene::scene::Scene;

const MAGIC: &[u8; 4] = b"RSC1";

/// Binary scene format (little-endian):
/// MAGIC[4]
/// version:u16
/// clock: duration:f64 frame_rate:f64
/// reference: radius:f64 period:f64 name:str
/// observed:  radius:f64 period:f64 name:str
/// view: x0:f64 x1:f64 y0:f64 y1:f64 title:str x_label:str y_label:str
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
///
/// str = len:u16 + utf8 bytes (truncated to u16::MAX bytes on a char boundary).
pub fn encode(s: &Scene) -> Vec<u8> {
    let mut b = Vec::with_capacity(128);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&s.version.to_le_bytes());

    b.extend_from_slice(&s.duration.to_le_bytes());
    b.extend_from_slice(&s.frame_rate.to_le_bytes());

    put_body(&mut b, &s.reference);
    put_body(&mut b, &s.observed);

    b.extend_from_slice(&s.view.x_range.0.to_le_bytes());
    b.extend_from_slice(&s.view.x_range.1.to_le_bytes());
    b.extend_from_slice(&s.view.y_range.0.to_le_bytes());
    b.extend_from_slice(&s.view.y_range.1.to_le_bytes());
    put_str(&mut b, &s.view.title);
    put_str(&mut b, &s.view.x_label);
    put_str(&mut b, &s.view.y_label);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);

    b
}

/// Decode and verify (magic, crc32, blake3_16). Does not validate ranges;
/// `Sampler::new` does.
pub fn decode(bytes: &[u8]) -> Result<Scene> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(RetroError::SceneFormat("bad magic".into()));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version == 0 {
        return Err(RetroError::SceneFormat("version 0 is not a valid scene".into()));
    }

    let duration = read_f64(bytes, &mut i)?;
    let frame_rate = read_f64(bytes, &mut i)?;

    let reference = read_body(bytes, &mut i)?;
    let observed = read_body(bytes, &mut i)?;

    let x0 = read_f64(bytes, &mut i)?;
    let x1 = read_f64(bytes, &mut i)?;
    let y0 = read_f64(bytes, &mut i)?;
    let y1 = read_f64(bytes, &mut i)?;
    let title = read_str(bytes, &mut i)?;
    let x_label = read_str(bytes, &mut i)?;
    let y_label = read_str(bytes, &mut i)?;

    let crc_expected = read_u32(bytes, &mut i)?;
    let crc_actual = crc32(&bytes[0..(i - 4)]);
    if crc_expected != crc_actual {
        return Err(RetroError::SceneFormat("crc32 mismatch".into()));
    }

    if bytes.len() < i + 16 {
        return Err(RetroError::SceneFormat("missing blake3".into()));
    }
    let mut h_expected = [0u8; 16];
    h_expected.copy_from_slice(&bytes[i..i + 16]);
    if h_expected != blake3_16(&bytes[0..i]) {
        return Err(RetroError::SceneFormat("blake3 mismatch".into()));
    }
    if bytes.len() != i + 16 {
        return Err(RetroError::SceneFormat("trailing bytes after scene".into()));
    }

    Ok(Scene {
        version,
        reference,
        observed,
        duration,
        frame_rate,
        view: ViewConfig {
            x_range: (x0, x1),
            y_range: (y0, y1),
            x_label,
            y_label,
            title,
        },
    })
}

/// Stable scene identifier: the trailing blake3_16 that `encode()` appends.
pub fn scene_id_16(s: &Scene) -> [u8; 16] {
    let enc = encode(s);
    let mut out = [0u8; 16];
    out.copy_from_slice(&enc[enc.len() - 16..]);
    out
}

pub fn scene_id_hex(s: &Scene) -> String {
    hex16(&scene_id_16(s))
}

pub fn scene_id_16_from_encoded(encoded: &[u8]) -> Result<[u8; 16]> {
    if encoded.len() < 16 {
        return Err(RetroError::SceneFormat("encoded scene too small for id".into()));
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&encoded[encoded.len() - 16..]);
    Ok(out)
}

fn put_body(b: &mut Vec<u8>, body: &OrbitingBody) {
    b.extend_from_slice(&body.orbital_radius().to_le_bytes());
    b.extend_from_slice(&body.orbital_period().to_le_bytes());
    put_str(b, body.name());
}

fn put_str(b: &mut Vec<u8>, s: &str) {
    let mut end = s.len().min(u16::MAX as usize);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    b.extend_from_slice(&(end as u16).to_le_bytes());
    b.extend_from_slice(&s.as_bytes()[..end]);
}

fn read_body(bytes: &[u8], i: &mut usize) -> Result<OrbitingBody> {
    let radius = read_f64(bytes, i)?;
    let period = read_f64(bytes, i)?;
    let name = read_str(bytes, i)?;
    Ok(OrbitingBody::new(name, radius, period))
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(RetroError::SceneFormat("unexpected eof".into()));
    }
    Ok(())
}

fn take<const N: usize>(bytes: &[u8], i: &mut usize) -> Result<[u8; N]> {
    need(bytes, *i, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[*i..*i + N]);
    *i += N;
    Ok(out)
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    Ok(u16::from_le_bytes(take(bytes, i)?))
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    Ok(u32::from_le_bytes(take(bytes, i)?))
}

fn read_f64(bytes: &[u8], i: &mut usize) -> Result<f64> {
    Ok(f64::from_le_bytes(take(bytes, i)?))
}

fn read_str(bytes: &[u8], i: &mut usize) -> Result<String> {
    let len = read_u16(bytes, i)? as usize;
    need(bytes, *i, len)?;
    let s = std::str::from_utf8(&bytes[*i..*i + len])
        .map_err(|_| RetroError::SceneFormat("string is not utf8".into()))?
        .to_string();
    *i += len;
    Ok(s)
}
