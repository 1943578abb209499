// crates/retro-cli/src/io/rtr.rs

use anyhow::Context;
use retro_core::{RetroError, Vec2};

const MAGIC: &[u8; 4] = b"RTR1";
const FLAG_ZSTD: u8 = 0x01;

/// A decoded trajectory dump.
#[derive(Clone, Debug, PartialEq)]
pub struct RtrFile {
    pub scene_id: [u8; 16],
    pub time_step: f64,
    pub points: Vec<Vec2>,
}

/// .rtr layout (little-endian):
/// MAGIC[4]
/// scene_id[16]               (trailing blake3_16 of the RSC1 scene encoding)
/// time_step:f64
/// flags:u8                   (bit0 = payload is zstd)
/// count:u64                  (number of points)
/// payload_len:u64
/// payload[payload_len]       (count x (x:f64 y:f64), maybe zstd-compressed)
/// crc32:u32                  (over everything before crc32)
pub fn encode_rtr(
    scene_id: &[u8; 16],
    time_step: f64,
    points: &[Vec2],
    zstd_level: Option<i32>,
) -> anyhow::Result<Vec<u8>> {
    let mut raw = Vec::with_capacity(points.len() * 16);
    for p in points {
        raw.extend_from_slice(&p.x.to_le_bytes());
        raw.extend_from_slice(&p.y.to_le_bytes());
    }

    let (flags, payload) = match zstd_level {
        Some(level) => (FLAG_ZSTD, zstd::encode_all(&raw[..], level).context("zstd compress")?),
        None => (0u8, raw),
    };

    let mut out = Vec::with_capacity(4 + 16 + 8 + 1 + 8 + 8 + payload.len() + 4);
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(scene_id);
    out.extend_from_slice(&time_step.to_le_bytes());
    out.push(flags);
    out.extend_from_slice(&(points.len() as u64).to_le_bytes());
    out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    out.extend_from_slice(&payload);

    let crc = crc32(&out);
    out.extend_from_slice(&crc.to_le_bytes());
    Ok(out)
}

pub fn decode_rtr(bytes: &[u8]) -> retro_core::Result<RtrFile> {
    if bytes.len() < 4 + 16 + 8 + 1 + 8 + 8 + 4 {
        return Err(bad("rtr too small"));
    }
    if &bytes[0..4] != MAGIC {
        return Err(bad("bad rtr magic"));
    }

    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes(arr(&bytes[crc_off..]));
    if crc_expected != crc32(&bytes[..crc_off]) {
        return Err(bad("rtr crc32 mismatch"));
    }

    let mut i = 4usize;
    let scene_id: [u8; 16] = arr(&bytes[i..i + 16]);
    i += 16;
    let time_step = f64::from_le_bytes(arr(&bytes[i..i + 8]));
    i += 8;
    let flags = bytes[i];
    i += 1;
    if flags & !FLAG_ZSTD != 0 {
        return Err(bad(format!("unknown rtr flags {flags:#04x}")));
    }
    let count = u64::from_le_bytes(arr(&bytes[i..i + 8])) as usize;
    i += 8;
    let payload_len = u64::from_le_bytes(arr(&bytes[i..i + 8])) as usize;
    i += 8;
    if i.checked_add(payload_len) != Some(crc_off) {
        return Err(bad("rtr payload_len mismatch"));
    }

    let payload = &bytes[i..crc_off];
    let raw = if flags & FLAG_ZSTD != 0 {
        zstd::decode_all(payload).map_err(|e| bad(format!("zstd decompress: {e}")))?
    } else {
        payload.to_vec()
    };
    if count.checked_mul(16) != Some(raw.len()) {
        return Err(bad(format!("rtr point count mismatch (count={count} bytes={})", raw.len())));
    }

    let points = raw
        .chunks_exact(16)
        .map(|c| Vec2::new(f64::from_le_bytes(arr(&c[0..8])), f64::from_le_bytes(arr(&c[8..16]))))
        .collect();

    Ok(RtrFile {
        scene_id,
        time_step,
        points,
    })
}

pub fn write_rtr(
    path: &str,
    scene_id: &[u8; 16],
    time_step: f64,
    points: &[Vec2],
    zstd_level: Option<i32>,
) -> anyhow::Result<()> {
    let bytes = encode_rtr(scene_id, time_step, points, zstd_level)?;
    std::fs::write(path, bytes).with_context(|| format!("write rtr: {path}"))?;
    Ok(())
}

pub fn read_rtr(path: &str) -> anyhow::Result<RtrFile> {
    let bytes = std::fs::read(path).with_context(|| format!("read {path}"))?;
    decode_rtr(&bytes).with_context(|| format!("decode rtr {path}"))
}

fn bad(msg: impl Into<String>) -> RetroError {
    RetroError::TrajectoryFormat(msg.into())
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

// Callers slice exactly N bytes.
fn arr<const N: usize>(s: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(s);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts() -> Vec<Vec2> {
        (0..50).map(|i| Vec2::polar(1.0 + i as f64 * 0.01, i as f64 * 0.1)).collect()
    }

    #[test]
    fn plain_and_zstd_decode_to_same_points() {
        let id = [7u8; 16];
        for level in [None, Some(3)] {
            let enc = encode_rtr(&id, 0.25, &pts(), level).unwrap();
            let f = decode_rtr(&enc).unwrap();
            assert_eq!(f.scene_id, id);
            assert_eq!(f.time_step, 0.25);
            assert_eq!(f.points, pts());
        }
    }

    #[test]
    fn flipped_byte_fails_crc() {
        let mut enc = encode_rtr(&[0u8; 16], 0.1, &pts(), None).unwrap();
        let mid = enc.len() / 2;
        enc[mid] ^= 0xff;
        let err = decode_rtr(&enc).unwrap_err();
        assert!(matches!(err, RetroError::TrajectoryFormat(_)));
        assert!(err.to_string().contains("crc32"));
    }

    #[test]
    fn foreign_and_truncated_input_is_a_format_error() {
        assert!(matches!(decode_rtr(&[b'R'; 64]), Err(RetroError::TrajectoryFormat(m)) if m.contains("magic")));
        assert!(matches!(decode_rtr(b"RTR1"), Err(RetroError::TrajectoryFormat(m)) if m.contains("too small")));
    }

    #[test]
    fn empty_trajectory() {
        let enc = encode_rtr(&[1u8; 16], 1.0, &[], Some(1)).unwrap();
        assert!(decode_rtr(&enc).unwrap().points.is_empty());
    }
}
