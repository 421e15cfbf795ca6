//! Sector record codec — the only module that knows byte offsets.
//!
//! A sector record is an arbitrary-length binary blob; this module reads and
//! mutates a sparse set of fixed fields inside it and leaves every other byte
//! alone.  The layout is frozen by the consuming engine:
//!
//! | field        | offset        | encoding                      |
//! |--------------|---------------|-------------------------------|
//! | identity     | `0x14`        | raw byte, per-sector tag      |
//! | fix marker   | `0x21..0x27`  | constant `C0 E4 40 FF FF FF`  |
//! | water height | `0xB0..0xB4`  | f32 little-endian, meters     |
//! | water path   | `0xB9..0x1C0` | ASCII, NUL-terminated/padded  |
//!
//! # Decode policy
//! Reads never fail: a buffer too short for a field yields that field's
//! default (`0.0` height, `"00"` path), and non-ASCII path bytes are dropped.
//! Writes zero-extend the buffer to reach any offset they touch and never
//! truncate it.
//!
//! Persistence is the caller's job — see [`crate::store`].

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::template::WATER_BLOCK_TEMPLATE;

/// Per-sector tag restored over the template on [`init_water_block`].
pub const IDENTITY_OFFSET: usize = 0x14;
/// Start of the 6-byte validity tag the engine checks.
pub const FIX_MARKER_OFFSET: usize = 0x21;
/// The validity tag itself.  Forced after every mutating write.
pub const FIX_MARKER: [u8; 6] = [0xC0, 0xE4, 0x40, 0xFF, 0xFF, 0xFF];
/// Water height, f32 LE.
pub const WATER_HEIGHT_OFFSET: usize = 0xB0;
/// First byte of the material path field.
pub const WATER_PATH_OFFSET: usize = 0xB9;
/// Last byte of the material path field (inclusive).
pub const WATER_PATH_MAX_OFFSET: usize = 0x1BF;
/// Full width of the path field: 263 bytes.
pub const WATER_PATH_MAX_LEN: usize = WATER_PATH_MAX_OFFSET - WATER_PATH_OFFSET + 1;
/// Template copy range is `0x00..TEMPLATE_END`.
pub const TEMPLATE_END: usize = 0xF0;

/// Reserved path value meaning "no material selected".
///
/// `"00"` is overloaded: the original editor also offered it as a selectable
/// literal, so both meanings are kept.  On write it zero-fills the field; on
/// load an empty field reads back as `"00"`.
pub const NO_MATERIAL: &str = "00";

/// Structured view of a record's water block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterFields {
    pub height: f32,
    pub path:   String,
}

// ── Probing / loading ────────────────────────────────────────────────────────

/// True when the record carries a water block: height meaningfully non-zero,
/// or a material path that is neither empty nor the `"00"` sentinel.
///
/// Total function: any buffer too short for the height field reads as "no
/// water".
pub fn probe_water(buf: &[u8]) -> bool {
    if buf.len() < WATER_HEIGHT_OFFSET + 4 {
        return false;
    }
    let height = LittleEndian::read_f32(&buf[WATER_HEIGHT_OFFSET..WATER_HEIGHT_OFFSET + 4]);
    let path = if buf.len() > WATER_PATH_OFFSET {
        decode_path(&buf[WATER_PATH_OFFSET..buf.len().min(WATER_PATH_MAX_OFFSET + 1)])
    } else {
        String::new()
    };
    height.abs() > 1e-6 || (!path.is_empty() && path != NO_MATERIAL)
}

/// Decode the water fields, defaulting anything the buffer is too short to
/// hold.  Never fails.
pub fn load_fields(buf: &[u8]) -> WaterFields {
    let height = if buf.len() >= WATER_HEIGHT_OFFSET + 4 {
        LittleEndian::read_f32(&buf[WATER_HEIGHT_OFFSET..WATER_HEIGHT_OFFSET + 4])
    } else {
        0.0
    };
    let path = if buf.len() >= WATER_PATH_OFFSET {
        let decoded = decode_path(&buf[WATER_PATH_OFFSET..buf.len().min(WATER_PATH_MAX_OFFSET + 1)]);
        if decoded.is_empty() {
            NO_MATERIAL.to_owned()
        } else {
            decoded
        }
    } else {
        NO_MATERIAL.to_owned()
    };
    WaterFields { height, path }
}

// ── Structural mutations ─────────────────────────────────────────────────────

/// Bootstrap a water block by stamping the 240-byte template over the front
/// of the record.
///
/// The identity byte at `0x14` survives: whatever the record held there before
/// the copy is restored afterwards.  A record too short to have one gets
/// `fallback_identity` instead (callers pass the sector index's low byte).
pub fn init_water_block(buf: &mut Vec<u8>, fallback_identity: u8) {
    let identity = if buf.len() > IDENTITY_OFFSET {
        buf[IDENTITY_OFFSET]
    } else {
        ensure_len(buf, IDENTITY_OFFSET + 1);
        fallback_identity
    };

    ensure_len(buf, TEMPLATE_END);
    buf[..TEMPLATE_END].copy_from_slice(&WATER_BLOCK_TEMPLATE);
    buf[IDENTITY_OFFSET] = identity;
}

/// Encode `height` and `path` into the record.
///
/// The path is ASCII, NUL-padded to fill the field exactly; a path that would
/// overflow is cut at 262 bytes so the final byte is always a terminator.
/// Non-ASCII characters are dropped.  `""` and [`NO_MATERIAL`] zero-fill the
/// whole field.
///
/// The fix marker is rewritten unconditionally — the engine treats it as a
/// validity tag, not user data.  `height` is written as-is; range clamping is
/// the caller's concern.
pub fn write_fields(buf: &mut Vec<u8>, height: f32, path: &str) {
    ensure_len(buf, WATER_HEIGHT_OFFSET + 4);
    LittleEndian::write_f32(&mut buf[WATER_HEIGHT_OFFSET..WATER_HEIGHT_OFFSET + 4], height);

    ensure_len(buf, WATER_PATH_MAX_OFFSET + 1);
    let field = &mut buf[WATER_PATH_OFFSET..=WATER_PATH_MAX_OFFSET];
    field.fill(0);
    if !path.is_empty() && path != NO_MATERIAL {
        let encoded: Vec<u8> = path.bytes().filter(|b| b.is_ascii()).collect();
        let keep = encoded.len().min(WATER_PATH_MAX_LEN - 1);
        field[..keep].copy_from_slice(&encoded[..keep]);
    }

    write_fix_marker(buf);
}

/// Clear the water block: height to `0.0`, path field zero-filled.
///
/// The fix marker is still forced afterwards, mirroring [`write_fields`] —
/// the record then reads as "no water" but stays valid to the engine.
/// Bytes outside the water fields are untouched.  Idempotent.
pub fn reset_water_block(buf: &mut Vec<u8>) {
    ensure_len(buf, WATER_HEIGHT_OFFSET + 4);
    LittleEndian::write_f32(&mut buf[WATER_HEIGHT_OFFSET..WATER_HEIGHT_OFFSET + 4], 0.0);

    ensure_len(buf, WATER_PATH_MAX_OFFSET + 1);
    buf[WATER_PATH_OFFSET..=WATER_PATH_MAX_OFFSET].fill(0);

    write_fix_marker(buf);
}

// ── Internal helpers ─────────────────────────────────────────────────────────

fn write_fix_marker(buf: &mut Vec<u8>) {
    ensure_len(buf, FIX_MARKER_OFFSET + FIX_MARKER.len());
    buf[FIX_MARKER_OFFSET..FIX_MARKER_OFFSET + FIX_MARKER.len()].copy_from_slice(&FIX_MARKER);
}

/// Zero-extend `buf` to at least `len` bytes.  Records are never truncated.
fn ensure_len(buf: &mut Vec<u8>, len: usize) {
    if buf.len() < len {
        buf.resize(len, 0);
    }
}

/// ASCII up to the first NUL, non-ASCII bytes dropped, surrounding
/// whitespace trimmed.
fn decode_path(region: &[u8]) -> String {
    let terminated = region.split(|&b| b == 0).next().unwrap_or(&[]);
    let decoded: String = terminated
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();
    decoded.trim().to_owned()
}
