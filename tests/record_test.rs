use sdwater::record::{
    self, FIX_MARKER, FIX_MARKER_OFFSET, IDENTITY_OFFSET, WATER_HEIGHT_OFFSET, WATER_PATH_MAX_LEN,
    WATER_PATH_MAX_OFFSET, WATER_PATH_OFFSET,
};
use sdwater::{load_fields, probe_water, NO_MATERIAL, WATER_BLOCK_TEMPLATE};

const SWAMP: &str = "graphics\\_materials\\editor\\water_av_swamp.mlm";

fn marker_bytes(buf: &[u8]) -> &[u8] {
    &buf[FIX_MARKER_OFFSET..FIX_MARKER_OFFSET + FIX_MARKER.len()]
}

#[test]
fn probe_is_false_for_buffers_shorter_than_height_field() {
    for len in [0, 1, 0x14, 0x21, 0xB0, 0xB3] {
        assert!(!probe_water(&vec![0xFFu8; len]), "len {len} should probe false");
    }
}

#[test]
fn probe_true_on_nonzero_height_alone() {
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 3.0, NO_MATERIAL);
    assert!(probe_water(&buf));
}

#[test]
fn probe_true_on_material_alone() {
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 0.0, SWAMP);
    assert!(probe_water(&buf));
}

#[test]
fn probe_false_when_height_zero_and_path_is_sentinel() {
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 0.0, NO_MATERIAL);
    assert!(!probe_water(&buf));
    record::write_fields(&mut buf, 0.0, "");
    assert!(!probe_water(&buf));
}

#[test]
fn probe_ignores_heights_below_epsilon() {
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 1e-7, NO_MATERIAL);
    assert!(!probe_water(&buf));
    record::write_fields(&mut buf, -1e-7, NO_MATERIAL);
    assert!(!probe_water(&buf));
    record::write_fields(&mut buf, -2e-6, NO_MATERIAL);
    assert!(probe_water(&buf), "negative heights count as water");
}

#[test]
fn load_defaults_on_short_buffers() {
    let fields = load_fields(&[]);
    assert_eq!(fields.height, 0.0);
    assert_eq!(fields.path, NO_MATERIAL);

    // Long enough for height, too short for the path region.
    let mut buf = vec![0u8; WATER_HEIGHT_OFFSET + 4];
    buf[WATER_HEIGHT_OFFSET..WATER_HEIGHT_OFFSET + 4].copy_from_slice(&5.0f32.to_le_bytes());
    let fields = load_fields(&buf);
    assert_eq!(fields.height, 5.0);
    assert_eq!(fields.path, NO_MATERIAL);
}

#[test]
fn load_substitutes_sentinel_for_empty_decoded_path() {
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 1.0, "");
    assert_eq!(load_fields(&buf).path, NO_MATERIAL);
}

#[test]
fn load_drops_non_ascii_path_bytes() {
    let mut buf = vec![0u8; WATER_PATH_MAX_OFFSET + 1];
    buf[WATER_PATH_OFFSET] = b'a';
    buf[WATER_PATH_OFFSET + 1] = 0xC3; // stray non-ASCII byte
    buf[WATER_PATH_OFFSET + 2] = b'b';
    assert_eq!(load_fields(&buf).path, "ab");
}

#[test]
fn write_then_load_roundtrips() {
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 12.5, SWAMP);
    let fields = load_fields(&buf);
    assert_eq!(fields.height, 12.5);
    assert_eq!(fields.path, SWAMP);
}

#[test]
fn write_truncates_overlong_paths_and_forces_terminator() {
    let long: String = "a".repeat(300);
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 0.0, &long);

    let field = &buf[WATER_PATH_OFFSET..=WATER_PATH_MAX_OFFSET];
    assert_eq!(field.len(), WATER_PATH_MAX_LEN);
    assert!(field[..WATER_PATH_MAX_LEN - 1].iter().all(|&b| b == b'a'));
    assert_eq!(field[WATER_PATH_MAX_LEN - 1], 0, "last byte must be NUL");
    assert_eq!(load_fields(&buf).path, "a".repeat(WATER_PATH_MAX_LEN - 1));
}

#[test]
fn write_pads_short_paths_with_nuls() {
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 0.0, "abc");
    let field = &buf[WATER_PATH_OFFSET..=WATER_PATH_MAX_OFFSET];
    assert_eq!(&field[..3], b"abc");
    assert!(field[3..].iter().all(|&b| b == 0));
}

#[test]
fn write_drops_non_ascii_characters() {
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 0.0, "wässer.mlm");
    assert_eq!(load_fields(&buf).path, "wsser.mlm");
}

#[test]
fn fix_marker_forced_after_write_and_reset() {
    // Start from garbage covering the marker range.
    let mut buf = vec![0xEEu8; 0x200];
    record::write_fields(&mut buf, 1.0, SWAMP);
    assert_eq!(marker_bytes(&buf), FIX_MARKER);

    let mut buf = vec![0xEEu8; 0x200];
    record::reset_water_block(&mut buf);
    assert_eq!(marker_bytes(&buf), FIX_MARKER);

    // From an empty buffer, too.
    let mut buf = Vec::new();
    record::write_fields(&mut buf, 0.0, NO_MATERIAL);
    assert_eq!(marker_bytes(&buf), FIX_MARKER);
}

#[test]
fn reset_is_idempotent() {
    let mut once = vec![0x7Bu8; 0x250];
    record::write_fields(&mut once, 30.0, SWAMP);
    record::reset_water_block(&mut once);
    let mut twice = once.clone();
    record::reset_water_block(&mut twice);
    assert_eq!(once, twice);
}

#[test]
fn operations_never_shrink_the_buffer() {
    let mut buf = vec![0x11u8; 0x400];
    record::write_fields(&mut buf, 2.0, SWAMP);
    assert_eq!(buf.len(), 0x400);
    record::reset_water_block(&mut buf);
    assert_eq!(buf.len(), 0x400);
    record::init_water_block(&mut buf, 0);
    assert_eq!(buf.len(), 0x400);
}

#[test]
fn writes_leave_unrelated_bytes_alone() {
    let mut buf = vec![0x11u8; 0x400];
    record::write_fields(&mut buf, 2.0, SWAMP);
    // Before the marker, between marker and height, and past the path field.
    assert!(buf[..FIX_MARKER_OFFSET].iter().all(|&b| b == 0x11));
    assert!(buf[FIX_MARKER_OFFSET + FIX_MARKER.len()..WATER_HEIGHT_OFFSET]
        .iter()
        .all(|&b| b == 0x11));
    assert!(buf[WATER_PATH_MAX_OFFSET + 1..].iter().all(|&b| b == 0x11));
}

#[test]
fn init_preserves_existing_identity_byte() {
    let mut buf = vec![0x44u8; 0x300];
    buf[IDENTITY_OFFSET] = 0x5A;
    record::init_water_block(&mut buf, 0);

    assert_eq!(buf[IDENTITY_OFFSET], 0x5A);
    // Every other template byte matches the constant.
    for (i, (&got, &want)) in buf.iter().zip(WATER_BLOCK_TEMPLATE.iter()).enumerate() {
        if i != IDENTITY_OFFSET {
            assert_eq!(got, want, "template byte {i:#x}");
        }
    }
    // Bytes past the template untouched.
    assert!(buf[WATER_BLOCK_TEMPLATE.len()..].iter().all(|&b| b == 0x44));
}

#[test]
fn init_uses_fallback_identity_when_record_is_too_short() {
    let mut buf = vec![0u8; 3];
    record::init_water_block(&mut buf, 0x2C);
    assert_eq!(buf[IDENTITY_OFFSET], 0x2C);
    assert_eq!(buf.len(), WATER_BLOCK_TEMPLATE.len());
}

#[test]
fn template_carries_the_fix_marker() {
    assert_eq!(marker_bytes(&WATER_BLOCK_TEMPLATE[..]), FIX_MARKER);
}

#[test]
fn template_defaults_decode_as_rainforest_water() {
    let fields = load_fields(&WATER_BLOCK_TEMPLATE);
    assert_eq!(fields.height, 0.5);
    assert_eq!(fields.path, "graphics\\_materials\\editor\\water_av_rainforest.mlm");
    assert!(probe_water(&WATER_BLOCK_TEMPLATE));
}

#[test]
fn end_to_end_from_empty_buffer() {
    let mut buf = Vec::new();
    record::init_water_block(&mut buf, 12);
    record::write_fields(&mut buf, 12.5, SWAMP);

    let fields = load_fields(&buf);
    assert_eq!(fields.height, 12.5);
    assert_eq!(fields.path, SWAMP);
    assert!(probe_water(&buf));

    record::reset_water_block(&mut buf);
    assert!(!probe_water(&buf));
    let fields = load_fields(&buf);
    assert_eq!(fields.height, 0.0);
    assert_eq!(fields.path, NO_MATERIAL);
    assert_eq!(marker_bytes(&buf), FIX_MARKER);
}
