//! Frozen byte constants: the water-block template and the material catalogue.
//!
//! # Identity rules
//! The template is an opaque 240-byte pattern lifted verbatim from a known-good
//! sector record.  It is NOT decomposed further: the consuming engine treats it
//! as a unit, and only the offsets named in `record.rs` have assigned meaning.
//! The bytes are permanent — changing any of them breaks interoperability with
//! every existing `.csdat` file.

/// Fixed 240-byte pattern copied into a record at offsets `0x00..0xF0` to
/// bootstrap a water block that does not exist yet.
///
/// Inside this pattern, the named fields already hold their defaults:
/// the fix marker at `0x21`, height 0.5 at `0xB0`, and the rainforest
/// material path at `0xB9`.  The identity byte at `0x14` is placeholder
/// data and is overwritten by [`crate::record::init_water_block`].
pub const WATER_BLOCK_TEMPLATE: [u8; 240] = [
    0x52, 0x10, 0x00, 0xE9, 0x09, 0x00, 0x00, 0x00, 0x64, 0x5C, 0x00, 0x00,
    0x50, 0x5C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x21, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0xE4, 0x40,
    0xFF, 0xFF, 0xFF, 0x00, 0x5C, 0x59, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x61, 0x6D, 0x65, 0x72, 0x65, 0x34, 0x00,
    0x60, 0xBC, 0xA9, 0x0A, 0x00, 0x00, 0x02, 0x01, 0x1D, 0x64, 0xE0, 0x4F,
    0x15, 0x00, 0x00, 0x00, 0x60, 0xA0, 0xCE, 0x34, 0x60, 0xA0, 0xCE, 0x34,
    0x00, 0x00, 0x00, 0x00, 0xE3, 0x7B, 0xC2, 0x94, 0x2C, 0xFB, 0x3F, 0x0F,
    0x60, 0xA0, 0xCE, 0x34, 0x3C, 0xFB, 0x3F, 0x0F, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xD4, 0xF9, 0x3F, 0x0F, 0x10, 0xEA, 0xE0, 0x4F,
    0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x60, 0xCE, 0x34,
    0x00, 0x00, 0x00, 0x00, 0xE8, 0x30, 0xCF, 0x34, 0x08, 0x8D, 0xA9, 0x0A,
    0x01, 0x00, 0x00, 0x00, 0xB8, 0x21, 0x0F, 0x40, 0x8C, 0xFB, 0x3F, 0x0F,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x48, 0x43, 0x00, 0x00, 0x80, 0xC0,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x67, 0x72, 0x61, 0x70, 0x68, 0x69, 0x63,
    0x73, 0x5C, 0x5F, 0x6D, 0x61, 0x74, 0x65, 0x72, 0x69, 0x61, 0x6C, 0x73,
    0x5C, 0x65, 0x64, 0x69, 0x74, 0x6F, 0x72, 0x5C, 0x77, 0x61, 0x74, 0x65,
    0x72, 0x5F, 0x61, 0x76, 0x5F, 0x72, 0x61, 0x69, 0x6E, 0x66, 0x6F, 0x72,
    0x65, 0x73, 0x74, 0x2E, 0x6D, 0x6C, 0x6D, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Water material paths known to ship with the game.
///
/// Any ASCII path is writable; this catalogue exists so the CLI can list
/// choices the way the original editor's dropdown did.  Entries are written
/// byte-for-byte (single backslashes, as the engine expects).
pub const KNOWN_MATERIALS: [&str; 6] = [
    "graphics\\_materials\\editor\\df_water_default_top.mlm",
    "graphics\\_materials\\editor\\water_av_openfield.mlm",
    "graphics\\_materials\\editor\\water_av_rainforest.mlm",
    "graphics\\_materials\\editor\\water_av_rainforest_prolemuris_noreflection.mlm",
    "graphics\\_materials\\editor\\water_av_riverbank.mlm",
    "graphics\\_materials\\editor\\water_av_swamp.mlm",
];
