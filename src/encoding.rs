//! Source ingestion and encoding normalization.
//!
//! Course material circulates in two encodings: UTF-8 and the Windows-1253
//! single-byte Greek codepage. Everything downstream of this module works
//! on UTF-8 only.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

/// UTF-8 bytes of the header keyword ΑΛΓΟΡΙΘΜΟΣ. Input containing this
/// sequence is already UTF-8 and is passed through untouched.
const UTF8_HEADER_PROBE: &[u8] = "ΑΛΓΟΡΙΘΜΟΣ".as_bytes();

/// Read a source file in binary mode and normalize it to UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Cannot open {}", path.display()))?;
    Ok(normalize(&bytes))
}

/// Normalize a raw byte buffer to UTF-8.
///
/// Detection is a two-test heuristic: if the buffer already contains the
/// multi-byte spelling of the header keyword it is taken as UTF-8; failing
/// that, any byte in the Windows-1253 Greek letter range triggers a full
/// translation of the high half of the codepage. Buffers matching neither
/// test pass through unchanged.
pub fn normalize(bytes: &[u8]) -> String {
    if contains_probe(bytes) {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    if bytes.iter().any(|b| is_greek_byte(*b)) {
        debug!("translating Windows-1253 input to UTF-8");
        return bytes.iter().map(|b| translate_byte(*b)).collect();
    }

    String::from_utf8_lossy(bytes).into_owned()
}

fn contains_probe(bytes: &[u8]) -> bool {
    bytes
        .windows(UTF8_HEADER_PROBE.len())
        .any(|window| window == UTF8_HEADER_PROBE)
}

/// Whether a byte encodes a Greek letter in Windows-1253: the accented
/// capitals scattered through 0xA2..0xBF plus the contiguous letter block.
fn is_greek_byte(byte: u8) -> bool {
    matches!(byte, 0xA2 | 0xB8..=0xBA | 0xBC | 0xBE..=0xFE)
}

/// Map one Windows-1253 byte to its Unicode character.
///
/// The Greek block of 1253 is laid out in three contiguous runs, so the
/// translation is offset arithmetic; the handful of accented capitals and
/// punctuation outside those runs are spelled out. Bytes the codepage
/// shares with Latin-1 map through as themselves.
fn translate_byte(byte: u8) -> char {
    match byte {
        0x00..=0x7F => byte as char,
        0xA1 => '΅',
        0xA2 => 'Ά',
        0xAF => '―',
        0xB4 => '΄',
        0xB8..=0xBA => greek_at(0x0388, byte - 0xB8),
        0xBC => 'Ό',
        0xBE..=0xBF => greek_at(0x038E, byte - 0xBE),
        0xC0..=0xD9 => greek_at(0x0390, byte - 0xC0),
        0xDA..=0xFE => greek_at(0x03AA, byte - 0xDA),
        other => other as char,
    }
}

fn greek_at(base: u32, offset: u8) -> char {
    char::from_u32(base + offset as u32).unwrap_or('\u{FFFD}')
}

#[cfg(test)]
mod tests {
    use super::*;

    // ΑΛΓΟΡΙΘΜΟΣ Τ in Windows-1253.
    const CODEPAGE_HEADER: &[u8] = &[
        0xC1, 0xCB, 0xC3, 0xCF, 0xD1, 0xC9, 0xC8, 0xCC, 0xCF, 0xD3, 0x20, 0xD4,
    ];

    #[test]
    fn test_utf8_input_passes_through() {
        let source = "ΑΛΓΟΡΙΘΜΟΣ Τ\nΑΡΧΗ\nΤΕΛΟΣ\n";
        assert_eq!(normalize(source.as_bytes()), source);
    }

    #[test]
    fn test_codepage_input_is_translated() {
        assert_eq!(normalize(CODEPAGE_HEADER), "ΑΛΓΟΡΙΘΜΟΣ Τ");
    }

    #[test]
    fn test_plain_ascii_passes_through() {
        let source = "ALGORITHM T\nBEGIN\nEND\n";
        assert_eq!(normalize(source.as_bytes()), source);
    }

    #[test]
    fn test_lowercase_and_final_sigma() {
        // τέλος: τ=0xF4 έ=0xDD λ=0xEB ο=0xEF ς=0xF2
        assert_eq!(normalize(&[0xF4, 0xDD, 0xEB, 0xEF, 0xF2]), "τέλος");
    }

    #[test]
    fn test_translation_keeps_ascii_intact() {
        // x := 1; with one Greek byte (ά = 0xDC) appended
        assert_eq!(normalize(b"x := 1; \xDC"), "x := 1; ά");
    }
}
