//! Integration tests for QR code encoding regression testing
//!
//! These tests read finished symbols back the way a scanner would: format
//! information first, then unmasking and zigzag extraction. Recovered
//! codewords must match the bit stream and Reed-Solomon output exactly.

use qr_forge::encoder::bitstream::BitStreamBuilder;
use qr_forge::encoder::format::FormatInfo;
use qr_forge::encoder::gf256::FieldTables;
use qr_forge::encoder::reed_solomon::ReedSolomonEncoder;
use qr_forge::encoder::tables::{capacity, raw_data_modules};
use qr_forge::models::ModuleMatrix;
use qr_forge::{
    ECLevel, EncodeError, EncoderConfig, PenaltyRules, QrSymbol, Version, generate_with,
};

fn encode(text: &[u8]) -> QrSymbol {
    generate_with(text, &EncoderConfig::default()).expect("payload should fit")
}

/// Function-pattern layer for the symbol's version
fn reserved_layer(version: Version) -> ModuleMatrix {
    let mut matrix = ModuleMatrix::new(version);
    matrix.place_structural_patterns();
    matrix
}

/// Undo the mask and walk the zigzag path, returning every data-module bit
fn read_bits(symbol: &QrSymbol) -> Vec<bool> {
    let info = FormatInfo::read(&symbol.modules).expect("format info should decode");
    assert_eq!(info.ec_level, ECLevel::M);
    assert_eq!(info.mask, symbol.mask);

    let reserved = reserved_layer(symbol.version);
    let size = symbol.size;
    let mut bits = Vec::new();
    let mut upward = true;
    let mut right = size - 1;
    loop {
        if right == 6 {
            right = 5;
        }
        for step in 0..size {
            let y = if upward { size - 1 - step } else { step };
            for x in [right, right - 1] {
                if !reserved.is_reserved(x, y) {
                    bits.push(symbol.get(x, y) ^ info.mask.is_masked(y, x));
                }
            }
        }
        upward = !upward;
        if right < 3 {
            break;
        }
        right -= 2;
    }
    bits
}

fn to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |b, &bit| (b << 1) | bit as u8))
        .collect()
}

fn assert_finder_at(symbol: &QrSymbol, x: usize, y: usize) {
    for dy in 0..7usize {
        for dx in 0..7usize {
            let ring = dx.abs_diff(3).max(dy.abs_diff(3));
            assert_eq!(
                symbol.get(x + dx, y + dy),
                ring != 2,
                "finder at ({}, {}) offset ({}, {})",
                x,
                y,
                dx,
                dy
            );
        }
    }
}

fn assert_reads_back(text: &[u8], symbol: &QrSymbol) {
    let entry = capacity(symbol.version).expect("supported version");
    let bits = read_bits(symbol);
    assert_eq!(bits.len(), raw_data_modules(symbol.version));

    let codewords = to_bytes(&bits[..entry.total_bytes() * 8]);
    let (data, ecc) = codewords.split_at(entry.data_bytes);

    let expected = BitStreamBuilder::build(text, &entry).unwrap();
    assert_eq!(data, expected.as_slice());
    let rs = ReedSolomonEncoder::new(FieldTables::global(), entry.ec_bytes);
    assert_eq!(ecc, rs.encode(data).as_slice());

    // Remainder bits are zero
    assert!(bits[entry.total_bytes() * 8..].iter().all(|&b| !b));

    // Byte-mode header then the payload itself
    assert_eq!(data[0] >> 4, 0b0100);
    let len = (((data[0] & 0x0F) as usize) << 4) | (data[1] >> 4) as usize;
    assert_eq!(len, text.len());
}

#[test]
fn test_empty_string() {
    let symbol = encode(b"");
    assert_eq!(symbol.version, Version::MIN);
    assert_eq!(symbol.size, 21);
    let rows = symbol.rows();
    assert_eq!(rows.len(), 21);
    assert!(rows.iter().all(|row| row.len() == 21));

    assert_finder_at(&symbol, 0, 0);
    assert_finder_at(&symbol, 14, 0);
    assert_finder_at(&symbol, 0, 14);
    assert_reads_back(b"", &symbol);
}

#[test]
fn test_version_boundaries() {
    let cases: [(usize, u8); 6] = [(1, 1), (14, 1), (15, 2), (26, 2), (27, 3), (42, 3)];
    for (len, version) in cases {
        let text = vec![b'A'; len];
        let symbol = encode(&text);
        assert_eq!(symbol.version.number(), version, "length {}", len);
        assert_eq!(symbol.size, 17 + 4 * version as usize);
    }
}

#[test]
fn test_capacity_exceeded() {
    let result = generate_with(&[b'A'; 43], &EncoderConfig::default());
    assert_eq!(
        result,
        Err(EncodeError::CapacityExceeded {
            length: 43,
            max: 42
        })
    );
    let message = result.unwrap_err().to_string();
    assert!(message.contains("43") && message.contains("42"));
}

#[test]
fn test_read_back_payloads() {
    let payloads: [&[u8]; 5] = [
        b"Hello, World!",
        b"HELLO WORLD",
        b"https://example.com/agent?id=7f3a",
        &[0x00, 0x80, 0xFF, 0x10, 0xEC, 0x11],
        &[0xA5; 42],
    ];
    for text in payloads {
        let symbol = encode(text);
        assert_reads_back(text, &symbol);
    }
}

#[test]
fn test_reduced_rules_read_back() {
    let config = EncoderConfig::default().with_penalty(PenaltyRules::Reduced);
    for text in [&b"abc"[..], &b"reduced penalty rules"[..]] {
        let symbol = generate_with(text, &config).unwrap();
        assert_reads_back(text, &symbol);
    }
}

#[test]
fn test_function_patterns_survive_masking() {
    for text in [&b""[..], &[b'z'; 20][..], &[b'z'; 40][..]] {
        let symbol = encode(text);
        let size = symbol.size;
        for i in 8..size - 8 {
            assert_eq!(symbol.get(i, 6), i % 2 == 0);
            assert_eq!(symbol.get(6, i), i % 2 == 0);
        }
        assert!(symbol.get(8, size - 8));
        assert_finder_at(&symbol, 0, 0);
        assert_finder_at(&symbol, size - 7, 0);
        assert_finder_at(&symbol, 0, size - 7);
    }
}

#[test]
fn test_encoding_is_deterministic() {
    let text = b"same input, same symbol";
    let first = encode(text);
    for _ in 0..5 {
        assert_eq!(encode(text), first);
    }
}

#[test]
fn test_text_dump() {
    let symbol = encode(b"dump");
    let text = symbol.to_text(2);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 25);
    assert!(lines.iter().all(|line| line.len() == 50));
    // Top-left finder corner after the quiet zone
    assert_eq!(&lines[2][4..6], "##");
}
