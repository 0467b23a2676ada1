// src/lib.rs
//! Byte-pair encoding — lossless compression by iterated pair substitution.
//!
//! The most common pair of adjacent bytes is replaced with a byte value
//! that does not occur in the buffer, over and over, and every
//! substitution is recorded in a lookup table the decoder unwinds in
//! reverse. First described by Philip Gage, "A New Algorithm for Data
//! Compression", in the C Users Journal.
//!
//! Encoded stream layout:
//!   Byte 0:              lookup table entry count N (0–255)
//!   Bytes 1..1+3N:       N entries of (symbol, pair first, pair second),
//!                        in the order the substitutions were applied
//!   Byte 1+3N onward:    transformed payload, verbatim to end of stream

pub mod decoder;
pub mod encoder;
pub mod pair;
pub mod table;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use table::LookupTable;

/// Extension marking an already encoded file. Matched case-insensitively.
pub const ENCODED_SUFFIX: &str = ".bpe";
/// Prefix prepended to the filename when decoding.
pub const DECODED_PREFIX: &str = "decoded-";

/// Encode `input` into a self-contained stream: the serialized lookup
/// table followed by the transformed payload.
pub fn encode(input: &[u8]) -> Vec<u8> {
    let (table, payload) = encoder::encode(input);

    let mut output = table.serialize();
    output.extend_from_slice(&payload);
    output
}

/// Decode a stream produced by [`encode`] back into the original bytes.
/// A stream whose lookup table is truncated fails with
/// `ErrorKind::InvalidData`.
pub fn decode(input: &[u8]) -> io::Result<Vec<u8>> {
    let (table, payload) = LookupTable::parse(input)?;
    Ok(decoder::decode(table, payload.to_vec()))
}

/// Encode a file, writing the result to the same path with
/// [`ENCODED_SUFFIX`] appended. Returns the path written.
pub fn encode_file(input: &Path) -> io::Result<PathBuf> {
    let output = encoded_path(input);

    let data    = fs::read(input)?;
    let encoded = encode(&data);
    fs::write(&output, &encoded)?;

    println!(
        "Encoded {} bytes → {} bytes ({} table entries)",
        data.len(),
        encoded.len(),
        encoded[0]
    );
    Ok(output)
}

/// Decode an encoded file, writing the result into the same directory
/// under [`DECODED_PREFIX`] with the suffix stripped. Returns the path
/// written.
pub fn decode_file(input: &Path) -> io::Result<PathBuf> {
    let output = decoded_path(input);

    let data    = fs::read(input)?;
    let decoded = decode(&data)?;
    fs::write(&output, &decoded)?;

    println!("Decoded {} bytes → {} bytes", data.len(), decoded.len());
    Ok(output)
}

/// Case-insensitive check for the encoded-file suffix.
pub fn is_encoded_name(name: &str) -> bool {
    name.to_lowercase().ends_with(ENCODED_SUFFIX)
}

/// `<input>` with the encoded suffix appended.
pub fn encoded_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(ENCODED_SUFFIX);
    PathBuf::from(name)
}

/// `<input>`'s directory, filename prefixed with [`DECODED_PREFIX`] and
/// stripped of the encoded suffix.
pub fn decoded_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let stem = if is_encoded_name(name) {
        &name[..name.len() - ENCODED_SUFFIX.len()]
    } else {
        name
    };

    input.with_file_name(format!("{}{}", DECODED_PREFIX, stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_encodes_to_a_single_zero_byte() {
        assert_eq!(encode(b""), vec![0x00]);
        assert_eq!(decode(&[0x00]).unwrap(), b"");
    }

    #[test]
    fn repeated_byte_layout_is_exact() {
        let encoded = encode(b"aaaa");
        assert_eq!(encoded, vec![0x01, 0x00, 0x61, 0x61, 0x00, 0x00]);
        assert_eq!(decode(&encoded).unwrap(), b"aaaa");
    }

    #[test]
    fn rare_pairs_leave_the_payload_untouched() {
        let input = [0x01, 0x02, 0x03, 0x04];
        let encoded = encode(&input);
        assert_eq!(encoded[0], 0x00);
        assert_eq!(&encoded[1..], &input);
    }

    #[test]
    fn round_trip_reproduces_the_input() {
        let inputs: Vec<Vec<u8>> = vec![
            Vec::new(),
            vec![0x61],
            b"aaaa".to_vec(),
            b"aaaab".to_vec(),
            b"to be or not to be, that is the question".repeat(8),
            (0u8..=255).cycle().take(1000).collect(),
            b"mississippi".repeat(20),
        ];

        for input in inputs {
            let decoded = decode(&encode(&input)).unwrap();
            assert_eq!(decoded, input, "round trip broke for {} bytes", input.len());
        }
    }

    #[test]
    fn decode_refuses_truncated_tables() {
        // Entry count says one, entry bytes are missing.
        assert!(decode(&[0x01, 0x00]).is_err());
        assert!(decode(&[]).is_err());
    }

    #[test]
    fn encoded_path_appends_the_suffix() {
        let path = encoded_path(Path::new("dir/report.txt"));
        assert_eq!(path, PathBuf::from("dir/report.txt.bpe"));
    }

    #[test]
    fn decoded_path_prefixes_and_strips() {
        let path = decoded_path(Path::new("dir/report.txt.bpe"));
        assert_eq!(path, PathBuf::from("dir/decoded-report.txt"));
    }

    #[test]
    fn suffix_check_ignores_case() {
        assert!(is_encoded_name("REPORT.TXT.BPE"));
        assert!(!is_encoded_name("report.txt"));

        let path = decoded_path(Path::new("REPORT.BPE"));
        assert_eq!(path, PathBuf::from("decoded-REPORT"));
    }
}
