//! Utility functions for the CLI.

use nfl8::Header;
use std::path::{Path, PathBuf};

/// File extension of NFL8 frames.
pub const FRAME_EXTENSION: &str = "nfl8";

/// Parse a seed given as decimal or `0x`-prefixed hex.
pub fn parse_seed(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => s.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid seed '{}': {}", s, e))
}

/// Default output of `inflate`: `<INPUT>.nfl8`.
pub fn inflate_output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(FRAME_EXTENSION);
    PathBuf::from(name)
}

/// Default output of `deflate`: the input without `.nfl8`, or `<INPUT>.out`.
pub fn deflate_output_path(input: &Path) -> PathBuf {
    let is_frame = input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(FRAME_EXTENSION));
    if is_frame && input.file_stem().is_some() {
        return input.with_extension("");
    }

    let mut name = input.as_os_str().to_owned();
    name.push(".out");
    PathBuf::from(name)
}

/// Print a header as an aligned field list.
pub fn print_header(header: &Header) {
    println!("  Level: {} (tag {})", header.level, header.level.tag());
    if let Some(width) = header.level.width() {
        println!(
            "  Filler: {} of every 8 bits ({} real)",
            width,
            width.modulus()
        );
    }
    println!(
        "  Deflated: {} bits ({} bytes)",
        header.deflated_bits,
        header.deflated_len()
    );
    println!(
        "  Inflated: {} bits ({} bytes)",
        header.inflated_bits,
        header.payload_len()
    );
    println!("  Expansion: {:.3}x", header.expansion_ratio());
    println!("  CRC-32: {:08x}", header.checksum);
    if header.level.is_random() {
        println!("  Seed: {:#010x}", header.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed("0xC0FFEE"), Ok(0xC0FFEE));
        assert_eq!(parse_seed("0XDEAD_BEEF"), Ok(0xDEADBEEF));
        assert_eq!(parse_seed("4294967295"), Ok(u32::MAX));
        assert!(parse_seed("4294967296").is_err());
        assert!(parse_seed("seed").is_err());
    }

    #[test]
    fn test_inflate_output_path() {
        assert_eq!(
            inflate_output_path(Path::new("dir/data.bin")),
            PathBuf::from("dir/data.bin.nfl8")
        );
    }

    #[test]
    fn test_deflate_output_path() {
        assert_eq!(
            deflate_output_path(Path::new("dir/data.bin.nfl8")),
            PathBuf::from("dir/data.bin")
        );
        assert_eq!(
            deflate_output_path(Path::new("data.NFL8")),
            PathBuf::from("data")
        );
        assert_eq!(
            deflate_output_path(Path::new("data.padded")),
            PathBuf::from("data.padded.out")
        );
    }
}
