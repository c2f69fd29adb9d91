//! Info command implementation.

use crate::utils::print_header;
use nfl8::{FRAME_HEADER_SIZE, Header, read_frame_header};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON serializable view of a frame header.
#[derive(Debug, Serialize)]
struct HeaderJson {
    file: String,
    size: u64,
    level: String,
    level_tag: u8,
    deflated_bits: u64,
    inflated_bits: u64,
    payload_bytes: u64,
    expansion_ratio: f64,
    crc32: String,
    seed: u32,
    /// Whether the file holds exactly the payload the header describes.
    complete: bool,
}

impl HeaderJson {
    fn new(input: &Path, size: u64, header: &Header) -> Self {
        Self {
            file: input.display().to_string(),
            size,
            level: header.level.to_string(),
            level_tag: header.level.tag(),
            deflated_bits: header.deflated_bits,
            inflated_bits: header.inflated_bits,
            payload_bytes: header.payload_len(),
            expansion_ratio: header.expansion_ratio(),
            crc32: format!("{:08x}", header.checksum),
            seed: header.seed,
            complete: size == FRAME_HEADER_SIZE as u64 + header.payload_len(),
        }
    }
}

pub fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let framed = fs::read(input)?;
    let header = read_frame_header(&framed)?;
    let info = HeaderJson::new(input, framed.len() as u64, &header);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("NFL8 Frame Information");
    println!("======================");
    println!("File: {}", input.display());
    println!("Size: {} bytes", info.size);
    println!();
    println!("Header:");
    print_header(&header);
    if !info.complete {
        println!();
        println!(
            "Warning: expected {} payload bytes, found {}",
            info.payload_bytes,
            framed.len() - FRAME_HEADER_SIZE
        );
    }

    Ok(())
}
