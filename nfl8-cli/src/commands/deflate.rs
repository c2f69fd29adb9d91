//! Deflate command implementation.

use crate::utils::{deflate_output_path, print_header};
use nfl8::{Deflater, deflate_disk_with, read_frame_header};
use std::fs;
use std::path::Path;

pub fn cmd_deflate(
    input: &Path,
    output: Option<&Path>,
    verify: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let framed = fs::read(input)?;
    let output = output.map_or_else(|| deflate_output_path(input), Path::to_path_buf);

    let deflater = if verify {
        Deflater::new()
    } else {
        Deflater::without_validation()
    };

    if verbose {
        let header = read_frame_header(&framed)?;
        println!("Header of {}:", input.display());
        print_header(&header);
    }

    let data = deflate_disk_with(&framed, &deflater)?;
    fs::write(&output, &data)?;

    println!(
        "Deflated {} -> {} ({} -> {} bytes{})",
        input.display(),
        output.display(),
        framed.len(),
        data.len(),
        if verify { "" } else { ", CRC not checked" }
    );

    Ok(())
}
