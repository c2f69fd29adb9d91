//! Inflate command implementation.

use crate::utils::{inflate_output_path, print_header};
use nfl8::{Inflater, Level, write_frame};
use std::fs;
use std::path::Path;

pub fn cmd_inflate(
    input: &Path,
    output: Option<&Path>,
    level: Level,
    seed: Option<u32>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let output = output.map_or_else(|| inflate_output_path(input), Path::to_path_buf);

    let (payload, header) = Inflater::new(level).inflate(&data, seed)?;
    let framed = write_frame(&header, &payload);
    fs::write(&output, &framed)?;

    println!(
        "Inflated {} -> {} ({} -> {} bytes, {})",
        input.display(),
        output.display(),
        data.len(),
        framed.len(),
        level
    );
    if verbose {
        print_header(&header);
    }

    Ok(())
}
