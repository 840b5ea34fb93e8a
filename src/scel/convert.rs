//! File-level conversion: .scel on disk to ibus phrase table on disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use super::decoder;
use super::format::header;
use super::types::error::{Result, ScelError};
use super::types::models::ScelMetadata;

/// Extension of Sogou dictionary files.
pub const SCEL_EXTENSION: &str = "scel";

/// Extension of the generated ibus phrase tables.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Settings for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Inputs larger than this are rejected before being read.
    pub max_input_bytes: u64,
    /// Replace an existing output file.
    pub overwrite: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: 64 * 1024 * 1024,
            overwrite: true,
        }
    }
}

/// Summary of one successfully converted file.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub entries: usize,
    /// `None` when the descriptive header could not be read.
    pub metadata: Option<ScelMetadata>,
}

/// Decodes a .scel buffer and renders it as ibus table text.
pub fn convert_buffer(buffer: &[u8]) -> Result<String> {
    decoder::decode(buffer)?.to_ibus()
}

/// Converts one .scel file and writes the phrase table to `output`.
///
/// The whole input is decoded and rendered in memory before anything is
/// written, so a failing file leaves no output behind.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let input = input.as_ref();
    let output = output.as_ref();
    info!("Converting {} -> {}", input.display(), output.display());

    if same_file(input, output) {
        return Err(ScelError::OutputIsInput(input.to_path_buf()));
    }

    let size = fs::metadata(input)?.len();
    if size > options.max_input_bytes {
        return Err(ScelError::InputTooLarge {
            path: input.to_path_buf(),
            size,
            limit: options.max_input_bytes,
        });
    }
    if !options.overwrite && output.exists() {
        return Err(ScelError::OutputExists(output.to_path_buf()));
    }

    let buffer = fs::read(input)?;
    let metadata = match header::read_metadata(&buffer) {
        Ok(metadata) => {
            info!("Dictionary '{}' ({})", metadata.name, metadata.category);
            Some(metadata)
        }
        Err(e) => {
            warn!("Could not read metadata of {}: {}", input.display(), e);
            None
        }
    };

    let dictionary = decoder::decode(&buffer)?;
    let text = dictionary.to_ibus()?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    write_atomically(output, text.as_bytes())?;
    info!("Wrote {} entries to {}", dictionary.len(), output.display());

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        entries: dictionary.len(),
        metadata,
    })
}

/// Writes to a sibling temporary file, then renames it into place.
fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".partial");
    let tmp_path = PathBuf::from(tmp_name);
    if let Err(e) = fs::write(&tmp_path, contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

/// Whether `output` names the same file as `input`, including through
/// symlinks or `..` components when both exist.
fn same_file(input: &Path, output: &Path) -> bool {
    if input == output {
        return true;
    }
    match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Output path for `input`: same stem with a `.txt` extension.
///
/// Without `out_dir` the output sits next to the input. With `out_dir`, the
/// input's path relative to `root` is kept below `out_dir`, so equally named
/// files from different subdirectories stay apart.
pub fn output_path_for(input: &Path, root: &Path, out_dir: Option<&Path>) -> PathBuf {
    let Some(dir) = out_dir else {
        return input.with_extension(OUTPUT_EXTENSION);
    };
    let relative = match input.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => input.file_name().map(PathBuf::from).unwrap_or_default(),
    };
    dir.join(relative).with_extension(OUTPUT_EXTENSION)
}

/// One file scheduled for conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedConversion {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Discovers inputs under every root and assigns their output paths.
///
/// Roots that cannot be scanned, and inputs whose output path was already
/// claimed by an earlier input, are returned as failures in the second list.
pub fn plan_conversions(
    roots: &[PathBuf],
    out_dir: Option<&Path>,
) -> (Vec<PlannedConversion>, Vec<(PathBuf, ScelError)>) {
    let mut planned = Vec::new();
    let mut failed = Vec::new();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    for root in roots {
        let inputs = match discover_scel_files(root) {
            Ok(inputs) => inputs,
            Err(e) => {
                failed.push((root.clone(), e));
                continue;
            }
        };
        for input in inputs {
            let output = output_path_for(&input, root, out_dir);
            if let Some(first) = claimed.get(&output) {
                warn!("{} and {} both map to {}", first.display(), input.display(), output.display());
                failed.push((
                    input,
                    ScelError::DuplicateOutput {
                        output,
                        first: first.clone(),
                    },
                ));
                continue;
            }
            claimed.insert(output.clone(), input.clone());
            planned.push(PlannedConversion { input, output });
        }
    }
    (planned, failed)
}

/// Finds .scel files under `root`, recursively, in sorted order.
///
/// A `root` that is itself a file is returned as-is, whatever its extension.
pub fn discover_scel_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && has_scel_extension(entry.path()) {
            found.push(entry.into_path());
        }
    }
    found.sort();
    debug!("Found {} .scel files under {}", found.len(), root.display());
    Ok(found)
}

fn has_scel_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(SCEL_EXTENSION))
}
