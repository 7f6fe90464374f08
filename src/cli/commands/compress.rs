//! CLI interface for compaction
use std::fs;
use std::path::Path;

pub fn execute(source: &Path, destination: Option<&Path>) -> anyhow::Result<()> {
    match destination {
        Some(dest) => {
            crate::converter::compress_file(source, dest)?;
            println!("Compacted {source:?} -> {dest:?}");
        }
        None => {
            let content = fs::read_to_string(source)?;
            crate::converter::warn_if_large(&content);
            println!("{}", crate::converter::compress_xml(&content)?);
        }
    }
    Ok(())
}
