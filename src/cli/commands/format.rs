//! CLI interface for pretty-printing
use std::fs;
use std::path::Path;

pub fn execute(source: &Path, destination: Option<&Path>) -> anyhow::Result<()> {
    match destination {
        Some(dest) => {
            crate::converter::format_file(source, dest)?;
            println!("Formatted {source:?} -> {dest:?}");
        }
        None => {
            let content = fs::read_to_string(source)?;
            crate::converter::warn_if_large(&content);
            println!("{}", crate::converter::format_xml(&content)?);
        }
    }
    Ok(())
}
