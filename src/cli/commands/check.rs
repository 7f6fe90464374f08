//! CLI interface for validation
use std::fs;
use std::path::Path;

pub fn execute(source: &Path) -> anyhow::Result<()> {
    let content = fs::read_to_string(source)?;
    crate::converter::warn_if_large(&content);

    let doc = crate::reader::parse_xml(&content)?;

    println!("{source:?} is well-formed");
    if let Some(root) = doc.root_name() {
        println!("  root element: {root}");
    }
    println!("  elements:     {}", doc.element_count());
    println!("  attributes:   {}", doc.attribute_count());
    println!("  max depth:    {}", doc.max_depth());
    if !doc.declarations.is_empty() {
        println!("  declarations: {} line(s)", doc.declarations.lines().count());
    }

    Ok(())
}
