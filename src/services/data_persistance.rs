use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::domain::Company;

/// Read the full company list before any processing starts. A missing or
/// malformed input file is the one fatal condition of a run.
pub fn read_companies(path: &str) -> anyhow::Result<Vec<Company>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open {}", path))?;

    let mut companies: Vec<Company> = vec![];
    for record in reader.deserialize() {
        let company: Company =
            record.with_context(|| format!("Malformed company record in {}", path))?;
        companies.push(company);
    }

    Ok(companies)
}

pub fn write_unfiltered(
    output_dir: &str,
    company_name: &str,
    content: &str,
) -> anyhow::Result<PathBuf> {
    write_output(output_dir, company_name, "unfiltered", content)
}

pub fn write_filtered(
    output_dir: &str,
    company_name: &str,
    content: &str,
) -> anyhow::Result<PathBuf> {
    write_output(output_dir, company_name, "filtered", content)
}

// Overwrites on every run, no append semantics.
fn write_output(
    output_dir: &str,
    company_name: &str,
    suffix: &str,
    content: &str,
) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir))?;

    let path = Path::new(output_dir).join(format!("{}_{}.txt", file_stem(company_name), suffix));
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

// Company names can contain path separators; the file must stay inside the
// output directory.
fn file_stem(company_name: &str) -> String {
    company_name.replace(['/', '\\'], "_")
}
