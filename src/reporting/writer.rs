use std::io::Write;
use std::path::Path;
use std::{fs, io};

pub trait WriteReport {
    fn write_to_file(&self, path: &Path, data: String) -> io::Result<()>;
}

/// Writes the rendered artifact, creating missing parent directories so an
/// output path like `reports/2026/links.md` just works.
#[derive(Default)]
pub struct ReportWriter;

impl WriteReport for ReportWriter {
    fn write_to_file(&self, path: &Path, data: String) -> io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(path)?;
        file.write_all(data.as_bytes())?;

        Ok(())
    }
}
