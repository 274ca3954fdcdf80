use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::GeneratorError;

/// Creates `path` (and its parent directory) and fills it with `render`'s output.
///
/// The file is created, or truncated, before rendering starts, so a failing
/// render leaves it empty. The handle is dropped on every return path.
pub fn write_generated<F>(path: &Path, render: F) -> Result<(), GeneratorError>
where
    F: FnOnce() -> Result<String, GeneratorError>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| GeneratorError::io(parent, err))?;
    }

    let file = File::create(path).map_err(|err| GeneratorError::io(path, err))?;
    let mut writer = BufWriter::new(file);

    let content = render()?;
    debug!("Writing {} bytes to {}", content.len(), path.display());

    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|err| GeneratorError::io(path, err))
}
