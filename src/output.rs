use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Teacher;

/// Write `teachers` as a JSON array to `path`, creating parent directories.
///
/// `prettify` indents with two spaces. Non-ASCII text is written as is.
pub fn dump_teachers(teachers: &[Teacher], path: &Path, prettify: bool) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err)?;
    }

    let file = File::create(path).map_err(io_err)?;
    write_teachers(BufWriter::new(file), teachers, path, prettify)
}

/// Serialize into `writer`. Write failures are reported against `path`.
fn write_teachers<W: Write>(
    mut writer: W,
    teachers: &[Teacher],
    path: &Path,
    prettify: bool,
) -> Result<()> {
    let written = if prettify {
        serde_json::to_writer_pretty(&mut writer, teachers)
    } else {
        serde_json::to_writer(&mut writer, teachers)
    };
    written.map_err(|e| json_error(path, e))?;
    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn json_error(path: &Path, e: serde_json::Error) -> Error {
    if e.is_io() {
        Error::Io {
            path: path.to_path_buf(),
            source: e.into(),
        }
    } else {
        Error::Json(e)
    }
}
