//! File sink for generated documents
//!
//! Copyright (c) 2025 Modeldoc Team
//! Licensed under the Apache-2.0 license

use crate::error::{DocError, DocResult};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// File name used when the caller does not supply one
pub const DEFAULT_FILE_NAME: &str = "model_documentation.txt";

/// Write `documents` into `directory/file_name`, one document per line group.
///
/// The directory is created when missing. With `append` the documents are
/// added after any existing content, otherwise the file is truncated first.
/// Each document is followed by a newline. Concurrent writers targeting the
/// same file must serialize externally.
///
/// Returns the path of the written file.
#[instrument(skip_all, fields(directory = %directory.as_ref().display(), append = append))]
pub fn save_into_file<I, S>(
    directory: impl AsRef<Path>,
    documents: I,
    file_name: Option<&str>,
    append: bool,
) -> DocResult<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let directory = directory.as_ref();
    fs::create_dir_all(directory).map_err(|e| DocError::io(directory, e))?;

    let file_name = file_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_FILE_NAME);
    let path = directory.join(file_name);

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(&path)
        .map_err(|e| DocError::io(&path, e))?;

    let mut writer = BufWriter::new(file);
    let mut written = 0usize;
    for document in documents {
        writeln!(writer, "{}", document.as_ref()).map_err(|e| DocError::io(&path, e))?;
        written += 1;
    }
    writer.flush().map_err(|e| DocError::io(&path, e))?;

    debug!(path = %path.display(), documents = written, append, "Saved documents");
    Ok(path)
}
