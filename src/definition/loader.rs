//! Definition loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::definition::schema::ApiDefinition;
use crate::error::StartupError;

/// Load every definition file from `dir`.
///
/// Creates the directory first if it does not exist (a pre-existing
/// directory is not an error), then reads each regular file in file-name
/// order. Files that fail to decode are skipped with a warning; I/O
/// failures are fatal.
pub fn load_definitions(dir: &Path) -> Result<Vec<ApiDefinition>, StartupError> {
    fs::create_dir_all(dir).map_err(|source| StartupError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut definitions = Vec::new();
    for path in list_definition_files(dir)? {
        let contents = fs::read(&path).map_err(|source| StartupError::ReadDefinition {
            path: path.clone(),
            source,
        })?;

        match serde_json::from_slice::<ApiDefinition>(&contents) {
            Ok(definition) => definitions.push(definition),
            Err(error) => {
                tracing::warn!(
                    file = %path.display(),
                    %error,
                    "skipping definition file that failed to decode"
                );
            }
        }
    }

    Ok(definitions)
}

/// List the regular files in `dir`, sorted by file name.
///
/// Sorting pins down duplicate-route resolution: `read_dir` order is
/// platform-dependent, and the route table gives the last registration
/// precedence.
fn list_definition_files(dir: &Path) -> Result<Vec<PathBuf>, StartupError> {
    let directory_error = |source| StartupError::Directory {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(directory_error)? {
        let entry = entry.map_err(directory_error)?;
        if entry.file_type().map_err(directory_error)?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();
    Ok(paths)
}
