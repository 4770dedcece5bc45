use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use json2xodr::transform::{json_to_xodr, ConvertError, ToXodrConfig};
use walkdir::WalkDir;

/// Files saved by the road editor
pub const INPUT_SUFFIX: &str = "_raw.json";
pub const OUTPUT_EXTENSION: &str = "xodr";

#[derive(Debug)]
pub enum BatchError {
    Io { path: PathBuf, source: io::Error },
    Convert { path: PathBuf, source: ConvertError },
    /// The conversion task did not finish
    Join { path: PathBuf, source: tokio::task::JoinError },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Convert { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Join { path, source } => {
                write!(f, "{}: conversion aborted: {}", path.display(), source)
            },
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Convert { source, .. } => Some(source),
            Self::Join { source, .. } => Some(source),
        }
    }
}

/// Every editor file below `dir`, in a stable order.
///
/// Symbolic links are not followed. Entries that cannot be read are logged and skipped.
///
/// # Errors
///
/// If `dir` itself cannot be read
pub fn find_inputs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                log::warn!("skipping: {}", e);
                continue;
            },
        };
        if !entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map_or(false, |name| name.ends_with(INPUT_SUFFIX))
        {
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}

/// Output next to the input, `road_raw.json` becomes `road_raw.xodr`
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// Convert one file, returning the path written
///
/// # Errors
///
/// Reading, converting or writing failed
pub fn convert_file(input: &Path, config: &ToXodrConfig) -> Result<PathBuf, BatchError> {
    log::info!("converting {}", input.display());
    let json = fs::read_to_string(input).map_err(|source| BatchError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let xodr = json_to_xodr(&json, config).map_err(|source| BatchError::Convert {
        path: input.to_path_buf(),
        source,
    })?;
    let output = output_path(input);
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| BatchError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&output, xodr).map_err(|source| BatchError::Io {
        path: output.clone(),
        source,
    })?;
    log::debug!("wrote {}", output.display());
    Ok(output)
}

/// Convert every input independently, one failure does not stop the others.
///
/// Results are in the order of `inputs`.
pub async fn convert_all(
    inputs: Vec<PathBuf>,
    config: Arc<ToXodrConfig>,
) -> Vec<Result<PathBuf, BatchError>> {
    let tasks = inputs.into_iter().map(|input| {
        let config = Arc::clone(&config);
        async move {
            let task_input = input.clone();
            tokio::task::spawn_blocking(move || convert_file(&task_input, &config))
                .await
                .unwrap_or_else(|source| Err(BatchError::Join {
                    path: input,
                    source,
                }))
        }
    });
    futures::future::join_all(tasks).await
}
