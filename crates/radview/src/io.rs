//! Reading and writing Radiance view files (`.vf`).
//!
//! A view file holds a single line: `rvu` followed by the view parameters.

use std::fs;
use std::path::{Path, PathBuf};

use radview_core::{Options, Result, View, ViewError};

/// Loads a view from a view file.
///
/// The view is named after the file stem unless `name` is given.
///
/// # Errors
///
/// Returns [`ViewError::NotFound`] if the file does not exist and
/// [`ViewError::Format`] if it does not start with `rvu`.
pub fn load(path: impl AsRef<Path>, name: Option<&str>) -> Result<View> {
    load_with(path, name, &Options::default())
}

/// Loads a view from a view file using `options` for the file header.
pub fn load_with(path: impl AsRef<Path>, name: Option<&str>, options: &Options) -> Result<View> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ViewError::NotFound(path.to_path_buf()));
    }

    let name = match name {
        Some(name) => name.to_string(),
        None => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    log::debug!("Loading view '{name}' from {}", path.display());
    let content = fs::read_to_string(path)?;
    View::from_view_file_content_with(name, content.trim_end(), options)
}

/// Saves a view to `<dir>/<file_name>.vf`, defaulting to the view's name.
///
/// When `create_dir` is false the directory must already exist.
///
/// Returns the full path of the written file.
pub fn save(
    view: &View,
    dir: impl AsRef<Path>,
    file_name: Option<&str>,
    create_dir: bool,
) -> Result<PathBuf> {
    save_with(view, dir, file_name, create_dir, &Options::default())
}

/// Saves a view using `options` for the file header and extension.
pub fn save_with(
    view: &View,
    dir: impl AsRef<Path>,
    file_name: Option<&str>,
    create_dir: bool,
    options: &Options,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        if create_dir {
            fs::create_dir_all(dir)?;
        } else {
            return Err(ViewError::NotFound(dir.to_path_buf()));
        }
    }

    let path = dir.join(options.file_name(file_name.unwrap_or(view.name())));
    fs::write(&path, view.view_file_content_with(options))?;
    log::debug!("Saved view '{}' to {}", view.name(), path.display());
    Ok(path)
}
