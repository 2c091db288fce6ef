use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::ask_confirmation;
use std::fs;
use std::path::Path;

/// Check whether `path` may be created or overwritten.
///
/// - missing file → true
/// - existing file with `force` → true
/// - existing file without `force` → asks the user
///
/// Missing parent directories are created.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    if !path.exists() || force {
        return Ok(true);
    }

    if ask_confirmation(&format!(
        "The file '{}' already exists. Overwrite it?",
        path.display()
    )) {
        Ok(true)
    } else {
        info("Export cancelled: existing file not overwritten.");
        Ok(false)
    }
}
