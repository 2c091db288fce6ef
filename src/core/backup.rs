use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::ask_confirmation;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest`, optionally zipping it.
    ///
    /// Returns the written file, or `None` when the user declined to
    /// overwrite an existing destination.
    pub fn backup(
        db_path: &Path,
        dest: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        // 1️⃣ Check DB exists
        if !db_path.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", db_path.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        // 3️⃣ Ask before overwriting
        if final_target.exists() && !force {
            warning(format!("The file '{}' already exists.", final_target.display()));
            if !ask_confirmation("Overwrite it?") {
                info("Backup cancelled.");
                return Ok(None);
            }
        }

        // 4️⃣ Copy or compress
        if compress {
            compress_into(db_path, &final_target)?;
        } else {
            fs::copy(db_path, &final_target)?;
        }

        success(format!("Backup created: {}", final_target.display()));
        Ok(Some(final_target))
    }
}

/// Write `src` as the single entry of a deflated zip archive at `zip_path`.
fn compress_into(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rrecall.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
