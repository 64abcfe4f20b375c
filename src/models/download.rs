//! Model download and installation management.
//!
//! Downloads Whisper models from HuggingFace into the user's cache directory
//! (`~/.cache/vocoach/models/`).

use crate::error::{Result, VocoachError};
use crate::models::catalog::get_model;
use std::fs;
use std::path::PathBuf;

/// Get the directory where models are stored.
pub fn models_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join("vocoach")
        .join("models")
}

/// Get the full path for a model file.
///
/// Always returns a path regardless of whether the model is in the catalog.
/// The file may or may not exist on disk.
pub fn model_path(name: &str) -> PathBuf {
    models_dir().join(format!("ggml-{name}.bin"))
}

/// Check if a model is installed.
pub fn is_model_installed(name: &str) -> bool {
    model_path(name).exists()
}

/// Resolve a model name to its installed path, downloading it if necessary.
///
/// With `no_download` set, a missing model is an error instead of a download.
pub fn ensure_model(name: &str, no_download: bool) -> Result<PathBuf> {
    let path = model_path(name);
    if path.exists() {
        return Ok(path);
    }

    // Unknown names fail here before any network traffic
    get_model(name)?;

    if no_download {
        return Err(VocoachError::ModelDownload {
            message: format!(
                "Model '{}' is not installed and downloads are disabled. \
                 Run 'vocoach models install {}' first.",
                name, name
            ),
        });
    }

    download_model(name, true)
}

/// Download a Whisper model from the catalog.
///
/// The download is streamed to a temporary file in the models directory and
/// renamed into place only on success, so an interrupted download never
/// leaves a truncated model behind.
#[cfg(feature = "model-download")]
pub fn download_model(name: &str, progress: bool) -> Result<PathBuf> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::io::Write;

    let info = get_model(name)?;
    let path = model_path(name);

    if path.exists() {
        log::info!("model '{}' is already installed at {}", name, path.display());
        return Ok(path);
    }

    let dir = models_dir();
    fs::create_dir_all(&dir).map_err(|e| VocoachError::ModelDownload {
        message: format!("Failed to create models directory: {}", e),
    })?;

    if progress {
        eprintln!("Downloading {} ({} MB)...", name, info.size_mb);
    }

    let url = info.url();
    let response = reqwest::blocking::Client::builder()
        .timeout(None)
        .build()
        .and_then(|client| client.get(&url).send())
        .map_err(|e| VocoachError::ModelDownload {
            message: format!("Failed to start download: {}", e),
        })?;

    if !response.status().is_success() {
        return Err(VocoachError::ModelDownload {
            message: format!("Download failed with status: {}", response.status()),
        });
    }

    let total_size = response.content_length().unwrap_or(0);

    let mut reader: Box<dyn std::io::Read> = if progress {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Box::new(pb.wrap_read(response))
    } else {
        Box::new(response)
    };

    let mut temp_file =
        tempfile::NamedTempFile::new_in(&dir).map_err(|e| VocoachError::ModelDownload {
            message: format!("Failed to create temporary file: {}", e),
        })?;

    let received = std::io::copy(&mut reader, temp_file.as_file_mut()).map_err(|e| {
        VocoachError::ModelDownload {
            message: format!("Download interrupted: {}", e),
        }
    })?;

    // A short read means a truncated model; the temp file is dropped unpersisted
    verify_size(total_size, received)?;

    temp_file
        .as_file_mut()
        .flush()
        .map_err(|e| VocoachError::ModelDownload {
            message: format!("Failed to flush download: {}", e),
        })?;

    temp_file
        .persist(&path)
        .map_err(|e| VocoachError::ModelDownload {
            message: format!("Failed to move model into place: {}", e),
        })?;

    if progress {
        eprintln!("Model installed to: {}", path.display());
    }

    Ok(path)
}

/// Check a downloaded byte count against the server's Content-Length.
///
/// The mirror always reports Content-Length; `expected == 0` means the header
/// was absent and nothing can be checked.
#[cfg(feature = "model-download")]
fn verify_size(expected: u64, received: u64) -> Result<()> {
    if expected > 0 && received != expected {
        return Err(VocoachError::ModelDownload {
            message: format!(
                "Incomplete download: expected {} bytes, received {}",
                expected, received
            ),
        });
    }
    Ok(())
}

/// Download stub used when the `model-download` feature is disabled.
#[cfg(not(feature = "model-download"))]
pub fn download_model(name: &str, _progress: bool) -> Result<PathBuf> {
    let _ = get_model(name)?;
    Err(VocoachError::ModelDownload {
        message: format!(
            "Model '{}' is not installed and this build cannot download models. \
             Rebuild with the model-download feature or place the file at {}.",
            name,
            model_path(name).display()
        ),
    })
}

/// List all installed model names by scanning the models directory.
///
/// Discovers every `ggml-*.bin` file, not just catalog models.
pub fn list_installed_models() -> Vec<String> {
    let entries = match fs::read_dir(models_dir()) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let name = entry.file_name();
            let name = name.to_str()?;
            let model = name.strip_prefix("ggml-")?.strip_suffix(".bin")?;
            if entry.path().is_file() {
                Some(model.to_string())
            } else {
                None
            }
        })
        .collect();

    names.sort();
    names
}

/// Format model information for display in `models list`.
pub fn format_model_info(model: &crate::models::catalog::ModelInfo) -> String {
    let status = if is_model_installed(model.name) {
        "[installed]"
    } else {
        "[not installed]"
    };
    format!("{:12} {:5} MB   {}", model.name, model.size_mb, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_dir_lives_under_the_app_cache() {
        let dir = models_dir();
        assert!(dir.to_string_lossy().contains("vocoach"));
        assert!(dir.ends_with("vocoach/models"));
    }

    #[test]
    fn model_path_uses_ggml_filename() {
        let path = model_path("tiny.en");
        assert!(path.to_string_lossy().ends_with("ggml-tiny.en.bin"));
    }

    #[test]
    fn ensure_model_rejects_unknown_names() {
        match ensure_model("nonexistent_model_xyz", true) {
            Err(VocoachError::ModelUnknown { name }) => {
                assert_eq!(name, "nonexistent_model_xyz");
            }
            other => panic!("expected ModelUnknown, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn ensure_model_with_no_download_fails_for_missing_model() {
        // "medium" is unlikely to be installed on CI machines; skip if present.
        if is_model_installed("medium") {
            return;
        }
        match ensure_model("medium", true) {
            Err(VocoachError::ModelDownload { message }) => {
                assert!(message.contains("downloads are disabled"));
            }
            other => panic!("expected ModelDownload, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn is_model_installed_false_for_unknown() {
        assert!(!is_model_installed("nonexistent_model_xyz"));
    }

    #[test]
    fn format_model_info_shows_name_size_and_status() {
        let model = crate::models::catalog::get_model("tiny.en").unwrap();
        let formatted = format_model_info(model);
        assert!(formatted.contains("tiny.en"));
        assert!(formatted.contains("75"));
        assert!(formatted.contains("installed"));
    }

    #[cfg(feature = "model-download")]
    #[test]
    fn verify_size_accepts_exact_and_unknown_lengths() {
        assert!(verify_size(142, 142).is_ok());
        // Absent Content-Length skips the check
        assert!(verify_size(0, 99).is_ok());
    }

    #[cfg(feature = "model-download")]
    #[test]
    fn verify_size_rejects_truncated_downloads() {
        match verify_size(142_000_000, 7_000_000) {
            Err(VocoachError::ModelDownload { message }) => {
                assert!(message.contains("Incomplete download"));
                assert!(message.contains("142000000"));
            }
            other => panic!("expected ModelDownload, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn list_installed_models_is_sorted_and_stripped() {
        let installed = list_installed_models();
        let mut sorted = installed.clone();
        sorted.sort();
        assert_eq!(installed, sorted);

        for name in &installed {
            assert!(!name.starts_with("ggml-"));
            assert!(!name.ends_with(".bin"));
        }
    }
}
