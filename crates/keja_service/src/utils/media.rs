use anyhow::Context;
use std::path::Path;

/// Writes an uploaded file under the media root and returns its relative
/// path for storage. Filenames are generated; only the extension survives
/// from the client.
pub async fn save_upload(
    media_root: &Path,
    subdir: &str,
    original_name: Option<&str>,
    bytes: &[u8],
) -> anyhow::Result<String> {
    let extension = extension_of(original_name);
    let relative = format!("{subdir}/{}.{extension}", uuid::Uuid::new_v4());

    let target = media_root.join(&relative);
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .context("unable to create media directory")?;
    }
    tokio::fs::write(&target, bytes)
        .await
        .with_context(|| format!("unable to write upload to {}", target.display()))?;

    Ok(relative)
}

/// Client-supplied extension, lowercased and sanitized; anything suspicious
/// becomes "bin"
fn extension_of(original_name: Option<&str>) -> String {
    let Some(name) = original_name else {
        return "bin".to_string();
    };
    let Some((_, ext)) = name.rsplit_once('.') else {
        return "bin".to_string();
    };
    let ext = ext.to_ascii_lowercase();
    if ext.is_empty() || ext.len() > 8 || !ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return "bin".to_string();
    }
    ext
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extension_of(Some("photo.JPG")), "jpg");
        assert_eq!(extension_of(Some("house.webp")), "webp");
    }

    #[test]
    fn suspicious_extensions_become_bin() {
        assert_eq!(extension_of(Some("noext")), "bin");
        assert_eq!(extension_of(Some("dots.")), "bin");
        assert_eq!(extension_of(Some("weird.j/pg")), "bin");
        assert_eq!(extension_of(None), "bin");
    }
}
