//! Image previews for the menu editor
//!
//! A stored image is previewed by URL. A freshly selected file is previewed
//! from a temporary copy on disk, owned by [`LocalPreview`]; the copy is
//! removed when the preview is released or dropped.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use thal_client::ImageUpload;

#[derive(Debug)]
pub enum ImagePreview {
    /// Image already on the backend
    Stored(String),
    /// Local copy of a selected file
    Local(LocalPreview),
}

impl ImagePreview {
    /// What the UI shows for this preview (URL or local path)
    pub fn location(&self) -> String {
        match self {
            ImagePreview::Stored(url) => url.clone(),
            ImagePreview::Local(local) => local.path().display().to_string(),
        }
    }

    /// Release any resource held by the preview
    pub fn release(self) {
        if let ImagePreview::Local(local) = self
            && let Err(e) = local.release()
        {
            tracing::warn!(error = %e, "Failed to remove preview file");
        }
    }
}

/// Temporary file holding the bytes of a selected image
#[derive(Debug)]
pub struct LocalPreview {
    file: NamedTempFile,
}

impl LocalPreview {
    /// Write the upload to a fresh temp file
    pub fn create(upload: &ImageUpload) -> io::Result<Self> {
        Self::create_in(std::env::temp_dir(), upload)
    }

    /// Write the upload to a fresh temp file inside `dir`
    pub fn create_in(dir: impl AsRef<Path>, upload: &ImageUpload) -> io::Result<Self> {
        let suffix = format!(".{}", upload.extension());
        let mut file = Builder::new()
            .prefix("thal-preview-")
            .suffix(&suffix)
            .tempfile_in(dir)?;
        io::Write::write_all(&mut file, &upload.bytes)?;
        tracing::debug!(path = %file.path().display(), "Preview created");
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the temp file now, reporting failures
    pub fn release(self) -> io::Result<PathBuf> {
        let path = self.file.path().to_path_buf();
        self.file.close()?;
        tracing::debug!(path = %path.display(), "Preview released");
        Ok(path)
    }
}
