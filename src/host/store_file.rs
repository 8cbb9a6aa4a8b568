//! Reading and writing the snippets file

use std::io::ErrorKind;
use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::snippet::SnippetError;

/// Contents of the snippets file, `None` if it does not exist yet
pub async fn read_existing(path: &Path) -> Result<Option<String>, SnippetError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(SnippetError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| SnippetError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(ErrorKind::InvalidData, e),
        })
}

/// Replace the snippets file with `text` in a single write.
///
/// Missing parent directories are created.
pub async fn write_snippets(path: &Path, text: &str) -> Result<(), SnippetError> {
    let open_err = |source| SnippetError::FileOpen {
        path: path.to_path_buf(),
        source,
    };
    let write_err = |source| SnippetError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(open_err)?;
    }

    let mut file = tokio::fs::File::create(path).await.map_err(open_err)?;
    file.write_all(text.as_bytes()).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)?;

    Ok(())
}
