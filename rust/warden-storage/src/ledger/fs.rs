use async_trait::async_trait;
use base58::ToBase58;
use std::path::{Path, PathBuf};

use crate::WardenStorageError;

use super::LedgerState;

/// Suffix of a value written by [LedgerState::put_states] but not yet moved
/// into place. Base58 never produces `.`, so staged files cannot be mistaken
/// for entries.
const STAGED_SUFFIX: &str = ".staged";

/// A basic file-system-based [LedgerState]. Every value is stored inside a
/// root directory as a file named after the base58-encoded BLAKE3 digest of
/// its key, so names have a fixed length however long the key is.
///
/// A batch written with [LedgerState::put_states] is first staged next to
/// the entries and then renamed into place. A failure while staging leaves
/// every entry as it was.
#[derive(Clone, Debug)]
pub struct FileSystemLedger {
    root_dir: PathBuf,
}

impl FileSystemLedger {
    /// Creates a new [FileSystemLedger] that stores files in `root_dir`,
    /// creating the directory if needed.
    pub async fn new<Pathlike>(root_dir: Pathlike) -> Result<Self, WardenStorageError>
    where
        Pathlike: AsRef<Path>,
    {
        let root_dir = root_dir.as_ref().to_owned();
        tokio::fs::create_dir_all(&root_dir)
            .await
            .map_err(WardenStorageError::unavailable)?;
        Ok(Self { root_dir })
    }

    fn make_path(&self, key: &str) -> PathBuf {
        let name = blake3::hash(key.as_bytes()).as_bytes().to_base58();
        self.root_dir.join(name)
    }

    fn make_staged_path(&self, key: &str) -> PathBuf {
        let mut path = self.make_path(key).into_os_string();
        path.push(STAGED_SUFFIX);
        path.into()
    }

    async fn discard(staged: &[(PathBuf, PathBuf)]) {
        for (staged_path, _) in staged {
            if let Err(error) = tokio::fs::remove_file(staged_path).await {
                tracing::warn!(
                    %error,
                    path = %staged_path.display(),
                    "Failed to discard staged value"
                );
            }
        }
    }
}

#[async_trait]
impl LedgerState for FileSystemLedger {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, WardenStorageError> {
        let path = self.make_path(key);
        if !tokio::fs::try_exists(&path)
            .await
            .map_err(WardenStorageError::unavailable)?
        {
            return Ok(None);
        }

        tokio::fs::read(path)
            .await
            .map(Some)
            .map_err(WardenStorageError::unavailable)
    }

    async fn put_state(&mut self, key: &str, value: Vec<u8>) -> Result<(), WardenStorageError> {
        tokio::fs::write(self.make_path(key), value)
            .await
            .map_err(WardenStorageError::unavailable)
    }

    async fn put_states(
        &mut self,
        entries: Vec<(String, Vec<u8>)>,
    ) -> Result<(), WardenStorageError> {
        let mut staged = Vec::with_capacity(entries.len());

        for (key, value) in entries {
            let staged_path = self.make_staged_path(&key);
            if let Err(error) = tokio::fs::write(&staged_path, value).await {
                Self::discard(&staged).await;
                return Err(WardenStorageError::unavailable(error));
            }
            staged.push((staged_path, self.make_path(&key)));
        }

        for (staged_path, path) in &staged {
            tokio::fs::rename(staged_path, path)
                .await
                .map_err(WardenStorageError::unavailable)?;
        }

        Ok(())
    }
}
