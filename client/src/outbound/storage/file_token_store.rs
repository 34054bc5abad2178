//! File-backed token store rooted in the client state directory.
//!
//! The token lives in a single file named [`TOKEN_KEY`]. Writes go through a
//! hidden temporary file and a rename so a crash never leaves a truncated
//! token behind.

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use tracing::debug;

use crate::domain::BearerToken;
use crate::domain::ports::{TOKEN_KEY, TokenStore, TokenStoreError};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Token store holding a capability handle on the state directory.
#[derive(Debug)]
pub struct FileTokenStore {
    dir: Dir,
}

impl FileTokenStore {
    /// Open (creating if needed) the state directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::Write`] when the directory cannot be
    /// created and [`TokenStoreError::Read`] when it cannot be opened.
    pub fn open(path: &Path) -> Result<Self, TokenStoreError> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|err| {
            TokenStoreError::write(format!("create {}: {err}", path.display()))
        })?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| TokenStoreError::read(format!("open {}: {err}", path.display())))?;
        Ok(Self { dir })
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<BearerToken>, TokenStoreError> {
        match self.dir.read_to_string(TOKEN_KEY) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(BearerToken::new(raw))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TokenStoreError::read(err.to_string())),
        }
    }

    fn save(&self, token: &BearerToken) -> Result<(), TokenStoreError> {
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp_name = format!(".{TOKEN_KEY}.tmp.{}.{counter}", std::process::id());

        write_temp(&self.dir, &tmp_name, token.as_str()).map_err(|err| {
            drop(self.dir.remove_file(&tmp_name));
            TokenStoreError::write(err.to_string())
        })?;
        self.dir
            .rename(&tmp_name, &self.dir, TOKEN_KEY)
            .map_err(|err| {
                drop(self.dir.remove_file(&tmp_name));
                TokenStoreError::write(err.to_string())
            })?;
        debug!("token persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match self.dir.remove_file(TOKEN_KEY) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(TokenStoreError::write(err.to_string())),
        }
    }
}

fn write_temp(dir: &Dir, name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn state_dir() -> TempDir {
        tempfile::tempdir().expect("temp dir")
    }

    #[rstest]
    fn missing_file_reads_as_absent(state_dir: TempDir) {
        let store = FileTokenStore::open(state_dir.path()).expect("open");
        assert_eq!(store.load(), Ok(None));
    }

    #[rstest]
    fn save_writes_raw_token_under_fixed_name(state_dir: TempDir) {
        let store = FileTokenStore::open(state_dir.path()).expect("open");
        store.save(&BearerToken::new("a.b.c")).expect("save");

        let on_disk = std::fs::read_to_string(state_dir.path().join("token")).expect("read");
        assert_eq!(on_disk, "a.b.c");
        assert_eq!(
            store.load().expect("load").map(|t| t.as_str().to_owned()),
            Some("a.b.c".to_owned())
        );
    }

    #[rstest]
    fn save_replaces_previous_token(state_dir: TempDir) {
        let store = FileTokenStore::open(state_dir.path()).expect("open");
        store.save(&BearerToken::new("old.token.value")).expect("first save");
        store.save(&BearerToken::new("new.token.value")).expect("second save");

        let entries: Vec<_> = std::fs::read_dir(state_dir.path())
            .expect("list")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("token")]);
        assert_eq!(
            store.load().expect("load").map(|t| t.as_str().to_owned()),
            Some("new.token.value".to_owned())
        );
    }

    #[rstest]
    fn clear_is_idempotent(state_dir: TempDir) {
        let store = FileTokenStore::open(state_dir.path()).expect("open");
        store.save(&BearerToken::new("a.b.c")).expect("save");
        store.clear().expect("first clear");
        store.clear().expect("second clear");
        assert!(!state_dir.path().join("token").exists());
    }

    #[rstest]
    fn open_creates_nested_state_directory(state_dir: TempDir) {
        let nested = state_dir.path().join("profile").join(".sporthub");
        let store = FileTokenStore::open(&nested).expect("open nested");
        store.save(&BearerToken::new("a.b.c")).expect("save");
        assert!(nested.join("token").is_file());
    }

    #[rstest]
    fn whitespace_only_file_reads_as_absent(state_dir: TempDir) {
        std::fs::write(state_dir.path().join("token"), "\n  \n").expect("seed");
        let store = FileTokenStore::open(state_dir.path()).expect("open");
        assert_eq!(store.load(), Ok(None));
    }
}
