use contracts::system::session::{Session, SessionStore, SessionStoreError};
use std::path::{Path, PathBuf};

/// Session persisted as JSON next to the config (`session.json`).
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> SessionStoreError {
    SessionStoreError::new(format!("cannot {} {}: {}", action, path.display(), err))
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| storage_error("read", &self.path, e))?;
        let session =
            serde_json::from_str(&contents).map_err(|e| storage_error("parse", &self.path, e))?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| storage_error("create", dir, e))?;
        }
        let contents = serde_json::to_string_pretty(session)
            .map_err(|e| storage_error("serialize", &self.path, e))?;
        std::fs::write(&self.path, contents).map_err(|e| storage_error("write", &self.path, e))?;

        // Токен даёт полный доступ к API: файл читает только владелец
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(|e| storage_error("restrict", &self.path, e))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("remove", &self.path, e)),
        }
    }
}
