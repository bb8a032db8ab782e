use std::path::PathBuf;

use crate::{Res, types::Credentials};

#[cfg(unix)]
const STORE_MODE: u32 = 0o644;

/// The JSON file that caches the access token between runs.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the saved credentials.
    ///
    /// A missing, unreadable or malformed file counts as "no saved session"
    /// and yields empty credentials.
    pub async fn load(&self) -> Credentials {
        self.try_load().await.unwrap_or_default()
    }

    pub async fn try_load(&self) -> Res<Credentials> {
        let content = async_fs::read_to_string(&self.path).await?;
        let credentials: Credentials = serde_json::from_str(&content)?;
        Ok(credentials)
    }

    /// Overwrites the store with `credentials` and restricts it to mode 0644.
    pub async fn save(&self, credentials: &Credentials) -> Res<()> {
        let json = serde_json::to_string(credentials)?;
        async_fs::write(&self.path, json).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            async_fs::set_permissions(&self.path, std::fs::Permissions::from_mode(STORE_MODE))
                .await?;
        }

        Ok(())
    }
}
