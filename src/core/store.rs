use crate::domain::model::Tournament;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, StandingsError};

const STORE_FILE: &str = "tournaments.json";

/// Tournament persistence on top of the `Storage` port.
///
/// The whole store is one JSON array of tournaments, rewritten on
/// every save. Loading a store that was never written is `None`, not
/// an error.
pub struct TournamentStore<S: Storage> {
    storage: S,
}

impl<S: Storage> TournamentStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn save(&self, tournaments: &[Tournament]) -> Result<()> {
        let data = serde_json::to_vec_pretty(tournaments)?;
        self.storage.write_file(STORE_FILE, &data).await?;
        tracing::debug!("Saved {} tournaments to store", tournaments.len());
        Ok(())
    }

    pub async fn load(&self) -> Result<Option<Vec<Tournament>>> {
        let data = match self.storage.read_file(STORE_FILE).await {
            Ok(data) => data,
            Err(StandingsError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let tournaments: Vec<Tournament> = serde_json::from_slice(&data)?;
        Ok(Some(tournaments))
    }

    pub async fn clear(&self) -> Result<()> {
        self.storage.remove_file(STORE_FILE).await
    }
}

/// Filesystem-safe identifier derived from a tournament name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut previous_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            previous_dash = false;
        } else if !previous_dash {
            slug.push('-');
            previous_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("tournament");
    }
    slug
}
