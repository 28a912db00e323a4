//! File-backed pizza repository.

use std::path::PathBuf;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use pizzeria_core::{NewPizza, Pizza, PizzaId};

use super::RepositoryError;

/// Repository for the pizza catalog file.
///
/// Every read-modify-write cycle runs under the store's lock, so two
/// concurrent creates cannot both read the same snapshot.
#[derive(Debug)]
pub struct PizzaStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl PizzaStore {
    /// Open the catalog at `path`, seeding an empty array if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the parent directory or file cannot be created.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();

        if !tokio::fs::try_exists(&path).await? {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, b"[]").await?;
            info!(path = %path.display(), "Created empty pizza catalog");
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// List every pizza in file order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Io` if the file cannot be read.
    /// Returns `RepositoryError::Json` if the file is not a JSON array of pizzas.
    pub async fn list(&self) -> Result<Vec<Pizza>, RepositoryError> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }

    /// Find a pizza by id.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list`].
    pub async fn find(&self, id: PizzaId) -> Result<Option<Pizza>, RepositoryError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.into_iter().find(|p| p.id == id))
    }

    /// Append a pizza and rewrite the file.
    ///
    /// The id is `count + 1`. After a deletion this can repeat an id that is
    /// still in the file; callers relying on unique ids must not delete.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::IdOverflow` if the catalog already holds `i32::MAX` entries,
    /// otherwise the read/write errors of [`Self::list`].
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn create(&self, new: NewPizza) -> Result<Pizza, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut pizzas = self.read_all().await?;

        let next = pizzas
            .len()
            .checked_add(1)
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(RepositoryError::IdOverflow)?;
        let pizza = Pizza::from_new(PizzaId::new(next), new);

        pizzas.push(pizza.clone());
        self.write_all(&pizzas).await?;

        debug!(id = %pizza.id, count = pizzas.len(), "Pizza appended");
        Ok(pizza)
    }

    /// Remove the pizza with `id` and rewrite the file.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no pizza has that id; the file is
    /// left untouched in that case.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: PizzaId) -> Result<Pizza, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut pizzas = self.read_all().await?;

        let index = pizzas
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let removed = pizzas.remove(index);

        self.write_all(&pizzas).await?;
        Ok(removed)
    }

    async fn read_all(&self) -> Result<Vec<Pizza>, RepositoryError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write_all(&self, pizzas: &[Pizza]) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec(pizzas)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
