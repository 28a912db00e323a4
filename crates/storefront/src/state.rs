//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::{PizzaStore, RepositoryError};
use crate::services::CartStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and owns the two stores the
/// routes operate on. Nothing lives in module-level statics.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pizzas: PizzaStore,
    cart: CartStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Opens the pizza catalog named by `config.data_file` and starts with an
    /// empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be opened or created.
    pub async fn new(config: StorefrontConfig) -> Result<Self, RepositoryError> {
        let pizzas = PizzaStore::open(&config.data_file).await?;
        let cart = CartStore::new(config.cart_ttl);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pizzas,
                cart,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the pizza catalog.
    #[must_use]
    pub fn pizzas(&self) -> &PizzaStore {
        &self.inner.pizzas
    }

    /// Get a reference to the shared cart.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }
}
