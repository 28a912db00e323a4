//! Shared in-memory shopping cart with inactivity expiry.
//!
//! There is exactly one cart per process. It lives only in memory and is
//! emptied on request or once no HTTP traffic has been seen for the
//! inactivity window.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use pizzeria_core::{CartItem, Pizza, PizzaId};

/// Cart operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    /// No cart line exists for the pizza.
    #[error("pizza {0} is not in the cart")]
    NotInCart(PizzaId),
}

struct CartState {
    items: Vec<CartItem>,
    last_activity: Instant,
}

/// The process-wide cart.
///
/// Cheaply cloneable; clones share the same items and activity clock.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Mutex<CartState>>,
    window: Duration,
}

impl CartStore {
    /// Create an empty cart that expires after `window` of inactivity.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CartState {
                items: Vec::new(),
                last_activity: Instant::now(),
            })),
            window,
        }
    }

    // A panic while holding the lock cannot leave the Vec half-updated,
    // so a poisoned lock is still safe to use.
    fn state(&self) -> MutexGuard<'_, CartState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record HTTP activity now.
    pub fn touch(&self) {
        self.state().last_activity = Instant::now();
    }

    /// Snapshot of the cart lines in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<CartItem> {
        self.state().items.clone()
    }

    /// Add one unit of `pizza`, merging with an existing line.
    ///
    /// Returns the whole cart after the change.
    pub fn add(&self, pizza: &Pizza) -> Vec<CartItem> {
        let mut state = self.state();
        let items = &mut state.items;
        match items.iter_mut().find(|item| item.id == pizza.id) {
            Some(item) => item.quantity += 1,
            None => items.push(CartItem::for_pizza(pizza)),
        }
        items.clone()
    }

    /// Take one unit of `id` out of the cart, dropping the line at zero.
    ///
    /// Returns the whole cart after the change.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NotInCart` if there is no line for `id`.
    pub fn remove_one(&self, id: PizzaId) -> Result<Vec<CartItem>, CartError> {
        let mut state = self.state();
        let items = &mut state.items;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CartError::NotInCart(id))?;

        if item.quantity > 1 {
            item.quantity -= 1;
        } else {
            items.retain(|item| item.id != id);
        }
        Ok(items.clone())
    }

    /// Empty the cart and restart the inactivity clock.
    pub fn clear(&self) {
        let mut state = self.state();
        state.items.clear();
        state.last_activity = Instant::now();
    }

    /// Empty the cart if the last activity is at least one window ago.
    ///
    /// Returns `true` if the cart was cleared.
    pub fn expire_if_idle(&self) -> bool {
        let mut state = self.state();
        let idle = state.last_activity.elapsed();
        if idle < self.window {
            return false;
        }

        let dropped = state.items.len();
        state.items.clear();
        drop(state);

        if dropped > 0 {
            info!(
                dropped,
                idle_secs = idle.as_secs(),
                "Cart cleared after inactivity"
            );
        }
        true
    }

    /// Start the recurring inactivity check.
    ///
    /// The first check runs one window after start, then once per window.
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn_expiry(&self) -> ExpiryTask {
        let cart = self.clone();
        let period = self.window;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let cleared = cart.expire_if_idle();
                debug!(cleared, "Cart inactivity check");
            }
        });

        info!(period_secs = period.as_secs(), "Cart expiry task started");
        ExpiryTask { handle }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.state().items.len())
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

/// Handle to the background expiry check.
///
/// Dropping the handle leaves the task running; call [`ExpiryTask::shutdown`]
/// to stop it.
#[derive(Debug)]
pub struct ExpiryTask {
    handle: JoinHandle<()>,
}

impl ExpiryTask {
    /// Whether the task has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the expiry task and wait for it to wind down.
    pub async fn shutdown(self) {
        self.handle.abort();
        // Aborting yields a cancelled JoinError; nothing to report.
        let _ = self.handle.await;
        info!("Cart expiry task stopped");
    }
}
