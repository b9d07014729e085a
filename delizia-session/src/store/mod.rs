//! SessionStore - the single source of truth for one visitor session
//!
//! Owns the cart ledger, the category filter and the reservation controller
//! behind one lock, together with the catalog they are read against.
//!
//! # Intent Flow
//!
//! ```text
//! dispatch(intent)
//!     ├─ 1. Lock session state (refuse if closed)
//!     ├─ 2. Apply mutation to cart / filter / reservation
//!     ├─ 3. Publish SessionEvent (still under the lock, so sequence order
//!     │     matches mutation order)
//!     └─ 4. Return
//! ```
//!
//! Every view clones the same handle. Readers re-derive what they need from
//! the current state; nothing derived is cached.


use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::intent::SessionIntent;
use shared::message::{SessionEvent, SessionEventPayload};
use shared::models::{
    CartLine, CategorySelection, DishRecord, ReservationDraft, ReservationField,
    ReservationStatus, SessionSnapshot, cart_subtotal,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::broadcast;

use crate::cart::CartLedger;
use crate::catalog::CatalogProvider;
use crate::core::{Config, Result, SessionError};
use crate::filter::CategoryFilter;
use crate::reservation::ReservationController;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Mutable session state, guarded by the store lock
#[derive(Debug)]
struct SessionState {
    cart: CartLedger,
    filter: CategoryFilter,
    reservation: ReservationController,
}

struct StoreInner {
    session_id: String,
    catalog: Arc<dyn CatalogProvider>,
    state: Mutex<SessionState>,
    event_tx: broadcast::Sender<SessionEvent>,
    sequence: AtomicU64,
    closed: AtomicBool,
}

impl StoreInner {
    /// Publish one event. Callers hold the state lock.
    fn publish(&self, payload: SessionEventPayload) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let event = SessionEvent::new(sequence, self.session_id.clone(), payload);
        tracing::debug!(sequence, event_type = %event.event_type, "Session event");
        if self.event_tx.send(event).is_err() {
            tracing::trace!("No active subscribers for session event");
        }
    }

    /// Timer callback target
    fn expire_confirmation(&self, episode: u64) {
        let mut state = self.state.lock();
        if self.closed.load(Ordering::SeqCst) {
            return;
        }
        if state.reservation.auto_reset(episode) {
            self.publish(SessionEventPayload::ReservationExpired { episode });
        }
    }
}

/// Cloneable handle to one session
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session_id", &self.inner.session_id)
            .field("event_tx", &"<broadcast::Sender>")
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl SessionStore {
    /// Create a session using the configured confirmation delay
    pub fn new(catalog: Arc<dyn CatalogProvider>, config: &Config) -> Self {
        Self::with_delay(catalog, config.confirmation_delay())
    }

    pub fn with_delay(catalog: Arc<dyn CatalogProvider>, confirmation_delay: Duration) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let session_id = uuid::Uuid::new_v4().to_string();
        tracing::info!(
            session_id = %session_id,
            dishes = catalog.dishes().len(),
            confirmation_delay_ms = u64::try_from(confirmation_delay.as_millis()).unwrap_or(u64::MAX),
            "Session started"
        );
        Self {
            inner: Arc::new(StoreInner {
                session_id,
                catalog,
                state: Mutex::new(SessionState {
                    cart: CartLedger::new(),
                    filter: CategoryFilter::new(),
                    reservation: ReservationController::new(confirmation_delay),
                }),
                event_tx,
                sequence: AtomicU64::new(0),
                closed: AtomicBool::new(false),
            }),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.inner.session_id
    }

    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.inner.catalog.as_ref()
    }

    /// Subscribe to session events
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.event_tx.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Run `f` against the state, refusing once the session is closed
    fn mutate<T>(&self, f: impl FnOnce(&mut SessionState, &StoreInner) -> T) -> Result<T> {
        let mut state = self.inner.state.lock();
        if self.inner.closed.load(Ordering::SeqCst) {
            return Err(SessionError::Closed);
        }
        Ok(f(&mut *state, self.inner.as_ref()))
    }

    // ========== Cart ==========

    /// Add one unit; returns the new quantity
    pub fn add_to_cart(&self, dish_id: &str) -> Result<u32> {
        self.mutate(|state, inner| {
            if !inner.catalog.contains(dish_id) {
                tracing::warn!(dish_id = %dish_id, "Adding dish that is not in the catalog");
            }
            let quantity = state.cart.add(dish_id);
            let item_count = state.cart.item_count();
            tracing::info!(dish_id = %dish_id, quantity, item_count, "Added to cart");
            inner.publish(SessionEventPayload::CartItemChanged {
                dish_id: dish_id.to_string(),
                quantity,
                item_count,
            });
            quantity
        })
    }

    /// Remove one unit; `None` when the dish was not in the cart
    pub fn remove_from_cart(&self, dish_id: &str) -> Result<Option<u32>> {
        self.mutate(|state, inner| {
            let quantity = state.cart.remove(dish_id)?;
            let item_count = state.cart.item_count();
            tracing::info!(dish_id = %dish_id, quantity, item_count, "Removed from cart");
            inner.publish(SessionEventPayload::CartItemChanged {
                dish_id: dish_id.to_string(),
                quantity,
                item_count,
            });
            Some(quantity)
        })
    }

    pub fn clear_cart(&self) -> Result<()> {
        self.mutate(|state, inner| {
            let dropped = state.cart.clear();
            tracing::info!(dropped, "Cart cleared");
            inner.publish(SessionEventPayload::CartCleared);
        })
    }

    // ========== Category filter ==========

    /// Toggle a category chip; returns the resulting selection
    pub fn toggle_category(&self, category: &str) -> Result<CategorySelection> {
        self.mutate(|state, inner| {
            let selection = state.filter.toggle(category).clone();
            tracing::info!(selection = %selection, "Category filter changed");
            inner.publish(SessionEventPayload::CategoryChanged {
                selection: selection.clone(),
            });
            selection
        })
    }

    /// The "All" chip
    pub fn clear_category(&self) -> Result<()> {
        self.mutate(|state, inner| {
            if state.filter.clear() {
                tracing::info!("Category filter cleared");
                inner.publish(SessionEventPayload::CategoryChanged {
                    selection: CategorySelection::All,
                });
            }
        })
    }

    // ========== Reservation ==========

    pub fn set_field(&self, field: ReservationField, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.mutate(|state, inner| {
            state.reservation.set_field(field, value);
            inner.publish(SessionEventPayload::DraftChanged { field });
        })
    }

    pub fn set_time(&self, value: impl Into<String>) -> Result<()> {
        self.set_field(ReservationField::Time, value)
    }

    pub fn set_guest_count(&self, value: impl Into<String>) -> Result<()> {
        self.set_field(ReservationField::GuestCount, value)
    }

    /// Reset the draft to defaults (status untouched)
    pub fn reset_reservation(&self) -> Result<()> {
        self.mutate(|state, inner| {
            state.reservation.manual_reset();
            tracing::debug!("Reservation draft reset");
            inner.publish(SessionEventPayload::DraftReset);
        })
    }

    /// Submit the draft; returns the confirmation episode
    ///
    /// An incomplete draft, or a submit made outside a Tokio runtime, is
    /// rejected with no state change. Callers that want the silent form
    /// behaviour can ignore the error.
    pub fn submit_reservation(&self) -> Result<u64> {
        let weak: Weak<StoreInner> = Arc::downgrade(&self.inner);
        self.mutate(|state, inner| -> Result<u64> {
            let episode = state.reservation.submit(move |episode| {
                if let Some(inner) = weak.upgrade() {
                    inner.expire_confirmation(episode);
                }
            })?;
            inner.publish(SessionEventPayload::ReservationConfirmed { episode });
            Ok(episode)
        })?
    }

    /// Apply a user intent
    pub fn dispatch(&self, intent: SessionIntent) -> Result<()> {
        tracing::debug!(intent = intent.name(), "Dispatching intent");
        match intent {
            SessionIntent::AddToCart { dish_id } => self.add_to_cart(&dish_id).map(|_| ()),
            SessionIntent::RemoveFromCart { dish_id } => {
                self.remove_from_cart(&dish_id).map(|_| ())
            }
            SessionIntent::ClearCart => self.clear_cart(),
            SessionIntent::ToggleCategory { category } => {
                self.toggle_category(&category).map(|_| ())
            }
            SessionIntent::ClearCategory => self.clear_category(),
            SessionIntent::SetReservationField { field, value } => self.set_field(field, value),
            SessionIntent::PickTime { value } => self.set_time(value),
            SessionIntent::PickGuestCount { value } => self.set_guest_count(value),
            SessionIntent::ResetReservation => self.reset_reservation(),
            SessionIntent::SubmitReservation => self.submit_reservation().map(|_| ()),
        }
    }

    /// End the session
    ///
    /// Cancels a pending confirmation reset and refuses later mutations.
    /// Closing twice is a no-op.
    pub fn close(&self) {
        let mut state = self.inner.state.lock();
        if self.inner.closed.swap(true, Ordering::SeqCst) {
            return;
        }
        state.reservation.teardown();
        tracing::info!(session_id = %self.inner.session_id, "Session closed");
        self.inner.publish(SessionEventPayload::SessionClosed);
    }

    // ========== Derived reads ==========

    /// Dishes visible under the current category selection
    pub fn visible_catalog(&self) -> Vec<DishRecord> {
        let state = self.inner.state.lock();
        state
            .filter
            .apply(self.inner.catalog.dishes())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn cart_view(&self) -> Vec<CartLine> {
        self.inner.state.lock().cart.view(self.inner.catalog.dishes())
    }

    /// Distinct dishes in the cart (header badge)
    pub fn cart_item_count(&self) -> usize {
        self.inner.state.lock().cart.item_count()
    }

    pub fn cart_subtotal(&self) -> Decimal {
        cart_subtotal(&self.cart_view())
    }

    pub fn quantity(&self, dish_id: &str) -> u32 {
        self.inner.state.lock().cart.quantity(dish_id)
    }

    /// Filter chips, in catalog order
    pub fn categories(&self) -> Vec<String> {
        self.inner.catalog.categories()
    }

    pub fn selection(&self) -> CategorySelection {
        self.inner.state.lock().filter.selection().clone()
    }

    pub fn draft(&self) -> ReservationDraft {
        self.inner.state.lock().reservation.draft().clone()
    }

    pub fn status(&self) -> ReservationStatus {
        self.inner.state.lock().reservation.status()
    }

    pub fn has_pending_confirmation(&self) -> bool {
        self.inner.state.lock().reservation.has_pending_timer()
    }

    /// Everything the presentation layer renders, read under one lock
    pub fn snapshot(&self) -> SessionSnapshot {
        let dishes = self.inner.catalog.dishes();
        let state = self.inner.state.lock();
        let cart = state.cart.view(dishes);
        SessionSnapshot {
            session_id: self.inner.session_id.clone(),
            visible_catalog: state.filter.apply(dishes).into_iter().cloned().collect(),
            categories: self.inner.catalog.categories(),
            selection: state.filter.selection().clone(),
            cart_item_count: state.cart.item_count(),
            cart_subtotal: cart_subtotal(&cart),
            cart,
            draft: state.reservation.draft().clone(),
            status: state.reservation.status(),
        }
    }
}
