//! The product-detail view-state machine.
//!
//! The view lifecycle is a tagged union consumed by exhaustive `match`:
//! a detail view starts in [`DetailView::Loading`], resolves exactly once to
//! [`DetailView::Success`] or [`DetailView::Failure`], and never returns to
//! loading. Transitions are pure `(state, event) -> state` functions with no
//! UI binding, so the whole lifecycle is testable in isolation.

use crate::types::{OrderQuantity, ProductDetailsBundle};

/// Which view the product-detail page renders.
///
/// A bundle is present if and only if the fetch succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Fetch in flight; show the loading indicator.
    Loading,
    /// Fetch resolved ok; the bundle is complete.
    Success(ProductDetailsBundle),
    /// Fetch resolved not-ok. No error detail is retained beyond the flag.
    Failure,
}

/// Events the product-detail state responds to.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    /// The fetch resolved with an ok response and a complete bundle.
    FetchSucceeded(ProductDetailsBundle),
    /// The fetch resolved not-ok (bad status, transport error, bad payload).
    FetchFailed,
    /// The user increased the order quantity.
    Increment,
    /// The user decreased the order quantity.
    Decrement,
}

/// The full state of one product-detail view instance.
///
/// Created at mount with status loading and quantity 1. The quantity counter
/// is independent of the fetch lifecycle: quantity events apply in every view
/// state, and fetch events never touch the counter.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailState {
    view: DetailView,
    order_quantity: OrderQuantity,
}

impl ProductDetailState {
    /// The state at component mount: loading, quantity 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            view: DetailView::Loading,
            order_quantity: OrderQuantity::initial(),
        }
    }

    /// Apply one event, producing the next state.
    ///
    /// Fetch resolution only acts on a loading view; `Success` and `Failure`
    /// are terminal and ignore further fetch events.
    #[must_use]
    pub fn apply(self, event: DetailEvent) -> Self {
        match event {
            DetailEvent::FetchSucceeded(bundle) => match self.view {
                DetailView::Loading => Self {
                    view: DetailView::Success(bundle),
                    ..self
                },
                DetailView::Success(_) | DetailView::Failure => self,
            },
            DetailEvent::FetchFailed => match self.view {
                DetailView::Loading => Self {
                    view: DetailView::Failure,
                    ..self
                },
                DetailView::Success(_) | DetailView::Failure => self,
            },
            DetailEvent::Increment => Self {
                order_quantity: self.order_quantity.increment(),
                ..self
            },
            DetailEvent::Decrement => Self {
                order_quantity: self.order_quantity.decrement(),
                ..self
            },
        }
    }

    /// The view to render.
    #[must_use]
    pub const fn view(&self) -> &DetailView {
        &self.view
    }

    /// The current order quantity.
    #[must_use]
    pub const fn order_quantity(&self) -> OrderQuantity {
        self.order_quantity
    }
}

impl Default for ProductDetailState {
    fn default() -> Self {
        Self::new()
    }
}
