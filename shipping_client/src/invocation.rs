//! Lifecycle of one rate lookup: `Idle -> Loading -> {Success | Failed | Cancelled}`.
//!
//! `InvocationState::apply` is the whole state machine; it is pure and rejects
//! transitions the lifecycle does not allow. `Invocation::run` drives it:
//! - publishes `Loading` before the request is sent,
//! - runs the lookup on a worker thread,
//! - `select!`s between the worker result and a cancel signal,
//! - publishes exactly one terminal state.
//!
//! Subscribers receive every published state on a `crossbeam_channel::Sender`.
//! A subscriber that went away is not an error.
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender, bounded, never, select};
use log::debug;
use serde::Serialize;
use shipping_common::{CarrierQuote, Result, ShippingError, ShippingRequest};

use crate::model::view::ShippingView;
use crate::presenter::QuotePresenter;
use crate::rate_client::RateSource;

/// State of a tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "camelCase")]
pub enum InvocationState {
    /// Nothing requested yet.
    Idle,
    /// Request in flight.
    Loading,
    /// Quotes in response order.
    Success(Vec<CarrierQuote>),
    /// User-facing failure message.
    Failed(String),
    /// Abandoned while loading; no result is reported.
    Cancelled,
}

/// Input to [`InvocationState::apply`].
#[derive(Debug)]
pub enum Transition {
    /// Request issued.
    Start,
    /// Request finished, successfully or not.
    Resolve(Result<Vec<CarrierQuote>>),
    /// Caller gave up waiting.
    Cancel,
}

impl Transition {
    fn name(&self) -> &'static str {
        match self {
            Transition::Start => "start",
            Transition::Resolve(_) => "resolve",
            Transition::Cancel => "cancel",
        }
    }
}

impl InvocationState {
    /// Applies `transition`, returning the next state.
    ///
    /// Failures are flattened to the user-facing message here; the typed error
    /// has already been logged by the rate client.
    pub fn apply(self, transition: Transition) -> Result<InvocationState> {
        match (self, transition) {
            (InvocationState::Idle, Transition::Start) => Ok(InvocationState::Loading),
            (InvocationState::Loading, Transition::Resolve(Ok(quotes))) => {
                Ok(InvocationState::Success(quotes))
            }
            (InvocationState::Loading, Transition::Resolve(Err(e))) => {
                Ok(InvocationState::Failed(String::from(e.user_message())))
            }
            (InvocationState::Loading, Transition::Cancel) => Ok(InvocationState::Cancelled),
            (state, transition) => Err(ShippingError::InvalidTransition {
                state: String::from(state.name()),
                transition: String::from(transition.name()),
            }),
        }
    }

    /// Short state name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            InvocationState::Idle => "idle",
            InvocationState::Loading => "loading",
            InvocationState::Success(_) => "success",
            InvocationState::Failed(_) => "failed",
            InvocationState::Cancelled => "cancelled",
        }
    }

    /// `true` once no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InvocationState::Success(_) | InvocationState::Failed(_) | InvocationState::Cancelled
        )
    }

    /// What a UI should draw for this state, if anything.
    pub fn view(&self) -> Option<ShippingView> {
        match self {
            InvocationState::Idle | InvocationState::Cancelled => None,
            InvocationState::Loading => Some(ShippingView::Loading(QuotePresenter::loading_view())),
            InvocationState::Success(quotes) => {
                Some(ShippingView::Carriers(QuotePresenter::present(quotes)))
            }
            InvocationState::Failed(message) => Some(ShippingView::Error(message.clone())),
        }
    }
}

/// Runs rate lookups through the invocation lifecycle.
pub struct Invocation {
    source: Arc<dyn RateSource>,
}

impl Invocation {
    /// Creates a runner over `source`.
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }

    /// Runs one lookup to completion and returns the terminal state.
    ///
    /// `cancel` may be `None` when the caller never cancels. A disconnected
    /// cancel channel is treated the same way.
    pub fn run(
        &self,
        request: ShippingRequest,
        listener: &Sender<InvocationState>,
        cancel: Option<&Receiver<()>>,
    ) -> Result<InvocationState> {
        let state = InvocationState::Idle.apply(Transition::Start)?;
        publish(listener, &state);

        let (result_tx, result_rx) = bounded::<Result<Vec<CarrierQuote>>>(1);
        let source = Arc::clone(&self.source);
        thread::spawn(move || {
            // The receiver is gone after a cancel; the late result is dropped.
            let _ = result_tx.send(source.get_rates(&request));
        });

        let never_cancelled = never::<()>();
        let cancel = cancel.unwrap_or(&never_cancelled);

        let transition = select! {
            recv(result_rx) -> msg => Transition::Resolve(worker_result(msg.ok())),
            recv(cancel) -> msg => match msg {
                Ok(()) => Transition::Cancel,
                Err(_) => Transition::Resolve(worker_result(result_rx.recv().ok())),
            },
        };

        let state = state.apply(transition)?;
        publish(listener, &state);
        Ok(state)
    }
}

fn worker_result(result: Option<Result<Vec<CarrierQuote>>>) -> Result<Vec<CarrierQuote>> {
    result.unwrap_or_else(|| {
        Err(ShippingError::Internal(String::from(
            "rate worker exited without a result",
        )))
    })
}

fn publish(listener: &Sender<InvocationState>, state: &InvocationState) {
    debug!("Invocation state: {}", state.name());
    if listener.send(state.clone()).is_err() {
        debug!("Invocation subscriber dropped; state {} not delivered", state.name());
    }
}
