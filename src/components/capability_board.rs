//! The capability board: listing, per-card actions, and status slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the listing on mount and again after every successful
//! register/unregister. The whole list is re-rendered from the newest
//! snapshot; old cards and their handlers go away with their nodes.
//!
//! Cards render from a memo of the listing view, so taking a reload ticket
//! leaves the cards and their inputs in place until new data arrives.
//!
//! TRADE-OFFS
//! ==========
//! In-flight requests are never cancelled. A listing that resolves after a
//! newer one was issued is dropped by ticket, and a mutation whose card has
//! been re-rendered still reports into the slot keyed by its capability.

#[cfg(test)]
#[path = "capability_board_test.rs"]
mod capability_board_test;

use std::future::Future;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use std::collections::HashMap;

use crate::actions::{self, ActionOutcome, AppliedOutcome};
use crate::components::capability_card::{CapabilityCard, RegisterRequest, UnregisterRequest};
use crate::config::BoardConfig;
#[cfg(feature = "csr")]
use crate::config::STATUS_HIDE_AFTER;
use crate::net::api::HttpApi;
use crate::state::board::BoardState;
use crate::state::status::{StatusBoard, StatusMessage};
use crate::view::{BoardView, LOAD_FAILED_TEXT, LOADING_TEXT, render_board};

#[component]
pub fn CapabilityBoard() -> impl IntoView {
    let config = expect_context::<BoardConfig>();
    let api = HttpApi::new(config.api_base);
    let board = RwSignal::new(BoardState::default());
    let slots = StatusSlots::new();
    let listing = listing_view(board);

    if let Some(ticket) = board.try_update(BoardState::begin_load) {
        spawn_fetch(api.clone(), board, slots, ticket);
    }

    let on_register = Callback::new({
        let api = api.clone();
        move |(capability, input): RegisterRequest| {
            let raw_email = input.get_untracked();
            slots.clear(&capability);
            let api = api.clone();
            spawn(async move {
                let outcome = actions::register(&api, &capability, &raw_email).await;
                finish_action(outcome, &capability, Some(input), slots, &api, board);
            });
        }
    });

    let on_unregister = Callback::new(move |(capability, email): UnregisterRequest| {
        let api = api.clone();
        spawn(async move {
            let outcome = actions::unregister(&api, &capability, &email).await;
            finish_action(outcome, &capability, None, slots, &api, board);
        });
    });

    view! {
        <div class="capability-board">
            {move || match listing.get() {
                BoardView::Loading => view! { <p class="capability-board__loading">{LOADING_TEXT}</p> }.into_any(),
                BoardView::Failed => view! { <p class="capability-board__error">{LOAD_FAILED_TEXT}</p> }.into_any(),
                BoardView::Cards(cards) => {
                    cards
                        .into_iter()
                        .map(|card| {
                            let status = slots.visible(card.name.clone());
                            view! { <CapabilityCard card status on_register on_unregister/> }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

/// What the cards render. Only changes when the rendered listing does.
fn listing_view(board: RwSignal<BoardState>) -> Memo<BoardView> {
    Memo::new(move |_| board.with(|b| render_board(&b.load)))
}

/// Record `outcome` for `capability`, then clear the input, schedule the
/// auto-hide, and issue the reload it asks for.
fn finish_action(
    outcome: ActionOutcome,
    capability: &str,
    input: Option<RwSignal<String>>,
    slots: StatusSlots,
    api: &HttpApi,
    board: RwSignal<BoardState>,
) -> Option<AppliedOutcome> {
    let applied = slots
        .messages
        .try_update(|statuses| board.try_update(|b| actions::apply_outcome(outcome, capability, statuses, b)))
        .flatten()?;
    slots.schedule_hide(capability, applied.hide_token);
    if applied.clear_input {
        if let Some(input) = input {
            // The card may already be gone if another action re-rendered the list.
            let _ = input.try_set(String::new());
        }
    }
    if let Some(ticket) = applied.reload_ticket {
        spawn_fetch(api.clone(), board, slots, ticket);
    }
    Some(applied)
}

/// Fetch the listing for `ticket` and apply it unless a newer fetch was issued.
fn spawn_fetch(api: HttpApi, board: RwSignal<BoardState>, slots: StatusSlots, ticket: u64) {
    spawn(async move {
        let result = actions::load(&api).await;
        let applied = slots
            .messages
            .try_update(|statuses| board.try_update(|b| actions::apply_listing(ticket, result, b, statuses)))
            .flatten()
            .unwrap_or(false);
        if !applied {
            log::debug!("dropped superseded listing response {ticket}");
        }
    });
}

fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}

/// Status messages keyed by capability, each with at most one pending auto-hide.
#[derive(Clone, Copy)]
struct StatusSlots {
    messages: RwSignal<StatusBoard>,
    /// Hide timer per slot with the token it will hide. Dropping a `Timeout`
    /// cancels it, so replacing an entry cancels the old hide.
    #[cfg(feature = "csr")]
    timers: StoredValue<HashMap<String, (u64, Timeout)>, LocalStorage>,
}

impl StatusSlots {
    fn new() -> Self {
        Self {
            messages: RwSignal::new(StatusBoard::default()),
            #[cfg(feature = "csr")]
            timers: StoredValue::new_local(HashMap::new()),
        }
    }

    fn visible(self, capability: String) -> Signal<Option<StatusMessage>> {
        let messages = self.messages;
        Signal::derive(move || messages.with(|m| m.visible(&capability).cloned()))
    }

    fn clear(self, capability: &str) {
        self.messages.update(|m| m.clear(capability));
        #[cfg(feature = "csr")]
        self.timers.update_value(|timers| {
            timers.remove(capability);
        });
    }

    /// Hide `capability`'s message after [`STATUS_HIDE_AFTER`] unless a newer
    /// one replaces it. Timers that already fired or went stale are dropped here
    /// rather than from inside their own callback.
    #[cfg_attr(not(feature = "csr"), allow(clippy::unused_self))]
    fn schedule_hide(self, capability: &str, token: u64) {
        #[cfg(feature = "csr")]
        {
            let messages = self.messages;
            let key = capability.to_owned();
            let millis = u32::try_from(STATUS_HIDE_AFTER.as_millis()).unwrap_or(u32::MAX);
            let timeout = Timeout::new(millis, move || {
                let _ = messages.try_update(|m| m.hide(&key, token));
            });
            self.timers.update_value(|timers| {
                messages.with_untracked(|m| timers.retain(|name, (pending, _)| m.is_pending(name, *pending)));
                timers.insert(capability.to_owned(), (token, timeout));
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (capability, token);
    }
}
