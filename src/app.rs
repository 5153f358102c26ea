//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::capability_board::CapabilityBoard;
use crate::config::BoardConfig;

/// Root application component.
///
/// Provides the board configuration to child components and renders the board.
#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text="Capability Board"/>
        <CapabilityBoard/>
    }
}
