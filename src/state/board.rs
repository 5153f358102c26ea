//! Listing state for the capability board.
//!
//! DESIGN
//! ======
//! The board holds only the latest server snapshot. Each fetch takes a
//! ticket from `begin_load`; `finish_load` applies a response only when its
//! ticket is the newest one issued, so an older request that resolves late
//! cannot overwrite a newer listing.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::error::ApiError;
use crate::net::types::CapabilitySet;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(CapabilitySet),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardState {
    pub load: LoadState,
    /// Ticket of the most recently issued fetch.
    pub generation: u64,
}

impl BoardState {
    /// Start a fetch. The previous snapshot stays on screen until it lands.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply the result of fetch `ticket`. Returns `false` when it was superseded.
    pub fn finish_load(&mut self, ticket: u64, result: Result<CapabilitySet, ApiError>) -> bool {
        if ticket != self.generation {
            return false;
        }
        self.load = match result {
            Ok(set) => LoadState::Loaded(set),
            Err(_) => LoadState::Failed,
        };
        true
    }

    pub fn capabilities(&self) -> Option<&CapabilitySet> {
        match &self.load {
            LoadState::Loaded(set) => Some(set),
            LoadState::Loading | LoadState::Failed => None,
        }
    }
}
