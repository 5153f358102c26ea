//! Attaching the board to the host page.
//!
//! The board is mounted into an explicit container element rather than
//! looking one up from inside components. Mounting clears the container
//! first, so mounting twice into the same element leaves a single board.

#![cfg(feature = "csr")]

use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::*;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

use crate::app::App;
use crate::config::{self, BoardConfig, CONTAINER_ID_ATTR, LOG_LEVEL_ATTR, LogLevel};
use crate::error::MountError;

/// Mount a board into `container`, replacing whatever it held.
///
/// Dropping the returned handle unmounts the board; call `forget` on it to
/// keep the board for the lifetime of the page.
pub fn mount(container: HtmlElement, config: BoardConfig) -> UnmountHandle<impl leptos::tachys::view::Mountable> {
    container.set_inner_html("");
    log::info!("mounting capability board into #{}", config.container_id);
    mount_to(container, move || view! { <App config/> })
}

/// Resolve the container and config from the current document and mount.
///
/// # Errors
///
/// Returns [`MountError`] when there is no document or container element.
pub fn start_from_document() -> Result<(), MountError> {
    let document = web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;
    let container_id = config::container_id_from(document.body().and_then(|b| b.get_attribute(CONTAINER_ID_ATTR)));
    let container = find_container(&document, &container_id)?;

    let (config, config_error) = match BoardConfig::from_attributes(&container_id, |name| container.get_attribute(name)) {
        Ok(config) => (config, None),
        Err(e) => {
            let lenient = BoardConfig::from_attributes(&container_id, |name| {
                if name == LOG_LEVEL_ATTR { None } else { container.get_attribute(name) }
            })
            .unwrap_or_else(|_| BoardConfig { container_id: container_id.clone(), ..BoardConfig::default() });
            (lenient, Some(e))
        }
    };

    init_logging(config.log_level);
    if let Some(e) = config_error {
        log::warn!("{e}; using default log level");
    }

    mount(container, config).forget();
    Ok(())
}

/// Route `log` records to the browser console. Later calls are no-ops.
pub fn init_logging(level: LogLevel) {
    let _ = console_log::init_with_level(level.to_level());
}

fn find_container(document: &Document, id: &str) -> Result<HtmlElement, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::ContainerNotFound(id.to_owned()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::NotHtmlElement(id.to_owned()))
}
