use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

mod config;
mod error;
pub mod models;
pub mod panels;

pub use error::Error;

/// Wires the banner and starts loading every data panel. Panels load
/// independently: one failing leaves only that panel unrendered.
pub fn start() -> Result<(), Error> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Dom("no document available".to_string()))?;

    if let Err(e) = banner(&document) {
        log::error!("unable to set up banner: {e}")
    }

    spawn("news", panels::news::load(document.clone()));
    spawn("hero", panels::heroes::load(document.clone()));
    spawn("video", panels::videos::load(document));
    Ok(())
}

fn banner(document: &Document) -> Result<(), Error> {
    let container = panels::find(document, config::BANNER_SLIDER)?;
    let dots = panels::find(document, config::BANNER_DOTS)?;
    slider::block::bind_banner(&container, dots, config::BANNER_INTERVAL)?;
    Ok(())
}

fn spawn<F>(name: &'static str, panel: F)
where
    F: Future<Output = Result<(), Error>> + 'static,
{
    spawn_local(async move {
        match panel.await {
            Ok(()) => log::trace!("{name} panel ready"),
            Err(e) => log::error!("unable to load {name} panel: {e}"),
        }
    });
}
