//! Panels filled from static JSON resources, each driving a block slider.

use crate::Error;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::{Document, Element};

pub mod heroes;
pub mod news;
pub mod videos;

pub(crate) async fn fetch<T: DeserializeOwned>(url: &str) -> Result<T, Error> {
    log::trace!("requesting {url}...");
    let response = Request::get(url).send().await?;
    if response.status() != 200 {
        return Err(Error::Status(response.status(), response.status_text()));
    }
    Ok(response.json::<T>().await?)
}

pub(crate) fn find(document: &Document, selector: &str) -> Result<Element, Error> {
    document
        .query_selector(selector)?
        .ok_or_else(|| Error::MissingElement(selector.to_string()))
}

pub(crate) fn element(document: &Document, tag: &str, class: &str) -> Result<Element, Error> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

pub(crate) fn text(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, Error> {
    let element = element(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

pub(crate) fn page(document: &Document) -> Result<Element, Error> {
    element(document, "div", "slider-item")
}

/// Places `pages` into the panel's slider container and binds the panel as a
/// block container. With `replace`, any existing pages are discarded first.
pub(crate) fn fill(panel: &Element, pages: Vec<Element>, replace: bool) -> Result<(), Error> {
    let container = slider::find(panel, ".slider-container")?;
    if replace {
        container.set_text_content(None);
    }
    for page in &pages {
        container.append_child(page)?;
    }
    slider::block::bind_block(panel)?;
    Ok(())
}
