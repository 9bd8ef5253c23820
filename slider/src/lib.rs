use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlCollection};

pub mod block;
pub mod carousel;
pub mod dom;

pub use carousel::{Gesture, Point, Schedule, Slider, Surface, Transition};
pub use dom::SliderHandle;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a slider needs at least one page")]
    NoPages,
    #[error("could not find element matching '{0}'")]
    MissingElement(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Dom(format!("{:?}", value))
    }
}

pub trait ElementList {
    fn to_list<T: AsRef<Element> + JsCast>(&self) -> Vec<T>;
}

impl ElementList for HtmlCollection {
    fn to_list<T>(&self) -> Vec<T>
    where
        T: AsRef<Element> + JsCast,
    {
        let mut result = Vec::with_capacity(self.length() as usize);

        for index in 0..self.length() {
            if let Some(item) = self.item(index) {
                // Skip children of another element type
                if let Ok(item) = item.dyn_into::<T>() {
                    result.push(item);
                }
            }
        }

        result
    }
}

/// Finds the first element below `parent` matching `selector`.
pub fn find(parent: &Element, selector: &str) -> Result<Element, Error> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| Error::MissingElement(selector.to_string()))
}
