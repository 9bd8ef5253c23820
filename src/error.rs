use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Fetch(#[from] gloo_net::Error),
    #[error("request failed: {0} {1}")]
    Status(u16, String),
    #[error("could not find element matching '{0}'")]
    MissingElement(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Slider(#[from] slider::Error),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Dom(format!("{:?}", value))
    }
}
