use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("No global window")]
    MissingWindow,

    #[error("Window has no document")]
    MissingDocument,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Site config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
