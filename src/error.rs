//! Error type for page enhancement.

use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("page already enhanced")]
    AlreadyInstalled,
    #[error("required element missing: {0}")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for EnhanceError {
    fn from(value: JsValue) -> Self {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return Self::Js(String::from(err.message()));
        }
        let message = match value.as_string() {
            Some(text) => text,
            None => format!("{value:?}"),
        };
        Self::Js(message)
    }
}

impl From<EnhanceError> for JsValue {
    fn from(err: EnhanceError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
