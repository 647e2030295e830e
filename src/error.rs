use wasm_bindgen::JsValue;

/// Errors raised while configuring or attaching the particle engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("particle count must be at least 1")]
    NoParticles,

    #[error("color palette must not be empty")]
    EmptyPalette,

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("empty sampling range for {0}")]
    EmptyRange(&'static str),

    #[error("canvas has no 2d rendering context")]
    ContextUnavailable,

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
