//! Errors raised while attaching a slider to the page.

use carousel_core::SliderError;
use thiserror::Error;

/// Browser binding failures.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The selector matched nothing.
    #[error("container '{0}' not found")]
    ContainerNotFound(String),

    /// A DOM call failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The slider itself rejected its input.
    #[error(transparent)]
    Slider(#[from] SliderError),
}

#[cfg(target_arch = "wasm32")]
impl From<BrowserError> for wasm_bindgen::JsValue {
    fn from(err: BrowserError) -> Self {
        Self::from_str(&err.to_string())
    }
}
