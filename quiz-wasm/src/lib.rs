mod integer_equations;
mod matrix_tex;

use wasm_bindgen::prelude::*;

/// Sets the panic hook to display useful error messages.
#[wasm_bindgen(js_name = "setPanicHook")]
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

#[wasm_bindgen]
pub enum Notation {
    Compact,
    Extensive,
}

impl Notation {
    pub fn to_rust(&self) -> quiz::Notation {
        match self {
            Notation::Compact => quiz::Notation::Compact,
            Notation::Extensive => quiz::Notation::Extensive,
        }
    }
}
