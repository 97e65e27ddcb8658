use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

use crate::systems::contact::CredentialSource;

/// Host environment handed over as a plain JS object, e.g. `process.env`.
/// Non-string values read as absent.
pub struct JsEnv {
    vars: Object,
}

impl JsEnv {
    pub fn new(vars: Object) -> Self {
        Self { vars }
    }
}

impl CredentialSource for JsEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        Reflect::get(&self.vars, &JsValue::from_str(key)).ok()?.as_string()
    }
}
