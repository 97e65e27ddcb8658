use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::domain::MailSettings;
use crate::systems::contact::{handle_submission, HttpMailTransport, SubmissionRequest, SubmissionResponse};

use super::env::JsEnv;
use super::fetch::FetchExecutor;

/// The contact endpoint. One instance per deployment; every request reads
/// credentials fresh from the `env` object it is given.
#[wasm_bindgen]
pub struct ContactEndpoint {
    settings: MailSettings,
}

#[wasm_bindgen]
impl ContactEndpoint {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<ContactEndpoint, JsValue> {
        MailSettings::from_json(settings_json)
            .map(|settings| Self { settings })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Resolves to `{ status, headers, body }` with `body` null when empty.
    pub fn handle(&self, method: String, content_type: Option<String>, body: String, env: Object) -> Promise {
        let settings = self.settings.clone();
        future_to_promise(async move {
            let request = SubmissionRequest::new(method, content_type.as_deref(), body);
            let transport = HttpMailTransport::new(FetchExecutor);
            let response = handle_submission(&request, &settings, &JsEnv::new(env), &transport).await;
            to_js(&response).map(JsValue::from)
        })
    }
}

fn to_js(response: &SubmissionResponse) -> Result<Object, JsValue> {
    let headers = Object::new();
    for (name, value) in &response.headers {
        Reflect::set(&headers, &JsValue::from_str(name), &JsValue::from_str(value))?;
    }
    let body = response.body.as_deref().map_or(JsValue::NULL, JsValue::from_str);

    let out = Object::new();
    Reflect::set(&out, &"status".into(), &JsValue::from(response.status))?;
    Reflect::set(&out, &"headers".into(), &headers)?;
    Reflect::set(&out, &"body".into(), &body)?;
    Ok(out)
}
