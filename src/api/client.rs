use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::systems::contact::{ContactForm, FormStatus};

use super::fetch::post_json;

fn label(status: &FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "idle",
        FormStatus::Sending => "sending",
        FormStatus::Sent => "sent",
        FormStatus::Failed(_) => "failed",
    }
}

/// Browser side of the contact form: holds the draft and posts it.
#[wasm_bindgen]
pub struct ContactClient {
    endpoint: String,
    form: Rc<RefCell<ContactForm>>,
}

#[wasm_bindgen]
impl ContactClient {
    #[wasm_bindgen(constructor)]
    pub fn new(endpoint: &str) -> ContactClient {
        Self { endpoint: endpoint.to_string(), form: Rc::new(RefCell::new(ContactForm::new())) }
    }

    pub fn set_field(&self, name: &str, value: &str) -> bool {
        self.form.borrow_mut().set_field(name, value)
    }

    pub fn field(&self, name: &str) -> Option<String> {
        self.form.borrow().draft().field(name).map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn submit_enabled(&self) -> bool {
        self.form.borrow().submit_enabled()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> String {
        label(self.form.borrow().status()).to_string()
    }

    /// Failure reason while `status` is `"failed"`.
    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        match self.form.borrow().status() {
            FormStatus::Failed(reason) => Some(reason.clone()),
            _ => None,
        }
    }

    /// Post the draft. Resolves to the resulting status label; a refused
    /// submit (incomplete, or already sending) resolves immediately.
    pub fn submit(&self) -> Promise {
        let next = self.form.borrow_mut().begin_submit();
        let Some(message) = next else {
            return Promise::resolve(&JsValue::from_str(&self.status()));
        };
        let form = Rc::clone(&self.form);
        let url = self.endpoint.clone();
        future_to_promise(async move {
            let reply = post_json(&url, &ContactForm::to_json(&message)).await;
            let status = label(form.borrow_mut().finish(reply));
            Ok(JsValue::from_str(status))
        })
    }
}
