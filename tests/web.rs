//! Browser-only adapters. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use folio_engine::api::{ContactClient, ContactEndpoint, JsEnv};
use folio_engine::site::{LocalStorageStore, Theme, ThemeStore};
use folio_engine::systems::contact::CredentialSource;
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn env_object() -> Object {
    let env = Object::new();
    Reflect::set(&env, &"EMAIL_USER".into(), &"owner@folio.dev".into()).unwrap();
    Reflect::set(&env, &"EMAIL_PASS".into(), &JsValue::from_f64(42.0)).unwrap();
    env
}

#[wasm_bindgen_test]
fn js_env_reads_string_values_only() {
    let env = JsEnv::new(env_object());
    assert_eq!(env.lookup("EMAIL_USER").as_deref(), Some("owner@folio.dev"));
    assert_eq!(env.lookup("EMAIL_PASS"), None);
    assert_eq!(env.lookup("MISSING"), None);
}

async fn reply(endpoint: &ContactEndpoint, method: &str, body: &str) -> JsValue {
    let promise = endpoint.handle(method.into(), Some("application/json".into()), body.into(), env_object());
    JsFuture::from(promise).await.unwrap()
}

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &key.into()).unwrap()
}

#[wasm_bindgen_test]
async fn endpoint_answers_preflight_and_validation() {
    let endpoint = ContactEndpoint::new("{}").unwrap();

    let preflight = reply(&endpoint, "OPTIONS", "").await;
    assert_eq!(get(&preflight, "status").as_f64(), Some(200.0));
    assert!(get(&preflight, "body").is_null());
    let headers = get(&preflight, "headers");
    assert_eq!(get(&headers, "Access-Control-Allow-Origin").as_string().as_deref(), Some("*"));

    let missing = reply(&endpoint, "POST", r#"{"name":"Ada"}"#).await;
    assert_eq!(get(&missing, "status").as_f64(), Some(400.0));

    let wrong = reply(&endpoint, "GET", "").await;
    assert_eq!(get(&wrong, "status").as_f64(), Some(405.0));
}

#[wasm_bindgen_test]
async fn client_refuses_incomplete_draft() {
    let client = ContactClient::new("/api/send-email");
    assert!(client.set_field("name", "Ada"));
    assert!(!client.submit_enabled());
    let status = JsFuture::from(client.submit()).await.unwrap();
    assert_eq!(status.as_string().as_deref(), Some("idle"));
}

#[wasm_bindgen_test]
fn theme_round_trips_through_local_storage() {
    let mut store = LocalStorageStore;
    store.save(Theme::Dark);
    assert_eq!(store.load(), Some(Theme::Dark));
    store.save(Theme::Light);
    assert_eq!(store.load(), Some(Theme::Light));
}
