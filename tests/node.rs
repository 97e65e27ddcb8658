//! Adapters under a window-less JS host. Run with `wasm-pack test --node`.
#![cfg(target_arch = "wasm32")]

use folio_engine::api::{ContactEndpoint, FetchExecutor};
use folio_engine::systems::contact::{DeliveryError, HttpCall, HttpExecutor};
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

// Nothing listens on the discard port, so fetch itself must run and fail.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/";

fn get(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &key.into()).unwrap()
}

#[wasm_bindgen_test]
async fn fetch_executor_reaches_global_fetch() {
    let call = HttpCall {
        method: "POST",
        url: DEAD_ENDPOINT.to_string(),
        headers: vec![("Content-Type".into(), "application/json".into())],
        body: "{}".into(),
    };
    match FetchExecutor.execute(&call).await {
        Err(DeliveryError::Transport(msg)) => assert!(msg.contains("TypeError"), "{msg}"),
        other => panic!("expected a fetch failure, got {other:?}"),
    }
}

#[wasm_bindgen_test]
async fn endpoint_attempts_delivery_without_window() {
    let settings = format!(r#"{{"endpoint":"{DEAD_ENDPOINT}","production":false}}"#);
    let endpoint = ContactEndpoint::new(&settings).unwrap();
    let env = Object::new();
    Reflect::set(&env, &"EMAIL_USER".into(), &"owner@folio.dev".into()).unwrap();
    Reflect::set(&env, &"EMAIL_PASS".into(), &"re_secret".into()).unwrap();

    let body = r#"{"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello"}"#;
    let promise = endpoint.handle("POST".into(), Some("application/json".into()), body.into(), env);
    let reply = JsFuture::from(promise).await.unwrap();

    assert_eq!(get(&reply, "status").as_f64(), Some(500.0));
    let text = get(&reply, "body").as_string().unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(json["error"].as_str().unwrap().contains("TypeError"));
}
