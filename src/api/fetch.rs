use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

#[wasm_bindgen]
extern "C" {
    /// `globalThis.fetch`. Edge and Node hosts have no `window`.
    #[wasm_bindgen(js_name = fetch)]
    fn global_fetch(request: &Request) -> js_sys::Promise;
}

use crate::systems::contact::{DeliveryError, FormReply, HttpCall, HttpExecutor, HttpReply};

/// `HttpExecutor` over the host's global `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchExecutor;

impl HttpExecutor for FetchExecutor {
    async fn execute(&self, call: &HttpCall) -> Result<HttpReply, DeliveryError> {
        let headers = call.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let request = build_request(call.method, &call.url, headers, &call.body).map_err(transport)?;
        let response = send(request).await.map_err(transport)?;
        let status = response.status();
        let body = text(&response).await.unwrap_or_default();
        Ok(HttpReply { status, body })
    }
}

/// POST a JSON body and report whatever came back. Non-2xx replies are
/// still `Endpoint`: the caller reads the JSON error body.
pub(crate) async fn post_json(url: &str, body: &str) -> FormReply {
    let headers = [("Content-Type", "application/json")];
    let result = async {
        let request = build_request("POST", url, headers.into_iter(), body)?;
        let response = send(request).await?;
        let status = response.status();
        let body = text(&response).await.unwrap_or_default();
        Ok::<_, JsValue>(FormReply::Endpoint { status, body })
    };
    match result.await {
        Ok(reply) => reply,
        Err(e) => FormReply::Network(format!("{e:?}")),
    }
}

fn build_request<'a>(
    method: &str,
    url: &str,
    headers: impl Iterator<Item = (&'a str, &'a str)>,
    body: &str,
) -> Result<Request, JsValue> {
    let h = Headers::new()?;
    for (name, value) in headers {
        h.set(name, value)?;
    }
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_headers(&h.into());
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));
    Request::new_with_str_and_init(url, &opts)
}

async fn send(request: Request) -> Result<Response, JsValue> {
    let value = JsFuture::from(global_fetch(&request)).await?;
    value.dyn_into::<Response>()
}

async fn text(response: &Response) -> Result<String, JsValue> {
    let value = JsFuture::from(response.text()?).await?;
    value.as_string().ok_or_else(|| JsValue::from_str("body is not text"))
}

fn transport(e: JsValue) -> DeliveryError {
    DeliveryError::Transport(format!("fetch: {e:?}"))
}
