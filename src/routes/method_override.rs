//! Form method spoofing: `POST /path?_method=DELETE` is dispatched as `DELETE /path`.
//!
//! Must wrap the router from the outside, since routing happens on the method
//! the router sees.

use axum::{extract::Request, http::Method, middleware::Next, response::Response};

const OVERRIDE_PARAM: &str = "_method";

pub async fn method_override(mut request: Request, next: Next) -> Response {
    if request.method() == Method::POST {
        if let Some(method) = override_from_query(request.uri().query()) {
            tracing::trace!(%method, uri = %request.uri(), "Method override");
            *request.method_mut() = method;
        }
    }

    next.run(request).await
}

fn override_from_query(query: Option<&str>) -> Option<Method> {
    let value = query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == OVERRIDE_PARAM)
        .map(|(_, value)| value)?;

    match value.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
