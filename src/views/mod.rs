//! HTML views
//!
//! A [`View`] pairs a view name with the values bound to it and the rendered
//! markup. The name and bound values travel with the response as a
//! [`RenderedView`] extension so callers can inspect what was rendered
//! without parsing HTML.

pub mod comments;
pub mod tweets;

use axum::response::{Html, IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

/// Name and bound data of the view behind a response
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub name: &'static str,
    pub data: Map<String, Value>,
}

impl RenderedView {
    /// Bound value for `key`, if any
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// A named page ready to be sent
#[derive(Debug)]
pub struct View {
    name: &'static str,
    data: Map<String, Value>,
    html: String,
}

impl View {
    pub fn new(name: &'static str, html: String) -> Self {
        Self {
            name,
            data: Map::new(),
            html,
        }
    }

    /// Bind a serializable value under `key`
    pub fn with<T: Serialize>(mut self, key: &str, value: &T) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.data.insert(key.to_string(), value);
        self
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        let mut response = Html(self.html).into_response();
        response.extensions_mut().insert(RenderedView {
            name: self.name,
            data: self.data,
        });
        response
    }
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wrap a page body in the shared document shell
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="{index}">Tweets</a> <a href="{create}">New tweet</a></nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        index = crate::routes::names::tweets_index(),
        create = crate::routes::names::tweets_create(),
    )
}

/// A form posting to `action`, dispatched as `method` through the `_method` override
pub fn method_form(action: &str, method: &str, inner: &str) -> String {
    let action = if method.eq_ignore_ascii_case("POST") {
        action.to_string()
    } else {
        format!("{action}?_method={method}")
    };
    format!(r#"<form method="POST" action="{}">{inner}</form>"#, escape(&action))
}
