use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;

use super::error::TransportError;
use super::validation::FormBody;

/// One entry of the endpoint's `errors` list.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct RemoteErrorItem {
    #[serde(default)]
    pub message: Option<String>,
}

/// JSON body the endpoint sends with a failure status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RejectionBody {
    pub errors: Option<Vec<RemoteErrorItem>>,
}

impl RejectionBody {
    /// Reads whatever JSON the endpoint sent. Anything that is not an
    /// `errors` array of objects with string `message`s carries no details.
    pub fn from_value(value: &Value) -> Self {
        let errors = value.get("errors").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .map(|item| RemoteErrorItem {
                    message: item.get("message").and_then(Value::as_str).map(str::to_owned),
                })
                .collect()
        });
        Self { errors }
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .filter_map(|e| e.message.clone())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoteReply {
    Accepted,
    Rejected(RejectionBody),
}

/// Delivers a contact form body to the remote form backend.
pub trait FormTransport {
    fn send(&self, body: FormBody) -> LocalBoxFuture<'_, Result<RemoteReply, TransportError>>;
}

/// Formspree-style endpoint reached through `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpFormTransport {
    endpoint: String,
}

impl HttpFormTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl FormTransport for HttpFormTransport {
    fn send(&self, body: FormBody) -> LocalBoxFuture<'_, Result<RemoteReply, TransportError>> {
        Box::pin(async move {
            let response = Request::post(&self.endpoint)
                .header("Content-Type", FormBody::CONTENT_TYPE)
                .header("Accept", "application/json")
                .body(body.encode())
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            if response.ok() {
                return Ok(RemoteReply::Accepted);
            }

            let status = response.status();
            log::info!("Form endpoint answered with status {}", status);
            response
                .json::<Value>()
                .await
                .map(|value| RemoteReply::Rejected(RejectionBody::from_value(&value)))
                .map_err(|e| TransportError::MalformedResponse {
                    status,
                    reason: e.to_string(),
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RejectionBody {
        RejectionBody::from_value(&serde_json::from_str(json).unwrap())
    }

    #[test]
    fn parses_error_list() {
        let body = parse(r#"{"errors":[{"message":"Bad request","code":"X"}]}"#);
        assert_eq!(body.messages(), vec!["Bad request".to_string()]);
    }

    #[test]
    fn body_without_errors_has_no_messages() {
        let body = parse(r#"{"error":"nope"}"#);
        assert_eq!(body.errors, None);
        assert!(body.messages().is_empty());
    }

    #[test]
    fn error_items_without_message_carry_no_details() {
        let body = parse(r#"{"errors":[{"code":"TYPE_EMAIL","field":"email"}]}"#);
        assert_eq!(body.errors.as_ref().map(Vec::len), Some(1));
        assert!(body.messages().is_empty());
    }

    #[test]
    fn errors_as_plain_string_carry_no_details() {
        let body = parse(r#"{"errors":"Form not found"}"#);
        assert_eq!(body.errors, None);
        assert!(body.messages().is_empty());
    }

    #[test]
    fn non_object_json_is_still_a_rejection_body() {
        assert_eq!(parse(r#""Forbidden""#), RejectionBody::default());
        assert_eq!(parse("[1, 2]"), RejectionBody::default());
    }

    #[test]
    fn messages_skip_items_that_lack_one() {
        let body = parse(r#"{"errors":[{"code":"X"},{"message":"Email is blocked"},{"message":7}]}"#);
        assert_eq!(body.messages(), vec!["Email is blocked".to_string()]);
    }
}
