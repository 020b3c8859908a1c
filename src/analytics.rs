use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const FORM_SUBMIT: &str = "contact_form_submit";
pub const FORM_SUCCESS: &str = "contact_form_success";
pub const CTA_CLICK: &str = "cta_click";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub event_name: String,
    pub event_data: Map<String, Value>,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

impl AnalyticsEvent {
    pub fn new(event_name: &str, event_data: Map<String, Value>) -> Self {
        Self {
            event_name: event_name.to_string(),
            event_data,
        }
    }

    pub fn form_submit(page: &str) -> Self {
        Self::new(FORM_SUBMIT, object(json!({ "page": page, "timestamp": timestamp() })))
    }

    pub fn form_success() -> Self {
        Self::new(FORM_SUCCESS, object(json!({ "timestamp": timestamp() })))
    }

    pub fn cta_click(button_text: &str, button_href: Option<&str>) -> Self {
        Self::new(
            CTA_CLICK,
            object(json!({
                "button_text": button_text.trim(),
                "button_href": button_href,
                "timestamp": timestamp(),
            })),
        )
    }
}

/// Fire-and-forget destination for interaction events.
pub trait AnalyticsSink {
    fn track(&self, event: AnalyticsEvent);
}

/// Writes events to the browser console.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConsoleAnalytics;

impl AnalyticsSink for ConsoleAnalytics {
    fn track(&self, event: AnalyticsEvent) {
        // Plain JS object rather than a Map so the console shows the fields inline.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match event.event_data.serialize(&serializer) {
            Ok(data) => gloo_console::log!("Event tracked:", event.event_name, data),
            Err(e) => log::warn!("Could not convert event data for {}: {}", event.event_name, e),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cta_click_trims_text_and_keeps_href() {
        let event = AnalyticsEvent::cta_click("  Get in touch \n", Some("#contact"));
        assert_eq!(event.event_name, CTA_CLICK);
        assert_eq!(event.event_data["button_text"], "Get in touch");
        assert_eq!(event.event_data["button_href"], "#contact");
        assert!(event.event_data["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
    }

    #[test]
    fn cta_without_href_serializes_null() {
        let event = AnalyticsEvent::cta_click("Learn more", None);
        assert!(event.event_data["button_href"].is_null());
    }

    #[test]
    fn events_serialize_with_camel_case_envelope() {
        let value = serde_json::to_value(AnalyticsEvent::form_submit("home")).unwrap();
        assert_eq!(value["eventName"], FORM_SUBMIT);
        assert_eq!(value["eventData"]["page"], "home");
    }
}
