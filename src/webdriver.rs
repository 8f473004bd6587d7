//! Wire types for the subset of the W3C WebDriver protocol the session uses:
//! session create/delete, navigation, element lookup, keyboard input, click,
//! and element text/visibility reads. Everything travels as JSON inside the
//! protocol's `{"value": ...}` envelope.

use serde::{Deserialize, Serialize};

/// W3C web element identifier key, fixed by the protocol.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

// -- New session ------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NewSessionRequest {
    pub capabilities: Capabilities,
}

#[derive(Debug, Serialize)]
pub struct Capabilities {
    #[serde(rename = "alwaysMatch")]
    pub always_match: AlwaysMatch,
}

#[derive(Debug, Serialize)]
pub struct AlwaysMatch {
    #[serde(rename = "browserName")]
    pub browser_name: String,
    #[serde(rename = "goog:chromeOptions")]
    pub chrome_options: ChromeOptions,
}

#[derive(Debug, Serialize)]
pub struct ChromeOptions {
    pub args: Vec<String>,
}

impl NewSessionRequest {
    /// Chrome capabilities for the given headless setting.
    pub fn chrome(headless: bool) -> Self {
        let mut args = Vec::new();
        if headless {
            args.push("--headless=new".to_string());
            args.push("--no-sandbox".to_string());
            args.push("--disable-dev-shm-usage".to_string());
        }
        NewSessionRequest {
            capabilities: Capabilities {
                always_match: AlwaysMatch {
                    browser_name: "chrome".to_string(),
                    chrome_options: ChromeOptions { args },
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewSessionValue {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

// -- Commands ---------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NavigateRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct FindElementRequest {
    pub using: String,
    pub value: String,
}

impl FindElementRequest {
    pub fn css(selector: &str) -> Self {
        FindElementRequest {
            using: "css selector".to_string(),
            value: selector.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendKeysRequest {
    pub text: String,
}

// -- Responses --------------------------------------------------------------

/// Every successful WebDriver response wraps its payload in `value`.
#[derive(Debug, Deserialize)]
pub struct WdResponse<T> {
    pub value: T,
}

/// Reference to a located element, keyed by the protocol's fixed element key.
#[derive(Debug, Deserialize)]
pub struct ElementRef {
    #[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
    pub element_id: String,
}

/// Error payload carried in `value` on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorValue {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_request_serializes_headless() {
        let req = NewSessionRequest::chrome(true);
        let json = serde_json::to_string(&req).expect("serialization failed");
        assert!(json.contains("\"browserName\":\"chrome\""));
        assert!(json.contains("goog:chromeOptions"));
        assert!(json.contains("--headless=new"));
        assert!(json.contains("--no-sandbox"));
        assert!(json.contains("--disable-dev-shm-usage"));
    }

    #[test]
    fn test_new_session_request_headed_has_no_flags() {
        let req = NewSessionRequest::chrome(false);
        let json = serde_json::to_string(&req).expect("serialization failed");
        assert!(!json.contains("--headless"));
        assert!(json.contains("\"args\":[]"));
    }

    #[test]
    fn test_new_session_value_deserializes() {
        let json = r#"{"value":{"sessionId":"77e8a9","capabilities":{"browserName":"chrome"}}}"#;
        let resp: WdResponse<NewSessionValue> = serde_json::from_str(json).expect("deser failed");
        assert_eq!(resp.value.session_id, "77e8a9");
    }

    #[test]
    fn test_element_ref_deserializes() {
        let json = format!(r#"{{"value":{{"{}":"elem-42"}}}}"#, ELEMENT_KEY);
        let resp: WdResponse<ElementRef> = serde_json::from_str(&json).expect("deser failed");
        assert_eq!(resp.value.element_id, "elem-42");
    }

    #[test]
    fn test_error_value_deserializes() {
        let json = r#"{"value":{"error":"no such element","message":"unable to locate element","stacktrace":""}}"#;
        let resp: WdResponse<ErrorValue> = serde_json::from_str(json).expect("deser failed");
        assert_eq!(resp.value.error, "no such element");
        assert!(resp.value.message.contains("unable to locate"));
    }

    #[test]
    fn test_text_response_deserializes() {
        let json = r#"{"value":"Positive"}"#;
        let resp: WdResponse<String> = serde_json::from_str(json).expect("deser failed");
        assert_eq!(resp.value, "Positive");
    }

    #[test]
    fn test_displayed_response_deserializes() {
        let json = r#"{"value":true}"#;
        let resp: WdResponse<bool> = serde_json::from_str(json).expect("deser failed");
        assert!(resp.value);
    }

    #[test]
    fn test_null_value_deserializes() {
        let json = r#"{"value":null}"#;
        let resp: WdResponse<serde_json::Value> = serde_json::from_str(json).expect("deser failed");
        assert!(resp.value.is_null());
    }

    #[test]
    fn test_find_element_request_css() {
        let req = FindElementRequest::css("#happiness-score-button");
        let json = serde_json::to_string(&req).expect("serialize");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed["using"], "css selector");
        assert_eq!(parsed["value"], "#happiness-score-button");
    }

    #[test]
    fn test_navigate_request_serializes() {
        let req = NavigateRequest {
            url: "https://example.com/tool".to_string(),
        };
        let json = serde_json::to_string(&req).expect("serialize");
        assert!(json.contains("\"url\":\"https://example.com/tool\""));
    }

    #[test]
    fn test_send_keys_request_serializes() {
        let req = SendKeysRequest {
            text: "I love this movie".to_string(),
        };
        let json = serde_json::to_string(&req).expect("serialize");
        assert!(json.contains("\"text\":\"I love this movie\""));
    }
}
