//! One automated browser connection to the tool under test, driven over the
//! W3C WebDriver HTTP protocol. Lifecycle is explicit: `open` creates the
//! session on demand, `close` releases it; nothing initializes at startup.

use crate::error::ProbeError;
use crate::webdriver::{
    ElementRef, ErrorValue, FindElementRequest, NavigateRequest, NewSessionRequest,
    NewSessionValue, SendKeysRequest, WdResponse,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, warn};

pub const DEFAULT_SUT_URL: &str = "https://www.clientzen.io/sentiment-analysis-tool";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_INPUT_SELECTOR: &str = "#Happiness-Score-Text-3";
pub const DEFAULT_ANALYZE_SELECTOR: &str = "#happiness-score-button";
pub const DEFAULT_RESULT_SELECTOR: &str = ".aspect-based-sentiment-description";
pub const DEFAULT_WAIT_SECS: u64 = 20;

/// Interval between element-lookup polls inside the wait deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Where the tool under test lives and how to find its three elements.
#[derive(Debug, Clone)]
pub struct SutConfig {
    pub url: String,
    pub webdriver_url: String,
    pub input_selector: String,
    pub analyze_selector: String,
    pub result_selector: String,
    pub wait: Duration,
    pub headless: bool,
}

impl Default for SutConfig {
    fn default() -> Self {
        SutConfig {
            url: DEFAULT_SUT_URL.to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            input_selector: DEFAULT_INPUT_SELECTOR.to_string(),
            analyze_selector: DEFAULT_ANALYZE_SELECTOR.to_string(),
            result_selector: DEFAULT_RESULT_SELECTOR.to_string(),
            wait: Duration::from_secs(DEFAULT_WAIT_SECS),
            headless: true,
        }
    }
}

/// The predict contract the checker runs against.
///
/// `BrowserSession` is the production implementation; tests substitute fakes
/// with scripted labels.
#[async_trait]
pub trait SentimentOracle: Send {
    /// Submit `text` to the tool under test and return its trimmed
    /// prediction label.
    async fn predict(&mut self, text: &str) -> Result<String, ProbeError>;
}

/// An open WebDriver session against one browser tab.
pub struct BrowserSession {
    client: Client,
    session_url: String,
    config: SutConfig,
}

impl BrowserSession {
    /// Launch a browser session on the configured WebDriver endpoint.
    ///
    /// Fails with `ProbeError::SessionStart` when the endpoint is
    /// unreachable or refuses to create a session.
    pub async fn open(config: SutConfig) -> Result<Self, ProbeError> {
        let client = Client::new();
        let request = NewSessionRequest::chrome(config.headless);

        let response = client
            .post(format!("{}/session", config.webdriver_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProbeError::SessionStart(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProbeError::SessionStart(format!(
                "webdriver returned {}: {}",
                status, body
            )));
        }

        let created: WdResponse<NewSessionValue> = response
            .json()
            .await
            .map_err(|e| ProbeError::SessionStart(e.to_string()))?;

        debug!(session_id = %created.value.session_id, "webdriver session created");

        let session_url = format!(
            "{}/session/{}",
            config.webdriver_url, created.value.session_id
        );
        Ok(BrowserSession {
            client,
            session_url,
            config,
        })
    }

    /// Release the session. Errors are logged, never propagated — by this
    /// point every prediction is already in memory.
    pub async fn close(self) {
        match self
            .client
            .delete(&self.session_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(_) => debug!("webdriver session closed"),
            Err(e) => warn!(error = %e, "failed to close webdriver session"),
        }
    }

    // -- Protocol plumbing --------------------------------------------------

    async fn command<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ProbeError> {
        let response = self
            .client
            .post(format!("{}{}", self.session_url, path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn read<T: DeserializeOwned>(&self, path: &str) -> Result<T, ProbeError> {
        let response = self
            .client
            .get(format!("{}{}", self.session_url, path))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ProbeError> {
        let status = response.status();
        if !status.is_success() {
            let err: WdResponse<ErrorValue> = response.json().await?;
            return Err(ProbeError::WebDriver {
                status: status.as_u16(),
                error: err.value.error,
                message: err.value.message,
            });
        }
        let payload: WdResponse<T> = response.json().await?;
        Ok(payload.value)
    }

    // -- Element operations -------------------------------------------------

    async fn find_element(&self, selector: &str) -> Result<String, ProbeError> {
        let element: ElementRef = self
            .command("/element", &FindElementRequest::css(selector))
            .await?;
        Ok(element.element_id)
    }

    /// Poll for an element until the wait deadline.
    async fn wait_for_element(&self, selector: &str) -> Result<String, ProbeError> {
        let deadline = Instant::now() + self.config.wait;
        loop {
            match self.find_element(selector).await {
                Ok(id) => return Ok(id),
                Err(ProbeError::WebDriver { error, .. }) if error == "no such element" => {
                    if Instant::now() >= deadline {
                        return Err(ProbeError::ElementNotFound {
                            selector: selector.to_string(),
                            secs: self.config.wait.as_secs(),
                        });
                    }
                    sleep(POLL_INTERVAL).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Poll until the element exists and reports itself displayed.
    async fn wait_for_visible(&self, selector: &str) -> Result<String, ProbeError> {
        let deadline = Instant::now() + self.config.wait;
        loop {
            match self.find_element(selector).await {
                Ok(id) => {
                    let displayed: bool = self.read(&format!("/element/{}/displayed", id)).await?;
                    if displayed {
                        return Ok(id);
                    }
                }
                Err(ProbeError::WebDriver { error, .. }) if error == "no such element" => {}
                Err(e) => return Err(e),
            }
            if Instant::now() >= deadline {
                return Err(ProbeError::PredictionTimeout {
                    selector: selector.to_string(),
                    secs: self.config.wait.as_secs(),
                });
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn element_text(&self, element_id: &str) -> Result<String, ProbeError> {
        let text: String = self.read(&format!("/element/{}/text", element_id)).await?;
        Ok(text)
    }
}

#[async_trait]
impl SentimentOracle for BrowserSession {
    /// Full page reload per call — no tool state is reused across queries
    /// other than the browser tab itself.
    async fn predict(&mut self, text: &str) -> Result<String, ProbeError> {
        let navigate = NavigateRequest {
            url: self.config.url.clone(),
        };
        let _: serde_json::Value = self.command("/url", &navigate).await?;

        let input_selector = self.config.input_selector.clone();
        let input_id = self.wait_for_element(&input_selector).await?;

        let empty = serde_json::json!({});
        let _: serde_json::Value = self
            .command(&format!("/element/{}/clear", input_id), &empty)
            .await?;
        let _: serde_json::Value = self
            .command(
                &format!("/element/{}/value", input_id),
                &SendKeysRequest {
                    text: text.to_string(),
                },
            )
            .await?;

        let analyze_selector = self.config.analyze_selector.clone();
        let analyze_id = self.wait_for_element(&analyze_selector).await?;
        let _: serde_json::Value = self
            .command(&format!("/element/{}/click", analyze_id), &empty)
            .await?;

        let result_selector = self.config.result_selector.clone();
        let result_id = self.wait_for_visible(&result_selector).await?;
        let label = self.element_text(&result_id).await?;
        Ok(label.trim().to_string())
    }
}
