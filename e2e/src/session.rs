use std::env;
use std::time::Duration;

use fantoccini::error::{CmdError, NewSessionError};
use fantoccini::{Client, ClientBuilder, Locator};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_millis(10_000);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Error)]
pub enum E2eError {
    #[error("could not start a WebDriver session at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: NewSessionError,
    },
    #[error("invalid value for {var}: {value:?}")]
    Config { var: &'static str, value: String },
    #[error(transparent)]
    Command(#[from] CmdError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub base_url: String,
    pub webdriver_url: String,
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: POLL_INTERVAL,
        }
    }
}

impl SessionConfig {
    /// `E2E_BASE_URL`, `WEBDRIVER_URL` and `E2E_WAIT_TIMEOUT_MS` override the defaults.
    pub fn from_env() -> Result<Self, E2eError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, E2eError> {
        let mut config = Self::default();
        if let Some(url) = lookup("E2E_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(url) = lookup("WEBDRIVER_URL").filter(|v| !v.trim().is_empty()) {
            config.webdriver_url = url;
        }
        if let Some(raw) = lookup("E2E_WAIT_TIMEOUT_MS") {
            let ms = raw.trim().parse::<u64>().map_err(|_| E2eError::Config {
                var: "E2E_WAIT_TIMEOUT_MS",
                value: raw.clone(),
            })?;
            config.wait_timeout = Duration::from_millis(ms);
        }
        Ok(config)
    }

    /// Joins a site path onto the base URL without doubling slashes.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// One browser session shared by the page objects of a test.
pub struct Session {
    client: Client,
    config: SessionConfig,
}

impl Session {
    pub async fn connect(config: SessionConfig) -> Result<Self, E2eError> {
        let client = ClientBuilder::native()
            .connect(&config.webdriver_url)
            .await
            .map_err(|source| E2eError::Connect {
                url: config.webdriver_url.clone(),
                source,
            })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub async fn navigate(&self, path: &str) -> Result<(), E2eError> {
        let url = self.config.url_for(path);
        debug!("[e2e] goto {url}");
        self.client.goto(&url).await?;
        Ok(())
    }

    /// Waits up to the configured timeout for `selector` to appear, then clicks it.
    pub async fn click(&self, selector: &str) -> Result<(), E2eError> {
        debug!("[e2e] click {selector}");
        let element = self
            .client
            .wait()
            .at_most(self.config.wait_timeout)
            .every(self.config.poll_interval)
            .for_element(Locator::Css(selector))
            .await?;
        element.click().await?;
        Ok(())
    }

    /// Polls until `selector` is present and visible. `Ok(false)` on timeout.
    pub async fn wait_until_displayed(&self, selector: &str) -> Result<bool, E2eError> {
        let deadline = tokio::time::Instant::now() + self.config.wait_timeout;
        loop {
            match self.client.find(Locator::Css(selector)).await {
                Ok(element) => {
                    if element.is_displayed().await? {
                        return Ok(true);
                    }
                }
                Err(e) if e.is_no_such_element() => {}
                Err(e) => return Err(e.into()),
            }
            if tokio::time::Instant::now() >= deadline {
                debug!("[e2e] {selector} not displayed within {:?}", self.config.wait_timeout);
                return Ok(false);
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    pub async fn close(self) -> Result<(), E2eError> {
        self.client.close().await?;
        Ok(())
    }
}
