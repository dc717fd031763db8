//! Article retrieval.
//!
//! [`ArticleSource`] is the seam between the tagger and the network. The
//! production implementation, [`HttpSource`], issues one blocking GET per
//! article with an explicit timeout.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::encoding::decode_body;
use crate::error::{Error, Result};
use crate::options::Options;

/// Forms the locator for `article_id` by appending it to `base_url`.
pub fn article_url(base_url: &str, article_id: &str) -> Result<Url> {
    let raw = format!("{base_url}{article_id}");
    Url::parse(&raw).map_err(|err| Error::Parse(format!("invalid article locator {raw}: {err}")))
}

/// Something that can hand back the HTML document behind a locator.
pub trait ArticleSource {
    /// Retrieves the document at `url` as UTF-8 text.
    fn fetch(&self, url: &Url) -> Result<String>;
}

impl<S: ArticleSource + ?Sized> ArticleSource for &S {
    fn fetch(&self, url: &Url) -> Result<String> {
        (**self).fetch(url)
    }
}

impl<S: ArticleSource + ?Sized> ArticleSource for Box<S> {
    fn fetch(&self, url: &Url) -> Result<String> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP article source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    timeout: Duration,
}

impl HttpSource {
    /// Builds a client honouring `options.timeout` and `options.user_agent`.
    pub fn new(options: &Options) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(|err| Error::Fetch(format!("cannot build HTTP client: {err}")))?;
        Ok(Self {
            client,
            timeout: options.timeout,
        })
    }

    fn classify(&self, url: &Url, err: &reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            Error::Fetch(format!("{url}: {err}"))
        }
    }
}

impl ArticleSource for HttpSource {
    fn fetch(&self, url: &Url) -> Result<String> {
        log::debug!("Fetching {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|err| self.classify(url, &err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().map_err(|err| self.classify(url, &err))?;
        log::debug!("Fetched {} bytes from {url}", body.len());

        Ok(decode_body(&body, content_type.as_deref()))
    }
}
