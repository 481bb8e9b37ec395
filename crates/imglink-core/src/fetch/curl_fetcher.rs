//! Single-stream HTTP GET via libcurl.

use super::{FetchError, Fetcher};
use crate::config::FetchConfig;
use std::io::{self, Write};
use std::str;

/// `Fetcher` backed by a fresh curl Easy handle per request.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    config: FetchConfig,
}

impl CurlFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    fn easy_for(&self, url: &str) -> Result<curl::easy::Easy, FetchError> {
        let cfg = &self.config;
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(cfg.max_redirections)?;
        easy.useragent(&cfg.user_agent)?;
        easy.connect_timeout(cfg.connect_timeout())?;
        easy.low_speed_limit(cfg.low_speed_limit_bytes)?;
        easy.low_speed_time(cfg.low_speed_time())?;
        easy.timeout(cfg.timeout())?;
        Ok(easy)
    }
}

impl Default for CurlFetcher {
    fn default() -> Self {
        Self::new(FetchConfig::default())
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let mut easy = self.easy_for(url)?;
        let mut written: u64 = 0;
        let mut write_error: Option<io::Error> = None;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(line) = str::from_utf8(data) {
                    tracing::trace!(header = line.trim_end(), "response header");
                }
                true
            })?;
            transfer.write_function(|data| match sink.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_error = Some(e);
                    Ok(0) // abort transfer
                }
            })?;
            transfer.perform()
        };

        if let Some(e) = write_error {
            return Err(FetchError::Write(e));
        }
        performed?;

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        Ok(written)
    }
}
