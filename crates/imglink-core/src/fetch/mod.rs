//! Network access behind a narrow capability.
//!
//! The downloader only needs "stream the body of this URL into that sink";
//! `CurlFetcher` does it with libcurl, tests substitute their own.

mod curl_fetcher;
mod error;

pub use curl_fetcher::CurlFetcher;
pub use error::FetchError;

use std::io::Write;

/// Streams the body of a URL into a sink.
pub trait Fetcher {
    /// Writes the response body to `sink` as it arrives and returns the byte
    /// count. Any non-success response is an error; bytes already written to
    /// `sink` are then meaningless.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        (**self).fetch(url, sink)
    }
}
