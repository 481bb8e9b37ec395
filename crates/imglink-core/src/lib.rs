pub mod config;
pub mod logging;

pub mod downloader;
pub mod extract;
pub mod fetch;
pub mod sheet;
pub mod storage;
pub mod url_list;
pub mod url_model;

pub use downloader::{download_all, DownloadOutcome, DownloadReport, Downloader};
pub use extract::{extract_from_workbook, extract_urls, ExtractError, ExtractPolicy};
pub use fetch::{CurlFetcher, FetchError, Fetcher};
pub use sheet::{read_workbook, CellRecord, RowRecord, SheetRecord, SourceError};

