pub mod cli;
pub mod fetcher;
pub mod logging;

pub use fetcher::{FetchError, ImageFetcher, DEFAULT_FOLDER, REQUEST_TIMEOUT, USER_AGENT};
