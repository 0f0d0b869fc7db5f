mod ureq_client;

pub use ureq_client::UreqClient;

#[cfg(test)]
mod mock_client;

#[cfg(test)]
pub use mock_client::MockClient;

/// One blocking GET. Implementations decide transport; the fetcher only
/// sees the outcome.
pub trait HttpClient {
    fn get(&self, url: &str) -> HttpResponse;
}

#[derive(Debug)]
pub enum HttpResponse {
    Ok {
        body: Vec<u8>,
        content_type: Option<String>,
    },
    Status(u16),
    Transport(String),
}

impl HttpResponse {
    pub fn ok(body: Vec<u8>, content_type: Option<String>) -> Self {
        Self::Ok { body, content_type }
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn transport(detail: String) -> Self {
        Self::Transport(detail)
    }
}
