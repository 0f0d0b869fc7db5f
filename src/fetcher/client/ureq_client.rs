use std::io::Read;

use ureq::Error::Status;

use super::{HttpClient, HttpResponse};
use crate::fetcher::{REQUEST_TIMEOUT, USER_AGENT};

pub struct UreqClient {
    agent: ureq::Agent,
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str) -> HttpResponse {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let content_type = response.header("Content-Type").map(str::to_string);

                let body = response
                    .into_reader()
                    .bytes()
                    .collect::<Result<Vec<u8>, _>>();

                match body {
                    Ok(body) => HttpResponse::ok(body, content_type),
                    Err(err) => HttpResponse::transport(err.to_string()),
                }
            }

            Err(Status(code, _)) => HttpResponse::status(code),

            Err(err) => HttpResponse::transport(err.to_string()),
        }
    }
}

impl UreqClient {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();

        UreqClient { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}
