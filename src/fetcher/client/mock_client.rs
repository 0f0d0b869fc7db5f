use std::cell::RefCell;

use super::{HttpClient, HttpResponse};

pub struct MockClient {
    responses: RefCell<Vec<HttpResponse>>,
}

impl HttpClient for MockClient {
    fn get(&self, _url: &str) -> HttpResponse {
        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            HttpResponse::transport("mock queue exhausted".to_string())
        } else {
            responses.remove(0)
        }
    }
}

impl MockClient {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: RefCell::new(responses),
        }
    }
}
