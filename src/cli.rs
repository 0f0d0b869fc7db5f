//! Interactive driver: turns one line of user input into a sequence of
//! fetches and a tally. Kept out of `main.rs` so it can be exercised with a
//! mock client.

use itertools::Itertools;

use crate::fetcher::{FetchError, HttpClient, ImageFetcher};

/// Splits a comma-separated URL list, trimming whitespace and dropping
/// empty entries.
pub fn parse_urls(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect_vec()
}

/// Fetches every URL in sequence and returns how many succeeded. Each
/// outcome gets its own status line on stdout.
pub fn run<T: HttpClient>(fetcher: &ImageFetcher<T>, urls: &[String]) -> usize {
    let mut successful = 0;

    for url in urls {
        println!("\nFetching -> {url}");

        match fetcher.fetch(url) {
            Ok(filename) => {
                println!("Successfully fetched: {filename}");
                println!("Image saved to {}", fetcher.folder().join(&filename).display());
                successful += 1;
            }
            Err(FetchError::NotAnImage(content_type)) => {
                println!("Skipped: the URL does not point to an image (type: {content_type})");
            }
            Err(FetchError::Duplicate(filename)) => {
                println!("Duplicate detected: {filename} already exists, skipping download");
            }
            Err(FetchError::Network(detail)) => {
                println!("Connection error: {detail}");
            }
            Err(FetchError::Unexpected(detail)) => {
                println!("Unexpected error: {detail}");
            }
        }
    }

    successful
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::{parse_urls, run};
    use crate::fetcher::{HttpResponse, ImageFetcher, MockClient};

    #[test]
    fn splits_on_commas_and_trims() {
        let urls = parse_urls("https://x.test/a.png, https://x.test/b.png");

        assert_eq!(urls, vec!["https://x.test/a.png", "https://x.test/b.png"]);
    }

    #[test]
    fn whitespace_only_input_yields_no_urls() {
        assert!(parse_urls("").is_empty());
        assert!(parse_urls("   ").is_empty());
        assert!(parse_urls(" , ,, ").is_empty());
    }

    #[test]
    fn tallies_two_of_two_when_both_succeed() {
        let dir = tempdir().unwrap();
        let client = MockClient::new(vec![
            HttpResponse::ok(b"a".to_vec(), Some("image/png".to_string())),
            HttpResponse::ok(b"b".to_vec(), Some("image/png".to_string())),
        ]);
        let fetcher = ImageFetcher::with_client(dir.path(), client);

        let urls = parse_urls("https://x.test/a.png, https://x.test/b.png");
        let successful = run(&fetcher, &urls);

        assert_eq!(successful, 2);
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn failures_do_not_count_toward_the_tally() {
        let dir = tempdir().unwrap();
        let client = MockClient::new(vec![
            HttpResponse::ok(b"a".to_vec(), Some("image/png".to_string())),
            HttpResponse::ok(b"nope".to_vec(), Some("text/html".to_string())),
            HttpResponse::transport("connection refused".to_string()),
        ]);
        let fetcher = ImageFetcher::with_client(dir.path(), client);

        let urls = parse_urls("https://x.test/a.png, https://x.test/b.png, https://x.test/c.png");
        let successful = run(&fetcher, &urls);

        assert_eq!(successful, 1);
    }
}
