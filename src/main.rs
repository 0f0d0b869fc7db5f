use std::io::{self, BufRead, Write};

use image_fetcher::{cli, logging, ImageFetcher, DEFAULT_FOLDER};

fn main() {
    logging::init();

    println!("Welcome to the Ubuntu Image Fetcher");
    println!("A tool for mindfully collecting images from the web\n");

    print!("Please enter one or more image URLs (separated by commas): ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        line.clear();
    }

    let urls = cli::parse_urls(&line);

    if urls.is_empty() {
        println!("No URLs provided. Please try again.");
        return;
    }

    let fetcher = ImageFetcher::new(DEFAULT_FOLDER);
    let successful = cli::run(&fetcher, &urls);

    println!("\nSummary:");
    println!("Images successfully fetched: {}/{}", successful, urls.len());
    println!("Connection strengthened. Community enriched.");
}
