// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Follows redirects, so a moved page reports its final status
// - Captures every transport failure as data instead of an error
// - Runs checks concurrently, at most `concurrency` at a time
//
// Results always come back in the same order as the URLs went in, even though
// the requests finish in whatever order the network decides.
// =============================================================================

use super::classify::Outcome;
use anyhow::{Context, Result};
use futures::stream::{self, StreamExt}; // StreamExt gives us .buffered()
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Settings for the link checker
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Maximum number of probes in flight at once
    pub concurrency: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Redirect hops followed before giving up
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            concurrency: 10,
            timeout: Duration::from_secs(5),
            max_redirects: 10,
            user_agent: format!("link-sweeper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Result of probing one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: Outcome,
}

/// Probes URLs with a shared HTTP client and a bounded number of workers
pub struct LinkChecker {
    client: Client,
    concurrency: usize,
}

impl LinkChecker {
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        // One client for all requests so connections get pooled
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            concurrency: config.concurrency.max(1),
        })
    }

    /// Checks every URL and returns one result per URL, in input order.
    ///
    /// Duplicates are checked again each time they appear.
    pub async fn check_all(&self, urls: Vec<String>) -> Vec<ProbeResult> {
        let futures = urls.into_iter().map(|url| {
            let client = self.client.clone();
            async move { check_single_link(client, url).await }
        });

        // .buffered(n) runs up to n futures at once but yields their outputs
        // in the order the futures were created
        stream::iter(futures)
            .buffered(self.concurrency)
            .collect()
            .await
    }
}

// Probes a single URL. Never fails: errors become Outcome::Error.
async fn check_single_link(client: Client, url: String) -> ProbeResult {
    let outcome = match Url::parse(&url) {
        Err(e) => Outcome::Error(format!("Invalid URL: {}", e)),
        Ok(_) => match client.head(&url).send().await {
            Ok(response) => Outcome::Status(response.status().as_u16()),
            Err(e) => Outcome::Error(describe_error(&e)),
        },
    };

    match &outcome {
        Outcome::Status(code) => debug!("Received HTTP {} for {}", code, url),
        Outcome::Error(message) => debug!("Exception for {} => {}", url, message),
    }

    ProbeResult { url, outcome }
}

// Puts a readable label in front of reqwest's own error text
fn describe_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();
    let lowered = error_string.to_lowercase();

    let label = if error.is_timeout() {
        "Request timed out"
    } else if error.is_redirect() {
        "Too many redirects"
    } else if error.is_connect() {
        if lowered.contains("dns") {
            "Could not resolve hostname"
        } else {
            "Connection failed"
        }
    } else if ["certificate", "ssl", "tls"].iter().any(|k| lowered.contains(k)) {
        "SSL certificate error"
    } else {
        "Request failed"
    };

    format!("{}: {}", label, error_string)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the difference between buffered and buffer_unordered?
//    - Both run up to N futures at the same time
//    - buffer_unordered hands back results as they finish
//    - buffered hands them back in the order the futures were created
//    - The report pairs result i with link i, so we need buffered
//
// 2. Why does check_single_link return ProbeResult and not Result?
//    - A dead link is a finding, not a failure of the program
//    - Turning the error into Outcome::Error keeps one bad URL from
//      stopping the other checks
//
// 3. Why clone the client for every URL?
//    - Each future needs its own handle it can move into `async move`
//    - Client is cheap to clone (it's a reference counter internally)
//    - All clones share the same connection pool
// -----------------------------------------------------------------------------
