//! Fan-out over all lookup sources and merge of their contributions.

use crate::config::Config;
use crate::models::{AggregateOutcome, LookupResult};
use crate::parser;
use crate::services::{NumlookupClient, NumverifyClient};

/// Orchestrates the offline parser and both external validation clients.
///
/// Sources never short-circuit each other: every source runs for every
/// request, failures are collected as values, and the merge happens in a
/// fixed order (parser, numverify, numlookup) with last write wins per label.
pub struct LookupAggregator {
    numverify: NumverifyClient,
    numlookup: NumlookupClient,
}

impl LookupAggregator {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            numverify: NumverifyClient::new(config)?,
            numlookup: NumlookupClient::new(config)?,
        })
    }

    /// Run every source for `raw` and merge what succeeded.
    ///
    /// The two network lookups run concurrently, each bounded by its own
    /// client timeout, so one slow service cannot hold up the reply. If at
    /// least one source contributed fields the aggregate is a success and
    /// the remaining errors are dropped; only a full wipe-out surfaces the
    /// joined error text.
    pub async fn lookup_all(&self, raw: &str) -> AggregateOutcome {
        let parsed = parser::lookup(raw);
        let (numverify, numlookup) =
            tokio::join!(self.numverify.lookup(raw), self.numlookup.lookup(raw));

        let mut merged = LookupResult::new();
        let mut failures = Vec::new();

        for outcome in [parsed, numverify, numlookup] {
            match outcome {
                Ok(fields) => merged.merge(fields),
                Err(e) => {
                    tracing::debug!("lookup source failed: {}", e);
                    failures.push(e.to_string());
                }
            }
        }

        if merged.is_empty() {
            tracing::warn!("all lookup sources failed for incoming number");
            AggregateOutcome::Failure(failures.join("; "))
        } else {
            tracing::info!(
                "lookup merged {} field(s) from {} source(s)",
                merged.len(),
                3 - failures.len()
            );
            AggregateOutcome::Success(merged)
        }
    }
}
