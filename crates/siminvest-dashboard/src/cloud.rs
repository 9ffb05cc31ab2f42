//! Cloud persistence over the Supabase REST API
//!
//! The remote table mirrors the interchange format one column per field.
//! Pull and push both move the whole collection; a failed request leaves
//! the local snapshot untouched because callers only swap in a fully
//! fetched replacement.

use anyhow::Result;
use std::time::Duration;
use tokio::time::sleep;

use siminvest_engine::RegencyRecord;

use crate::config::CloudConfig;
use crate::constants;

fn records_url(config: &CloudConfig) -> String {
    format!(
        "{}{}/{}",
        config.url.trim_end_matches('/'),
        constants::CLOUD_REST_PATH,
        constants::CLOUD_RECORDS_TABLE
    )
}

/// Fetch the remote record collection
pub async fn fetch_records(config: &CloudConfig) -> Result<Vec<RegencyRecord>> {
    let client = reqwest::Client::new();
    let url = format!("{}?select=*&order=no.asc", records_url(config));

    // Retry with exponential backoff
    let mut last_error = None;

    for attempt in 0..constants::MAX_HTTP_RETRIES {
        if attempt > 0 {
            let delay = Duration::from_secs(2u64.pow(attempt));
            sleep(delay).await;
        }

        match client
            .get(&url)
            .header("apikey", &config.api_key)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => {
                if response.status().is_success() {
                    match response.json::<Vec<RegencyRecord>>().await {
                        Ok(records) => return Ok(records),
                        Err(e) => {
                            last_error = Some(anyhow::anyhow!("Parse error: {}", e));
                        }
                    }
                } else if response.status().as_u16() == 429 {
                    // Rate limited - always retry
                    last_error = Some(anyhow::anyhow!("Rate limited (429)"));
                    continue;
                } else {
                    last_error = Some(anyhow::anyhow!(
                        "Cloud API returned status: {}",
                        response.status()
                    ));
                }
            }
            Err(e) => {
                last_error = Some(anyhow::anyhow!("Request failed: {}", e));
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        anyhow::anyhow!("Failed after {} retries", constants::MAX_HTTP_RETRIES)
    }))
}

/// Replace the remote collection with the given snapshot.
///
/// Clears the table, then posts the full set as an upsert so a retried
/// attempt cannot duplicate rows.
pub async fn push_records(config: &CloudConfig, records: &[RegencyRecord]) -> Result<()> {
    let client = reqwest::Client::new();
    let url = records_url(config);

    // PostgREST requires a filter on DELETE; match every row
    let clear_url = format!("{}?id=not.is.null", url);

    let mut last_error = None;

    for attempt in 0..constants::MAX_HTTP_RETRIES {
        if attempt > 0 {
            let delay = Duration::from_secs(2u64.pow(attempt));
            sleep(delay).await;
        }

        let cleared = client
            .delete(&clear_url)
            .header("apikey", &config.api_key)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .send()
            .await;

        match cleared {
            Ok(response) if response.status().is_success() => {}
            Ok(response) => {
                last_error = Some(anyhow::anyhow!(
                    "Cloud API returned status: {} on clear",
                    response.status()
                ));
                continue;
            }
            Err(e) => {
                last_error = Some(anyhow::anyhow!("Request failed: {}", e));
                continue;
            }
        }

        match client
            .post(&url)
            .header("apikey", &config.api_key)
            .header("Authorization", format!("Bearer {}", config.api_key))
            .header("Prefer", "resolution=merge-duplicates")
            .json(records)
            .send()
            .await
        {
            Ok(response) => {
                if response.status().is_success() {
                    return Ok(());
                } else if response.status().as_u16() == 429 {
                    last_error = Some(anyhow::anyhow!("Rate limited (429)"));
                    continue;
                } else {
                    last_error = Some(anyhow::anyhow!(
                        "Cloud API returned status: {}",
                        response.status()
                    ));
                }
            }
            Err(e) => {
                last_error = Some(anyhow::anyhow!("Request failed: {}", e));
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        anyhow::anyhow!("Failed after {} retries", constants::MAX_HTTP_RETRIES)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_url_normalizes_trailing_slash() {
        let config = CloudConfig {
            url: "https://example.supabase.co/".to_string(),
            api_key: "key".to_string(),
        };
        assert_eq!(
            records_url(&config),
            "https://example.supabase.co/rest/v1/investment_records"
        );
    }
}
