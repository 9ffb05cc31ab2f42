//! Narrative AI analysis collaborator
//!
//! Sends the engine's derived per-region summaries (never raw records) to
//! the Gemini generateContent endpoint and returns the analyst text.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use siminvest_engine::RegencyRecord;
use siminvest_engine::analysis::region_summaries;

use crate::config::AiConfig;
use crate::constants;

/// Build the senior-analyst prompt over the summarized dataset
pub fn build_prompt(records: &[RegencyRecord], province: &str, year: u16) -> Result<String> {
    let summary = serde_json::to_string(&region_summaries(records))?;

    let mut prompt = String::new();
    prompt.push_str(&format!(
        "Sebagai analis ekonomi senior Pemerintah Provinsi {}, analisalah data \
         realisasi investasi tahun {} per wilayah, triwulan, dan sumber modal \
         (PMA/PMDN) berikut:\n",
        province, year
    ));
    prompt.push_str(&summary);
    prompt.push_str("\n\nBerikan analisis singkat dalam Bahasa Indonesia mengenai:\n");
    prompt.push_str(
        "1. Perbandingan dominasi PMA vs PMDN. Wilayah mana yang paling menarik \
         bagi investor asing?\n",
    );
    prompt.push_str("2. Tren pertumbuhan antar triwulan.\n");
    prompt.push_str(
        "3. Efektivitas investasi terhadap penciptaan lapangan kerja (serapan TKI).\n",
    );
    prompt.push_str(&format!(
        "4. Rekomendasi kebijakan untuk menjaga iklim investasi di sisa tahun {}.\n",
        year
    ));
    prompt.push_str("Gunakan format Markdown untuk jawaban Anda.");

    Ok(prompt)
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Request a narrative analysis of the current dataset
pub async fn request_analysis(
    config: &AiConfig,
    records: &[RegencyRecord],
    province: &str,
    year: u16,
) -> Result<String> {
    let prompt = build_prompt(records, province, year)?;
    let model = config.model.as_deref().unwrap_or(constants::DEFAULT_AI_MODEL);
    let url = format!("{}/{}:generateContent", constants::GEMINI_API_BASE, model);

    let body = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
    };

    let client = reqwest::Client::new();

    // Retry with exponential backoff
    let mut last_error = None;

    for attempt in 0..constants::MAX_HTTP_RETRIES {
        if attempt > 0 {
            let delay = Duration::from_secs(2u64.pow(attempt));
            sleep(delay).await;
        }

        match client
            .post(&url)
            .header("x-goog-api-key", &config.api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => {
                if response.status().is_success() {
                    match response.json::<GenerateResponse>().await {
                        Ok(data) => {
                            let text = data
                                .candidates
                                .into_iter()
                                .next()
                                .map(|c| {
                                    c.content
                                        .parts
                                        .into_iter()
                                        .map(|p| p.text)
                                        .collect::<Vec<_>>()
                                        .join("")
                                })
                                .unwrap_or_default();
                            if text.is_empty() {
                                last_error =
                                    Some(anyhow::anyhow!("AI response contained no text"));
                            } else {
                                return Ok(text);
                            }
                        }
                        Err(e) => {
                            last_error = Some(anyhow::anyhow!("Parse error: {}", e));
                        }
                    }
                } else if response.status().as_u16() == 429 {
                    last_error = Some(anyhow::anyhow!("Rate limited (429)"));
                    continue;
                } else {
                    last_error = Some(anyhow::anyhow!(
                        "AI API returned status: {}",
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
    use crate::seed::seed_records;

    #[test]
    fn test_prompt_embeds_summaries_not_raw_records() {
        let prompt = build_prompt(&seed_records(), "Nusa Tenggara Barat", 2025).unwrap();

        assert!(prompt.contains("Provinsi Nusa Tenggara Barat"));
        assert!(prompt.contains("tahun 2025"));
        // Summary field names, not record field names
        assert!(prompt.contains("\"wilayah\":\"Kota Mataram\""));
        assert!(prompt.contains("\"serapanTKI\""));
        assert!(!prompt.contains("\"kabKota\""));
        assert!(prompt.contains("PMA vs PMDN"));
    }

    #[test]
    fn test_response_shape_parses() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Analisis "}, {"text": "lengkap."}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Analisis lengkap.");
    }
}
