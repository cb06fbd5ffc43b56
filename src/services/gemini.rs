// src/services/gemini.rs
//
// Client for the generateContent endpoint. One POST per call, no retries;
// every failure maps to an AppError variant.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

impl GenerateRequest {
    pub fn new(message: &str, instruction: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: instruction.to_string(),
                }],
            },
        }
    }
}

// Response structs are tolerant: any missing segment of the reply path is an
// extraction error, not a deserialization failure.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Send one message with its persona instruction and return the generated
/// reply text.
pub async fn generate(
    http: &reqwest::Client,
    api_url: &str,
    api_key: &str,
    message: &str,
    instruction: &str,
) -> Result<String, AppError> {
    let payload = GenerateRequest::new(message, instruction);

    let response = http
        .post(api_url)
        .query(&[("key", api_key)])
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "generation API returned an error");
        return Err(AppError::Upstream {
            status: status.as_u16(),
            detail,
        });
    }

    let body: GenerateResponse = response.json().await?;

    body.candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or(AppError::NoReply)
}
