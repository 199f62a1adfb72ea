//! Three-line report summary from Gemini. Failures never leave this module:
//! callers always get displayable text.

use gloo_net::http::Request;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const SUMMARY_FAILED: &str = "요약을 불러오는 데 실패했습니다.";

const SYSTEM_INSTRUCTION: &str =
    "당신은 전문적인 비즈니스 분석가입니다. 한국어로 정중하고 명확하게 답변하세요.";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("no API key was configured at build time")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("service answered with status {0}")]
    Status(u16),
    #[error("response contained no text")]
    EmptyResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

fn build_request(context: &str) -> GenerateRequest {
    let prompt = format!("다음 프로젝트 완료 보고 내용을 바탕으로 3줄 요약을 작성해줘: {}", context);
    GenerateRequest {
        system_instruction: Content { parts: vec![Part { text: SYSTEM_INSTRUCTION.to_string() }] },
        contents: vec![Content { parts: vec![Part { text: prompt }] }],
    }
}

fn response_text(response: GenerateResponse) -> Option<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

async fn request_summary(context: &str) -> Result<String, SummaryError> {
    let key = config::get_api_key().ok_or(SummaryError::MissingApiKey)?;
    let url = format!(
        "{}/{}:generateContent?key={}",
        config::get_gemini_url(),
        config::GEMINI_MODEL,
        key
    );
    let response = Request::post(&url).json(&build_request(context))?.send().await?;
    if !response.ok() {
        if let Ok(body) = response.text().await {
            gloo_console::error!("Gemini error body:", body);
        }
        return Err(SummaryError::Status(response.status()));
    }
    let body: GenerateResponse = response.json().await?;
    response_text(body).ok_or(SummaryError::EmptyResponse)
}

/// Summary text, or [`SUMMARY_FAILED`] when anything goes wrong.
pub async fn get_project_summary(context: &str) -> String {
    debug!("requesting summary for {} chars of context", context.len());
    match request_summary(context).await {
        Ok(summary) => summary,
        Err(err) => {
            error!("Gemini Error: {}", err);
            SUMMARY_FAILED.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_carries_instruction_and_prompt() {
        let body = serde_json::to_value(build_request("보고서")).unwrap();
        assert_eq!(
            body,
            json!({
                "system_instruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
                "contents": [{
                    "parts": [{ "text": "다음 프로젝트 완료 보고 내용을 바탕으로 3줄 요약을 작성해줘: 보고서" }]
                }]
            })
        );
    }

    #[test]
    fn joins_parts_of_first_candidate() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "첫째 줄\n" }, { "text": "둘째 줄" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response_text(response), Some("첫째 줄\n둘째 줄".to_string()));
    }

    #[test]
    fn empty_or_missing_text_is_none() {
        let blocked: GenerateResponse =
            serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();
        assert_eq!(response_text(blocked), None);

        let no_content: GenerateResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "STOP" }] })).unwrap();
        assert_eq!(response_text(no_content), None);

        let blank: GenerateResponse =
            serde_json::from_value(json!({ "candidates": [{ "content": { "parts": [{ "text": "  " }] } }] }))
                .unwrap();
        assert_eq!(response_text(blank), None);
    }
}
