//! OpenAI Chat Completions 連携
//!
//! システムプロンプト + ユーザープロンプトの2メッセージで呼び出し、
//! 最初の choice の本文（前後の空白除去済み）を返す。

use super::{DescriptionGenerator, GenerationRequest};
use crate::config::Config;
use crate::error::{MetaDescError, Result};
use metadesc_common::build_user_prompt;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 300;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessageContent,
}

#[derive(Deserialize)]
struct ChatMessageContent {
    content: Option<String>,
}

pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: String, base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| MetaDescError::ApiCall(format!("HTTPクライアント初期化失敗: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 設定からクライアントを作成（APIキー未設定はエラー）
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Self::new(api_key, &config.api_base_url, config.timeout_seconds)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl DescriptionGenerator for OpenAiGenerator {
    async fn generate(&self, req: &GenerationRequest) -> Result<String> {
        let user_prompt = build_user_prompt(&req.program, &req.signals, req.char_limit);
        let body = ChatRequest {
            model: &req.model,
            messages: vec![
                ChatMessage { role: "system", content: &req.system_prompt },
                ChatMessage { role: "user", content: &user_prompt },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        log::debug!("OpenAI呼び出し: model={} program={}", req.model, req.program);

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| MetaDescError::ApiCall(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| MetaDescError::ApiCall(e.to_string()))?;

        if !status.is_success() {
            return Err(MetaDescError::ApiCall(format!("{}: {}", status, text)));
        }

        parse_chat_response(&text)
    }
}

/// レスポンスJSONから最初の choice の本文を取り出す
pub fn parse_chat_response(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| MetaDescError::ApiParse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| MetaDescError::ApiParse("choices に本文がありません".into()))
}
