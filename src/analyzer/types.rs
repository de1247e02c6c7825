use metadesc_common::{build_system_prompt, DEFAULT_SYSTEM_PROMPT};

/// 1プログラム分の生成リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub program: String,
    pub signals: String,
    pub char_limit: usize,
    pub model: String,
    /// 上限値を埋め込み済みのシステムプロンプト
    pub system_prompt: String,
}

/// パイプライン全体の設定
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub char_limit: usize,
    pub model: String,
    /// `LÍMITE_DE_CARACTERES` を含むテンプレート
    pub system_prompt_template: String,
    pub summary_chars: usize,
    pub verbose: bool,
}

impl PipelineOptions {
    pub fn new(char_limit: usize, model: impl Into<String>) -> Self {
        Self {
            char_limit,
            model: model.into(),
            system_prompt_template: DEFAULT_SYSTEM_PROMPT.to_string(),
            summary_chars: metadesc_common::DEFAULT_SUMMARY_CHARS,
            verbose: false,
        }
    }

    pub fn with_system_prompt(mut self, template: impl Into<String>) -> Self {
        self.system_prompt_template = template.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn request_for(&self, program: &str, signals: String) -> GenerationRequest {
        GenerationRequest {
            program: program.to_string(),
            signals,
            char_limit: self.char_limit,
            model: self.model.clone(),
            system_prompt: build_system_prompt(&self.system_prompt_template, self.char_limit),
        }
    }
}
