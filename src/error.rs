use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetaDescError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。環境変数 OPENAI_API_KEY を設定するか、`metadesc config --set-api-key YOUR_KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("ZIP読み込みエラー: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("PDF読み込みエラー: {0}")]
    PdfExtraction(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(String),

    #[error("APIレスポンスのパースに失敗: {0}")]
    ApiParse(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("PDFが見つかりません: {0}")]
    NoDocumentsFound(String),

    #[error(transparent)]
    Common(#[from] metadesc_common::Error),
}

pub type Result<T> = std::result::Result<T, MetaDescError>;
