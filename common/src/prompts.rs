//! プロンプト生成モジュール
//!
//! - DEFAULT_SYSTEM_PROMPT: 組み込みのシステムプロンプト（`LÍMITE_DE_CARACTERES`を含む）
//! - validate_template: 外部ファイルのテンプレート検査
//! - build_system_prompt: プレースホルダーを文字数上限に置換
//! - build_user_prompt: プログラム名・抜粋・上限からユーザープロンプトを生成

use crate::error::{Error, Result};

/// システムプロンプト中の文字数上限プレースホルダー
pub const LIMIT_PLACEHOLDER: &str = "LÍMITE_DE_CARACTERES";

/// 組み込みのシステムプロンプト
///
/// `--system-prompt` でファイルを指定した場合はそちらを使う。
pub const DEFAULT_SYSTEM_PROMPT: &str = r#"Eres un redactor SEO y de anuncios para una universidad.
Tu tarea es escribir metadescripciones para carreras universitarias.

Reglas:
- Cada metadescripción tiene como máximo LÍMITE_DE_CARACTERES caracteres, incluyendo espacios.
- Incluye siempre el nombre de la carrera.
- Usa un verbo de acción al inicio cuando sea natural (Conoce, Descubre, Explora, Estudia).
- Destaca un beneficio concreto tomado del contexto (malla, modalidad, duración, campo laboral).
- No inventes datos que no aparezcan en el contexto.
- Escribe en español neutro, sin emojis, sin comillas y sin numeración.
- Responde solo con las metadescripciones, una por línea."#;

/// 外部から読み込んだテンプレートを検査
///
/// 空はエラー。プレースホルダーがなくても使えるので、有無だけを返す。
pub fn validate_template(template: &str) -> Result<bool> {
    if template.trim().is_empty() {
        return Err(Error::Template("システムプロンプトが空です".into()));
    }
    Ok(template.contains(LIMIT_PLACEHOLDER))
}

/// システムプロンプトのプレースホルダーを上限値に置換
pub fn build_system_prompt(template: &str, char_limit: usize) -> String {
    template.replace(LIMIT_PLACEHOLDER, &char_limit.to_string())
}

/// ユーザープロンプト生成
///
/// # Arguments
/// * `program` - 推定したプログラム名
/// * `signals` - 本文の抜粋
/// * `char_limit` - 1件あたりの文字数上限
pub fn build_user_prompt(program: &str, signals: &str, char_limit: usize) -> String {
    format!(
        r#"
Contexto resumido de la carrera:
---
{signals}
---

Genera 4 metadescripciones distintas para la carrera "{program}".
Límite estricto: {char_limit} caracteres (incluyendo espacios).
Una por línea, sin numeración, sin comillas.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt_has_placeholder() {
        assert!(DEFAULT_SYSTEM_PROMPT.contains(LIMIT_PLACEHOLDER));
    }

    #[test]
    fn test_build_system_prompt_replaces_all() {
        let template = "máx LÍMITE_DE_CARACTERES / LÍMITE_DE_CARACTERES";
        assert_eq!(build_system_prompt(template, 90), "máx 90 / 90");

        let prompt = build_system_prompt(DEFAULT_SYSTEM_PROMPT, 155);
        assert!(prompt.contains("155 caracteres"));
        assert!(!prompt.contains(LIMIT_PLACEHOLDER));
    }

    #[test]
    fn test_build_system_prompt_without_placeholder() {
        assert_eq!(build_system_prompt("sin marcador", 90), "sin marcador");
    }

    #[test]
    fn test_validate_template() {
        assert!(validate_template(DEFAULT_SYSTEM_PROMPT).unwrap());
        assert!(!validate_template("Máximo 90 caracteres.").unwrap());
        assert!(matches!(validate_template(" \n "), Err(Error::Template(_))));
    }

    #[test]
    fn test_build_user_prompt() {
        let prompt = build_user_prompt("Medicina Humana", "Duración: 7 años", 90);
        assert!(prompt.contains("---\nDuración: 7 años\n---"));
        assert!(prompt.contains(r#"la carrera "Medicina Humana"."#));
        assert!(prompt.contains("Límite estricto: 90 caracteres"));
        assert!(prompt.contains("sin numeración"));
    }
}
