pub mod csv;
pub mod excel;
pub mod json;

use crate::cli::ExportFormat;
use crate::error::Result;
use metadesc_common::OutputRow;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_STEM: &str = "metadescripciones";
pub const SHEET_NAME: &str = "Metadescripciones";

/// 形式に合わせた出力パス
///
/// フォルダ指定（既存フォルダまたは拡張子なし）ならその中に既定名で作成、
/// それ以外は拡張子だけ差し替える。
fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_FILE_STEM, extension))
    } else {
        output.with_extension(extension)
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Target {
    Csv,
    Excel,
    Json,
}

impl Target {
    fn extension(self) -> &'static str {
        match self {
            Target::Csv => "csv",
            Target::Excel => "xlsx",
            Target::Json => "json",
        }
    }
}

fn targets(format: ExportFormat) -> &'static [Target] {
    match format {
        ExportFormat::Csv => &[Target::Csv],
        ExportFormat::Excel => &[Target::Excel],
        ExportFormat::Json => &[Target::Json],
        ExportFormat::All => &[Target::Csv, Target::Excel, Target::Json],
    }
}

fn write_one(rows: &[OutputRow], target: Target, output: &Path) -> Result<PathBuf> {
    let path = output_path_for_format(output, target.extension());
    ensure_parent(&path)?;

    match target {
        Target::Csv => csv::write_csv(rows, &path)?,
        Target::Excel => excel::write_excel(rows, &path, SHEET_NAME)?,
        Target::Json => json::write_json(rows, &path)?,
    }

    log::debug!("{} 出力: {} 行", path.display(), rows.len());
    Ok(path)
}

/// 出力テーブルを書き出し、作成したファイルのパスを返す
pub fn export_rows(rows: &[OutputRow], format: ExportFormat, output: &Path) -> Result<Vec<PathBuf>> {
    targets(format)
        .iter()
        .map(|t| write_one(rows, *t, output))
        .collect()
}
