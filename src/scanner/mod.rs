pub mod pdf_text;

pub use pdf_text::{LopdfExtractor, TextExtractor};

use crate::error::{MetaDescError, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

/// PDFの入力元（ZIPアーカイブまたはフォルダ）
pub enum InputSource {
    Archive(ZipArchive<File>),
    Folder(PathBuf),
}

/// 拡張子が.pdfか（大文字小文字を区別しない）
pub fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

impl InputSource {
    /// パスがフォルダならフォルダ、それ以外はZIPとして開く
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MetaDescError::FileNotFound(path.display().to_string()));
        }

        if path.is_dir() {
            return Ok(InputSource::Folder(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let archive = ZipArchive::new(file)?;
        Ok(InputSource::Archive(archive))
    }

    /// PDFエントリ名の一覧
    ///
    /// ZIPは格納順、フォルダはファイル名順（直下のみ）
    pub fn pdf_names(&self) -> Vec<String> {
        match self {
            InputSource::Archive(archive) => archive
                .file_names()
                .filter(|name| is_pdf_name(name))
                .map(|name| name.to_string())
                .collect(),
            InputSource::Folder(folder) => {
                let mut names: Vec<String> = WalkDir::new(folder)
                    .max_depth(1)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file())
                    .map(|e| e.file_name().to_string_lossy().to_string())
                    .filter(|name| is_pdf_name(name))
                    .collect();
                names.sort();
                names
            }
        }
    }

    /// エントリのバイト列を読み込む
    pub fn read(&mut self, name: &str) -> Result<Vec<u8>> {
        match self {
            InputSource::Archive(archive) => {
                let mut entry = archive.by_name(name)?;
                let mut data = Vec::with_capacity(entry.size() as usize);
                entry.read_to_end(&mut data)?;
                Ok(data)
            }
            InputSource::Folder(folder) => Ok(std::fs::read(folder.join(name))?),
        }
    }
}
