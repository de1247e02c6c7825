//! 出力形式ごとの生成処理（I/Oなし）

pub mod csv_core;
pub mod json_core;

#[cfg(feature = "excel")]
pub mod excel_core;
