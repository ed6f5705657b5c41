//! 输出写入服务 - 业务能力层
//!
//! 整份、逐页、按声部三种写法。每个输出文件单独打开并关闭，
//! 任一文件打开或写入失败即停止后续输出。

use crate::error::{ConvertError, Result};
use crate::infrastructure::{MasterNotation, Notation, NotationWriter, OutputFile, WriterOptions};
use crate::utils::path::{complete_basename, dir_path, suffix};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// 声部名占位符
pub const PART_WILDCARD: char = '*';

/// 支持按声部导出的格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartFormat {
    Pdf,
    Png,
    Mp3,
}

impl PartFormat {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "pdf" => Some(PartFormat::Pdf),
            "png" => Some(PartFormat::Png),
            "mp3" => Some(PartFormat::Mp3),
            _ => None,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            PartFormat::Pdf => "pdf",
            PartFormat::Png => "png",
            PartFormat::Mp3 => "mp3",
        }
    }
}

/// 整份乐谱写入一个文件
pub fn write_full_notation(
    writer: &dyn NotationWriter,
    notation: &dyn Notation,
    out: &Path,
) -> Result<Vec<PathBuf>> {
    let file = OutputFile::create(out)?;
    write_file(writer, notation, file, &WriterOptions::default())?;
    Ok(vec![out.to_path_buf()])
}

/// 逐页写入，文件名追加从 1 开始的页码
pub fn write_page_by_page(
    writer: &dyn NotationWriter,
    notation: &dyn Notation,
    out: &Path,
) -> Result<Vec<PathBuf>> {
    let pages = notation.page_count();
    let mut written = Vec::with_capacity(pages);

    for page in 0..pages {
        let page_out = page_path(out, page + 1);
        let mut file = OutputFile::create(&page_out)?;
        file.set_meta("dir_path", out.to_string_lossy());

        let options = WriterOptions {
            page_number: Some(page),
            ..Default::default()
        };
        write_file(writer, notation, file, &options)?;
        written.push(page_out);
    }

    debug!("逐页导出 {} 页: {}", pages, out.display());
    Ok(written)
}

/// 每个声部写出一份，文件名中的 `*` 替换为声部名
pub fn write_parts(
    writer: &dyn NotationWriter,
    master: &dyn MasterNotation,
    out: &Path,
    format: PartFormat,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for part in master.excerpts() {
        let part_out = part_path(out, &part.name(), format);
        match format {
            PartFormat::Png => {
                written.extend(write_page_by_page(writer, part, &part_out)?);
            }
            PartFormat::Pdf | PartFormat::Mp3 => {
                let file = OutputFile::create(&part_out)?;
                let options = WriterOptions {
                    per_part: true,
                    ..Default::default()
                };
                write_file(writer, part, file, &options)?;
                written.push(part_out);
            }
        }
    }

    Ok(written)
}

/// `dir/name.png` 第 3 页 → `dir/name-3.png`
pub fn page_path(out: &Path, page: usize) -> PathBuf {
    let file_name = format!("{}-{}.{}", complete_basename(out), page, suffix(out));
    dir_path(out).join(file_name)
}

/// `dir/score-*.pdf` 的 Flute 声部 → `dir/score-Flute.pdf`
pub fn part_path(out: &Path, part_name: &str, format: PartFormat) -> PathBuf {
    let base_name = complete_basename(out).replace(PART_WILDCARD, part_name);
    dir_path(out).join(format!("{}.{}", base_name, format.suffix()))
}

fn write_file(
    writer: &dyn NotationWriter,
    notation: &dyn Notation,
    mut file: OutputFile,
    options: &WriterOptions,
) -> Result<()> {
    if let Err(e) = writer.write(notation, &mut file, options) {
        error!("写入失败: {}, 路径: {}", e, file.path().display());
        return Err(ConvertError::output_write(file.path(), e.message));
    }
    file.finish()
}
