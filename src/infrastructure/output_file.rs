//! 输出文件句柄
//!
//! 每次写入单独打开、写完即关闭。

use crate::error::{ConvertError, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// 一个已打开的输出文件，附带写入器可读取的元信息
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
    meta: BTreeMap<String, String>,
}

impl OutputFile {
    /// 创建（或截断）输出文件
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| ConvertError::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut output = Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            meta: BTreeMap::new(),
        };
        output.set_meta("file_path", path.to_string_lossy());
        Ok(output)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.meta.insert(key.into(), value.into());
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta.get(key).map(String::as_str)
    }

    /// 刷新并关闭
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| ConvertError::output_write(&self.path, e.to_string()))
    }
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
