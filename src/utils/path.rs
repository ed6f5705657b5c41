//! 路径工具
//!
//! 输出后缀决定写入器和转换策略，这里统一后缀、文件名和目录的取法。

use std::path::{Path, PathBuf};

/// 把用户输入路径中的 `\` 统一为 `/`
pub fn from_native_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// 小写的文件后缀（不含 `.`），没有后缀时返回空串
pub fn suffix(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// 去掉最后一个后缀后的文件名，`a.b.png` → `a.b`
pub fn complete_basename(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// 所在目录，相对文件名返回空路径
pub fn dir_path(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_are_normalized() {
        assert_eq!(
            from_native_separators(r"C:\scores/in\a.mscz"),
            "C:/scores/in/a.mscz"
        );
    }

    #[test]
    fn test_suffix_is_lowercase() {
        assert_eq!(suffix(Path::new("out/Score.PDF")), "pdf");
        assert_eq!(suffix(Path::new("out/noext")), "");
    }

    #[test]
    fn test_complete_basename_keeps_inner_dots() {
        assert_eq!(complete_basename(Path::new("dir/a.b.png")), "a.b");
        assert_eq!(complete_basename(Path::new("out-*.png")), "out-*");
    }

    #[test]
    fn test_dir_path_of_relative_file_is_empty() {
        assert_eq!(dir_path(Path::new("a.pdf")), PathBuf::new());
        assert_eq!(dir_path(Path::new("x/y/a.pdf")), PathBuf::from("x/y"));
    }
}
