use crate::workflow::ConvertOptions;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// 程序配置
///
/// 优先级：环境变量 > `CONVERTER_CONFIG` 指向的 TOML 文件 > 默认值
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 批处理任务文件
    pub job_file: Option<PathBuf>,
    /// 样式文件
    pub style_path: Option<PathBuf>,
    /// 强制加载
    pub force_mode: bool,
    /// 音色配置
    pub sound_profile: Option<String>,
    /// 转换前执行的扩展
    pub extension_uri: Option<String>,
    /// 失败报告文件
    pub failure_report_file: Option<PathBuf>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Config {
    /// 按优先级加载配置
    pub fn load() -> Result<Self> {
        let base = match std::env::var("CONVERTER_CONFIG") {
            Ok(path) if !path.is_empty() => Self::from_file(Path::new(&path))?,
            _ => Self::default(),
        };
        Ok(base.with_env_overrides(|name| std::env::var(name).ok()))
    }

    /// 从 TOML 文件加载
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn with_env_overrides(self, var: impl Fn(&str) -> Option<String>) -> Self {
        let default = self;
        Self {
            job_file: var("CONVERTER_JOB_FILE").map(PathBuf::from).or(default.job_file),
            style_path: var("CONVERTER_STYLE_PATH").map(PathBuf::from).or(default.style_path),
            force_mode: var("CONVERTER_FORCE_MODE").and_then(|v| v.parse().ok()).unwrap_or(default.force_mode),
            sound_profile: var("CONVERTER_SOUND_PROFILE").or(default.sound_profile),
            extension_uri: var("CONVERTER_EXTENSION_URI").or(default.extension_uri),
            failure_report_file: var("CONVERTER_FAILURE_REPORT").map(PathBuf::from).or(default.failure_report_file),
            verbose_logging: var("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }

    /// 转换参数，空字符串视为未设置
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            style_path: self.style_path.clone().filter(|p| !p.as_os_str().is_empty()),
            force_mode: self.force_mode,
            sound_profile: self.sound_profile.clone().filter(|s| !s.is_empty()),
            extension_uri: self.extension_uri.clone().filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_toml() {
        let config = Config::from_toml_str(
            r#"
            job_file = "jobs.json"
            force_mode = true
            sound_profile = "MuseSounds"
            "#,
        )
        .unwrap();

        assert_eq!(config.job_file, Some(PathBuf::from("jobs.json")));
        assert!(config.force_mode);
        assert_eq!(config.sound_profile.as_deref(), Some("MuseSounds"));
        assert_eq!(config.extension_uri, None);
    }

    #[test]
    fn test_env_overrides_file() {
        let vars: HashMap<&str, &str> = [
            ("CONVERTER_JOB_FILE", "other.json"),
            ("CONVERTER_FORCE_MODE", "false"),
            ("CONVERTER_EXTENSION_URI", "ext://cleanup"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_toml_str("job_file = \"jobs.json\"\nforce_mode = true")
            .unwrap()
            .with_env_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.job_file, Some(PathBuf::from("other.json")));
        assert!(!config.force_mode);
        assert_eq!(config.extension_uri.as_deref(), Some("ext://cleanup"));
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let config = Config {
            sound_profile: Some(String::new()),
            extension_uri: Some(String::new()),
            ..Default::default()
        };

        let options = config.convert_options();
        assert_eq!(options.sound_profile, None);
        assert_eq!(options.extension_uri, None);
    }
}
