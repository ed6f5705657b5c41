//! 输出格式写入器注册表
//!
//! 按小写后缀查找写入器，同一个写入器可以注册到多个后缀。

use crate::infrastructure::NotationWriter;
use std::collections::HashMap;
use std::rc::Rc;

/// 后缀 → 写入器
#[derive(Default)]
pub struct WriterRegistry {
    writers: HashMap<String, Rc<dyn NotationWriter>>,
}

impl WriterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册写入器，后缀不区分大小写，已存在时覆盖
    pub fn register(&mut self, suffix: &str, writer: Rc<dyn NotationWriter>) {
        self.writers.insert(suffix.to_lowercase(), writer);
    }

    /// 链式注册
    pub fn with_writer(mut self, suffixes: &[&str], writer: Rc<dyn NotationWriter>) -> Self {
        for suffix in suffixes {
            self.register(suffix, Rc::clone(&writer));
        }
        self
    }

    pub fn writer(&self, suffix: &str) -> Option<&dyn NotationWriter> {
        self.writers
            .get(&suffix.to_lowercase())
            .map(|writer| writer.as_ref())
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.writers.contains_key(&suffix.to_lowercase())
    }

    /// 已注册的后缀（排序后）
    pub fn suffixes(&self) -> Vec<&str> {
        let mut suffixes: Vec<&str> = self.writers.keys().map(String::as_str).collect();
        suffixes.sort_unstable();
        suffixes
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}
