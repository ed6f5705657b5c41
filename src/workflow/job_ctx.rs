//! 任务处理上下文
//!
//! 封装"我正在处理第几个任务"这一信息，仅用于日志

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobCtx {
    /// 任务序号（从1开始）
    pub index: usize,
    /// 任务总数
    pub total: usize,
}

impl JobCtx {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    /// 单文件模式
    pub fn single() -> Self {
        Self::new(1, 1)
    }
}

impl Display for JobCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[任务 {}/{}]", self.index, self.total)
    }
}
