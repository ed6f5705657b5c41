//! 当前工程槽位
//!
//! 转换期间记录正在处理的工程，守卫析构时清空，失败路径也不例外。

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tracing::warn;

/// 进程内唯一的“当前工程”
#[derive(Debug, Default)]
pub struct CurrentProjectSlot {
    current: RefCell<Option<PathBuf>>,
}

impl CurrentProjectSlot {
    /// 登记当前工程，返回的守卫离开作用域时自动清空
    pub fn enter(&self, project_path: &Path) -> CurrentProjectGuard<'_> {
        let mut current = self.current.borrow_mut();
        if let Some(previous) = current.as_ref() {
            warn!("当前工程未清空: {}", previous.display());
        }
        *current = Some(project_path.to_path_buf());
        CurrentProjectGuard { slot: self }
    }

    pub fn current(&self) -> Option<PathBuf> {
        self.current.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.current.borrow().is_none()
    }
}

/// 当前工程的登记守卫
#[must_use = "守卫被丢弃时当前工程立即清空"]
pub struct CurrentProjectGuard<'a> {
    slot: &'a CurrentProjectSlot,
}

impl Drop for CurrentProjectGuard<'_> {
    fn drop(&mut self) {
        *self.slot.current.borrow_mut() = None;
    }
}
