//! 存储后端
//!
//! SkillStore 每次变更后整文件重写；后端抽象为 trait，测试可以替换为内存实现。

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// 整文件读写的存储后端
pub trait SkillStorage: Send {
    /// 读取全部内容；文件不存在时返回 Ok(None)
    fn read(&self) -> std::io::Result<Option<String>>;

    /// 用 contents 覆盖全部内容
    fn write(&self, contents: &str) -> std::io::Result<()>;

    /// 用于日志的位置描述
    fn describe(&self) -> String;
}

/// 本地文件存储；父目录不存在时写入前自动创建
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SkillStorage for FileStorage {
    fn read(&self) -> std::io::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        std::fs::read_to_string(&self.path).map(Some)
    }

    fn write(&self, contents: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// 内存存储：克隆共享同一份内容，便于测试中检查写入结果
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定内容作为已有文件
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.lock().contents = Some(contents.into());
        storage
    }

    /// 当前内容（从未写入且未预置时为 None）
    pub fn contents(&self) -> Option<String> {
        self.lock().contents.clone()
    }

    /// 累计写入次数
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // 持锁期间不会 panic，中毒时直接取回内部数据
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SkillStorage for MemoryStorage {
    fn read(&self) -> std::io::Result<Option<String>> {
        Ok(self.lock().contents.clone())
    }

    fn write(&self, contents: &str) -> std::io::Result<()> {
        let mut state = self.lock();
        state.contents = Some(contents.to_string());
        state.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
