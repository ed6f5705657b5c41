//! 测试用的假引擎
//!
//! 输入文件是一段 JSON：
//! `{"title": "Symphony", "pages": 2, "parts": ["Flute", "Oboe"], "part_pages": 1}`

#![allow(dead_code)]

use score_converter::infrastructure::{
    CurrentProjectSlot, EngineError, EngineResult, ExtensionRunner, MasterNotation, Notation,
    NotationEngine, NotationProject, NotationWriter, OutputFile, ProjectCreator, WriterOptions,
};
use score_converter::{BatchConverter, Config, ConvertOptions, TransposeOptions, WriterRegistry};
use serde::Deserialize;
use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

pub type Events = Rc<RefCell<Vec<String>>>;

fn default_pages() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize)]
struct FakeScore {
    title: String,
    #[serde(default = "default_pages")]
    pages: usize,
    #[serde(default)]
    parts: Vec<String>,
    #[serde(default = "default_pages")]
    part_pages: usize,
    #[serde(default)]
    untransposable: bool,
}

pub struct FakeNotation {
    name: String,
    pages: usize,
}

impl Notation for FakeNotation {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn page_count(&self) -> usize {
        self.pages
    }
}

#[derive(Default)]
pub struct FakeMaster {
    score: FakeNotation,
    parts: Vec<FakeNotation>,
    untransposable: bool,
    events: Events,
}

impl Default for FakeNotation {
    fn default() -> Self {
        Self {
            name: String::new(),
            pages: 0,
        }
    }
}

impl MasterNotation for FakeMaster {
    fn notation(&self) -> &dyn Notation {
        &self.score
    }

    fn excerpts(&self) -> Vec<&dyn Notation> {
        self.parts.iter().map(|p| p as &dyn Notation).collect()
    }

    fn transpose(&mut self, options: &TransposeOptions) -> EngineResult<()> {
        self.events.borrow_mut().push("transpose".to_string());
        if self.untransposable {
            return Err(EngineError::new("cannot transpose drum staff"));
        }
        self.score.name = format!("{} (key {})", self.score.name, options.target_key);
        Ok(())
    }
}

pub struct FakeProject {
    master: FakeMaster,
    events: Events,
}

impl NotationProject for FakeProject {
    fn load(&mut self, path: &Path, _style_path: Option<&Path>, force_mode: bool) -> EngineResult<()> {
        self.events
            .borrow_mut()
            .push(format!("load:{}:force={}", path.display(), force_mode));

        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::new(format!("cannot read score: {}", e)))?;
        let score: FakeScore = serde_json::from_str(&content)
            .map_err(|e| EngineError::new(format!("score file is corrupted: {}", e)))?;

        self.master = FakeMaster {
            score: FakeNotation {
                name: score.title,
                pages: score.pages,
            },
            parts: score
                .parts
                .into_iter()
                .map(|name| FakeNotation {
                    name,
                    pages: score.part_pages,
                })
                .collect(),
            untransposable: score.untransposable,
            events: Rc::clone(&self.events),
        };
        Ok(())
    }

    fn save(&mut self, path: &Path) -> EngineResult<()> {
        self.events
            .borrow_mut()
            .push(format!("save:{}", path.display()));
        std::fs::write(path, format!("native:{}", self.master.score.name))
            .map_err(|e| EngineError::new(e.to_string()))
    }

    fn clear_track_input_params(&mut self) {
        self.events.borrow_mut().push("clear_tracks".to_string());
    }

    fn set_active_sound_profile(&mut self, profile: &str) {
        self.events.borrow_mut().push(format!("profile:{}", profile));
    }

    fn master_notation(&self) -> &dyn MasterNotation {
        &self.master
    }

    fn master_notation_mut(&mut self) -> &mut dyn MasterNotation {
        &mut self.master
    }
}

pub struct FakeCreator {
    events: Events,
}

impl ProjectCreator for FakeCreator {
    fn new_project(&self) -> Box<dyn NotationProject> {
        self.events.borrow_mut().push("new_project".to_string());
        Box::new(FakeProject {
            master: FakeMaster::default(),
            events: Rc::clone(&self.events),
        })
    }
}

/// 写出 `名称|page=..|per_part=..`，名称含 `fail_on` 时返回错误
pub struct FakeWriter {
    events: Events,
    slot: Rc<CurrentProjectSlot>,
    fail_on: Option<String>,
}

impl NotationWriter for FakeWriter {
    fn write(
        &self,
        notation: &dyn Notation,
        out: &mut OutputFile,
        options: &WriterOptions,
    ) -> EngineResult<()> {
        let current = self
            .slot
            .current()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.events
            .borrow_mut()
            .push(format!("write:{}:current={}", out.path().display(), current));

        if let Some(fail_on) = &self.fail_on {
            if notation.name().contains(fail_on.as_str()) {
                return Err(EngineError::new("disk full"));
            }
        }

        write!(
            out,
            "{}|page={:?}|per_part={}",
            notation.name(),
            options.page_number,
            options.per_part
        )
        .map_err(|e| EngineError::new(e.to_string()))
    }
}

/// `ext://fail` 失败，其他扩展把音色配置改为 `[ext]`
pub struct FakeExtensions {
    events: Events,
}

impl ExtensionRunner for FakeExtensions {
    fn perform(&self, uri: &str, project: &mut dyn NotationProject) -> EngineResult<()> {
        self.events.borrow_mut().push(format!("extension:{}", uri));
        if uri == "ext://fail" {
            return Err(EngineError::new("plugin crashed"));
        }
        project.set_active_sound_profile("[ext]");
        Ok(())
    }
}

pub struct Harness {
    pub dir: TempDir,
    pub events: Events,
    pub converter: BatchConverter,
}

impl Harness {
    pub fn new(options: ConvertOptions) -> Self {
        Self::build(options, None)
    }

    /// 标题或声部名包含 `fail_on` 时写入失败
    pub fn with_failing_writer(options: ConvertOptions, fail_on: &str) -> Self {
        Self::build(options, Some(fail_on.to_string()))
    }

    /// 通过 `BatchConverter::from_config` 创建，配置可以引用临时目录
    pub fn with_config(config: impl FnOnce(&Path) -> Config) -> Self {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let config = config(dir.path());
        let events: Events = Rc::default();
        let (engine, writers) = fake_engine(&events, None);

        Self {
            dir,
            events,
            converter: BatchConverter::from_config(engine, writers, &config),
        }
    }

    fn build(options: ConvertOptions, fail_on: Option<String>) -> Self {
        let events: Events = Rc::default();
        let (engine, writers) = fake_engine(&events, fail_on);

        Self {
            dir: tempfile::tempdir().expect("创建临时目录失败"),
            events,
            converter: BatchConverter::new(engine, writers, options),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// 写一个假乐谱文件
    pub fn score(&self, name: &str, json: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, json).expect("写入乐谱失败");
        path
    }

    pub fn job_file(&self, json: &str) -> PathBuf {
        let path = self.path("jobs.json");
        std::fs::write(&path, json).expect("写入任务文件失败");
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).unwrap_or_else(|_| panic!("缺少输出文件 {}", name))
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn count_events(&self, prefix: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }
}

fn fake_engine(events: &Events, fail_on: Option<String>) -> (NotationEngine, WriterRegistry) {
    let engine = NotationEngine::new(Box::new(FakeCreator {
        events: Rc::clone(events),
    }))
    .with_extensions(Box::new(FakeExtensions {
        events: Rc::clone(events),
    }));

    let writer = Rc::new(FakeWriter {
        events: Rc::clone(events),
        slot: engine.current_project(),
        fail_on,
    });
    let writers = WriterRegistry::new().with_writer(&["pdf", "png", "svg", "mp3", "mscz"], writer);
    (engine, writers)
}

/// JSON 字符串里使用的路径
pub fn json_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
