//! 试运行：解析任务文件并为每个任务选择策略，不加载任何乐谱

use crate::error::Result;
use crate::models::job::JobDescriptor;
use crate::models::loaders::load_batch_job;
use crate::workflow::ConversionStrategy;
use std::path::Path;

/// 一个任务及其策略（或选择失败的原因）
#[derive(Debug)]
pub struct PlannedJob {
    pub job: JobDescriptor,
    pub strategy: Result<ConversionStrategy>,
}

/// 生成批处理计划
pub fn plan_batch(job_file: &Path, extension_uri: Option<&str>) -> Result<Vec<PlannedJob>> {
    let jobs = load_batch_job(job_file)?;

    Ok(jobs
        .into_iter()
        .map(|job| {
            let strategy = ConversionStrategy::select(&job.output, extension_uri);
            PlannedJob { job, strategy }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PartFormat;

    #[test]
    fn test_plan_marks_unsupported_parts() {
        let dir = tempfile::tempdir().unwrap();
        let job_file = dir.path().join("jobs.json");
        std::fs::write(
            &job_file,
            r#"[{"in": "a.mscz", "out": ["a.pdf", "a-*.svg", ["a-", ".mp3"]]}]"#,
        )
        .unwrap();

        let plan = plan_batch(&job_file, None).unwrap();

        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].strategy.as_ref().unwrap(), &ConversionStrategy::Full);
        assert!(plan[1].strategy.is_err());
        assert_eq!(
            plan[2].strategy.as_ref().unwrap(),
            &ConversionStrategy::PerPart(PartFormat::Mp3)
        );
    }
}
