use anyhow::{bail, Result};
use score_converter::config::Config;
use score_converter::orchestrator::plan_batch;
use score_converter::utils::logging;
use tracing::{error, info};

/// 校验批处理任务文件并输出转换计划
///
/// 实际转换需要宿主程序提供记谱引擎，见 `BatchConverter`。
fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    let Some(job_file) = config.job_file.as_deref() else {
        bail!("未指定批处理任务文件，请设置 CONVERTER_JOB_FILE");
    };

    let options = config.convert_options();
    let plan = plan_batch(job_file, options.extension_uri.as_deref())?;

    let mut invalid = 0;
    for (index, planned) in plan.iter().enumerate() {
        match &planned.strategy {
            Ok(strategy) => info!("[任务 {}/{}] {} → {}", index + 1, plan.len(), planned.job, strategy),
            Err(e) => {
                invalid += 1;
                error!("[任务 {}/{}] {} → {}", index + 1, plan.len(), planned.job, e);
            }
        }
    }

    if invalid > 0 {
        bail!("{} 个任务无法转换", invalid);
    }

    info!("✓ 共 {} 个任务，全部可转换", plan.len());
    Ok(())
}
