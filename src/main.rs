//! vocab-clean 入口
//!
//! 批量清洗词库 JSON 文档：剔除释义中的中文，只保留英文。
//! 文档不存在时跳过并警告；解析或写回失败时该文档原样保留，
//! 批处理继续，最终以非零退出码反映失败。

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vocab_clean::config::CleanConfig;
use vocab_clean::document;
use vocab_clean::error::CleanError;

/// 词库清洗工具：剔除 val 字段中的中文，只保留英文释义
#[derive(Parser, Debug)]
#[command(name = "vocab-clean", version, about)]
struct Cli {
    /// 待处理的词库文档（省略时使用配置文件或默认列表）
    files: Vec<PathBuf>,

    /// JSON 配置文件路径，格式 {"documents": [...]}
    #[arg(long)]
    config: Option<PathBuf>,

    /// 只报告将发生的修改，不写回文件
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // 命令行路径优先于配置文件，配置文件优先于默认列表
    let documents = if !cli.files.is_empty() {
        cli.files
    } else if let Some(config_path) = &cli.config {
        match CleanConfig::load(config_path) {
            Ok(config) => config.documents,
            Err(err) => {
                tracing::error!("{:#}", err);
                return ExitCode::FAILURE;
            }
        }
    } else {
        CleanConfig::default().documents
    };

    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for path in &documents {
        tracing::info!("处理 {}", path.display());
        match document::process(path, cli.dry_run) {
            Ok(_) => processed += 1,
            Err(CleanError::NotFound { path }) => {
                tracing::warn!("文档不存在，跳过: {}", path.display());
                skipped += 1;
            }
            Err(err) => {
                tracing::error!("{}", err);
                failed += 1;
            }
        }
    }

    tracing::info!(
        "处理完成: {} 个成功, {} 个跳过, {} 个失败",
        processed,
        skipped,
        failed
    );

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
