use std::path::Path;

/// Candidate environment-override files, copied in this order when present.
pub const ENV_FILES: [&str; 2] = [".env", ".env.local"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvCopyReport {
    pub copied: Vec<String>,
    pub failed: Vec<(String, String)>,
}

/// Copies each present candidate file into the output directory. A missing
/// source is skipped without a trace; only an actual I/O failure on an
/// existing source is recorded.
pub async fn copy_env_files(project_dir: &Path, out_dir: &Path) -> EnvCopyReport {
    let mut report = EnvCopyReport::default();

    for name in ENV_FILES {
        let source = project_dir.join(name);
        if tokio::fs::metadata(&source).await.is_err() {
            continue;
        }
        match tokio::fs::copy(&source, out_dir.join(name)).await {
            Ok(_) => report.copied.push(name.to_string()),
            Err(error) => report.failed.push((name.to_string(), error.to_string())),
        }
    }

    report
}
