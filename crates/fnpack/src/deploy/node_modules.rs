use std::io;
use std::path::Path;

pub const NODE_MODULES_DIR: &str = "node_modules";

/// Outcome of the shared-dependency link operation. Never fatal: the
/// orchestrator logs it and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Created,
    SkippedMissingTarget,
    Failed(String),
}

/// Links `<out-dir>/node_modules` at the project's dependency directory,
/// replacing whatever stale file or link occupies that path.
pub async fn link_node_modules(project_dir: &Path, out_dir: &Path) -> LinkOutcome {
    let target = project_dir.join(NODE_MODULES_DIR);
    let link = out_dir.join(NODE_MODULES_DIR);

    if tokio::fs::metadata(&target).await.is_err() {
        return LinkOutcome::SkippedMissingTarget;
    }

    if tokio::fs::symlink_metadata(&link).await.is_ok() {
        if let Err(error) = remove_link_entry(&link).await {
            return LinkOutcome::Failed(error.to_string());
        }
    }

    match create_dir_link(&target, &link).await {
        Ok(()) => LinkOutcome::Created,
        Err(error) => LinkOutcome::Failed(error.to_string()),
    }
}

async fn remove_link_entry(link: &Path) -> io::Result<()> {
    match tokio::fs::remove_file(link).await {
        Ok(()) => Ok(()),
        // A stale directory symlink on Windows unlinks as a directory.
        Err(_) => tokio::fs::remove_dir(link).await,
    }
}

#[cfg(unix)]
async fn create_dir_link(target: &Path, link: &Path) -> io::Result<()> {
    tokio::fs::symlink(target, link).await
}

#[cfg(windows)]
async fn create_dir_link(target: &Path, link: &Path) -> io::Result<()> {
    tokio::fs::symlink_dir(target, link).await
}
