use std::path::{Path, PathBuf};

use crate::error::PackError;
use crate::logging::{log_copy, log_info, log_link, log_package, log_warning};
use crate::manifest::produce_deploy_manifest;

use super::env_files::{copy_env_files, EnvCopyReport};
use super::node_modules::{link_node_modules, LinkOutcome, NODE_MODULES_DIR};

#[derive(Debug)]
pub struct PackagingReport {
    pub manifest_path: PathBuf,
    pub link: LinkOutcome,
    pub env: EnvCopyReport,
}

/// Runs the three packaging operations concurrently and settles them all
/// before deciding the step's fate. Only the deployment-manifest path can
/// fail the run; the link and env-copy outcomes are reported and kept even
/// when it does.
pub async fn run_packaging(
    project_dir: &Path,
    out_dir: &Path,
) -> Result<PackagingReport, PackError> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|source| PackError::OutDirCreate {
            path: out_dir.to_path_buf(),
            source,
        })?;

    let (manifest, link, env) = tokio::join!(
        produce_deploy_manifest(project_dir, out_dir),
        link_node_modules(project_dir, out_dir),
        copy_env_files(project_dir, out_dir),
    );

    report_link(&link, project_dir, out_dir);
    report_env(&env, out_dir);

    let manifest_path = manifest?;
    log_package(&format!(
        "Saved deployment package.json to {}",
        manifest_path.display()
    ));

    Ok(PackagingReport {
        manifest_path,
        link,
        env,
    })
}

fn report_link(outcome: &LinkOutcome, project_dir: &Path, out_dir: &Path) {
    match outcome {
        LinkOutcome::Created => log_link(&format!(
            "Symlink created: {} -> {}",
            out_dir.join(NODE_MODULES_DIR).display(),
            project_dir.join(NODE_MODULES_DIR).display()
        )),
        LinkOutcome::SkippedMissingTarget => {
            log_warning("Target node_modules not found. Skipping symlink.");
        }
        LinkOutcome::Failed(reason) => log_warning(&format!(
            "Failed to create symlink (expected if the deployment target installs dependencies): {reason}"
        )),
    }
}

fn report_env(report: &EnvCopyReport, out_dir: &Path) {
    for name in &report.copied {
        log_copy(&format!("Copied {} to {}", name, out_dir.display()));
    }
    for (name, reason) in &report.failed {
        log_warning(&format!("Failed to copy {name}: {reason}"));
    }
    if report.copied.is_empty() && report.failed.is_empty() {
        log_info("No .env files found. (If the runtime injects configuration, ignore this.)");
    }
}
