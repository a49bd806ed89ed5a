use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::PackError;

use super::{DeployManifest, Engines, ProjectManifest};

pub const MANIFEST_FILE: &str = "package.json";

pub const FIREBASE_FUNCTIONS_DEP: &str = "firebase-functions";
pub const FIREBASE_ADMIN_DEP: &str = "firebase-admin";
pub const FIREBASE_FUNCTIONS_DEFAULT_VERSION: &str = "^12.7.0";
pub const FIREBASE_ADMIN_DEFAULT_VERSION: &str = "^3.4.1";

pub const ENTRY_POINT: &str = "index.js";
pub const NODE_VERSION: &str = "20";
pub const MODULE_TYPE: &str = "commonjs";

pub async fn read_project_manifest(project_dir: &Path) -> Result<ProjectManifest, PackError> {
    let path = project_dir.join(MANIFEST_FILE);
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| PackError::ManifestRead {
            path: path.clone(),
            source,
        })?;
    serde_json::from_str(&raw).map_err(|source| PackError::ManifestParse { path, source })
}

/// A dependency entry survives only as a non-empty version-range string;
/// anything else falls back to the pinned default for that key.
fn resolve_dependency_version(
    dependencies: &Map<String, Value>,
    name: &str,
    fallback: &str,
) -> String {
    match dependencies.get(name) {
        Some(Value::String(range)) if !range.is_empty() => range.clone(),
        _ => fallback.to_string(),
    }
}

pub fn build_deploy_manifest(project: &ProjectManifest) -> DeployManifest {
    let mut dependencies = Map::new();
    dependencies.insert(
        FIREBASE_FUNCTIONS_DEP.to_string(),
        Value::String(resolve_dependency_version(
            &project.dependencies,
            FIREBASE_FUNCTIONS_DEP,
            FIREBASE_FUNCTIONS_DEFAULT_VERSION,
        )),
    );
    dependencies.insert(
        FIREBASE_ADMIN_DEP.to_string(),
        Value::String(resolve_dependency_version(
            &project.dependencies,
            FIREBASE_ADMIN_DEP,
            FIREBASE_ADMIN_DEFAULT_VERSION,
        )),
    );
    // Any further runtime dependency the function needs must be added here
    // by hand; nothing beyond the two fixed entries is carried forward.

    DeployManifest {
        name: project.name.clone(),
        main: ENTRY_POINT.to_string(),
        engines: Engines {
            node: NODE_VERSION.to_string(),
        },
        module_type: MODULE_TYPE.to_string(),
        dependencies,
    }
}

pub async fn write_deploy_manifest(
    out_dir: &Path,
    manifest: &DeployManifest,
) -> Result<PathBuf, PackError> {
    let path = out_dir.join(MANIFEST_FILE);
    let serialized = serde_json::to_string_pretty(manifest).map_err(PackError::ManifestSerialize)?;
    tokio::fs::write(&path, serialized)
        .await
        .map_err(|source| PackError::ManifestWrite {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

pub async fn produce_deploy_manifest(
    project_dir: &Path,
    out_dir: &Path,
) -> Result<PathBuf, PackError> {
    let project = read_project_manifest(project_dir).await?;
    let manifest = build_deploy_manifest(&project);
    write_deploy_manifest(out_dir, &manifest).await
}
