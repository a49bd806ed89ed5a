pub use self::manager::{
    build_deploy_manifest, produce_deploy_manifest, read_project_manifest, write_deploy_manifest,
    MANIFEST_FILE,
};
pub use self::types::{DeployManifest, Engines, ProjectManifest};

mod manager;
mod types;
