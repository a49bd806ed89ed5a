use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The package.json of the project being packaged. Only `name` and the
/// dependency mapping matter here; everything else (scripts,
/// devDependencies, ...) is ignored and not carried forward.
#[derive(Deserialize, Debug, Clone)]
pub struct ProjectManifest {
    pub name: String,
    #[serde(default)]
    pub dependencies: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Engines {
    pub node: String,
}

/// The pruned package.json written into the output directory. Field order
/// here is the serialization order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeployManifest {
    pub name: String,
    pub main: String,
    pub engines: Engines,
    #[serde(rename = "type")]
    pub module_type: String,
    pub dependencies: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_manifest_ignores_auxiliary_fields() {
        let manifest: ProjectManifest = serde_json::from_str(
            r#"{
                "name": "my-fn",
                "scripts": { "build": "node build.js" },
                "devDependencies": { "typescript": "^5.0.0" },
                "dependencies": { "firebase-functions": "^13.0.0" }
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.name, "my-fn");
        assert_eq!(manifest.dependencies.len(), 1);
    }

    #[test]
    fn project_manifest_without_dependencies_parses_to_an_empty_map() {
        let manifest: ProjectManifest = serde_json::from_str(r#"{"name":"my-fn"}"#).unwrap();
        assert!(manifest.dependencies.is_empty());
    }

    #[test]
    fn project_manifest_requires_a_name() {
        let result = serde_json::from_str::<ProjectManifest>(r#"{"dependencies":{}}"#);
        assert!(result.is_err());
    }
}
