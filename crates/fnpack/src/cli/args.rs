use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project directory holding package.json, node_modules and .env files
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Output directory for the deployable bundle (relative to PROJECT_DIR
    /// unless absolute)
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub out_dir: PathBuf,
}

impl Args {
    pub fn resolved_out_dir(&self) -> PathBuf {
        if self.out_dir.is_absolute() {
            self.out_dir.clone()
        } else {
            self.project_dir.join(&self.out_dir)
        }
    }
}
