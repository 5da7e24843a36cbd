use std::path::PathBuf;

/// Where exports are read from and stylesheets are written to.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Only files with exactly this extension are converted.
    pub input_extension: String,
    pub output_extension: String,
    /// Stop at the first document that fails instead of converting the rest.
    pub fail_fast: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("./figma"),
            output_dir: PathBuf::from("./css"),
            input_extension: "json".to_string(),
            output_extension: "css".to_string(),
            fail_fast: false,
        }
    }
}
