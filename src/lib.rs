use std::{
    fs,
    path::{Path, PathBuf},
};

use figma_tokens_css_core::TokenDocument;
use log::{debug, error, info};

mod config;
mod error;

pub use config::Config;
pub use error::ConvertError;
pub use figma_tokens_css_core::TokenError;

/// Outcome of converting a whole source directory.
#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<PathBuf>,
    pub failed: Vec<ConvertError>,
}
impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Lists the exports in `config.source_dir`, sorted by file name.
pub fn discover(config: &Config) -> Result<Vec<PathBuf>, ConvertError> {
    let read_dir_err = |source| ConvertError::ReadDir {
        path: config.source_dir.clone(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(&config.source_dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        let matches = path
            .extension()
            .map_or(false, |ext| ext.to_str() == Some(config.input_extension.as_str()));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    debug!("Found {} export(s) in {:?}", files.len(), config.source_dir);
    Ok(files)
}

/// `Brand.Tokens.json` becomes `<output_dir>/brand.tokens.css`.
pub fn output_path(config: &Config, input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let suffix = format!(".{}", config.input_extension.to_lowercase());
    let stem = name.strip_suffix(&suffix).unwrap_or(&name);
    config
        .output_dir
        .join(format!("{stem}.{}", config.output_extension))
}

/// Converts one export and writes its stylesheet. Nothing is written if the export fails
/// to convert.
pub fn convert_file(config: &Config, input: &Path) -> Result<PathBuf, ConvertError> {
    let json = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let css = TokenDocument::from_json_str(&json)
        .and_then(|doc| doc.to_css())
        .map_err(|source| ConvertError::Token {
            path: input.to_path_buf(),
            source,
        })?;
    let output = output_path(config, input);
    fs::write(&output, css).map_err(|source| ConvertError::Write {
        path: output.clone(),
        source,
    })?;
    info!("{} -> {}", input.display(), output.display());
    Ok(output)
}

/// Converts every export in the source directory. Failed documents are collected in the
/// report unless `fail_fast` is set, in which case the first failure is returned.
pub fn convert_all(config: &Config) -> Result<Report, ConvertError> {
    let inputs = discover(config)?;
    fs::create_dir_all(&config.output_dir).map_err(|source| ConvertError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut report = Report::default();
    for input in inputs {
        match convert_file(config, &input) {
            Ok(output) => report.written.push(output),
            Err(err) if config.fail_fast => return Err(err),
            Err(err) => {
                error!("{}", error_chain(&err));
                report.failed.push(err);
            }
        }
    }
    info!(
        "Wrote {} stylesheet(s), {} failed",
        report.written.len(),
        report.failed.len()
    );
    Ok(report)
}

/// Joins an error with its sources, e.g. `Failed to convert "a.json": Invalid token document: ...`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
