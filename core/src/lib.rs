use std::{collections::HashMap, io::Read};

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, trace};
use serde::Deserialize;

mod error;
mod selector;
mod value;

pub use error::TokenError;
pub use selector::sanitize;
pub use value::{format_value, round_to_decimals, ColorValue, ResolvedValue, TokenType};

/// Converts a variables export straight to a stylesheet.
pub fn json_to_css(json: &str) -> Result<String, TokenError> {
    TokenDocument::from_json_str(json)?.to_css()
}

/// A variables export: one set of variables, resolved once per mode.
#[derive(Debug, Deserialize)]
pub struct TokenDocument {
    pub variables: Vec<Variable>,
    /// Mode id to mode name, in the order the export lists them.
    pub modes: IndexMap<String, String>,
}
impl TokenDocument {
    pub fn from_json_str(json: &str) -> Result<Self, TokenError> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TokenError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Emits one class per mode, each declaring a custom property for every variable
    /// that has a value in that mode.
    pub fn to_css(&self) -> Result<String, TokenError> {
        let blocks = self
            .modes
            .iter()
            .map(|(mode_id, mode_name)| self.mode_to_css(mode_id, mode_name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(blocks.concat())
    }
    fn mode_to_css(&self, mode_id: &str, mode_name: &str) -> Result<String, TokenError> {
        let class = sanitize(mode_name);
        debug!("Mode {mode_id} ({mode_name:?}) -> .{class}");
        let properties = self
            .variables
            .iter()
            .filter_map(|variable| variable.to_css(mode_id, mode_name).transpose())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!(
            ".{class} {{\n{}}}\n\n",
            properties
                .iter()
                .map(|property| format!("\t{property}\n"))
                .join("")
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: TokenType,
    pub resolved_values_by_mode: HashMap<String, ModeValue>,
}
impl Variable {
    pub fn value(&self, mode_id: &str) -> Option<&ResolvedValue> {
        self.resolved_values_by_mode
            .get(mode_id)?
            .resolved_value
            .as_ref()
    }
    /// The `--name: value;` declaration for `mode_id`, or `None` if the variable has no
    /// value in that mode.
    fn to_css(&self, mode_id: &str, mode_name: &str) -> Result<Option<String>, TokenError> {
        let Some(value) = self.value(mode_id) else {
            trace!("{:?} has no value in mode {mode_id}", self.name);
            return Ok(None);
        };
        let value = format_value(self.type_, value).ok_or_else(|| TokenError::ValueMismatch {
            variable: self.name.clone(),
            mode: mode_name.to_string(),
            expected: self.type_,
        })?;
        Ok(Some(format!("--{}: {value};", sanitize(&self.name))))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeValue {
    pub resolved_value: Option<ResolvedValue>,
}
