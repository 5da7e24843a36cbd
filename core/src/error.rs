use thiserror::Error;

use crate::TokenType;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Invalid token document")]
    Parse(#[from] serde_json::Error),

    #[error("Variable '{variable}' in mode '{mode}' does not hold a {expected:?} value")]
    ValueMismatch {
        variable: String,
        mode: String,
        expected: TokenType,
    },
}
