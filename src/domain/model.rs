use serde::{Deserialize, Serialize};

/// Two distinct positions in the input sequence, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPair {
    pub first: usize,
    pub second: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    List,
    Target,
}

/// What a session ends with, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Found {
        #[serde(flatten)]
        indices: IndexPair,
        first_value: i64,
        second_value: i64,
        target: i64,
    },
    NotFound {
        target: i64,
    },
    InvalidInput {
        kind: InputKind,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
