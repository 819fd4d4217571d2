use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("project id `{0}` appears more than once")]
    DuplicateId(String),

    #[error("project id `{0}` is not a lowercase slug")]
    InvalidId(String),

    #[error("project `{id}` has an empty `{field}`")]
    EmptyField { id: String, field: &'static str },

    #[error("project `{id}` has an invalid `{field}` url: {url}")]
    InvalidUrl {
        id: String,
        field: &'static str,
        url: String,
    },

    #[error("project `{id}` lists tag `{tag}` more than once")]
    DuplicateTag { id: String, tag: String },
}
