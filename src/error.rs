use std::path::PathBuf;

/// Top-level failure kinds surfaced to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to fetch {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("record #{index} is malformed: {source}")]
    ParseStructure {
        index: usize,
        #[source]
        source: StructureError,
    },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize teachers: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single record fragment could not be turned into a teacher.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("no element with itemprop=\"{0}\"")]
    MissingMarker(&'static str),

    #[error("itemprop=\"{0}\" has no usable text")]
    EmptyField(&'static str),

    #[error("full name {0:?} does not split into surname, name and patronymic")]
    NameMismatch(String),

    #[error("no {field} cell after the {after} cell")]
    MissingCell {
        field: &'static str,
        after: &'static str,
    },

    #[error("education block has {found} part(s), need at least 2")]
    EducationBlock { found: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
