use thiserror::Error;

/// Document-level failures: the page disagrees with the layout the extractors expect.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing expected element `{0}`")]
    MissingElement(&'static str),

    #[error("invalid job level token {0:?}")]
    InvalidLevel(String),

    #[error("more job levels found ({found}) than anticipated ({expected}); the job roster needs updating")]
    TooManyJobs { found: usize, expected: usize },

    #[error("fewer job levels found ({found}) than required ({expected}); the job roster needs updating")]
    TooFewJobs { found: usize, expected: usize },
}

/// Character-level failures surfaced to the caller.
#[derive(Debug, Error)]
pub enum GatherError {
    #[error("character {id}: {source}")]
    Extract {
        id: u64,
        #[source]
        source: ParseError,
    },

    #[error("character {id}: could not parse Last-Modified header {value:?} from full body image")]
    TimestampFormat { id: u64, value: String },

    #[error("character {id}: lodestone returned HTTP {status}")]
    Status { id: u64, status: u16 },

    #[error("no Last-Modified header on {0}")]
    MissingHeader(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub type Result<T, E = GatherError> = std::result::Result<T, E>;
