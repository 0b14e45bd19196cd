use std::path::Path;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Required inputs not found: please provide a fasta (-f or --fasta)")]
    MissingInput,

    #[error("Required inputs not found: \"{file}\" does not exist")]
    InputNotFound { file: String },

    #[error("Error reading or writing \"{file}\": {source}")]
    FileIo {
        file: String,
        source: std::io::Error,
    },

    #[error("Error writing records: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error parsing rename table on line {line} in \"{file}\": {source}")]
    ParseTable {
        file: String,
        line: usize,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Error loading config \"{file}\": {source}")]
    Config {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Error converting records to structured form: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn file_io(file: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::FileIo {
            file: file.as_ref().display().to_string(),
            source,
        }
    }

    /// Process exit code the command line tool reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InputNotFound { .. } => 2,
            _ => 1,
        }
    }
}
