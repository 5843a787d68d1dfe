use std::path::PathBuf;

use crate::provider::ProviderKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Unknown picker provider: {0}")]
    UnknownProvider(String),

    #[error("Picker provider {0} is not available, is it installed?")]
    MissingProvider(ProviderKind),

    #[error("Failed to list files under {}: {source}", root.display())]
    Lister {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Selection handler failed: {0}")]
    Handler(String),

    #[error("Picker provider failed: {0}")]
    Provider(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<Error> for mlua::Error {
    fn from(error: Error) -> Self {
        mlua::Error::RuntimeError(error.to_string())
    }
}
