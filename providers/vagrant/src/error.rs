use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Vars(#[from] common::Error),

    #[error("unsupported os `{os}`, expected one of: {supported}")]
    UnsupportedOs { os: String, supported: String },

    /// An option the defaults should have filled is still unset
    #[error("option `${0}` has no value")]
    Unset(&'static str),

    #[error("could not write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
