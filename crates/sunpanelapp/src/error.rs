use thiserror::Error;
use uuid::Uuid;

use crate::model::Collection;

#[derive(Error, Debug)]
pub enum SunpanelError {
    #[error("Record not found in {collection}: {id}")]
    RecordNotFound { collection: Collection, id: Uuid },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any failure reported by the persistence gateway. Callers treat every
    /// gateway failure the same way; there is no retry.
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// A sequential update batch stopped part-way. The first `applied`
    /// updates were persisted and are not reverted.
    #[error("Update batch aborted after {applied} of {total} updates: {source}")]
    Batch {
        applied: usize,
        total: usize,
        #[source]
        source: Box<SunpanelError>,
    },

    #[error("Api Error: {0}")]
    Api(String),
}

impl SunpanelError {
    /// Number of updates persisted before a batch failure, if this is one.
    pub fn applied_updates(&self) -> Option<usize> {
        match self {
            SunpanelError::Batch { applied, .. } => Some(*applied),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SunpanelError>;
