use thiserror::Error;

use crate::{error::fetch::FetchError, model::swapi::ReferenceKind};

#[derive(Error, Debug)]
pub enum ResolveError {
    /// A fetch for one of the person's reference URLs failed, aborting the whole person.
    #[error("Failed to resolve {kind} reference: {source}")]
    Reference {
        kind: ReferenceKind,
        #[source]
        source: FetchError,
    },
}

impl ResolveError {
    /// Reference field whose resolution triggered the failure.
    pub fn kind(&self) -> ReferenceKind {
        match self {
            Self::Reference { kind, .. } => *kind,
        }
    }
}
