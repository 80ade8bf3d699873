use thiserror::Error;

use crate::model::swapi::ReferenceKind;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlattenError {
    /// The self URL does not end in a segment holding a non-negative integer.
    #[error("Entity URL {url:?} does not end in a numeric identifier")]
    MalformedIdentifier { url: String },
    /// The person has no self URL to derive an identifier from.
    #[error("Entity has no self URL to derive an identifier from")]
    MissingUrl,
    /// The `homeworld` attribute resolved to more than one planet.
    #[error("Entity {url:?} has {count} homeworlds, expected at most one")]
    AmbiguousHomeworld { url: String, count: usize },
    /// A resolved reference lacks its `name` (or `title` for films).
    #[error(
        "Resolved {kind} entity {url:?} is missing its `{attribute}` attribute",
        attribute = .kind.display_attribute()
    )]
    MissingDisplayName {
        kind: ReferenceKind,
        url: Option<String>,
    },
}
