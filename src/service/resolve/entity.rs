use crate::{
    error::ResolveError,
    fetcher::Fetcher,
    model::swapi::{Person, Reference, ReferenceKind, ResolvedReferences},
    service::{resolve::BatchResolver, retry::RetryPolicy},
};

/// Resolver following every reference field of a person
pub struct EntityResolver<'a, F: ?Sized> {
    batch: BatchResolver<'a, F>,
}

impl<'a, F> EntityResolver<'a, F>
where
    F: Fetcher + ?Sized,
{
    /// Creates a new instance of [`EntityResolver`]
    pub fn new(fetcher: &'a F, retry: &'a RetryPolicy) -> Self {
        Self {
            batch: BatchResolver::new(fetcher, retry),
        }
    }

    /// Resolve the films, homeworld, species, starships and vehicles of a person.
    ///
    /// The five fields are independent and resolved concurrently. A missing or null field
    /// resolves to an empty list without any request; `homeworld` resolves to at most one entry.
    ///
    /// # Returns
    /// - `Ok(ResolvedReferences)` - Every reference resolved, each field in payload order
    /// - `Err(ResolveError::Reference)` - A fetch failed; `kind` names the field that triggered it
    pub async fn resolve(&self, person: &Person) -> Result<ResolvedReferences, ResolveError> {
        let (films, homeworld, species, starships, vehicles) = tokio::try_join!(
            self.resolve_field(person, ReferenceKind::Films),
            self.resolve_field(person, ReferenceKind::Homeworld),
            self.resolve_field(person, ReferenceKind::Species),
            self.resolve_field(person, ReferenceKind::Starships),
            self.resolve_field(person, ReferenceKind::Vehicles),
        )?;

        Ok(ResolvedReferences {
            films,
            homeworld,
            species,
            starships,
            vehicles,
        })
    }

    async fn resolve_field(
        &self,
        person: &Person,
        kind: ReferenceKind,
    ) -> Result<Vec<Reference>, ResolveError> {
        let urls = person.references(kind);

        self.batch
            .resolve_all(&urls)
            .await
            .map_err(|source| ResolveError::Reference { kind, source })
    }
}
