//! Mapping of a resolved person into a flat, persistence-ready record.

use crate::{
    error::FlattenError,
    model::{
        record::FlatRecord,
        swapi::{Person, Reference, ReferenceKind, ResolvedReferences},
    },
};

/// Separator between display names of a multi-valued reference
pub const NAME_SEPARATOR: &str = ", ";

/// Build the flat record for a person whose references have been resolved.
///
/// Scalar attributes are copied verbatim. Every multi-valued reference is collapsed into the
/// display names of its resolved entities joined with `", "`, an empty list yielding `""`.
/// `homeworld` takes the name of the resolved planet, or `None` when the person has none.
///
/// # Returns
/// - `Ok(FlatRecord)` - The denormalized row
/// - `Err(FlattenError::MissingUrl)` - The person has no self URL
/// - `Err(FlattenError::MalformedIdentifier)` - The self URL does not end in a numeric id
/// - `Err(FlattenError::AmbiguousHomeworld)` - More than one homeworld was resolved
/// - `Err(FlattenError::MissingDisplayName)` - A resolved entity lacks its `name`/`title`
pub fn flatten(person: &Person, resolved: &ResolvedReferences) -> Result<FlatRecord, FlattenError> {
    let url = person.self_url().ok_or(FlattenError::MissingUrl)?;
    let id = parse_identifier(url)?;

    let homeworld = match resolved.homeworld.as_slice() {
        [] => None,
        [planet] => Some(display_name(planet, ReferenceKind::Homeworld)?.to_string()),
        planets => {
            return Err(FlattenError::AmbiguousHomeworld {
                url: url.to_string(),
                count: planets.len(),
            })
        }
    };

    Ok(FlatRecord {
        id,
        name: person.name.clone(),
        birth_year: person.birth_year.clone(),
        eye_color: person.eye_color.clone(),
        gender: person.gender.clone(),
        hair_color: person.hair_color.clone(),
        height: person.height.clone(),
        mass: person.mass.clone(),
        skin_color: person.skin_color.clone(),
        homeworld,
        films: join_names(resolved, ReferenceKind::Films)?,
        species: join_names(resolved, ReferenceKind::Species)?,
        starships: join_names(resolved, ReferenceKind::Starships)?,
        vehicles: join_names(resolved, ReferenceKind::Vehicles)?,
    })
}

/// Parse the numeric identifier from a resource URL.
///
/// The identifier is the last non-empty `/`-separated segment, so both `.../people/12/` and
/// `.../people/12` yield `12`. The segment must consist of ASCII digits only and fit an `i32`.
pub fn parse_identifier(url: &str) -> Result<i32, FlattenError> {
    let malformed = || FlattenError::MalformedIdentifier {
        url: url.to_string(),
    };

    let segment = url
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .ok_or_else(malformed)?;

    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    segment.parse::<i32>().map_err(|_| malformed())
}

fn join_names(resolved: &ResolvedReferences, kind: ReferenceKind) -> Result<String, FlattenError> {
    let names = resolved
        .get(kind)
        .iter()
        .map(|reference| display_name(reference, kind))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(names.join(NAME_SEPARATOR))
}

fn display_name(reference: &Reference, kind: ReferenceKind) -> Result<&str, FlattenError> {
    reference
        .display_name(kind)
        .ok_or_else(|| FlattenError::MissingDisplayName {
            kind,
            url: reference.url.clone(),
        })
}
