//! SWAPI payload factories.
//!
//! Free functions build payloads for an arbitrary base URL; the `SwapiFixtures` methods bind
//! them to the mock server of the current test.

use serde_json::{json, Value};

use crate::fixtures::swapi::SwapiFixtures;

/// SWAPI style resource URL, always with a trailing slash: `{base}/{collection}/{id}/`
pub fn resource_url(base_url: &str, collection: &str, id: i64) -> String {
    format!("{}/{}/{}/", base_url.trim_end_matches('/'), collection, id)
}

/// Person payload named `Person {id}` living on planet 1 and appearing in film 1.
pub fn person(base_url: &str, id: i64) -> Value {
    json!({
        "name": format!("Person {}", id),
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": resource_url(base_url, "planets", 1),
        "films": [resource_url(base_url, "films", 1)],
        "species": [],
        "vehicles": [],
        "starships": [],
        "created": "2014-12-09T13:50:51.644000Z",
        "edited": "2014-12-20T21:17:56.891000Z",
        "url": resource_url(base_url, "people", id),
    })
}

/// Film payload titled `Film {id}`
pub fn film(base_url: &str, id: i64) -> Value {
    json!({
        "title": format!("Film {}", id),
        "episode_id": id,
        "url": resource_url(base_url, "films", id),
    })
}

/// Payload for a named resource (planets, species, starships, vehicles).
///
/// The name is the collection in title case followed by the ID, e.g. `Planet 3`.
pub fn named(base_url: &str, collection: &str, id: i64) -> Value {
    let singular = match collection {
        "species" => collection,
        _ => collection.strip_suffix('s').unwrap_or(collection),
    };
    let mut chars = singular.chars();
    let title = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };

    json!({
        "name": format!("{} {}", title, id),
        "url": resource_url(base_url, collection, id),
    })
}

impl<'a> SwapiFixtures<'a> {
    /// Person payload bound to the mock server, see [`person`]
    pub fn mock_person(&self, id: i64) -> Value {
        person(&self.setup.base_url(), id)
    }

    /// Film payload bound to the mock server, see [`film`]
    pub fn mock_film(&self, id: i64) -> Value {
        film(&self.setup.base_url(), id)
    }

    /// Named resource payload bound to the mock server, see [`named`]
    pub fn mock_named(&self, collection: &str, id: i64) -> Value {
        named(&self.setup.base_url(), collection, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_url_has_single_separators() {
        assert_eq!(
            resource_url("http://127.0.0.1:1234/", "people", 5),
            "http://127.0.0.1:1234/people/5/"
        );
    }

    #[test]
    fn named_title_cases_singular_collection() {
        let planet = named("http://host", "planets", 3);
        assert_eq!(planet["name"], "Planet 3");

        let species = named("http://host", "species", 2);
        assert_eq!(species["name"], "Species 2");
    }
}
