//! Typed views of SWAPI JSON resources.
//!
//! Only the attributes the loader consumes are modelled; everything else in the payload is
//! ignored during deserialization.

use std::fmt;

use serde::Deserialize;

/// Reference attributes of a person that point at other SWAPI resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Films,
    Homeworld,
    Species,
    Starships,
    Vehicles,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 5] = [
        ReferenceKind::Films,
        ReferenceKind::Homeworld,
        ReferenceKind::Species,
        ReferenceKind::Starships,
        ReferenceKind::Vehicles,
    ];

    /// Attribute name of the reference on the person payload.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Films => "films",
            Self::Homeworld => "homeworld",
            Self::Species => "species",
            Self::Starships => "starships",
            Self::Vehicles => "vehicles",
        }
    }

    /// Attribute holding the human readable name of a referenced resource.
    ///
    /// Films carry a `title`; every other resource carries a `name`.
    pub fn display_attribute(self) -> &'static str {
        match self {
            Self::Films => "title",
            _ => "name",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Value of a reference attribute: a single URL (`homeworld`) or an ordered list of URLs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReferenceField {
    One(String),
    Many(Vec<String>),
}

impl ReferenceField {
    /// URLs of the field in payload order.
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Self::One(url) => vec![url.as_str()],
            Self::Many(urls) => urls.iter().map(String::as_str).collect(),
        }
    }
}

/// A character as returned by `GET /people/{id}/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Person {
    pub url: Option<String>,
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
    pub films: Option<ReferenceField>,
    pub homeworld: Option<ReferenceField>,
    pub species: Option<ReferenceField>,
    pub starships: Option<ReferenceField>,
    pub vehicles: Option<ReferenceField>,
}

impl Person {
    /// Self URL of the person, if present and non-empty.
    pub fn self_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// URLs held by the given reference attribute, empty when the attribute is absent or null.
    pub fn references(&self, kind: ReferenceKind) -> Vec<&str> {
        let field = match kind {
            ReferenceKind::Films => &self.films,
            ReferenceKind::Homeworld => &self.homeworld,
            ReferenceKind::Species => &self.species,
            ReferenceKind::Starships => &self.starships,
            ReferenceKind::Vehicles => &self.vehicles,
        };

        field.as_ref().map(ReferenceField::urls).unwrap_or_default()
    }
}

/// A resource fetched by following one of a person's reference URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub url: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
}

impl Reference {
    /// Display name of the resource for the given reference kind.
    pub fn display_name(&self, kind: ReferenceKind) -> Option<&str> {
        match kind {
            ReferenceKind::Films => self.title.as_deref(),
            _ => self.name.as_deref(),
        }
    }
}

/// All references of one person, resolved in payload order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedReferences {
    pub films: Vec<Reference>,
    pub homeworld: Vec<Reference>,
    pub species: Vec<Reference>,
    pub starships: Vec<Reference>,
    pub vehicles: Vec<Reference>,
}

impl ResolvedReferences {
    pub fn get(&self, kind: ReferenceKind) -> &[Reference] {
        match kind {
            ReferenceKind::Films => &self.films,
            ReferenceKind::Homeworld => &self.homeworld,
            ReferenceKind::Species => &self.species,
            ReferenceKind::Starships => &self.starships,
            ReferenceKind::Vehicles => &self.vehicles,
        }
    }
}
