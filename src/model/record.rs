/// Denormalized, persistence-ready row for one person.
///
/// Multi-valued references are collapsed into a single `", "`-joined string of display names;
/// `homeworld` holds the name of the sole resolved planet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    /// Identifier parsed from the person's self URL
    pub id: i32,
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub skin_color: Option<String>,
    pub homeworld: Option<String>,
    pub films: String,
    pub species: String,
    pub starships: String,
    pub vehicles: String,
}
