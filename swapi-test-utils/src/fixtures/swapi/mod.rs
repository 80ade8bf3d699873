use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn swapi<'a>(&'a mut self) -> SwapiFixtures<'a> {
        SwapiFixtures { setup: self }
    }
}

pub struct SwapiFixtures<'a> {
    pub setup: &'a mut TestContext,
}
