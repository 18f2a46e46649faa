use crate::TestSetup;

pub mod factory;
pub mod mockito;

impl TestSetup {
    pub fn jetnet<'a>(&'a mut self) -> JetnetFixtures<'a> {
        JetnetFixtures { setup: self }
    }
}

pub struct JetnetFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
