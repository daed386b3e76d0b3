//! Entity platform plumbing
//!
//! A platform's `setup_platform` receives an [`AddEntities`] callback and
//! hands it every entity it creates.

use crate::ClimateEntity;

/// Registration callback passed to a platform during setup
pub trait AddEntities {
    fn add_entities(&mut self, entities: Vec<Box<dyn ClimateEntity>>);
}

impl<F> AddEntities for F
where
    F: FnMut(Vec<Box<dyn ClimateEntity>>),
{
    fn add_entities(&mut self, entities: Vec<Box<dyn ClimateEntity>>) {
        self(entities)
    }
}
