use element_core::types::EntityId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EcsError {
    #[error("entity {0} is dead or stale")]
    DeadEntity(EntityId),
}
