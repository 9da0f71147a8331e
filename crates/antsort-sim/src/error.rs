use antsort_core::{ConfigError, ObjectKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("agent {index} cannot be placed at ({x}, {z}): out of bounds or cell already taken")]
    AgentPlacement { index: usize, x: i32, z: i32 },

    #[error("kind-{kind} object cannot be placed at ({x}, {z}): out of bounds or cell already taken")]
    ObjectPlacement { kind: ObjectKind, x: i32, z: i32 },
}

pub type SimResult<T> = Result<T, SimError>;
