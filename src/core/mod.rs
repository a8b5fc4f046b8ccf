//! Core domain types

pub mod cluster;
pub mod embedding;
pub mod error;
pub mod skill;

pub use cluster::{Cluster, ClusterMember, Coord, Range, Ranges, SkillGraph, SkillPoint};
pub use embedding::{common_dimension, Embedding};
pub use error::GraphError;
pub use skill::{AreaRecord, RawArea, RawItem, Scalar, SkillCatalog, SkillRecord, StackRef};
