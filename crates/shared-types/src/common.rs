use serde::{Deserialize, Serialize};
use std::fmt;

/// Procedural role of the requesting party. Drives the narrative templates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Role {
    #[serde(rename = "Fiscalía")]
    Fiscalia,
    #[serde(rename = "Defensa")]
    Defensa,
    #[serde(rename = "Juez")]
    Juez,
    #[serde(rename = "Querella")]
    Querella,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Fiscalia => write!(f, "Fiscalía"),
            Role::Defensa => write!(f, "Defensa"),
            Role::Juez => write!(f, "Juez"),
            Role::Querella => write!(f, "Querella"),
        }
    }
}
