use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "validation")]
use validator::Validate;

/// Judicial intensity chosen for a block of circumstances (CP Art. 92-93).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum CircumstanceIntensity {
    Leve,
    Moderada,
    Grave,
}

impl CircumstanceIntensity {
    /// Fraction applied per circumstance: 1/6, 1/4 or 1/3.
    pub fn fraction(&self) -> f64 {
        match self {
            CircumstanceIntensity::Leve => 1.0 / 6.0,
            CircumstanceIntensity::Grave => 1.0 / 3.0,
            CircumstanceIntensity::Moderada => 1.0 / 4.0,
        }
    }
}

impl fmt::Display for CircumstanceIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircumstanceIntensity::Leve => write!(f, "leve"),
            CircumstanceIntensity::Moderada => write!(f, "moderada"),
            CircumstanceIntensity::Grave => write!(f, "grave"),
        }
    }
}

/// Degree of execution of the offense (CP Art. 82).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExecutionDegree {
    #[default]
    Consumado,
    Tentativa,
}

impl fmt::Display for ExecutionDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionDegree::Consumado => write!(f, "consumado"),
            ExecutionDegree::Tentativa => write!(f, "tentativa"),
        }
    }
}

/// How close kinship with the victim is weighed, if at all (CP Art. 91).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum KinshipEffect {
    #[default]
    Ninguno,
    Agrava,
    Atenua,
}

impl fmt::Display for KinshipEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinshipEffect::Ninguno => write!(f, "ninguno"),
            KinshipEffect::Agrava => write!(f, "agrava"),
            KinshipEffect::Atenua => write!(f, "atenua"),
        }
    }
}

/// Request body for the penalty dosage endpoint. All penalties in months.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct DosageRequest {
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Minimum penalty must be positive (months)"))
    )]
    pub pena_min_meses: u32,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Maximum penalty must be positive (months)"))
    )]
    pub pena_max_meses: u32,
    #[serde(default)]
    pub grado: ExecutionDegree,
    /// Selected aggravating circumstances (CP Art. 88). Only the count matters
    /// for the arithmetic; the texts are echoed in the report.
    #[serde(default)]
    pub agravantes: Vec<String>,
    /// Selected mitigating circumstances (CP Art. 90).
    #[serde(default)]
    pub atenuantes: Vec<String>,
    pub intensidad_agravantes: CircumstanceIntensity,
    pub intensidad_atenuantes: CircumstanceIntensity,
    #[serde(default)]
    pub parentesco: KinshipEffect,
}

/// Penalty dosage result (months).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DosageResponse {
    /// Frame minimum after the tentativa adjustment, when it applies.
    pub pena_min_meses: u32,
    /// Frame maximum after the tentativa adjustment, when it applies.
    pub pena_max_meses: u32,
    pub pena_probable_meses: u32,
    pub subrogados: Vec<String>,
    pub fundamento: Vec<String>,
    /// Full Spanish report, suitable for plain-text export.
    pub informe: String,
}
