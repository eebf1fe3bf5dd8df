use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Provinces and comarcas used to look up the SPA entry date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Province {
    #[serde(rename = "Coclé")]
    Cocle,
    #[serde(rename = "Veraguas")]
    Veraguas,
    #[serde(rename = "Herrera")]
    Herrera,
    #[serde(rename = "Los Santos")]
    LosSantos,
    #[serde(rename = "Chiriquí")]
    Chiriqui,
    #[serde(rename = "Bocas del Toro")]
    BocasDelToro,
    #[serde(rename = "Colón")]
    Colon,
    #[serde(rename = "Panamá Oeste")]
    PanamaOeste,
    #[serde(rename = "Panamá")]
    Panama,
    #[serde(rename = "Darién")]
    Darien,
    #[serde(rename = "Comarcas")]
    Comarcas,
}

/// How the offense consummates over time. Captured for the record; the base
/// window computation does not vary by it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ConsummationKind {
    Instantanea,
    Permanente,
    Continuada,
}

/// Procedural regime governing the prescription window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Regime {
    #[serde(rename = "CPP")]
    Cpp,
    #[serde(rename = "CJ")]
    Cj,
}

/// Request body for the prescription endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct PrescriptionRequest {
    pub distrito: Province,
    pub fecha_hecho: NaiveDate,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Maximum penalty must be positive (years)"))
    )]
    pub pena_maxima_anios: u32,
    pub tipo_consumacion: ConsummationKind,
    /// Reference date for the remaining-days computation. Defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoy: Option<NaiveDate>,
}

/// Prescription estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PrescriptionResponse {
    pub regimen: Regime,
    pub plazo_base_anios: u32,
    pub fecha_inicio_computo: NaiveDate,
    pub fecha_estimada: NaiveDate,
    pub dias_restantes: i64,
    pub prescrito: bool,
    pub fundamento: Vec<String>,
}
