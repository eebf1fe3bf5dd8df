use serde::{Deserialize, Serialize};

use crate::common::Role;

#[cfg(feature = "validation")]
use validator::Validate;

/// A sentence expressed in the administrative 360/30 convention
/// (1 year = 360 days, 1 month = 30 days).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SentenceTerm {
    #[serde(default)]
    pub anios: u32,
    #[serde(default)]
    pub meses: u32,
    #[serde(default)]
    pub dias: u32,
}

impl SentenceTerm {
    pub fn new(anios: u32, meses: u32, dias: u32) -> Self {
        Self { anios, meses, dias }
    }
}

/// Day credits applied against a sentence. All six sources count
/// unweighted, one day of credit per day reported.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SentenceCredits {
    #[serde(default)]
    pub detencion_preventiva_dias: u32,
    #[serde(default)]
    pub arresto_domiciliario_dias: u32,
    #[serde(default)]
    pub otras_medidas_dias: u32,
    #[serde(default)]
    pub trabajo_dias: u32,
    #[serde(default)]
    pub estudio_dias: u32,
    #[serde(default)]
    pub conducta_dias: u32,
}

/// One offense entering the unification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OffenseInput {
    #[serde(default)]
    pub nombre: String,
    pub pena: SentenceTerm,
    #[serde(default)]
    pub abonos: SentenceCredits,
    /// Optional dd/mm/aaaa start-of-computation note, echoed in the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_inicio_computo: Option<String>,
}

/// Per-offense liquidation line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct OffenseLiquidation {
    pub nombre: String,
    pub base_dias: i64,
    pub abonos_dias: i64,
    pub neto_dias: i64,
}

/// Request body for the unification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UnificationRequest {
    pub rol: Role,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 3, message = "Between 1 and 3 offenses are supported"))
    )]
    pub delitos: Vec<OffenseInput>,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Legal cap must be at least 1 year"))
    )]
    pub tope_legal_anios: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}

/// Aggregated unification result. All day counts use the 360/30 convention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UnificationResult {
    pub delitos: Vec<OffenseLiquidation>,
    pub total_base_dias: i64,
    pub total_abonos_dias: i64,
    /// Net without the cap, kept for reference.
    pub total_neto_dias: i64,
    pub tope_dias: i64,
    /// min(total_base_dias, tope_dias). The cap bites the base sum, not the net.
    pub topado_dias: i64,
    pub neto_tras_tope_dias: i64,
    pub mitad_dias: i64,
    pub dos_tercios_dias: i64,
    pub tope_aplicado: bool,
    /// Full Spanish report, suitable for plain-text export.
    pub informe: String,
}
