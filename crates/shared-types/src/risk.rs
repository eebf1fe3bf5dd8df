use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::Role;

/// Migratory status inside Panama. Anything other than Regular weighs against
/// the arraigo score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum MigratoryStatus {
    Regular,
    Irregular,
}

impl fmt::Display for MigratoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigratoryStatus::Regular => write!(f, "Regular"),
            MigratoryStatus::Irregular => write!(f, "Irregular"),
        }
    }
}

/// Means available to abscond.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum FlightResources {
    Bajos,
    Medios,
    Altos,
}

impl fmt::Display for FlightResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightResources::Bajos => write!(f, "Bajos"),
            FlightResources::Medios => write!(f, "Medios"),
            FlightResources::Altos => write!(f, "Altos"),
        }
    }
}

/// Personal-ties questionnaire feeding the arraigo score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ArraigoFactors {
    pub es_nacional: bool,
    pub tiene_otras_ciudadanias: bool,
    pub residencia_legal_extranjero: bool,
    pub estatus_migratorio_panama: MigratoryStatus,
    pub domicilio_fijo: bool,
    /// Only considered for non-nationals; for nationals it is not captured.
    #[serde(default)]
    pub tiempo_residencia_meses: u32,
    pub empleo_formal: bool,
    pub contrato_indefinido: bool,
    pub familia_primaria_en_pa: bool,
    pub estudios_activos: bool,
    pub antecedentes_evasion: bool,
    pub pasaporte_vigente: bool,
    pub recursos_para_fugarse: FlightResources,
}

/// The four procedural risk categories of the matrix.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RiskCategory {
    #[serde(rename = "Peligro de fuga")]
    Fuga,
    #[serde(rename = "Obstaculización de la investigación")]
    Obstaculizacion,
    #[serde(rename = "Peligro para la víctima")]
    Victima,
    #[serde(rename = "Peligro para la comunidad")]
    Comunidad,
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskCategory::Fuga => write!(f, "Peligro de fuga"),
            RiskCategory::Obstaculizacion => write!(f, "Obstaculización de la investigación"),
            RiskCategory::Victima => write!(f, "Peligro para la víctima"),
            RiskCategory::Comunidad => write!(f, "Peligro para la comunidad"),
        }
    }
}

/// Severity assigned to one risk row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RiskSeverity {
    Leve,
    Moderado,
    Grave,
}

impl fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskSeverity::Leve => write!(f, "Leve"),
            RiskSeverity::Moderado => write!(f, "Moderado"),
            RiskSeverity::Grave => write!(f, "Grave"),
        }
    }
}

/// One row of the risk matrix as submitted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskRow {
    pub riesgo: RiskCategory,
    /// Checked indicator ids for this category (see the indicator catalog).
    #[serde(default)]
    pub indicadores: Vec<String>,
    #[serde(default)]
    pub evidencia: String,
    pub valoracion: RiskSeverity,
    #[serde(default)]
    pub medidas_sugeridas: Vec<String>,
    #[serde(default)]
    pub propuesta: String,
}

/// Case cover data for the report header.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseHeader {
    pub provincia: String,
    pub circuito: String,
    pub juzgado: String,
    pub numero_causa: String,
    pub imputado: String,
    pub delito: String,
    /// dd/mm/aaaa as printed on the report.
    pub fecha: String,
}

/// Request body for the risk evaluation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskEvaluationRequest {
    pub rol: Role,
    pub caso: CaseHeader,
    pub arraigo: ArraigoFactors,
    #[serde(default)]
    pub filas: Vec<RiskRow>,
}

/// Arraigo classification band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ArraigoLevel {
    Alto,
    Medio,
    Bajo,
}

impl fmt::Display for ArraigoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArraigoLevel::Alto => write!(f, "Alto"),
            ArraigoLevel::Medio => write!(f, "Medio"),
            ArraigoLevel::Bajo => write!(f, "Bajo"),
        }
    }
}

/// Risk evaluation result with the full Spanish report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskEvaluationResponse {
    pub puntaje_arraigo: u32,
    pub nivel_arraigo: ArraigoLevel,
    pub conclusion: String,
    pub informe: String,
}
