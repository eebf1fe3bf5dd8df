use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::Role;
use crate::penalty::ExecutionDegree;

#[cfg(feature = "validation")]
use validator::Validate;

/// Issuing entity printed on the letterhead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Entity {
    #[serde(rename = "Ministerio Público")]
    MinisterioPublico,
    #[serde(rename = "Defensa Pública")]
    DefensaPublica,
    #[serde(rename = "Despacho Privado")]
    DespachoPrivado,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::MinisterioPublico => write!(f, "Ministerio Público"),
            Entity::DefensaPublica => write!(f, "Defensa Pública"),
            Entity::DespachoPrivado => write!(f, "Despacho Privado"),
        }
    }
}

/// Procedural stage used by the brief recommendation rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Stage {
    Preliminar,
    Formal,
    Intermedia,
    Juicio,
}

/// The eight supported brief kinds. The wire labels carry the CPP citation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum BriefKind {
    #[serde(rename = "Imputación (CPP 280-281)")]
    Imputacion,
    #[serde(rename = "Acusación (CPP 340)")]
    Acusacion,
    #[serde(rename = "Acusación autónoma (CPP 340)")]
    AcusacionAutonoma,
    #[serde(rename = "Acción resarcitoria")]
    AccionResarcitoria,
    #[serde(rename = "Sobreseimiento (CPP 350)")]
    Sobreseimiento,
    #[serde(rename = "Solicitudes varias")]
    SolicitudesVarias,
    #[serde(rename = "Archivo provisional (MP)")]
    ArchivoProvisional,
    #[serde(rename = "Solicitud de archivo (Defensa)")]
    SolicitudArchivo,
}

impl fmt::Display for BriefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BriefKind::Imputacion => write!(f, "Imputación (CPP 280-281)"),
            BriefKind::Acusacion => write!(f, "Acusación (CPP 340)"),
            BriefKind::AcusacionAutonoma => write!(f, "Acusación autónoma (CPP 340)"),
            BriefKind::AccionResarcitoria => write!(f, "Acción resarcitoria"),
            BriefKind::Sobreseimiento => write!(f, "Sobreseimiento (CPP 350)"),
            BriefKind::SolicitudesVarias => write!(f, "Solicitudes varias"),
            BriefKind::ArchivoProvisional => write!(f, "Archivo provisional (MP)"),
            BriefKind::SolicitudArchivo => write!(f, "Solicitud de archivo (Defensa)"),
        }
    }
}

/// Letterhead and signature branding for generated briefs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct Branding {
    pub entidad: Entity,
    /// MP: fiscalía/sección; DP: unidad; privado: nombre del estudio.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Entity name is required"))
    )]
    pub nombre_entidad: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Signer name is required"))
    )]
    pub firma_nombre: String,
    /// Cargo: "Abogado Defensor Particular", "Fiscal de Circuito", ...
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Signer title is required"))
    )]
    pub firma_linea: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domicilio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correo: Option<String>,
}

/// Case metadata interpolated into the brief body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseMeta {
    pub circuito: String,
    pub provincia: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub juzgado: Option<String>,
    pub numero_causa: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noticia_criminal: Option<String>,
    pub delito: String,
    pub imputado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victima: Option<String>,
    /// dd/mm/aaaa as printed in the heading.
    pub fecha: String,
}

/// Request body for brief generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BriefRequest {
    pub tipo: BriefKind,
    pub caso: CaseMeta,
    pub branding: Branding,
    /// Addressee office. Ignored for "Archivo provisional (MP)".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destino: Option<String>,
    #[serde(default)]
    pub grado: ExecutionDegree,
}

/// Generated brief.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BriefResponse {
    pub tipo: BriefKind,
    pub texto: String,
}

/// Request body for the PDF export endpoint. Branding comes from server
/// configuration, not from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ReportExportRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Title is required"))
    )]
    pub titulo: String,
    /// Pre-formatted report text, as returned by the calculator endpoints.
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Report body is required"))
    )]
    pub contenido: String,
}

/// Request body for the brief recommendation rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BriefRecommendationRequest {
    pub rol: Role,
    pub estadio: Stage,
}

/// Recommended brief kind for a (role, stage) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BriefRecommendationResponse {
    pub recomendado: BriefKind,
}
