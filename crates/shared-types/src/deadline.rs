use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Appeal kinds with business-day windows under the CPP.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AppealKind {
    Anulacion,
    Casacion,
}

impl AppealKind {
    /// Filing window in business days (CPP 437 / CPP 441).
    pub fn plazo_dias(&self) -> u32 {
        match self {
            AppealKind::Anulacion => 5,
            AppealKind::Casacion => 10,
        }
    }
}

impl fmt::Display for AppealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppealKind::Anulacion => write!(f, "anulacion"),
            AppealKind::Casacion => write!(f, "casacion"),
        }
    }
}

/// Body that issued the decision under appeal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum DecidingBody {
    TribunalJuicio,
    JuezGarantias,
}

/// Request body for the appeal-deadline endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppealDeadlineRequest {
    pub recurso: AppealKind,
    pub organo_decisor: DecidingBody,
    pub fecha_notificacion: NaiveDate,
    /// Court-specific holidays merged with the national list.
    #[serde(default)]
    pub feriados_adicionales: Vec<NaiveDate>,
    /// Reference date for the remaining-days computation. Defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoy: Option<NaiveDate>,
}

/// One business day inside the filing window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarDay {
    pub fecha: NaiveDate,
    /// 1-based position within the window.
    pub dia: u32,
    /// Spanish weekday name, lowercase ("lunes", "martes", ...).
    pub nombre: String,
}

/// Appeal deadline computation result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppealDeadlineResponse {
    pub recurso: AppealKind,
    pub organo_decisor: DecidingBody,
    pub plazo_dias: u32,
    pub fecha_notificacion: NaiveDate,
    pub inicio_computo: NaiveDate,
    pub fecha_limite: NaiveDate,
    pub calendario: Vec<CalendarDay>,
    pub dias_restantes: i64,
    pub vencido: bool,
    pub fundamento: Vec<String>,
}
