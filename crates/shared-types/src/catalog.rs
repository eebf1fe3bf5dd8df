use serde::{Deserialize, Serialize};

use crate::risk::RiskCategory;

/// One indicator of the risk matrix catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskIndicator {
    pub id: String,
    pub nombre: String,
    pub descripcion: String,
}

/// Indicators grouped under their risk category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RiskIndicatorGroup {
    pub categoria: RiskCategory,
    pub indicadores: Vec<RiskIndicator>,
}

/// Fixed list of national holidays for one year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HolidayCalendar {
    pub anio: i32,
    pub feriados: Vec<chrono::NaiveDate>,
}
