use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use shared_types::{
    AppealDeadlineRequest, AppealDeadlineResponse, AppealKind, AppError, CalendarDay, DecidingBody,
};

/// National holidays observed by the Órgano Judicial in 2025.
pub fn national_holidays(anio: i32) -> Vec<NaiveDate> {
    match anio {
        2025 => [
            (1, 1),
            (1, 9),
            (2, 24),
            (2, 25),
            (4, 18),
            (5, 1),
            (11, 3),
            (11, 4),
            (11, 10),
            (11, 28),
            (12, 8),
            (12, 25),
        ]
        .iter()
        .filter_map(|&(m, d)| NaiveDate::from_ymd_opt(2025, m, d))
        .collect(),
        _ => Vec::new(),
    }
}

fn is_business_day(date: NaiveDate, feriados: &HashSet<NaiveDate>) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !feriados.contains(&date)
}

/// Strictly after `date`: always advances at least one calendar day.
fn next_business_day(date: NaiveDate, feriados: &HashSet<NaiveDate>) -> NaiveDate {
    let mut d = date + Days::new(1);
    while !is_business_day(d, feriados) {
        d = d + Days::new(1);
    }
    d
}

/// Adds `n` business days, exclusive of the starting date.
fn add_business_days(start: NaiveDate, n: u32, feriados: &HashSet<NaiveDate>) -> NaiveDate {
    let mut d = start;
    for _ in 0..n {
        d = next_business_day(d, feriados);
    }
    d
}

fn spanish_weekday(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miércoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn legal_basis(recurso: AppealKind) -> Vec<String> {
    match recurso {
        AppealKind::Anulacion => vec![
            "CPP Art. 437 (Recurso de anulación - 5 días hábiles)".to_string(),
            "CPP Art. 103 (Cómputo de plazos)".to_string(),
        ],
        AppealKind::Casacion => vec![
            "CPP Art. 441-442 (Recurso de casación - 10 días hábiles)".to_string(),
            "CPP Art. 103 (Cómputo de plazos)".to_string(),
        ],
    }
}

/// Full deadline computation: admissibility guard, start-of-count rule,
/// business-day addition and the day-by-day filing calendar.
pub fn compute_appeal_deadline(
    req: &AppealDeadlineRequest,
) -> Result<AppealDeadlineResponse, AppError> {
    if req.recurso == AppealKind::Casacion && req.organo_decisor != DecidingBody::TribunalJuicio {
        let mut fields = std::collections::HashMap::new();
        fields.insert(
            "organo_decisor".to_string(),
            "El recurso de casación solo procede contra sentencias del Tribunal de Juicio"
                .to_string(),
        );
        return Err(AppError::validation(
            "El recurso de casación solo procede contra sentencias del Tribunal de Juicio",
            fields,
        ));
    }

    let mut feriados: HashSet<NaiveDate> =
        national_holidays(req.fecha_notificacion.year()).into_iter().collect();
    feriados.extend(national_holidays(req.fecha_notificacion.year() + 1));
    feriados.extend(req.feriados_adicionales.iter().copied());

    let plazo_dias = req.recurso.plazo_dias();
    let inicio_computo = next_business_day(req.fecha_notificacion, &feriados);
    let fecha_limite = add_business_days(inicio_computo, plazo_dias - 1, &feriados);

    let mut calendario = Vec::with_capacity(plazo_dias as usize);
    let mut d = inicio_computo;
    while d <= fecha_limite {
        if is_business_day(d, &feriados) {
            calendario.push(CalendarDay {
                fecha: d,
                dia: calendario.len() as u32 + 1,
                nombre: spanish_weekday(d).to_string(),
            });
        }
        d = d + Days::new(1);
    }

    let hoy = req
        .hoy
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let dias_restantes = (fecha_limite - hoy).num_days().max(0);

    Ok(AppealDeadlineResponse {
        recurso: req.recurso,
        organo_decisor: req.organo_decisor,
        plazo_dias,
        fecha_notificacion: req.fecha_notificacion,
        inicio_computo,
        fecha_limite,
        calendario,
        dias_restantes,
        vencido: fecha_limite < hoy,
        fundamento: legal_basis(req.recurso),
    })
}
