use chrono::{Datelike, NaiveDate};
use shared_types::{PrescriptionRequest, PrescriptionResponse, Province, Regime};

/// Entry into force of the accusatory system (SPA) per judicial district.
/// Offenses committed before the district's date fall under the old
/// Código Judicial regime.
pub fn spa_entry_date(provincia: Province) -> NaiveDate {
    let (y, m, d) = match provincia {
        Province::Cocle | Province::Veraguas => (2011, 9, 2),
        Province::Herrera | Province::LosSantos => (2012, 1, 2),
        Province::Chiriqui | Province::BocasDelToro => (2012, 9, 2),
        Province::Colon | Province::PanamaOeste => (2015, 9, 2),
        Province::Panama | Province::Darien => (2016, 9, 2),
        Province::Comarcas => (2017, 1, 1),
    };
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn base_term_years(regimen: Regime, pena_maxima_anios: u32) -> u32 {
    match regimen {
        Regime::Cpp => {
            if pena_maxima_anios <= 6 {
                6
            } else {
                pena_maxima_anios
            }
        }
        Regime::Cj => {
            if pena_maxima_anios <= 3 {
                3
            } else if pena_maxima_anios <= 6 {
                5
            } else {
                10
            }
        }
    }
}

fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    let target = date.year() + years as i32;
    // Feb 29 rolls to Mar 1 on non-leap targets.
    date.with_year(target)
        .or_else(|| NaiveDate::from_ymd_opt(target, 3, 1))
        .unwrap_or(date)
}

fn legal_basis(regimen: Regime) -> Vec<String> {
    match regimen {
        Regime::Cpp => vec![
            "CPP Art. 91-93 (Prescripción de la acción penal)".to_string(),
            "CPP Art. 557 (Aplicación del SPA)".to_string(),
        ],
        Regime::Cj => vec![
            "CJ Art. 1968-B (Prescripción en sistema inquisitivo)".to_string(),
            "CJ Art. 1968-C/D (Suspensión e interrupción)".to_string(),
        ],
    }
}

/// Orientative prescription estimate. Suspension and interruption causes
/// are out of scope; the result is the uninterrupted statutory term.
pub fn estimate(req: &PrescriptionRequest) -> PrescriptionResponse {
    let regimen = if req.fecha_hecho >= spa_entry_date(req.distrito) {
        Regime::Cpp
    } else {
        Regime::Cj
    };
    let plazo_base_anios = base_term_years(regimen, req.pena_maxima_anios);
    let fecha_estimada = add_years(req.fecha_hecho, plazo_base_anios);

    let hoy = req
        .hoy
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let dias = (fecha_estimada - hoy).num_days();
    let prescrito = dias < 0;

    PrescriptionResponse {
        regimen,
        plazo_base_anios,
        fecha_inicio_computo: req.fecha_hecho,
        fecha_estimada,
        dias_restantes: if prescrito { 0 } else { dias },
        prescrito,
        fundamento: legal_basis(regimen),
    }
}
