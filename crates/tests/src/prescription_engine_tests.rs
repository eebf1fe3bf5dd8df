use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use server::calc::prescription::{estimate, spa_entry_date};
use shared_types::{ConsummationKind, PrescriptionRequest, Province, Regime};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn request(distrito: Province, fecha_hecho: NaiveDate, pena: u32) -> PrescriptionRequest {
    PrescriptionRequest {
        distrito,
        fecha_hecho,
        pena_maxima_anios: pena,
        tipo_consumacion: ConsummationKind::Instantanea,
        hoy: Some(fecha_hecho),
    }
}

#[test]
fn spa_rollout_dates_per_district() {
    assert_eq!(spa_entry_date(Province::Cocle), date(2011, 9, 2));
    assert_eq!(spa_entry_date(Province::LosSantos), date(2012, 1, 2));
    assert_eq!(spa_entry_date(Province::BocasDelToro), date(2012, 9, 2));
    assert_eq!(spa_entry_date(Province::PanamaOeste), date(2015, 9, 2));
    assert_eq!(spa_entry_date(Province::Darien), date(2016, 9, 2));
    assert_eq!(spa_entry_date(Province::Comarcas), date(2017, 1, 1));
}

#[test]
fn offense_on_the_rollout_date_is_already_cpp() {
    let result = estimate(&request(Province::Panama, date(2016, 9, 2), 5));
    assert_eq!(result.regimen, Regime::Cpp);
}

#[test]
fn offense_before_rollout_falls_under_cj() {
    let result = estimate(&request(Province::Panama, date(2016, 9, 1), 5));
    assert_eq!(result.regimen, Regime::Cj);
}

#[test]
fn cpp_window_is_the_penalty_with_a_six_year_floor() {
    let low = estimate(&request(Province::Comarcas, date(2020, 1, 1), 4));
    assert_eq!(low.plazo_base_anios, 6);

    let high = estimate(&request(Province::Comarcas, date(2020, 1, 1), 10));
    assert_eq!(high.plazo_base_anios, 10);
}

#[test]
fn cj_window_uses_the_three_tier_table() {
    let hecho = date(2010, 5, 1);
    assert_eq!(estimate(&request(Province::Panama, hecho, 2)).plazo_base_anios, 3);
    assert_eq!(estimate(&request(Province::Panama, hecho, 5)).plazo_base_anios, 5);
    assert_eq!(estimate(&request(Province::Panama, hecho, 20)).plazo_base_anios, 10);
}

#[test]
fn estimated_date_adds_whole_years() {
    let result = estimate(&request(Province::Comarcas, date(2017, 3, 10), 6));
    assert_eq!(result.fecha_inicio_computo, date(2017, 3, 10));
    assert_eq!(result.fecha_estimada, date(2023, 3, 10));
}

#[test]
fn remaining_days_count_to_the_estimated_date() {
    let mut req = request(Province::Comarcas, date(2020, 1, 1), 6);
    req.hoy = Some(date(2025, 12, 22));

    let result = estimate(&req);

    assert_eq!(result.fecha_estimada, date(2026, 1, 1));
    assert_eq!(result.dias_restantes, 10);
    assert!(!result.prescrito);
}

#[test]
fn past_window_reports_prescribed_with_zero_days() {
    let mut req = request(Province::Panama, date(2005, 6, 15), 2);
    req.hoy = Some(date(2010, 1, 1));

    let result = estimate(&req);

    assert_eq!(result.regimen, Regime::Cj);
    assert!(result.prescrito);
    assert_eq!(result.dias_restantes, 0);
}

#[test]
fn legal_basis_matches_the_regime() {
    let cpp = estimate(&request(Province::Panama, date(2020, 1, 1), 5));
    assert_eq!(
        cpp.fundamento[0],
        "CPP Art. 91-93 (Prescripción de la acción penal)"
    );

    let cj = estimate(&request(Province::Panama, date(2010, 1, 1), 5));
    assert_eq!(
        cj.fundamento[0],
        "CJ Art. 1968-B (Prescripción en sistema inquisitivo)"
    );
}
