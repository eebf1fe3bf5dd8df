use pretty_assertions::assert_eq;
use server::calc::liquidation::{format_duration, from_days, to_days, unify};
use shared_types::{
    OffenseInput, Role, SentenceCredits, SentenceTerm, UnificationRequest,
};

fn offense(nombre: &str, anios: u32, meses: u32, dias: u32) -> OffenseInput {
    OffenseInput {
        nombre: nombre.to_string(),
        pena: SentenceTerm::new(anios, meses, dias),
        abonos: SentenceCredits::default(),
        fecha_inicio_computo: None,
    }
}

fn request(delitos: Vec<OffenseInput>, tope: u32) -> UnificationRequest {
    UnificationRequest {
        rol: Role::Juez,
        delitos,
        tope_legal_anios: tope,
        observaciones: None,
    }
}

#[test]
fn one_year_is_360_days() {
    assert_eq!(to_days(&SentenceTerm::new(1, 0, 0)), 360);
}

#[test]
fn mixed_term_uses_30_day_months() {
    assert_eq!(to_days(&SentenceTerm::new(2, 3, 10)), 820);
}

#[test]
fn from_days_decomposes_canonically() {
    assert_eq!(from_days(820), SentenceTerm::new(2, 3, 10));
    assert_eq!(from_days(0), SentenceTerm::new(0, 0, 0));
    assert_eq!(from_days(359), SentenceTerm::new(0, 11, 29));
}

#[test]
fn format_duration_pluralizes_in_spanish() {
    assert_eq!(format_duration(360), "1 año");
    assert_eq!(format_duration(750), "2 años 1 mes");
    assert_eq!(format_duration(31), "1 mes 1 día");
    assert_eq!(format_duration(0), "0 días");
}

#[test]
fn six_years_with_120_credit_days() {
    let mut delito = offense("Hurto agravado", 6, 0, 0);
    delito.abonos.detencion_preventiva_dias = 120;

    let result = unify(&request(vec![delito], 50));

    assert_eq!(result.total_base_dias, 2160);
    assert_eq!(result.total_abonos_dias, 120);
    assert_eq!(result.topado_dias, 2160);
    assert_eq!(result.neto_tras_tope_dias, 2040);
    assert_eq!(result.mitad_dias, 1080);
    assert_eq!(result.dos_tercios_dias, 1440);
    assert!(!result.tope_aplicado);
}

#[test]
fn cap_bites_before_credits() {
    // 25 + 10 + 8 years against a 35-year cap, with 500 credit days.
    // Subtracting the credits first would leave 14980 days, still above the
    // cap, and the net would come out as 12600 instead of 12100.
    let mut delitos = vec![
        offense("Homicidio", 25, 0, 0),
        offense("Robo", 10, 0, 0),
        offense("Asociación ilícita", 8, 0, 0),
    ];
    delitos[0].abonos.detencion_preventiva_dias = 500;

    let result = unify(&request(delitos, 35));

    assert_eq!(result.total_base_dias, 15480);
    assert_eq!(result.total_abonos_dias, 500);
    assert_eq!(result.tope_dias, 12600);
    assert_eq!(result.topado_dias, 12600);
    assert!(result.tope_aplicado);
    assert_eq!(result.neto_tras_tope_dias, 12100);
    assert_eq!(result.mitad_dias, 6300);
    assert_eq!(result.dos_tercios_dias, 8400);
}

#[test]
fn more_credits_never_raise_the_net() {
    let base = vec![offense("Homicidio", 25, 0, 0), offense("Robo", 20, 0, 0)];

    let mut previo = i64::MAX;
    for abonos in [0, 100, 5000, 11000, 20000] {
        let mut delitos = base.clone();
        delitos[1].abonos.conducta_dias = abonos;

        let result = unify(&request(delitos, 35));

        // The cap bites the base sum, so the capped figure is credit-independent.
        assert_eq!(result.topado_dias, 12600);
        assert!(result.neto_tras_tope_dias <= previo);
        assert!(result.neto_tras_tope_dias >= 0);
        previo = result.neto_tras_tope_dias;
    }
}

#[test]
fn credits_never_drive_net_below_zero() {
    let mut delito = offense("Lesiones", 0, 2, 0);
    delito.abonos.detencion_preventiva_dias = 100;

    let result = unify(&request(vec![delito], 50));

    assert_eq!(result.delitos[0].neto_dias, 0);
    assert_eq!(result.neto_tras_tope_dias, 0);
}

#[test]
fn all_six_credit_sources_count() {
    let mut delito = offense("Estafa", 1, 0, 0);
    delito.abonos = SentenceCredits {
        detencion_preventiva_dias: 10,
        arresto_domiciliario_dias: 20,
        otras_medidas_dias: 5,
        trabajo_dias: 15,
        estudio_dias: 8,
        conducta_dias: 2,
    };

    let result = unify(&request(vec![delito], 50));

    assert_eq!(result.total_abonos_dias, 60);
    assert_eq!(result.neto_tras_tope_dias, 300);
}

#[test]
fn report_carries_role_cap_and_milestones() {
    let mut req = request(vec![offense("Hurto", 6, 0, 0)], 50);
    req.rol = Role::Fiscalia;
    req.observaciones = Some("  Pendiente acumulación de otra causa.  ".to_string());

    let informe = unify(&req).informe;

    assert!(informe.starts_with("LIQUIDACIÓN DE PENA – UNIFICACIÓN (Rol: Fiscalía)"));
    assert!(informe.contains("Tope legal máximo considerado: 50 año(s)."));
    assert!(informe.contains("Delito 1: Hurto"));
    assert!(informe.contains("Tope legal aplicado: (no supera el tope)"));
    assert!(informe.contains("Hitos: 1/2 = 3 años, 2/3 = 4 años (sobre la pena topada)."));
    assert!(informe.contains("Observaciones:\nPendiente acumulación de otra causa."));
}

#[test]
fn report_marks_applied_cap_and_unnamed_offenses() {
    let delitos = vec![offense("", 30, 0, 0), offense("Robo", 20, 0, 0)];
    let result = unify(&request(delitos, 35));

    assert!(result.informe.contains("Delito 1: (sin nombre)"));
    assert!(result
        .informe
        .contains("Tope legal aplicado: 35 años (se reduce desde la suma)"));
    assert_eq!(result.delitos[0].nombre, "(delito)");
}

#[test]
fn start_of_computation_note_is_echoed() {
    let mut delito = offense("Hurto", 1, 0, 0);
    delito.fecha_inicio_computo = Some("01/03/2025".to_string());

    let informe = unify(&request(vec![delito], 50)).informe;

    assert!(informe.contains("  Fecha de inicio de cómputo: 01/03/2025"));
}
