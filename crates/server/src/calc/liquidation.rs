use shared_types::{
    OffenseInput, OffenseLiquidation, SentenceCredits, SentenceTerm, UnificationRequest,
    UnificationResult,
};

/// Administrative duration convention: liquidations are computed on a
/// 360-day year and 30-day month, matching court practice. Not calendar time.
pub const DAYS_PER_MONTH: i64 = 30;
pub const DAYS_PER_YEAR: i64 = 360;

fn clamp0(n: i64) -> i64 {
    n.max(0)
}

/// Convert a term to days under the 360/30 convention.
pub fn to_days(term: &SentenceTerm) -> i64 {
    i64::from(term.anios) * DAYS_PER_YEAR + i64::from(term.meses) * DAYS_PER_MONTH
        + i64::from(term.dias)
}

/// Decompose days back into years/months/days. Inverse of `to_days` for any
/// canonical term (meses < 12, dias < 30).
pub fn from_days(days: i64) -> SentenceTerm {
    let a = days / DAYS_PER_YEAR;
    let rem = days - a * DAYS_PER_YEAR;
    let m = rem / DAYS_PER_MONTH;
    let d = rem - m * DAYS_PER_MONTH;
    SentenceTerm::new(a as u32, m as u32, d as u32)
}

/// Spanish-pluralized rendering ("2 años 3 meses 10 días"). Zero components
/// are dropped, except that a fully zero duration still prints "0 días".
pub fn format_duration(days: i64) -> String {
    let t = from_days(days);
    let mut parts = Vec::new();
    if t.anios != 0 {
        parts.push(format!("{} año{}", t.anios, if t.anios != 1 { "s" } else { "" }));
    }
    if t.meses != 0 {
        parts.push(format!("{} mes{}", t.meses, if t.meses != 1 { "es" } else { "" }));
    }
    if t.dias != 0 || parts.is_empty() {
        parts.push(format!("{} día{}", t.dias, if t.dias != 1 { "s" } else { "" }));
    }
    parts.join(" ")
}

/// Sum the six credit sources. One day credited per day reported.
pub fn sum_credits(c: &SentenceCredits) -> i64 {
    i64::from(c.detencion_preventiva_dias)
        + i64::from(c.arresto_domiciliario_dias)
        + i64::from(c.otras_medidas_dias)
        + i64::from(c.trabajo_dias)
        + i64::from(c.estudio_dias)
        + i64::from(c.conducta_dias)
}

/// Liquidate a single offense: net = max(base - credits, 0).
pub fn liquidate_offense(input: &OffenseInput) -> OffenseLiquidation {
    let base_dias = to_days(&input.pena);
    let abonos_dias = sum_credits(&input.abonos);
    OffenseLiquidation {
        nombre: if input.nombre.is_empty() {
            "(delito)".to_string()
        } else {
            input.nombre.clone()
        },
        base_dias,
        abonos_dias,
        neto_dias: clamp0(base_dias - abonos_dias),
    }
}

/// Unify up to three offenses under a legal cap. The cap is applied to the
/// base sum first; credits are discounted afterwards.
pub fn unify(req: &UnificationRequest) -> UnificationResult {
    let delitos: Vec<OffenseLiquidation> = req.delitos.iter().map(liquidate_offense).collect();

    let total_base_dias: i64 = delitos.iter().map(|d| d.base_dias).sum();
    let total_abonos_dias: i64 = delitos.iter().map(|d| d.abonos_dias).sum();

    let tope_dias = i64::from(req.tope_legal_anios) * DAYS_PER_YEAR;
    let topado_dias = total_base_dias.min(tope_dias);
    let neto_tras_tope_dias = clamp0(topado_dias - total_abonos_dias);

    let mitad_dias = topado_dias / 2;
    let dos_tercios_dias = (topado_dias * 2) / 3;

    let mut result = UnificationResult {
        delitos,
        total_base_dias,
        total_abonos_dias,
        total_neto_dias: clamp0(total_base_dias - total_abonos_dias),
        tope_dias,
        topado_dias,
        neto_tras_tope_dias,
        mitad_dias,
        dos_tercios_dias,
        tope_aplicado: topado_dias < total_base_dias,
        informe: String::new(),
    };
    result.informe = build_report(req, &result);
    result
}

/// Plain-text liquidation report in the court's accustomed layout.
fn build_report(req: &UnificationRequest, res: &UnificationResult) -> String {
    let mut bloques: Vec<String> = Vec::new();

    bloques.push(format!(
        "LIQUIDACIÓN DE PENA – UNIFICACIÓN (Rol: {})",
        req.rol
    ));
    bloques.push(format!(
        "Tope legal máximo considerado: {} año(s).",
        req.tope_legal_anios
    ));
    bloques.push(String::new());

    for (i, (input, line)) in req.delitos.iter().zip(res.delitos.iter()).enumerate() {
        let nombre = if input.nombre.is_empty() {
            "(sin nombre)"
        } else {
            &input.nombre
        };
        bloques.push(format!("Delito {}: {}", i + 1, nombre));
        bloques.push(format!("  Pena impuesta: {}", format_duration(line.base_dias)));
        bloques.push(format!(
            "  Abonos: {} (cautelares + conmutación)",
            format_duration(line.abonos_dias)
        ));
        bloques.push(format!(
            "  Neto por este delito: {}",
            format_duration(line.neto_dias)
        ));
        if let Some(fecha) = input
            .fecha_inicio_computo
            .as_deref()
            .filter(|f| !f.trim().is_empty())
        {
            bloques.push(format!("  Fecha de inicio de cómputo: {fecha}"));
        }
        bloques.push(String::new());
    }

    bloques.push(format!(
        "Suma de penas (antes de tope): {}",
        format_duration(res.total_base_dias)
    ));
    bloques.push(format!(
        "Abonos totales: {}",
        format_duration(res.total_abonos_dias)
    ));
    if res.tope_aplicado {
        bloques.push(format!(
            "Tope legal aplicado: {} (se reduce desde la suma)",
            format_duration(res.topado_dias)
        ));
    } else {
        bloques.push("Tope legal aplicado: (no supera el tope)".to_string());
    }
    bloques.push(format!(
        "Pena efectiva tras tope y abonos: {}",
        format_duration(res.neto_tras_tope_dias)
    ));
    bloques.push(String::new());

    bloques.push(format!(
        "Hitos: 1/2 = {}, 2/3 = {} (sobre la pena topada).",
        format_duration(res.mitad_dias),
        format_duration(res.dos_tercios_dias)
    ));

    if let Some(obs) = req
        .observaciones
        .as_deref()
        .map(str::trim)
        .filter(|o| !o.is_empty())
    {
        bloques.push(String::new());
        bloques.push("Observaciones:".to_string());
        bloques.push(obs.to_string());
    }

    bloques.join("\n")
}
