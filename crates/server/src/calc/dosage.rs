use shared_types::{AppError, DosageRequest, DosageResponse, ExecutionDegree, KinshipEffect};

/// Aggravating circumstances catalog (CP Art. 88).
pub const AGRAVANTES: [&str; 14] = [
    "Abuso de superioridad o medios que limiten la defensa (Art. 88.1 CP)",
    "Inundación, incendio, veneno, explosión u otros medios que causen grandes estragos; o aprovechar calamidad (Art. 88.2 CP)",
    "Ensañamiento (Art. 88.3 CP)",
    "Precio o recompensa (Art. 88.4 CP)",
    "Astucia, fraude o disfraz (Art. 88.5 CP)",
    "Abuso de autoridad, confianza pública, profesión o cargo (Art. 88.6 CP)",
    "Con armas o con ayuda de otras personas (Art. 88.7 CP)",
    "Escalamiento o fractura sobre las cosas (Art. 88.8 CP)",
    "Abuso de relaciones domésticas, prestación de obras/servicios, cohabitación u hospitalidad (Art. 88.9 CP)",
    "Embriaguez preordenada (Art. 88.10 CP)",
    "Víctima con discapacidad o incapaz de velar por su seguridad o salud (Art. 88.11 CP)",
    "Valerse de persona menor de edad o con discapacidad (Art. 88.12 CP)",
    "Reincidencia (Art. 88.13 CP)",
    "Planificar/coordinar/ordenar desde centro penitenciario (Art. 88.14 CP)",
];

/// Mitigating circumstances catalog (CP Art. 90).
pub const ATENUANTES: [&str; 7] = [
    "Motivos nobles o altruistas (Art. 90.1 CP)",
    "No quiso causar un mal tan grave (Art. 90.2 CP)",
    "Condiciones físicas o psíquicas de inferioridad (Art. 90.3 CP)",
    "Arrepentimiento eficaz: disminuye o intenta disminuir consecuencias (Art. 90.4 CP)",
    "Colaboración efectiva (Art. 90.5 CP)",
    "Imputabilidad disminuida (Art. 90.6 CP)",
    "Otra circunstancia relevante a juicio del Tribunal (Art. 90.7 CP)",
];

fn legal_basis() -> Vec<String> {
    [
        "CP Art. 79 (Criterios de dosificación)",
        "CP Art. 82 (Tentativa)",
        "CP Art. 88 (Agravantes comunes)",
        "CP Art. 90 (Atenuantes comunes)",
        "CP Art. 91 (Parentesco cercano)",
        "CP Art. 92-93 (Fracciones 1/6 a 1/3 y límites)",
        "CP Art. 96 (Orden: primero agravantes, luego atenuantes)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn surrogate_measures(pena_max: u32) -> Vec<String> {
    let mut subrogados = Vec::new();
    if pena_max <= 36 {
        subrogados.push(
            "Suspensión condicional de la ejecución de la pena (si cumple requisitos)".to_string(),
        );
    }
    if pena_max <= 24 {
        subrogados
            .push("Reemplazo de penas cortas / libertad condicional (según CP Tít. IV)".to_string());
    }
    subrogados
}

/// Penalty dosage over an abstract frame, in months. Order is statutory:
/// tentativa adjustment, midpoint base, aggravating raises (capped at
/// max + 50%), then mitigating cuts (floored at the frame minimum).
pub fn compute_dosage(req: &DosageRequest) -> Result<DosageResponse, AppError> {
    if req.pena_min_meses == 0 || req.pena_max_meses == 0 || req.pena_min_meses > req.pena_max_meses
    {
        return Err(AppError::bad_request(
            "Ingrese un marco punitivo válido (mínimo y máximo en meses)",
        ));
    }

    let (pena_min, pena_max) = match req.grado {
        ExecutionDegree::Tentativa => {
            let min = ((f64::from(req.pena_min_meses) * 0.5).ceil() as u32).max(1);
            let max = ((f64::from(req.pena_max_meses) * 2.0 / 3.0).floor() as u32).max(min);
            (min, max)
        }
        ExecutionDegree::Consumado => (req.pena_min_meses, req.pena_max_meses),
    };

    let pena_base = (pena_min + pena_max) / 2;

    let frac_agrav = req.intensidad_agravantes.fraction();
    let frac_aten = req.intensidad_atenuantes.fraction();

    let mut pena = (f64::from(pena_base) * (1.0 + req.agravantes.len() as f64 * frac_agrav))
        .floor();
    if req.parentesco == KinshipEffect::Agrava {
        pena = (pena * (1.0 + frac_agrav)).floor();
    }
    let tope_agrav = (f64::from(pena_max) + f64::from(pena_max) * 0.5).floor();
    pena = pena.min(tope_agrav);

    pena = (pena * (1.0 - req.atenuantes.len() as f64 * frac_aten)).floor();
    if req.parentesco == KinshipEffect::Atenua {
        pena = (pena * (1.0 - frac_aten)).floor();
    }
    let pena_probable = (pena.max(f64::from(pena_min))) as u32;

    let subrogados = surrogate_measures(pena_max);
    let fundamento = legal_basis();

    Ok(DosageResponse {
        pena_min_meses: pena_min,
        pena_max_meses: pena_max,
        pena_probable_meses: pena_probable,
        informe: build_report(req, pena_min, pena_max, pena_probable, &subrogados, &fundamento),
        subrogados,
        fundamento,
    })
}

fn bullet_list(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items
            .iter()
            .map(|i| format!("• {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn build_report(
    req: &DosageRequest,
    pena_min: u32,
    pena_max: u32,
    pena_probable: u32,
    subrogados: &[String],
    fundamento: &[String],
) -> String {
    format!(
        "CÁLCULO DE PENAS\n\n\
         Marco Punitivo (ajustado por grado de ejecución cuando aplique):\n\
         - Mínimo: {pena_min} meses\n\
         - Máximo: {pena_max} meses\n\
         - Pena probable: {pena_probable} meses\n\n\
         Parámetros de dosificación:\n\
         - Grado de ejecución: {}\n\
         - Intensidad AGRAVANTES: {}\n\
         - Intensidad ATENUANTES: {}\n\
         - Parentesco: {}\n\n\
         Agravantes seleccionadas (intensidad: {}):\n{}\n\n\
         Atenuantes seleccionadas (intensidad: {}):\n{}\n\n\
         Subrogados potenciales:\n{}\n\n\
         Fundamento normativo:\n{}",
        req.grado.to_string().to_uppercase(),
        req.intensidad_agravantes,
        req.intensidad_atenuantes,
        req.parentesco,
        req.intensidad_agravantes,
        bullet_list(&req.agravantes, "(ninguna)"),
        req.intensidad_atenuantes,
        bullet_list(&req.atenuantes, "(ninguna)"),
        bullet_list(subrogados, "(ninguno)"),
        bullet_list(fundamento, "(ninguno)"),
    )
}
