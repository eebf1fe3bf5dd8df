use shared_types::{
    ArraigoFactors, ArraigoLevel, CaseHeader, FlightResources, MigratoryStatus, RiskCategory,
    RiskEvaluationRequest, RiskEvaluationResponse, RiskIndicator, RiskIndicatorGroup, RiskRow,
    RiskSeverity, Role,
};

/// Non-custodial measure catalog (CPP art. 227), in statutory order.
pub const MEDIDAS_ALTERNATIVAS: [&str; 9] = [
    "Presentación periódica",
    "Prohibición de acercamiento y contacto",
    "Arresto domiciliario nocturno",
    "Arresto domiciliario total",
    "Localizador electrónico",
    "Prohibición de salida del país y retención de pasaporte",
    "Fianza",
    "Prohibición de concurrir a determinados lugares",
    "Suspensión del ejercicio de cargo o actividad",
];

const INDICADORES_FUGA: [(&str, &str, &str); 5] = [
    (
        "sin-domicilio",
        "Falta de domicilio/residencia estable",
        "Ausencia de domicilio fijo o información no verificable",
    ),
    (
        "escasos-lazos",
        "Escaso arraigo familiar/laboral",
        "Sin empleo formal ni núcleo familiar primario asentado",
    ),
    (
        "pena-elevada",
        "Pena esperada elevada",
        "Incentivo objetivo a sustraerse del proceso",
    ),
    (
        "recursos-fuga",
        "Facilidades materiales para ocultarse/salir del país",
        "Recursos económicos/medios logísticos",
    ),
    (
        "hist-evasion",
        "Antecedentes de incomparecencia/evasión",
        "Quebrantamientos, rebeldías o cambios de domicilio no informados",
    ),
];

const INDICADORES_OBSTACULIZACION: [(&str, &str, &str); 4] = [
    (
        "amenazas-victima",
        "Intimidación a víctima/testigos",
        "Conductas recientes orientadas a coaccionar",
    ),
    (
        "destruccion-prueba",
        "Riesgo de destrucción de evidencia",
        "Capacidad y oportunidad para alterar o suprimir prueba",
    ),
    (
        "coordinacion-coimputados",
        "Coordinación con coimputados",
        "Estructura para acordar versiones o eludir diligencias",
    ),
    (
        "acceso-expediente",
        "Acceso privilegiado a fuentes de prueba",
        "Posición o cargo que facilite influir indebidamente",
    ),
];

const INDICADORES_VICTIMA: [(&str, &str, &str); 3] = [
    (
        "proximidad",
        "Proximidad geográfica/personal",
        "Cercanía que incremente la exposición de la víctima",
    ),
    (
        "violencia-previa",
        "Antecedentes de violencia o amenazas",
        "Historial reciente con la víctima o su familia",
    ),
    (
        "quebrantamiento",
        "Quebrantamiento de medidas previas",
        "Incumplimientos de órdenes de alejamiento u otras",
    ),
];

const INDICADORES_COMUNIDAD: [(&str, &str, &str); 3] = [
    (
        "organizacion",
        "Vinculación a organización criminal",
        "Recursos y logística para reiterar",
    ),
    (
        "pluralidad-delitos",
        "Pluralidad/naturaleza de delitos",
        "Hechos múltiples o especialmente graves",
    ),
    (
        "condenas-vigentes",
        "Condenas vigentes relevantes",
        "Ejecución pendiente u otras",
    ),
];

fn group(categoria: RiskCategory, items: &[(&str, &str, &str)]) -> RiskIndicatorGroup {
    RiskIndicatorGroup {
        categoria,
        indicadores: items
            .iter()
            .map(|&(id, nombre, descripcion)| RiskIndicator {
                id: id.to_string(),
                nombre: nombre.to_string(),
                descripcion: descripcion.to_string(),
            })
            .collect(),
    }
}

/// The full indicator catalog, grouped by category.
pub fn indicator_catalog() -> Vec<RiskIndicatorGroup> {
    vec![
        group(RiskCategory::Fuga, &INDICADORES_FUGA),
        group(RiskCategory::Obstaculizacion, &INDICADORES_OBSTACULIZACION),
        group(RiskCategory::Victima, &INDICADORES_VICTIMA),
        group(RiskCategory::Comunidad, &INDICADORES_COMUNIDAD),
    ]
}

fn indicator_name(categoria: RiskCategory, id: &str) -> Option<&'static str> {
    let items: &[(&str, &str, &str)] = match categoria {
        RiskCategory::Fuga => &INDICADORES_FUGA,
        RiskCategory::Obstaculizacion => &INDICADORES_OBSTACULIZACION,
        RiskCategory::Victima => &INDICADORES_VICTIMA,
        RiskCategory::Comunidad => &INDICADORES_COMUNIDAD,
    };
    items.iter().find(|&&(i, _, _)| i == id).map(|&(_, n, _)| n)
}

/// Weighted arraigo score, clamped to [0, 100]. The deltas replicate the
/// heuristic matrix used in practice and are not tunable.
pub fn score_arraigo(f: &ArraigoFactors) -> u32 {
    let mut puntos: i32 = 0;

    if f.es_nacional {
        puntos += 15;
    }
    if f.tiene_otras_ciudadanias {
        puntos -= 5;
    }
    if f.residencia_legal_extranjero {
        puntos -= 10;
    }
    puntos += match f.estatus_migratorio_panama {
        MigratoryStatus::Regular => 10,
        MigratoryStatus::Irregular => -15,
    };
    if f.domicilio_fijo {
        puntos += 20;
    }
    if !f.es_nacional {
        if f.tiempo_residencia_meses >= 24 {
            puntos += 15;
        } else if f.tiempo_residencia_meses >= 6 {
            puntos += 8;
        }
    }
    if f.empleo_formal {
        puntos += 15;
    }
    if f.contrato_indefinido {
        puntos += 5;
    }
    if f.familia_primaria_en_pa {
        puntos += 20;
    }
    if f.estudios_activos {
        puntos += 5;
    }
    if f.antecedentes_evasion {
        puntos -= 25;
    }
    if f.pasaporte_vigente {
        puntos -= 5;
    }
    puntos += match f.recursos_para_fugarse {
        FlightResources::Bajos => 10,
        FlightResources::Medios => 0,
        FlightResources::Altos => -10,
    };

    puntos.clamp(0, 100) as u32
}

pub fn classify(puntaje: u32) -> ArraigoLevel {
    if puntaje >= 70 {
        ArraigoLevel::Alto
    } else if puntaje >= 40 {
        ArraigoLevel::Medio
    } else {
        ArraigoLevel::Bajo
    }
}

fn join_measures(n: usize) -> String {
    MEDIDAS_ALTERNATIVAS[..n].join(", ")
}

/// Role-specific conclusion, keyed by how many severe/moderate rows were
/// marked and the arraigo level.
pub fn draft_conclusions(rol: Role, filas: &[RiskRow], nivel: ArraigoLevel) -> String {
    let graves: Vec<&RiskRow> = filas
        .iter()
        .filter(|r| r.valoracion == RiskSeverity::Grave)
        .collect();
    let moderados: Vec<&RiskRow> = filas
        .iter()
        .filter(|r| r.valoracion == RiskSeverity::Moderado)
        .collect();
    let nivel_lc = nivel.to_string().to_lowercase();

    match rol {
        Role::Fiscalia => {
            let base = "Conforme al CPP (arts. 221, 227 y concordantes), los riesgos identificados justifican una medida de cautela idónea, necesaria y proporcional.";
            if !graves.is_empty() || (moderados.len() >= 2 && nivel != ArraigoLevel::Alto) {
                let categorias: Vec<String> =
                    graves.iter().map(|r| r.riesgo.to_string()).collect();
                let concurrentes = if moderados.is_empty() {
                    ""
                } else {
                    " y riesgos moderados concurrentes"
                };
                format!(
                    "{base} Se solicita la imposición de detención provisional o, subsidiariamente, {}, dada la concurrencia de: {}{concurrentes}, y un arraigo {nivel_lc}.",
                    join_measures(3),
                    categorias.join(", ")
                )
            } else {
                format!(
                    "{base} Se proponen medidas menos gravosas: {}, en atención a un arraigo {nivel_lc} y la ausencia de riesgos graves.",
                    join_measures(4)
                )
            }
        }
        Role::Defensa => {
            let base = "Bajo los principios de proporcionalidad y subsidiariedad (CPP art. 221), y atendiendo al control judicial estricto de afectación de derechos fundamentales, se plantea:";
            if graves.is_empty() && nivel != ArraigoLevel::Bajo {
                format!(
                    "{base} sustitución por medidas no privativas: Presentación periódica, Prohibición de acercamiento, Prohibición de salida del país, pues el arraigo es {nivel_lc} y los indicadores no alcanzan umbral de gravedad."
                )
            } else {
                format!(
                    "{base} en caso de estimarse algún riesgo, su neutralización con medidas específicas y verificables ({}), descartando la detención por insuficiencia de elementos y por existir alternativas idóneas.",
                    join_measures(5)
                )
            }
        }
        _ => format!(
            "Se ponderan los riesgos a la luz de la excepcionalidad de la detención, valorando el arraigo {nivel_lc} y la posibilidad de medidas alternativas individualizadas. La decisión deberá motivarse en hechos concretos, con revisión periódica si se mantiene una medida intensiva."
        ),
    }
}

fn si_no(b: bool) -> &'static str {
    if b {
        "SI"
    } else {
        "NO"
    }
}

fn arraigo_detail(f: &ArraigoFactors) -> String {
    let mut items = vec![
        format!("Nacional: {}", si_no(f.es_nacional)),
        format!("Otras ciudadanías: {}", si_no(f.tiene_otras_ciudadanias)),
        format!(
            "Residencia legal en el extranjero: {}",
            si_no(f.residencia_legal_extranjero)
        ),
        format!(
            "Estatus migratorio en Panamá: {}",
            f.estatus_migratorio_panama
        ),
        format!("Domicilio: {}", si_no(f.domicilio_fijo)),
    ];
    if !f.es_nacional {
        items.push(format!(
            "Antigüedad en Panamá: {} meses",
            f.tiempo_residencia_meses
        ));
    }
    items.push(format!(
        "Empleo formal: {}{}",
        si_no(f.empleo_formal),
        if f.contrato_indefinido {
            " (contrato indefinido)"
        } else {
            ""
        }
    ));
    items.push(format!(
        "Familia primaria en Panamá: {}",
        si_no(f.familia_primaria_en_pa)
    ));
    items.push(format!("Estudios activos: {}", si_no(f.estudios_activos)));
    items.push(format!(
        "Antecedentes de evasión: {}",
        si_no(f.antecedentes_evasion)
    ));
    items.push(format!("Pasaporte vigente: {}", si_no(f.pasaporte_vigente)));
    items.push(format!(
        "Recursos para fugarse: {}",
        f.recursos_para_fugarse
    ));
    items.join("; ")
}

fn render_row(fila: &RiskRow) -> String {
    let nombres: Vec<&str> = fila
        .indicadores
        .iter()
        .filter_map(|id| indicator_name(fila.riesgo, id))
        .collect();
    let indicadores = if nombres.is_empty() {
        "(sin indicadores marcados)".to_string()
    } else {
        nombres.join(", ")
    };
    let evidencia = if fila.evidencia.trim().is_empty() {
        "(sin detalle)"
    } else {
        &fila.evidencia
    };
    let medidas = if fila.medidas_sugeridas.is_empty() {
        "(no sugeridas)".to_string()
    } else {
        fila.medidas_sugeridas.join(", ")
    };
    let propuesta = if fila.propuesta.trim().is_empty() {
        "(no indicada)"
    } else {
        &fila.propuesta
    };
    format!(
        "Riesgo: {}\nIndicadores: {indicadores}\nEvidencia: {evidencia}\nValoración: {}\nMedidas alternativas sugeridas: {medidas}\nPropuesta: {propuesta}\n",
        fila.riesgo, fila.valoracion
    )
}

/// Full plain-text report: header, arraigo breakdown, one block per risk
/// row and the role-specific conclusion.
pub fn generate_report(
    req: &RiskEvaluationRequest,
    puntaje: u32,
    nivel: ArraigoLevel,
    conclusion: &str,
) -> String {
    let CaseHeader {
        provincia,
        circuito,
        juzgado,
        numero_causa,
        imputado,
        delito,
        fecha,
    } = &req.caso;

    let titulo = "Matriz de riesgos procesales y medidas cautelares (CPP Panamá)\n";
    let cabecera = format!(
        "Provincia: {provincia} | Circuito: {circuito} | Órgano: {juzgado}\nCausa: {numero_causa} | Imputado: {imputado} | Delito: {delito}\nFecha: {fecha}\nRol: {}\n\n",
        req.rol
    );
    let arraigo = format!(
        "Arraigo: {nivel} (puntaje {puntaje}/100). Detalle: {}.\n\n",
        arraigo_detail(&req.arraigo)
    );
    let filas: Vec<String> = req.filas.iter().map(render_row).collect();

    format!(
        "{titulo}{cabecera}{arraigo}{}\nConclusión según rol ({}):\n{conclusion}\n\nNotas: La detención es excepcional y sujeta a control judicial estricto. Se deben preferir medidas menos gravosas cuando neutralicen el riesgo (CPP arts. 221, 227 y concordantes).",
        filas.join("\n"),
        req.rol
    )
}

/// Score, classify, draft conclusions and assemble the report.
pub fn evaluate(req: &RiskEvaluationRequest) -> RiskEvaluationResponse {
    let puntaje_arraigo = score_arraigo(&req.arraigo);
    let nivel_arraigo = classify(puntaje_arraigo);
    let conclusion = draft_conclusions(req.rol, &req.filas, nivel_arraigo);
    let informe = generate_report(req, puntaje_arraigo, nivel_arraigo, &conclusion);
    RiskEvaluationResponse {
        puntaje_arraigo,
        nivel_arraigo,
        conclusion,
        informe,
    }
}
