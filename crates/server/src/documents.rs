//! Brief (escrito) generation. Plain forensic drafting, Panamanian usage,
//! without the old "Con la venia" formula.

use shared_types::{
    Branding, BriefKind, BriefRequest, BriefResponse, CaseMeta, Entity, ExecutionDegree, Role,
    Stage,
};

fn letterhead(branding: &Branding, destino: Option<&str>, tipo: BriefKind, caso: &CaseMeta) -> String {
    let titulo_superior = match branding.entidad {
        Entity::MinisterioPublico => format!(
            "República de Panamá – Ministerio Público\n{}",
            branding.nombre_entidad
        ),
        Entity::DefensaPublica => format!(
            "República de Panamá – Defensa Pública\n{}",
            branding.nombre_entidad
        ),
        Entity::DespachoPrivado => format!("Despacho {}", branding.nombre_entidad),
    };

    // MP archive orders carry no addressee, only the office caption.
    let dirigido = match destino {
        Some(d) if tipo != BriefKind::ArchivoProvisional && !d.is_empty() => {
            format!("\nDirigido a: {d}")
        }
        _ => String::new(),
    };

    format!("{titulo_superior}\n{}, {}{dirigido}\n\n", caso.provincia, caso.fecha)
}

fn signature_block(branding: &Branding) -> String {
    let entidad = match branding.entidad {
        Entity::DespachoPrivado => format!("Despacho {}", branding.nombre_entidad),
        _ => branding.nombre_entidad.clone(),
    };
    let firma = [
        branding.firma_nombre.as_str(),
        branding.firma_linea.as_str(),
        entidad.as_str(),
    ]
    .iter()
    .filter(|s| !s.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join("\n");

    let contacto = [
        branding.domicilio.as_deref(),
        branding.telefono.as_deref(),
        branding.correo.as_deref(),
    ]
    .iter()
    .flatten()
    .filter(|s| !s.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" | ");

    if contacto.is_empty() {
        format!("\n\n__________________________________\n{firma}")
    } else {
        format!("\n\n__________________________________\n{firma}\n{contacto}")
    }
}

fn tentativa_suffix(grado: ExecutionDegree) -> &'static str {
    match grado {
        ExecutionDegree::Tentativa => " en grado de tentativa (art. 82 CP)",
        ExecutionDegree::Consumado => "",
    }
}

fn victim_clause(caso: &CaseMeta) -> String {
    match caso.victima.as_deref().filter(|v| !v.is_empty()) {
        Some(v) => format!(" en perjuicio de {v}"),
        None => String::new(),
    }
}

fn victim_line(caso: &CaseMeta) -> String {
    match caso.victima.as_deref().filter(|v| !v.is_empty()) {
        Some(v) => format!("Víctima: {v}."),
        None => String::new(),
    }
}

fn body_imputacion(caso: &CaseMeta, branding: &Branding, grado: ExecutionDegree) -> String {
    format!(
        "ASUNTO: IMPUTACIÓN (arts. 280 y 281 CPP)\n\n\
         Comparece quien suscribe, actuando en mi condición de {}, y expone:\n\n\
         I. HECHO PUNIBLE ATRIBUIDO\nSe atribuye al ciudadano {} la comisión del delito de {}{}.\n\n\
         II. CALIFICACIÓN JURÍDICA PROVISIONAL\n{}{}.\n\n\
         III. ELEMENTOS DE CONVICCIÓN RELEVANTES\nSe enumeran sumariamente los elementos recabados en la investigación preliminar.\n\n\
         IV. COMUNICACIÓN DE DERECHOS (art. 281 CPP)\nSe deja constancia de que se informan al imputado sus derechos y garantías.\n\n\
         V. PETICIÓN\nSe tenga por formalizada la imputación y se continúe con el trámite legal correspondiente.\n",
        branding.firma_linea,
        caso.imputado,
        caso.delito,
        victim_clause(caso),
        caso.delito,
        tentativa_suffix(grado),
    )
}

fn body_acusacion(caso: &CaseMeta, branding: &Branding, grado: ExecutionDegree) -> String {
    format!(
        "ESCRITO DE ACUSACIÓN (art. 340 CPP)\n\n\
         Comparece quien suscribe, en mi condición de {}, y solicita:\n\n\
         I. IDENTIFICACIÓN DE LAS PARTES\nImputado: {}. {}\n\n\
         II. RELACIÓN CLARA Y PRECISA DE LOS HECHOS\n{}. Hechos conforme a las diligencias practicadas.\n\n\
         III. CALIFICACIÓN JURÍDICA\n{}{}.\n\n\
         IV. FUNCIÓN Y PARTICIPACIÓN\nSe indica la forma de intervención del imputado.\n\n\
         V. PRUEBAS OFRECIDAS Y SU PERTINENCIA\nListado de pruebas, finalidad y pertinencia.\n\n\
         VI. PETITORIO\nSe solicita apertura a juicio oral y la práctica de los medios de prueba señalados.\n",
        branding.firma_linea,
        caso.imputado,
        victim_line(caso),
        caso.delito,
        caso.delito,
        tentativa_suffix(grado),
    )
}

fn body_acusacion_autonoma(caso: &CaseMeta, branding: &Branding, grado: ExecutionDegree) -> String {
    format!(
        "ACUSACIÓN AUTÓNOMA (art. 340 CPP)\n\n\
         Comparece quien suscribe, actuando como {}, y presenta acusación con los siguientes apartados:\n\n\
         I. PARTES\nImputado: {}. {}\n\n\
         II. HECHOS\nRelación clara y circunstanciada.\n\n\
         III. CALIFICACIÓN\n{}{}.\n\n\
         IV. PRUEBA\nEnumeración de medios probatorios y pertinencia.\n\n\
         V. PETICIÓN\nSe admita la acusación y se fije audiencia conforme a derecho.\n",
        branding.firma_linea,
        caso.imputado,
        victim_line(caso),
        caso.delito,
        tentativa_suffix(grado),
    )
}

fn body_resarcitoria() -> String {
    "ACCIÓN RESARCITORIA\n\n\
     Comparezco en representación de la parte afectada y expongo:\n\n\
     I. HECHOS DAÑOSOS\nNarrativa de los hechos y el daño ocasionado.\n\n\
     II. NEXO CAUSAL Y RESPONSABILIDAD\nVinculación entre la acción y el daño.\n\n\
     III. CUANTIFICACIÓN\nDetalle del quantum reclamado y su sustento.\n\n\
     IV. PRUEBA\nRelación de documentos, peritajes y testigos.\n\n\
     V. PETICIÓN\nSe acoja la pretensión resarcitoria y se condene al pago correspondiente.\n"
        .to_string()
}

fn body_sobreseimiento() -> String {
    "SOLICITUD DE SOBRESEIMIENTO (art. 350 CPP)\n\n\
     Comparece la defensa técnica y solicita:\n\n\
     I. ANTECEDENTES\nSíntesis de la causa y actuaciones relevantes.\n\n\
     II. CAUSAL INVOCADA\nSe fundamenta la causal del art. 350 aplicable (atipicidad, inexistencia de hecho, falta de autoría, prescripción, cosa juzgada, etc.).\n\n\
     III. MOTIVACIÓN\nSe explica la incidencia jurídica y la improcedencia de continuar el proceso.\n\n\
     IV. PETITORIO\nSe decrete el sobreseimiento en favor del imputado.\n"
        .to_string()
}

fn body_solicitudes() -> String {
    "SOLICITUDES VARIAS\n\n\
     Comparece esta parte y solicita lo siguiente:\n\n\
     1) Advertencia de nulidad: se expone el defecto, su trascendencia y oportunidad.\n\
     2) Práctica de actos de investigación: se justifica pertinencia, utilidad y conducencia.\n\
     3) Consideraciones de la defensa/querella: fundamentos y solicitudes concretas.\n\n\
     Se sirva proveer conforme a derecho.\n"
        .to_string()
}

fn body_archivo_mp() -> String {
    "ARCHIVO PROVISIONAL\n\n\
     I. ANTECEDENTES\nSe exponen los elementos recabados y su insuficiencia actual.\n\n\
     II. MOTIVACIÓN\nNo se han reunido elementos de convicción suficientes para sustentar acusación, sin perjuicio de reabrir si surgen nuevos elementos.\n\n\
     III. RESUELVO\nOrdenar el archivo provisional conforme al CPP.\n"
        .to_string()
}

fn body_solicitud_archivo() -> String {
    "SOLICITUD DE ARCHIVO\n\n\
     La defensa técnica expone fundamentos de hecho y derecho que evidencian la improcedencia de continuar con la investigación, solicitando el archivo de las actuaciones.\n\n\
     Fundamentos: insuficiencia de elementos de convicción, principio de intervención mínima, racionalidad investigativa.\n\n\
     Petición: se disponga el archivo y se notifique conforme a derecho.\n"
        .to_string()
}

/// Assemble the full brief: letterhead, body for the requested kind, signature.
pub fn generate_brief(req: &BriefRequest) -> BriefResponse {
    let destino = req.destino.as_deref();
    let enc = letterhead(&req.branding, destino, req.tipo, &req.caso);
    let cuerpo = match req.tipo {
        BriefKind::Imputacion => body_imputacion(&req.caso, &req.branding, req.grado),
        BriefKind::Acusacion => body_acusacion(&req.caso, &req.branding, req.grado),
        BriefKind::AcusacionAutonoma => body_acusacion_autonoma(&req.caso, &req.branding, req.grado),
        BriefKind::AccionResarcitoria => body_resarcitoria(),
        BriefKind::Sobreseimiento => body_sobreseimiento(),
        BriefKind::SolicitudesVarias => body_solicitudes(),
        BriefKind::ArchivoProvisional => body_archivo_mp(),
        BriefKind::SolicitudArchivo => body_solicitud_archivo(),
    };
    BriefResponse {
        tipo: req.tipo,
        texto: format!("{enc}{cuerpo}{}", signature_block(&req.branding)),
    }
}

/// Fixed recommendation rule over (role, procedural stage).
pub fn recommend(rol: Role, estadio: Stage) -> BriefKind {
    match rol {
        Role::Fiscalia => match estadio {
            Stage::Intermedia | Stage::Juicio => BriefKind::Acusacion,
            Stage::Preliminar | Stage::Formal => BriefKind::Imputacion,
        },
        Role::Defensa => match estadio {
            Stage::Preliminar | Stage::Formal => BriefKind::SolicitudesVarias,
            Stage::Intermedia | Stage::Juicio => BriefKind::Sobreseimiento,
        },
        Role::Querella => BriefKind::AccionResarcitoria,
        Role::Juez => BriefKind::SolicitudesVarias,
    }
}
