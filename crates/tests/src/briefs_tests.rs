use pretty_assertions::assert_eq;
use server::documents::{generate_brief, recommend};
use shared_types::{
    Branding, BriefKind, BriefRequest, CaseMeta, Entity, ExecutionDegree, Role, Stage,
};

fn branding(entidad: Entity) -> Branding {
    Branding {
        entidad,
        nombre_entidad: "Fiscalía Metropolitana".to_string(),
        firma_nombre: "María Gómez".to_string(),
        firma_linea: "Fiscal de Circuito".to_string(),
        domicilio: None,
        telefono: None,
        correo: None,
    }
}

fn caso() -> CaseMeta {
    CaseMeta {
        circuito: "Primer Circuito".to_string(),
        provincia: "Panamá".to_string(),
        juzgado: None,
        numero_causa: "2025-004567".to_string(),
        noticia_criminal: None,
        delito: "Estafa".to_string(),
        imputado: "Carlos Ruiz".to_string(),
        victima: Some("Ana López".to_string()),
        fecha: "20/08/2025".to_string(),
    }
}

fn request(tipo: BriefKind, entidad: Entity) -> BriefRequest {
    BriefRequest {
        tipo,
        caso: caso(),
        branding: branding(entidad),
        destino: Some("Juzgado de Garantías del Primer Circuito".to_string()),
        grado: ExecutionDegree::Consumado,
    }
}

#[test]
fn mp_letterhead_carries_the_republic_caption() {
    let texto = generate_brief(&request(BriefKind::Imputacion, Entity::MinisterioPublico)).texto;

    assert!(texto.starts_with(
        "República de Panamá – Ministerio Público\nFiscalía Metropolitana\nPanamá, 20/08/2025"
    ));
    assert!(texto.contains("Dirigido a: Juzgado de Garantías del Primer Circuito"));
}

#[test]
fn private_office_letterhead_uses_despacho_prefix() {
    let texto = generate_brief(&request(BriefKind::SolicitudesVarias, Entity::DespachoPrivado)).texto;

    assert!(texto.starts_with("Despacho Fiscalía Metropolitana\nPanamá, 20/08/2025"));
    // Signature block repeats the office name with the same prefix.
    assert!(texto.contains("\nDespacho Fiscalía Metropolitana"));
}

#[test]
fn mp_archive_order_has_no_addressee() {
    let texto = generate_brief(&request(BriefKind::ArchivoProvisional, Entity::MinisterioPublico)).texto;

    assert!(!texto.contains("Dirigido a:"));
    assert!(texto.contains("ARCHIVO PROVISIONAL"));
    assert!(texto.contains("III. RESUELVO"));
}

#[test]
fn imputacion_names_the_accused_and_the_victim() {
    let texto = generate_brief(&request(BriefKind::Imputacion, Entity::MinisterioPublico)).texto;

    assert!(texto.contains("ASUNTO: IMPUTACIÓN (arts. 280 y 281 CPP)"));
    assert!(texto.contains(
        "Se atribuye al ciudadano Carlos Ruiz la comisión del delito de Estafa en perjuicio de Ana López."
    ));
    assert!(texto.contains("actuando en mi condición de Fiscal de Circuito"));
}

#[test]
fn tentativa_degree_annotates_the_qualification() {
    let mut req = request(BriefKind::Acusacion, Entity::MinisterioPublico);
    req.grado = ExecutionDegree::Tentativa;

    let texto = generate_brief(&req).texto;

    assert!(texto.contains("III. CALIFICACIÓN JURÍDICA\nEstafa en grado de tentativa (art. 82 CP)."));
}

#[test]
fn missing_victim_drops_the_clause() {
    let mut req = request(BriefKind::Imputacion, Entity::MinisterioPublico);
    req.caso.victima = None;

    let texto = generate_brief(&req).texto;

    assert!(texto.contains("la comisión del delito de Estafa.\n"));
    assert!(!texto.contains("en perjuicio de"));
}

#[test]
fn signature_block_joins_contact_data_with_pipes() {
    let mut req = request(BriefKind::Sobreseimiento, Entity::DefensaPublica);
    req.branding.domicilio = Some("Calle 50".to_string());
    req.branding.correo = Some("defensa@example.pa".to_string());

    let texto = generate_brief(&req).texto;

    assert!(texto.contains("__________________________________\nMaría Gómez\nFiscal de Circuito"));
    assert!(texto.ends_with("Calle 50 | defensa@example.pa"));
}

#[test]
fn every_kind_renders_with_its_heading() {
    let headings = [
        (BriefKind::Imputacion, "ASUNTO: IMPUTACIÓN"),
        (BriefKind::Acusacion, "ESCRITO DE ACUSACIÓN (art. 340 CPP)"),
        (BriefKind::AcusacionAutonoma, "ACUSACIÓN AUTÓNOMA (art. 340 CPP)"),
        (BriefKind::AccionResarcitoria, "ACCIÓN RESARCITORIA"),
        (BriefKind::Sobreseimiento, "SOLICITUD DE SOBRESEIMIENTO (art. 350 CPP)"),
        (BriefKind::SolicitudesVarias, "SOLICITUDES VARIAS"),
        (BriefKind::ArchivoProvisional, "ARCHIVO PROVISIONAL"),
        (BriefKind::SolicitudArchivo, "SOLICITUD DE ARCHIVO"),
    ];

    for (tipo, heading) in headings {
        let result = generate_brief(&request(tipo, Entity::DefensaPublica));
        assert_eq!(result.tipo, tipo);
        assert!(
            result.texto.contains(heading),
            "missing heading for {tipo:?}"
        );
    }
}

#[test]
fn recommendation_follows_role_and_stage() {
    assert_eq!(recommend(Role::Fiscalia, Stage::Preliminar), BriefKind::Imputacion);
    assert_eq!(recommend(Role::Fiscalia, Stage::Intermedia), BriefKind::Acusacion);
    assert_eq!(recommend(Role::Fiscalia, Stage::Juicio), BriefKind::Acusacion);
    assert_eq!(recommend(Role::Defensa, Stage::Formal), BriefKind::SolicitudesVarias);
    assert_eq!(recommend(Role::Defensa, Stage::Juicio), BriefKind::Sobreseimiento);
    assert_eq!(recommend(Role::Querella, Stage::Preliminar), BriefKind::AccionResarcitoria);
    assert_eq!(recommend(Role::Juez, Stage::Juicio), BriefKind::SolicitudesVarias);
}
