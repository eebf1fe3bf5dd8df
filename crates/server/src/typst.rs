use std::sync::LazyLock;

use chrono::Datelike;
use ecow::EcoVec;
use shared_types::AppError;
use typst::diag::{FileError, FileResult, SourceDiagnostic};
use typst::foundations::{Bytes, Datetime};
use typst::layout::PagedDocument;
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};

/// Parameters for rendering a calculator report as a branded PDF.
pub struct ReportParams {
    pub title: String,
    pub content_body: String,
    pub studio_name: String,
    pub accent_color: String,
    pub footer_line: String,
    pub document_date: String,
}

/// Escape special Typst characters inside string literals (`\`, `"`, `#`).
pub fn escape_typst(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('#', "\\#")
}

/// Build a complete Typst source by prepending `#let` variable bindings
/// to the generic `report.typ` template.
pub fn build_report_source(params: &ReportParams) -> String {
    let bindings = format!(
        r##"#let title = "{title}"
#let content_body = "{content_body}"
#let studio_name = "{studio_name}"
#let accent_color = "{accent_color}"
#let footer_line = "{footer_line}"
#let document_date = "{document_date}"

"##,
        title = escape_typst(&params.title),
        content_body = escape_typst(&params.content_body),
        studio_name = escape_typst(&params.studio_name),
        accent_color = escape_typst(&params.accent_color),
        footer_line = escape_typst(&params.footer_line),
        document_date = escape_typst(&params.document_date),
    );

    let template = include_str!("../../../templates/report.typ");
    format!("{bindings}{template}")
}

// ---------------------------------------------------------------------------
// Static singletons — initialized once, reused across all requests
// ---------------------------------------------------------------------------

static FONTS: LazyLock<Vec<Font>> = LazyLock::new(|| {
    typst_assets::fonts()
        .flat_map(|data| Font::iter(Bytes::new(data)))
        .collect()
});

static FONT_BOOK: LazyLock<LazyHash<FontBook>> =
    LazyLock::new(|| LazyHash::new(FontBook::from_fonts(FONTS.iter())));

static LIBRARY: LazyLock<LazyHash<Library>> = LazyLock::new(|| LazyHash::new(Library::default()));

// ---------------------------------------------------------------------------
// World implementation for in-process Typst compilation
// ---------------------------------------------------------------------------

struct PenalWorld {
    source: Source,
}

impl PenalWorld {
    fn new(source_text: &str) -> Self {
        Self {
            source: Source::detached(source_text),
        }
    }
}

impl World for PenalWorld {
    fn library(&self) -> &LazyHash<Library> {
        &LIBRARY
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &FONT_BOOK
    }

    fn main(&self) -> FileId {
        self.source.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.source.id() {
            Ok(self.source.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rooted_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rooted_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, offset: Option<i64>) -> Option<Datetime> {
        let now = chrono::Utc::now();
        let naive = if let Some(hours) = offset {
            let tz = chrono::FixedOffset::east_opt((hours as i32) * 3600)?;
            now.with_timezone(&tz).naive_local()
        } else {
            now.naive_utc()
        };
        Datetime::from_ymd(
            naive.year(),
            (naive.month0() + 1) as u8,
            (naive.day0() + 1) as u8,
        )
    }
}

// ---------------------------------------------------------------------------
// Public compilation entry point
// ---------------------------------------------------------------------------

/// Compile a Typst source string into PDF bytes using the in-process library.
///
/// Compilation is offloaded to a blocking thread since it is CPU-bound.
pub async fn compile_typst(source: &str) -> Result<Vec<u8>, AppError> {
    let source = source.to_owned();

    tokio::task::spawn_blocking(move || compile_typst_sync(&source))
        .await
        .map_err(|e| AppError::internal(format!("Typst task panicked: {e}")))?
}

fn compile_typst_sync(source: &str) -> Result<Vec<u8>, AppError> {
    let world = PenalWorld::new(source);

    let warned = typst::compile::<PagedDocument>(&world);
    let document = warned
        .output
        .map_err(|diagnostics| format_diagnostics("Typst compilation failed", &diagnostics))?;

    typst_pdf::pdf(&document, &typst_pdf::PdfOptions::default())
        .map_err(|diagnostics| format_diagnostics("PDF export failed", &diagnostics))
}

fn format_diagnostics(prefix: &str, diagnostics: &EcoVec<SourceDiagnostic>) -> AppError {
    let msgs: Vec<String> = diagnostics.iter().map(|d| d.message.to_string()).collect();
    AppError::internal(format!("{prefix}: {}", msgs.join("; ")))
}
