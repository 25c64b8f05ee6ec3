//! PDF encoding for a paginated letter.
//!
//! Uses the builtin Helvetica font so no font files ship with the service.
//! Coordinates from the paginator are points from the bottom-left corner, which is
//! also the PDF origin; they are converted to millimetres for printpdf.

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};
use tracing::debug;

use crate::errors::AppError;
use crate::layout::PaginatedDocument;

const DOCUMENT_TITLE: &str = "Cover Letter";
const LAYER_NAME: &str = "Text";

/// File name offered to the user for download.
pub const PDF_FILE_NAME: &str = "cover_letter.pdf";
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Encodes every page of `document` into a single PDF byte stream.
pub fn render_pdf(document: &PaginatedDocument, author: &str) -> Result<Vec<u8>, AppError> {
    let geometry = &document.geometry;
    let width = Mm::from(Pt(geometry.width_pt));
    let height = Mm::from(Pt(geometry.height_pt));

    let (doc, first_page, first_layer) = PdfDocument::new(DOCUMENT_TITLE, width, height, LAYER_NAME);
    let doc = doc.with_author(author);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Render(format!("Failed to load Helvetica: {e}")))?;

    for (index, page) in document.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in page.lines.iter().filter(|l| !l.text.is_empty()) {
            layer.use_text(
                line.text.as_str(),
                geometry.font_size_pt,
                Mm::from(Pt(line.x)),
                Mm::from(Pt(line.y)),
                &font,
            );
        }
    }

    let bytes = doc
        .save_to_bytes()
        .map_err(|e| AppError::Render(format!("Failed to encode PDF: {e}")))?;

    debug!(
        "Rendered PDF: pages={}, lines={}, bytes={}",
        document.page_count(),
        document.line_count(),
        bytes.len()
    );
    Ok(bytes)
}
