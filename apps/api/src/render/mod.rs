// Output encoders for paginated letters.

pub mod pdf;

pub use pdf::{render_pdf, PDF_FILE_NAME, PDF_MIME_TYPE};
