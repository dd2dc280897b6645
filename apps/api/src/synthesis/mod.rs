// Content synthesis: resume, cover letter, portfolio profile and portfolio website,
// built from fixed templates around the predicted label.

pub mod documents;
pub mod templates;

pub use documents::{
    build_cover_letter, build_customized_resume, build_portfolio, build_portfolio_website,
    DocumentKind, GeneratedDocument,
};
