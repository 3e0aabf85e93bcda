use thiserror::Error;

/// A conversion failure. Every variant is fatal to the conversion as a
/// whole: the public API folds them into the plain-text fallback.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("tree error: {0}")]
    Dom(#[from] dxl2html_dom::DomError),

    #[error("paragraph references undeclared definition '{0}'")]
    UnresolvedParDef(String),

    #[error("paragraph carries no definition reference")]
    MissingParDefRef,

    #[error("section title not found at the expected position")]
    MalformedSection,
}
