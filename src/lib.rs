//! Resume rendering engine
//!
//! Turns a flat, language-agnostic resume field model into a styled A4
//! resume in three output formats:
//! - `pdf` / `png`: an HTML materialization rasterized by a headless
//!   Chromium instance
//! - `docx`: a word-processor document tree built directly
//!
//! Both paths project the record through one renderer-agnostic
//! [`template::PageDescription`], so section presence and text content are
//! identical across output kinds. Labels come from static per-language
//! catalogs (`ru`, `uz`); unknown language codes fail closed to `ru`.

pub mod error;
pub mod labels;
pub mod model;
pub mod render;
pub mod template;

pub use error::{Error, Result};
pub use labels::{catalog, LabelCatalog};
pub use model::{EducationLevel, Language, MaritalStatus, OutputFormat, ResumeRecord};
pub use render::{RasterFormat, Rasterizer, RasterizerConfig, RenderedDocument, Renderer};
pub use template::{build_page, PageDescription};
