//! Rendering layer
//!
//! One adapter per output family: the HTML materialization feeds the
//! headless-engine rasterizer (PDF/PNG), the document-tree adapter packs
//! DOCX directly. [`Renderer`] is the request-facing facade.

pub mod docx;
pub mod html;
pub mod raster;

use crate::error::Result;
use crate::model::{OutputFormat, ResumeRecord};
use crate::template;

pub use raster::{RasterFormat, Rasterizer, RasterizerConfig};

/// Output bytes plus the response metadata the request layer needs
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub media_type: &'static str,
    pub filename: &'static str,
}

/// Facade dispatching a render request to the matching adapter.
///
/// Stateless across requests; the rasterizer acquires and releases its own
/// engine instance per call.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    rasterizer: Rasterizer,
}

impl Renderer {
    pub fn new(config: RasterizerConfig) -> Self {
        Self {
            rasterizer: Rasterizer::new(config),
        }
    }

    /// Render a record in the requested format.
    ///
    /// Returns complete output bytes or an error, never a truncated file.
    /// Failures are logged once here, at the request boundary.
    pub async fn render(
        &self,
        record: &ResumeRecord,
        format: OutputFormat,
    ) -> Result<RenderedDocument> {
        let result = self.render_inner(record, format).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, ?format, "render failed");
        }
        result
    }

    async fn render_inner(
        &self,
        record: &ResumeRecord,
        format: OutputFormat,
    ) -> Result<RenderedDocument> {
        let page = template::build_page(record)?;
        let bytes = match format {
            OutputFormat::Pdf => self.rasterizer.rasterize(&page, RasterFormat::Pdf).await?,
            OutputFormat::Png => self.rasterizer.rasterize(&page, RasterFormat::Png).await?,
            OutputFormat::Docx => docx::build_document(&page)?,
        };
        tracing::info!(
            bytes = bytes.len(),
            ?format,
            language = record.language().code(),
            "rendered resume"
        );
        Ok(RenderedDocument {
            bytes,
            media_type: format.media_type(),
            filename: format.filename(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn docx_renders_through_the_facade() {
        let renderer = Renderer::default();
        let doc = renderer
            .render(&ResumeRecord::default(), OutputFormat::Docx)
            .await
            .expect("render docx");
        assert!(!doc.bytes.is_empty());
        assert!(doc.media_type.contains("wordprocessingml"));
        assert_eq!(doc.filename, "resume.docx");
    }

    #[tokio::test]
    async fn bad_photo_surfaces_before_any_adapter_runs() {
        let record = ResumeRecord {
            photo: Some(b"not an image".to_vec()),
            ..Default::default()
        };
        // Docx path: no engine involved, the failure is the photo decode
        let err = Renderer::default()
            .render(&record, OutputFormat::Docx)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AssetDecode { .. }));
    }
}
