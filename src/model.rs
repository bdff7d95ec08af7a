//! Resume record model and request enums

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Normalized, language-agnostic resume field model.
///
/// Every text field is optional; an absent field and a blank field are
/// equivalent and render as an omitted or empty output region, never as an
/// error. The record is built fresh per render request and is immutable
/// during rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub full_name: String,
    pub job_title: String,
    pub phone: String,
    pub email: String,
    pub birth_date: String,
    pub location: String,
    /// Marital status code (`single` | `married`); unknown codes render nothing
    pub marital_status: String,
    /// Job blocks separated by a blank line: title, company/date, then duties
    pub work_experience: String,
    /// Education level code (`higher` | `incomplete` | `vocational` | `secondary`)
    pub education_level: String,
    /// Free text; line breaks preserved as soft breaks
    pub education_institutions: String,
    /// Free text; the whole section is omitted when blank
    pub courses: String,
    /// One language per line
    pub languages: String,
    /// One skill per line
    pub skills: String,
    /// UI language code (`ru` | `uz`); unknown codes fail closed to `ru`
    pub language_code: String,
    /// Photo bytes from the upload collaborator; read once during rendering
    #[serde(skip)]
    pub photo: Option<Vec<u8>>,
}

impl ResumeRecord {
    /// Build a record from the flat field map posted by the request layer
    pub fn from_fields(fields: serde_json::Value) -> Result<Self> {
        serde_json::from_value(fields).map_err(|e| Error::Validation {
            reason: format!("malformed field map: {e}"),
        })
    }

    /// Catalog language for this record, failing closed to Russian
    pub fn language(&self) -> Language {
        Language::from_code(&self.language_code)
    }
}

/// Supported catalog languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    Uz,
}

impl Language {
    /// Parse a language code, failing closed to `Ru` on anything unrecognized
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "uz" => Language::Uz,
            _ => Language::Ru,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Uz => "uz",
        }
    }
}

/// Marital status codes accepted from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    /// `None` for absent or unrecognized codes; those render as empty
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "single" => Some(MaritalStatus::Single),
            "married" => Some(MaritalStatus::Married),
            _ => None,
        }
    }
}

/// Education level codes accepted from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    Higher,
    Incomplete,
    Vocational,
    Secondary,
}

impl EducationLevel {
    /// `None` for absent or unrecognized codes; those render as empty
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "higher" => Some(EducationLevel::Higher),
            "incomplete" => Some(EducationLevel::Incomplete),
            "vocational" => Some(EducationLevel::Vocational),
            "secondary" => Some(EducationLevel::Secondary),
            _ => None,
        }
    }
}

/// Requested output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Png,
    Docx,
}

impl OutputFormat {
    /// Media type for the produced bytes
    pub fn media_type(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Png => "image/png",
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Attachment filename for the produced bytes
    pub fn filename(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "resume.pdf",
            OutputFormat::Png => "resume.png",
            OutputFormat::Docx => "resume.docx",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "png" => Ok(OutputFormat::Png),
            "docx" => Ok(OutputFormat::Docx),
            other => Err(Error::Validation {
                reason: format!("unknown output format: {:?}", other),
            }),
        }
    }
}
