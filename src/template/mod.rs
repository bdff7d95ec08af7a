//! Layout template engine
//!
//! Projects a [`ResumeRecord`] plus its label catalog into a
//! renderer-agnostic [`PageDescription`]: a narrow aside column (photo,
//! contacts, skills, languages, personal info) and a wide main column
//! (header, experience, education, courses). Both the HTML/rasterizer path
//! and the word-processor path consume this tree, which is what guarantees
//! content parity between output kinds.

pub mod grammar;

use crate::error::{Error, Result};
use crate::labels::{self, LabelCatalog};
use crate::model::{Language, ResumeRecord};

pub use grammar::JobBlock;
use grammar::{is_blank, job_blocks, line_items, soft_lines};

/// Renderer-agnostic page layout for one resume
#[derive(Debug, Clone)]
pub struct PageDescription {
    pub language: Language,
    /// Narrow column: photo?, contacts, skills, languages, personal info?
    pub aside: Vec<Section>,
    /// Wide column: header, experience, education, courses?
    pub main: Vec<Section>,
}

/// One section of a page column
#[derive(Debug, Clone)]
pub enum Section {
    /// Inline photo, already re-encoded as PNG
    Photo(Photo),
    /// Name and job title at the top of the main column
    Header { name: String, job_title: String },
    /// Contact lines with an icon kind each
    Contacts { title: String, lines: Vec<ContactLine> },
    /// Bulleted list (skills, languages)
    Bullets { title: String, items: Vec<String> },
    /// Labeled value lines (personal info)
    Facts { title: String, lines: Vec<Fact> },
    /// Parsed work-experience blocks
    Experience { title: String, jobs: Vec<JobBlock> },
    /// Education level heading plus institution lines as soft breaks
    Education {
        title: String,
        level: String,
        institutions: Vec<String>,
    },
    /// Free-text paragraph with soft breaks (courses)
    Paragraph { title: String, lines: Vec<String> },
}

/// Embedded photo bytes. Output artifacts must be self-contained, so the
/// upload is decoded once and carried inline rather than referenced by path.
#[derive(Clone)]
pub struct Photo {
    pub png: Vec<u8>,
}

impl std::fmt::Debug for Photo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Photo").field("png_len", &self.png.len()).finish()
    }
}

/// Icon selector for a contact line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Phone,
    Email,
}

/// One contact line
#[derive(Debug, Clone)]
pub struct ContactLine {
    pub kind: ContactKind,
    pub label: String,
    pub value: String,
}

/// One labeled personal-info line
#[derive(Debug, Clone)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// The personal-info block renders only when at least one of its three
/// lines has something to show. An unrecognized marital code counts as
/// absent because it resolves to an empty label.
pub fn has_personal_info(record: &ResumeRecord, catalog: &LabelCatalog) -> bool {
    !is_blank(&record.birth_date)
        || !is_blank(&record.location)
        || !catalog.marital_status_label(&record.marital_status).is_empty()
}

/// The courses section is omitted entirely when the field is blank
pub fn has_courses(record: &ResumeRecord) -> bool {
    !is_blank(&record.courses)
}

/// Project a record into the renderer-agnostic page tree.
///
/// Pure except for photo decoding; the only failure is `AssetDecode` on an
/// unreadable photo byte stream. Absent fields omit or blank their output
/// region, never fail.
pub fn build_page(record: &ResumeRecord) -> Result<PageDescription> {
    let language = record.language();
    let catalog = labels::catalog(language);

    let mut aside = Vec::new();
    if let Some(bytes) = &record.photo {
        aside.push(Section::Photo(decode_photo(bytes)?));
    }
    aside.push(Section::Contacts {
        title: catalog.contacts.to_string(),
        lines: contact_lines(record, catalog),
    });
    aside.push(Section::Bullets {
        title: catalog.skills.to_string(),
        items: line_items(&record.skills),
    });
    aside.push(Section::Bullets {
        title: catalog.languages.to_string(),
        items: line_items(&record.languages),
    });
    if has_personal_info(record, catalog) {
        aside.push(Section::Facts {
            title: catalog.personal_info.to_string(),
            lines: fact_lines(record, catalog),
        });
    }

    let mut main = vec![Section::Header {
        name: record.full_name.trim().to_string(),
        job_title: record.job_title.trim().to_string(),
    }];
    main.push(Section::Experience {
        title: catalog.experience.to_string(),
        jobs: job_blocks(&record.work_experience),
    });
    main.push(Section::Education {
        title: catalog.education.to_string(),
        level: catalog.education_level_label(&record.education_level).to_string(),
        institutions: soft_lines(&record.education_institutions),
    });
    if has_courses(record) {
        main.push(Section::Paragraph {
            title: catalog.courses.to_string(),
            lines: soft_lines(&record.courses),
        });
    }

    Ok(PageDescription { language, aside, main })
}

fn contact_lines(record: &ResumeRecord, catalog: &LabelCatalog) -> Vec<ContactLine> {
    let mut lines = Vec::new();
    if !is_blank(&record.phone) {
        lines.push(ContactLine {
            kind: ContactKind::Phone,
            label: catalog.phone.to_string(),
            value: record.phone.trim().to_string(),
        });
    }
    if !is_blank(&record.email) {
        lines.push(ContactLine {
            kind: ContactKind::Email,
            label: catalog.email.to_string(),
            value: record.email.trim().to_string(),
        });
    }
    lines
}

fn fact_lines(record: &ResumeRecord, catalog: &LabelCatalog) -> Vec<Fact> {
    let mut lines = Vec::new();
    if !is_blank(&record.birth_date) {
        lines.push(Fact {
            label: catalog.birth_date.to_string(),
            value: record.birth_date.trim().to_string(),
        });
    }
    if !is_blank(&record.location) {
        lines.push(Fact {
            label: catalog.location.to_string(),
            value: record.location.trim().to_string(),
        });
    }
    let marital = catalog.marital_status_label(&record.marital_status);
    if !marital.is_empty() {
        lines.push(Fact {
            label: catalog.marital_status.to_string(),
            value: marital.to_string(),
        });
    }
    lines
}

/// Decode the uploaded photo and re-encode it as PNG so both renderers
/// embed identical self-contained bytes
fn decode_photo(bytes: &[u8]) -> Result<Photo> {
    let decoded = image::load_from_memory(bytes).map_err(|e| Error::AssetDecode {
        reason: e.to_string(),
    })?;
    let mut png = Vec::new();
    decoded
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| Error::AssetDecode { reason: e.to_string() })?;
    Ok(Photo { png })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png() -> Vec<u8> {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(2, 2));
        let mut buf = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn section_title(section: &Section) -> Option<&str> {
        match section {
            Section::Photo(_) | Section::Header { .. } => None,
            Section::Contacts { title, .. }
            | Section::Bullets { title, .. }
            | Section::Facts { title, .. }
            | Section::Experience { title, .. }
            | Section::Education { title, .. }
            | Section::Paragraph { title, .. } => Some(title),
        }
    }

    #[test]
    fn empty_record_builds_fixed_sections_only() {
        let page = build_page(&ResumeRecord::default()).unwrap();
        // No photo, no personal info
        let aside: Vec<_> = page.aside.iter().filter_map(section_title).collect();
        assert_eq!(aside, vec!["Контакты", "Навыки", "Языки"]);
        // Header + experience + education, no courses
        assert_eq!(page.main.len(), 3);
        assert!(matches!(page.main[0], Section::Header { .. }));
        let main: Vec<_> = page.main.iter().filter_map(section_title).collect();
        assert_eq!(main, vec!["Опыт работы", "Образование"]);
    }

    #[test]
    fn personal_info_requires_at_least_one_line() {
        let mut record = ResumeRecord::default();
        let catalog = labels::catalog(Language::Ru);
        assert!(!has_personal_info(&record, catalog));

        // An unrecognized marital code alone is still absent
        record.marital_status = "divorced".to_string();
        assert!(!has_personal_info(&record, catalog));

        record.marital_status = "single".to_string();
        assert!(has_personal_info(&record, catalog));

        let page = build_page(&record).unwrap();
        let facts = page
            .aside
            .iter()
            .find_map(|s| match s {
                Section::Facts { lines, .. } => Some(lines),
                _ => None,
            })
            .expect("personal info section");
        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].value, "Не женат / Не замужем");
    }

    #[test]
    fn courses_section_omitted_when_blank() {
        let mut record = ResumeRecord::default();
        record.courses = "   \n ".to_string();
        let page = build_page(&record).unwrap();
        assert!(!page
            .main
            .iter()
            .any(|s| matches!(s, Section::Paragraph { .. })));

        record.courses = "Advanced Figma, 2023".to_string();
        let page = build_page(&record).unwrap();
        assert!(page
            .main
            .iter()
            .any(|s| matches!(s, Section::Paragraph { .. })));
    }

    #[test]
    fn unrecognized_education_code_yields_empty_heading() {
        let mut record = ResumeRecord::default();
        record.education_level = "unknown_code".to_string();
        let page = build_page(&record).unwrap();
        let level = page
            .main
            .iter()
            .find_map(|s| match s {
                Section::Education { level, .. } => Some(level.as_str()),
                _ => None,
            })
            .unwrap();
        assert_eq!(level, "");
    }

    #[test]
    fn languages_differ_only_in_labels() {
        let mut record = ResumeRecord::default();
        record.full_name = "Anna K.".to_string();
        record.skills = "Figma\nExcel".to_string();
        record.education_level = "higher".to_string();

        record.language_code = "ru".to_string();
        let ru = build_page(&record).unwrap();
        record.language_code = "uz".to_string();
        let uz = build_page(&record).unwrap();

        assert_eq!(ru.aside.len(), uz.aside.len());
        assert_eq!(ru.main.len(), uz.main.len());
        for (a, b) in ru.aside.iter().zip(uz.aside.iter()) {
            if let (Section::Bullets { items: x, .. }, Section::Bullets { items: y, .. }) = (a, b) {
                assert_eq!(x, y);
            }
        }
    }

    #[test]
    fn photo_is_reencoded_as_png() {
        let mut record = ResumeRecord::default();
        record.photo = Some(sample_png());
        let page = build_page(&record).unwrap();
        match &page.aside[0] {
            Section::Photo(photo) => {
                assert_eq!(&photo.png[1..4], b"PNG");
            }
            other => panic!("expected photo first, got {:?}", other),
        }
    }

    #[test]
    fn unreadable_photo_is_an_asset_decode_error() {
        let mut record = ResumeRecord::default();
        record.photo = Some(b"definitely not an image".to_vec());
        match build_page(&record) {
            Err(Error::AssetDecode { .. }) => {}
            other => panic!("expected AssetDecode, got {:?}", other),
        }
    }
}
