//! Document-tree adapter
//!
//! Serializes a page description into a word-processor package: a
//! full-width ruled header followed by a borderless two-column table
//! (roughly 35/65) carrying the aside and main content. No external engine
//! is involved; for a well-formed page description this path always
//! succeeds.

use crate::error::{Error, Result};
use crate::template::{ContactLine, Fact, JobBlock, PageDescription, Photo, Section};
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    NumberFormat, Numbering, NumberingId, Paragraph, Pic, Run, RunFonts, SpecialIndentType, Start,
    Table, TableCell, TableRow, WidthType,
};

const FONT: &str = "Inter";
const ACCENT: &str = "0D6EFD";
const MUTED: &str = "6C757D";
const TEXT: &str = "212529";

// Half-point sizes, matching the original template
const NAME_SIZE: usize = 56;
const SUBTITLE_SIZE: usize = 28;
const HEADING_SIZE: usize = 24;
const BODY_SIZE: usize = 20;

// Column grid in twips, ~35/65 of the usable A4 width
const ASIDE_WIDTH: usize = 3370;
const MAIN_WIDTH: usize = 6268;

/// Photo edge in EMU (150 px at 9525 EMU/px)
const PHOTO_EDGE: u32 = 150 * 9525;

const BULLET_NUMBERING: usize = 2;

/// Build the word-processor package for a page description
pub fn build_document(page: &PageDescription) -> Result<Vec<u8>> {
    let mut header: Vec<Paragraph> = Vec::new();
    let mut aside: Vec<Paragraph> = Vec::new();
    let mut main: Vec<Paragraph> = Vec::new();

    for section in &page.aside {
        append_section(&mut aside, section);
    }
    for section in &page.main {
        match section {
            Section::Header { name, job_title } => {
                header.push(
                    Paragraph::new()
                        .add_run(styled(name).bold().size(NAME_SIZE).color(ACCENT)),
                );
                header.push(Paragraph::new().add_run(
                    styled(job_title).size(SUBTITLE_SIZE).color(TEXT).underline("single"),
                ));
            }
            other => append_section(&mut main, other),
        }
    }

    let table = Table::new(vec![TableRow::new(vec![
        column_cell(aside, ASIDE_WIDTH),
        column_cell(main, MAIN_WIDTH),
    ])])
    .set_grid(vec![ASIDE_WIDTH, MAIN_WIDTH])
    .width(ASIDE_WIDTH + MAIN_WIDTH, WidthType::Dxa)
    .clear_all_border();

    let mut docx = Docx::new()
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING).add_level(
                Level::new(
                    0,
                    Start::new(0),
                    NumberFormat::new("bullet"),
                    LevelText::new("•"),
                    LevelJc::new("left"),
                )
                .indent(Some(360), Some(SpecialIndentType::Hanging(320)), None, None),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));
    for paragraph in header {
        docx = docx.add_paragraph(paragraph);
    }
    docx = docx.add_table(table);

    let mut cursor = std::io::Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| Error::DocumentPack {
            reason: e.to_string(),
        })?;
    Ok(cursor.into_inner())
}

fn append_section(out: &mut Vec<Paragraph>, section: &Section) {
    match section {
        Section::Photo(photo) => out.push(photo_paragraph(photo)),
        Section::Header { .. } => unreachable!("header handled by the caller"),
        Section::Contacts { title, lines } => {
            out.push(heading(title));
            for line in lines {
                out.push(contact_paragraph(line));
            }
        }
        Section::Bullets { title, items } => {
            out.push(heading(title));
            for item in items {
                out.push(bullet(item));
            }
        }
        Section::Facts { title, lines } => {
            out.push(heading(title));
            for fact in lines {
                out.push(fact_paragraph(fact));
            }
        }
        Section::Experience { title, jobs } => {
            out.push(heading(title));
            for job in jobs {
                append_job(out, job);
            }
        }
        Section::Education {
            title,
            level,
            institutions,
        } => {
            out.push(heading(title));
            out.push(Paragraph::new().add_run(styled(level).bold().size(HEADING_SIZE).color(TEXT)));
            out.push(soft_paragraph(institutions));
        }
        Section::Paragraph { title, lines } => {
            out.push(heading(title));
            out.push(soft_paragraph(lines));
        }
    }
}

fn append_job(out: &mut Vec<Paragraph>, job: &JobBlock) {
    out.push(Paragraph::new().add_run(styled(&job.title).bold().size(HEADING_SIZE).color(TEXT)));
    out.push(
        Paragraph::new().add_run(styled(&job.company_date).italic().size(BODY_SIZE).color(MUTED)),
    );
    for duty in &job.duties {
        out.push(bullet(duty));
    }
}

/// Base run with the template font applied
fn styled(text: &str) -> Run {
    Run::new().add_text(text).fonts(RunFonts::new().ascii(FONT))
}

/// Upper-cased, accent-colored, ruled section heading
fn heading(title: &str) -> Paragraph {
    Paragraph::new().add_run(
        styled(&title.to_uppercase())
            .bold()
            .size(HEADING_SIZE)
            .color(ACCENT)
            .underline("single"),
    )
}

fn body(text: &str) -> Run {
    styled(text).size(BODY_SIZE).color(TEXT)
}

fn bullet(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(body(text))
        .numbering(NumberingId::new(BULLET_NUMBERING), IndentLevel::new(0))
}

fn contact_paragraph(line: &ContactLine) -> Paragraph {
    Paragraph::new().add_run(body(&format!("{}: {}", line.label, line.value)))
}

fn fact_paragraph(fact: &Fact) -> Paragraph {
    Paragraph::new().add_run(body(&format!("{}: {}", fact.label, fact.value)))
}

/// Single paragraph with line breaks preserved as soft breaks
fn soft_paragraph(lines: &[String]) -> Paragraph {
    let mut run = Run::new().fonts(RunFonts::new().ascii(FONT)).size(BODY_SIZE).color(TEXT);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

fn photo_paragraph(photo: &Photo) -> Paragraph {
    let pic = Pic::new(photo.png.as_slice()).size(PHOTO_EDGE, PHOTO_EDGE);
    Paragraph::new()
        .add_run(Run::new().add_image(pic))
        .align(AlignmentType::Center)
}

fn column_cell(paragraphs: Vec<Paragraph>, width: usize) -> TableCell {
    let mut cell = TableCell::new().width(width, WidthType::Dxa);
    for paragraph in paragraphs {
        cell = cell.add_paragraph(paragraph);
    }
    cell
}
