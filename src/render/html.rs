//! Styled-markup materialization of a page description
//!
//! Produces the self-contained HTML document the rasterizer loads: one
//! fixed A4 page, local font stack (no network fetches while the engine
//! settles), photo embedded as a `data:` URI, all user text escaped.

use crate::template::{ContactKind, ContactLine, JobBlock, PageDescription, Photo, Section};
use base64::Engine;
use std::fmt::Write;

const PHONE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="currentColor" viewBox="0 0 16 16"><path fill-rule="evenodd" d="M1.885.511a1.745 1.745 0 0 1 2.61.163L6.29 2.98c.329.423.445.974.28 1.465l-2.135 2.136a11.942 11.942 0 0 0 6.014 6.014l2.136-2.135a1.745 1.745 0 0 1 1.465.28l1.77 1.77a1.745 1.745 0 0 1 .163 2.611l-1.034 1.034c-.74.74-1.846 1.065-2.877.702a18.634 18.634 0 0 1-7.01-4.42 18.634 18.634 0 0 1-4.42-7.009c-.362-1.031.003-2.137.703-2.877L1.885.511z"/></svg>"#;

const EMAIL_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" fill="currentColor" viewBox="0 0 16 16"><path d="M.05 3.555A2 2 0 0 1 2 2h12a2 2 0 0 1 1.95 1.555L8 8.414.05 3.555zM0 4.697v7.104l5.803-3.558L0 4.697zM6.761 8.83l-6.57 4.027A2 2 0 0 0 2 14h12a2 2 0 0 0 1.808-1.144l-6.57-4.027L8 9.586l-1.239-.757zm3.436-.586L16 11.801V4.697l-5.803 3.546z"/></svg>"#;

const STYLE: &str = r#"
:root { --bg-color: #FFFFFF; --sidebar-bg: #F8F9FA; --text-color: #212529; --subtle-text: #6C757D; --accent-color: #0D6EFD; --border-color: #DEE2E6; }
html, body { margin: 0; padding: 0; font-family: 'Inter', 'Segoe UI', 'Helvetica Neue', Arial, sans-serif; font-size: 10pt; line-height: 1.6; background-color: #EEE; color: var(--text-color); }
.page { background-color: var(--bg-color); width: 210mm; height: 297mm; box-sizing: border-box; margin: 0 auto; display: flex; }
.sidebar { width: 70mm; background-color: var(--sidebar-bg); padding: 10mm; box-sizing: border-box; }
.main-content { width: 140mm; padding: 10mm; box-sizing: border-box; }
.photo { width: 40mm; height: 40mm; border-radius: 50%; object-fit: cover; margin: 0 auto 8mm auto; display: block; border: 3px solid var(--border-color); }
h1 { font-size: 28pt; font-weight: 700; color: var(--accent-color); margin: 0 0 5px 0; line-height: 1.2; }
h2 { font-size: 14pt; font-weight: 500; margin: 0 0 10mm 0; border-bottom: 1px solid var(--border-color); padding-bottom: 5mm; }
.section-title { font-size: 11pt; font-weight: 700; text-transform: uppercase; letter-spacing: 1px; color: var(--accent-color); margin: 8mm 0 4mm 0; padding-bottom: 2mm; border-bottom: 1px solid var(--border-color); }
.contact-item { display: flex; align-items: center; margin-bottom: 3mm; }
.contact-item svg { margin-right: 3mm; fill: var(--subtle-text); flex-shrink: 0; }
.fact { margin-bottom: 2mm; }
.fact-label { color: var(--subtle-text); display: block; font-size: 9pt; }
ul { list-style: none; padding: 0; margin: 0; }
ul li { padding-left: 5mm; position: relative; margin-bottom: 2mm; }
ul li::before { content: '▪'; position: absolute; left: 0; color: var(--accent-color); }
.job { margin-bottom: 8mm; }
.job-title { font-size: 12pt; font-weight: 700; margin: 0; }
.company-date { color: var(--subtle-text); font-style: italic; margin: 0 0 3mm 0; }
"#;

/// Materialize the page tree as a complete HTML document
pub fn render_page(page: &PageDescription) -> String {
    let mut aside = String::new();
    for section in &page.aside {
        write_section(&mut aside, section);
    }
    let mut main = String::new();
    for section in &page.main {
        write_section(&mut main, section);
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <style>{STYLE}</style>\n</head>\n<body>\n<div class=\"page\">\n\
         <aside class=\"sidebar\">\n{aside}</aside>\n\
         <main class=\"main-content\">\n{main}</main>\n\
         </div>\n</body>\n</html>\n",
        lang = page.language.code(),
    )
}

fn write_section(out: &mut String, section: &Section) {
    match section {
        Section::Photo(photo) => write_photo(out, photo),
        Section::Header { name, job_title } => {
            let _ = writeln!(out, "<h1>{}</h1>", escape(name));
            let _ = writeln!(out, "<h2>{}</h2>", escape(job_title));
        }
        Section::Contacts { title, lines } => {
            write_heading(out, title);
            for line in lines {
                write_contact(out, line);
            }
        }
        Section::Bullets { title, items } => {
            write_heading(out, title);
            write_bullets(out, items);
        }
        Section::Facts { title, lines } => {
            write_heading(out, title);
            for fact in lines {
                let _ = writeln!(
                    out,
                    "<div class=\"fact\"><span class=\"fact-label\">{}</span>{}</div>",
                    escape(&fact.label),
                    escape(&fact.value),
                );
            }
        }
        Section::Experience { title, jobs } => {
            write_heading(out, title);
            for job in jobs {
                write_job(out, job);
            }
        }
        Section::Education {
            title,
            level,
            institutions,
        } => {
            write_heading(out, title);
            let _ = writeln!(out, "<p class=\"job-title\">{}</p>", escape(level));
            let _ = writeln!(out, "<p>{}</p>", soft_break_html(institutions));
        }
        Section::Paragraph { title, lines } => {
            write_heading(out, title);
            let _ = writeln!(out, "<p>{}</p>", soft_break_html(lines));
        }
    }
}

fn write_heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "<h3 class=\"section-title\">{}</h3>", escape(title));
}

fn write_photo(out: &mut String, photo: &Photo) {
    let encoded = base64::engine::general_purpose::STANDARD.encode(&photo.png);
    let _ = writeln!(
        out,
        "<img class=\"photo\" src=\"data:image/png;base64,{encoded}\" alt=\"\">",
    );
}

fn write_contact(out: &mut String, line: &ContactLine) {
    let icon = match line.kind {
        ContactKind::Phone => PHONE_ICON,
        ContactKind::Email => EMAIL_ICON,
    };
    let _ = writeln!(
        out,
        "<div class=\"contact-item\">{icon} <span>{}</span></div>",
        escape(&line.value),
    );
}

fn write_bullets(out: &mut String, items: &[String]) {
    out.push_str("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item));
    }
    out.push_str("</ul>\n");
}

fn write_job(out: &mut String, job: &JobBlock) {
    out.push_str("<div class=\"job\">");
    let _ = write!(out, "<p class=\"job-title\">{}</p>", escape(&job.title));
    let _ = write!(
        out,
        "<p class=\"company-date\">{}</p>",
        escape(&job.company_date),
    );
    if !job.duties.is_empty() {
        write_bullets(out, &job.duties);
    }
    out.push_str("</div>\n");
}

fn soft_break_html(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Minimal HTML escaping for user-supplied text in element content and
/// attribute positions
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
