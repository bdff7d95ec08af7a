//! Parsing grammars for multi-line resume fields
//!
//! Two grammars cover every multi-line field: blank-line-delimited job
//! blocks for work experience, and one-item-per-line lists for skills and
//! languages. Both renderers consume the parsed form, so the splitting
//! rules live here once.

/// One parsed work-experience block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobBlock {
    /// First line of the block
    pub title: String,
    /// Second line of the block; empty when the block has only one line
    pub company_date: String,
    /// Remaining lines, one bullet each
    pub duties: Vec<String>,
}

/// True when the field is absent for rendering purposes
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Split into lines, tolerating CRLF input
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Blank-line-delimited job block grammar.
///
/// Within a block: line 0 is the job title, line 1 the company/date range,
/// lines 2+ one duty bullet each. A block with fewer than two lines keeps
/// what exists; whitespace-only blocks are dropped.
pub fn job_blocks(text: &str) -> Vec<JobBlock> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    let mut flush = |current: &mut Vec<&str>, blocks: &mut Vec<JobBlock>| {
        if current.is_empty() {
            return;
        }
        blocks.push(JobBlock {
            title: current[0].to_string(),
            company_date: current.get(1).copied().unwrap_or_default().to_string(),
            duties: current[2.min(current.len())..]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        });
        current.clear();
    };

    for line in lines(text) {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut blocks);

    blocks
}

/// One-item-per-line list grammar: blank lines dropped, order preserved
pub fn line_items(text: &str) -> Vec<String> {
    lines(text)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Soft-break grammar: trimmed lines of a single paragraph, with leading
/// and trailing blank lines dropped but interior blanks preserved
pub fn soft_lines(text: &str) -> Vec<String> {
    let mut out: Vec<String> = lines(text).map(|line| line.trim().to_string()).collect();
    while out.first().is_some_and(|line| line.is_empty()) {
        out.remove(0);
    }
    while out.last().is_some_and(|line| line.is_empty()) {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_blocks_split_on_blank_lines() {
        let blocks = job_blocks("A\nB\nbullet1\nbullet2\n\nC\nD");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].title, "A");
        assert_eq!(blocks[0].company_date, "B");
        assert_eq!(blocks[0].duties, vec!["bullet1", "bullet2"]);
        assert_eq!(blocks[1].title, "C");
        assert_eq!(blocks[1].company_date, "D");
        assert!(blocks[1].duties.is_empty());
    }

    #[test]
    fn short_block_keeps_what_exists() {
        let blocks = job_blocks("Only a title");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].title, "Only a title");
        assert_eq!(blocks[0].company_date, "");
        assert!(blocks[0].duties.is_empty());
    }

    #[test]
    fn blank_input_yields_no_blocks() {
        assert!(job_blocks("").is_empty());
        assert!(job_blocks("\n\n   \n").is_empty());
    }

    #[test]
    fn crlf_input_is_normalized() {
        let blocks = job_blocks("A\r\nB\r\n\r\nC\r\nD");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].title, "C");
    }

    #[test]
    fn line_items_drop_blank_lines_and_keep_order() {
        assert_eq!(line_items("Figma\n\nExcel\n"), vec!["Figma", "Excel"]);
        assert_eq!(line_items("  a  \n b\n"), vec!["a", "b"]);
        assert!(line_items("").is_empty());
        assert!(line_items(" \n \n").is_empty());
    }

    #[test]
    fn soft_lines_keep_interior_blanks() {
        assert_eq!(soft_lines("MIT\n\nTUIT\n"), vec!["MIT", "", "TUIT"]);
        assert_eq!(soft_lines("\n\nMIT"), vec!["MIT"]);
        assert!(soft_lines("  \n ").is_empty());
    }
}
