// Document composition: sections are concatenated in configured order,
// except that one designated section is spliced in at a fixed absolute
// page position (the printed report wants the transmission sheet between
// the pump-house pages and the storage pages). The splice position is an
// explicit parameter, not renderer knowledge; composition only moves page
// references and never edits page content.

use crate::models::{ComposedDocument, SectionPages};

/// Which section to splice and the absolute 0-based page index to splice
/// it at, regardless of the other sections' page counts.
#[derive(Debug, Clone)]
pub struct SpliceRule {
    pub section: String,
    pub position: usize,
}

pub fn compose(sections: Vec<SectionPages>, splice: &SpliceRule) -> ComposedDocument {
    let mut spliced = Vec::new();
    let mut pages = Vec::new();
    for section in sections {
        if section.section == splice.section {
            spliced.extend(section.pages);
        } else {
            pages.extend(section.pages);
        }
    }
    let at = splice.position.min(pages.len());
    pages.splice(at..at, spliced);
    ComposedDocument { pages }
}
