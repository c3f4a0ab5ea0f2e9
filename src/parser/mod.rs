pub mod dom;
pub mod extract;
pub mod record;
pub mod text;

use scraper::Html;
use tracing::{debug, info};

use crate::config::itemprop;
use crate::error::{Error, Result};
use crate::model::Teacher;
use dom::Node;

/// Page HTML → `teachingStaff` fragments → teachers, in document order.
///
/// The first malformed fragment aborts the whole page.
pub fn parse_page(html: &str) -> Result<Vec<Teacher>> {
    let document = Html::parse_document(html);
    let records = document
        .root_element()
        .find_all_marker(itemprop::TEACHING_STAFF);
    info!("Found {} teacher records", records.len());

    records
        .iter()
        .enumerate()
        .map(|(index, fragment)| {
            let teacher = record::parse_record(fragment)
                .map_err(|source| Error::ParseStructure { index, source })?;
            match &teacher.lms_profile_link {
                Some(link) => debug!("#{index} {} ({link})", teacher.initials),
                None => debug!("#{index} {}", teacher.initials),
            }
            Ok(teacher)
        })
        .collect()
}
