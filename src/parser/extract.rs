use crate::config::MODAL_CLASS;
use crate::error::StructureError;

use super::dom::Node;
use super::text::{capitalize_first, split_normalize};

/// Values of the element marked `marker` inside `record`.
pub fn extract_field<N: Node>(
    record: &N,
    marker: &'static str,
    delimiters: &[&str],
) -> Result<Vec<String>, StructureError> {
    let tag = record
        .find_marker(marker)
        .ok_or(StructureError::MissingMarker(marker))?;
    Ok(extract_values(&tag, delimiters))
}

/// Values held by `tag`, preferring the full text of a "show more" modal.
pub fn extract_values<N: Node>(tag: &N, delimiters: &[&str]) -> Vec<String> {
    extract_values_with(tag, delimiters, str::to_string)
}

/// Modal list items win, then the modal's paragraph, then the modal's
/// own text; without a modal the element's text is split directly.
pub fn extract_values_with<N, F>(tag: &N, delimiters: &[&str], transform: F) -> Vec<String>
where
    N: Node,
    F: Fn(&str) -> String,
{
    let Some(modal) = tag.find_class(MODAL_CLASS) else {
        return split_normalize(&tag.text_content(), delimiters, transform);
    };

    let items = modal.find_all_tag("li");
    if !items.is_empty() {
        return items
            .iter()
            .map(|li| capitalize_first(li.text_content().trim().trim_matches(';')))
            .filter(|v| !v.is_empty())
            .collect();
    }

    match modal.find_tag("p") {
        Some(p) => split_normalize(&p.text_content(), delimiters, transform),
        None => split_normalize(&modal.text_content(), delimiters, transform),
    }
}
