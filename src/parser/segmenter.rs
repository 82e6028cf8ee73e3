use crate::error::{OutlineError, PathDefect, Result};

pub const DELIMITER: char = '/';

/// Splits slash-delimited leaf paths into their segments.
///
/// Malformed paths are rejected instead of producing nodes with empty
/// labels.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathSegmenter;

impl PathSegmenter {
    pub fn segment<'p>(&self, path: &'p str) -> Result<Vec<&'p str>> {
        segment(path)
    }
}

pub fn segment(path: &str) -> Result<Vec<&str>> {
    if path.is_empty() {
        return Err(OutlineError::invalid_path(path, PathDefect::Empty));
    }
    if path.starts_with(DELIMITER) {
        return Err(OutlineError::invalid_path(path, PathDefect::LeadingDelimiter));
    }
    if path.ends_with(DELIMITER) {
        return Err(OutlineError::invalid_path(path, PathDefect::TrailingDelimiter));
    }

    let segments: Vec<&str> = path.split(DELIMITER).collect();
    for (index, segment) in segments.iter().enumerate() {
        if let Some(reason) = segment_defect(segment, index + 1) {
            return Err(OutlineError::invalid_path(path, reason));
        }
    }

    Ok(segments)
}

/// A segment must render as exactly one visible outline line
fn segment_defect(segment: &str, position: usize) -> Option<PathDefect> {
    if segment.is_empty() {
        Some(PathDefect::EmptySegment { position })
    } else if segment.chars().any(char::is_control) {
        Some(PathDefect::ControlCharacter { position })
    } else if segment.trim().is_empty() {
        Some(PathDefect::BlankSegment { position })
    } else {
        None
    }
}
