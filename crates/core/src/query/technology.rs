//! Technology page lookups.

use crate::error::LookupError;
use crate::model::Technology;

const ENTITY: &str = "Technology";

/// Find a technology by ID.
///
/// # Errors
///
/// [`LookupError::NotFound`] when no technology has this ID.
pub fn find_technology<'a>(
    technologies: &'a [Technology],
    id: &str,
) -> Result<&'a Technology, LookupError> {
    technologies
        .iter()
        .find(|t| t.id.as_str() == id)
        .ok_or_else(|| LookupError::not_found(ENTITY, id))
}

/// Two technologies side by side.
///
/// # Errors
///
/// [`LookupError::NotFound`] naming the first ID that does not resolve.
pub fn compare_technologies<'a>(
    technologies: &'a [Technology],
    first: &str,
    second: &str,
) -> Result<(&'a Technology, &'a Technology), LookupError> {
    Ok((
        find_technology(technologies, first)?,
        find_technology(technologies, second)?,
    ))
}
