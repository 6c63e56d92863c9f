//! Constant name normalization.

/// Turn an underscore-separated constant identifier into a camel-cased
/// display name.
///
/// The first segment is lowercased entirely; every following non-empty
/// segment gets an uppercase first character and a lowercase remainder.
/// Empty segments (doubled, leading or trailing underscores) are skipped.
///
/// ```
/// use shock_enums::normalize_constant_name;
///
/// assert_eq!(normalize_constant_name("MAX_RETRY_COUNT"), "maxRetryCount");
/// assert_eq!(normalize_constant_name("OK"), "ok");
/// assert_eq!(normalize_constant_name("A__B"), "aB");
/// ```
#[must_use]
pub fn normalize_constant_name(name: &str) -> String {
    let mut segments = name.split('_');
    let mut result = segments.next().unwrap_or_default().to_lowercase();

    for segment in segments {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        result.extend(first.to_uppercase());
        result.push_str(&chars.as_str().to_lowercase());
    }

    result
}

#[cfg(test)]
#[path = "../tests/naming_tests.rs"]
mod tests;
