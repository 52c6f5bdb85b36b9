//! Normalization of decoded column names.
//!
//! Header long names carry two kinds of annotation: a leading scale marker
//! `(.)` (background files scale those columns by `8πG/3`) and a trailing
//! unit tag in parentheses or square brackets. Short names strip both so
//! they can be used as stable lookup keys; display names keep the
//! annotation, with the scale marker expanded for labelling.

/// Leading scale marker as it appears in background-file headers.
const SCALE_MARKER: &str = "(.)";

/// What the marker stands for, spelled out for plot labels.
const SCALE_MACRO: &str = "(8\\pi G/3)";

/// Given the ordered long names from a header, return the short names and
/// the display names, index-aligned with the input.
pub fn normalize(long_names: &[String]) -> (Vec<String>, Vec<String>) {
    let mut short_names = Vec::with_capacity(long_names.len());
    let mut display_names = Vec::with_capacity(long_names.len());

    // First pass: peel the leading scale marker.
    for name in long_names {
        if let Some(rest) = name.strip_prefix(SCALE_MARKER) {
            short_names.push(rest.to_string());
            display_names.push(format!("{SCALE_MACRO}{rest}"));
        } else {
            short_names.push(name.clone());
            display_names.push(name.clone());
        }
    }

    // Second pass: drop the trailing unit annotation from the short form.
    for name in &mut short_names {
        *name = strip_annotation(name).to_string();
    }

    (short_names, display_names)
}

/// Truncate at the first `(`, else the first `[`, then drop the whitespace
/// that separated name and annotation.
fn strip_annotation(name: &str) -> &str {
    let cut = match name.find('(') {
        Some(i) => &name[..i],
        None => match name.find('[') {
            Some(i) => &name[..i],
            None => name,
        },
    };
    cut.trim_end()
}
