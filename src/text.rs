/// Collapse whitespace in extracted page text.
///
/// Every line has its whitespace runs squeezed to single spaces and is
/// trimmed; lines left empty are dropped. Text sources that flatten markup
/// leave a lot of ragged indentation and blank lines behind, which would
/// otherwise show up as spurious differences between samples.
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
