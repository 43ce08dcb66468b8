/// Split text on whitespace runs, keeping token order.
///
/// No punctuation stripping or case folding: `"Cat."` and `"cat"` are
/// different words everywhere downstream.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
