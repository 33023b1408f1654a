use regex::RegexBuilder;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    Plain(String),
    Marked(String),
}

/// Splits `text` into plain runs and every case-insensitive, non-overlapping
/// occurrence of `query`. The query is matched literally.
pub fn highlight(text: &str, query: &str) -> Vec<Fragment> {
    let unmarked = || vec![Fragment::Plain(text.to_string())];
    if query.is_empty() {
        return unmarked();
    }
    let Ok(matcher) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return unmarked();
    };
    let mut fragments = Vec::new();
    let mut last_end = 0;
    for found in matcher.find_iter(text) {
        if found.start() > last_end {
            fragments.push(Fragment::Plain(text[last_end..found.start()].to_string()));
        }
        fragments.push(Fragment::Marked(found.as_str().to_string()));
        last_end = found.end();
    }
    if last_end < text.len() {
        fragments.push(Fragment::Plain(text[last_end..].to_string()));
    }
    fragments
}
