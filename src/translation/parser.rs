//! Parser for the translate endpoint's nested-array text responses.
//!
//! A response looks like `[[["Hola","Hello",,,1]],,"en"]`: translated and
//! original phrases alternate inside bracketed groups, and the metadata
//! section starts at the `,,"<source code>"` marker. The body is handled as
//! text, in stages:
//!
//! 1. [`detect_shape`] locates the marker
//! 2. [`strip_brackets`] flattens the phrase section
//! 3. [`split_fragments`] splits it on quotes
//! 4. [`collect_phrases`] keeps every translated phrase
//!
//! and [`fix_up`] removes the tokenizer's stray spaces before punctuation.

/// Punctuation that must follow the preceding word without a space.
const TIGHT_PUNCTUATION: [char; 5] = ['?', '!', ',', '.', ';'];

/// The two response layouts the endpoint produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape<'a> {
    /// No metadata marker; the translation is the first quoted string.
    SingleToken,
    /// Phrase pairs found before (or, if nothing precedes it, after) the marker.
    MultiPhrase(&'a str),
}

/// Classifies a response body by searching for the `,,"<code>"` marker.
pub fn detect_shape<'a>(body: &'a str, source_code: &str) -> ResponseShape<'a> {
    let marker = format!(",,\"{source_code}\"");

    let Some(index) = body.find(&marker) else {
        return ResponseShape::SingleToken;
    };

    let before = &body[..index];
    let after = &body[index + marker.len()..];

    if before.contains('"') {
        ResponseShape::MultiPhrase(before)
    } else {
        ResponseShape::MultiPhrase(after)
    }
}

/// Returns the text between the first two double quotes, or `""`.
pub fn first_quoted(body: &str) -> &str {
    let mut parts = body.splitn(3, '"').skip(1);

    match (parts.next(), parts.next()) {
        (Some(quoted), Some(_)) => quoted,
        _ => "",
    }
}

/// Flattens a phrase section into quote-delimited fragments.
///
/// Group separators become plain commas, brackets disappear, and the `","`
/// joining a translated phrase to its original collapses to a single quote.
pub fn strip_brackets(section: &str) -> String {
    section
        .replace("],[", ",")
        .replace(['[', ']'], "")
        .trim_matches(',')
        .replace("\",\"", "\"")
}

/// Splits flattened text on double quotes, dropping empty fragments.
pub fn split_fragments(flattened: &str) -> Vec<&str> {
    flattened.split('"').filter(|f| !f.is_empty()).collect()
}

/// Walks translated/original fragment pairs and joins the translated ones.
///
/// A fragment starting with `,,` stands where a translated phrase was empty;
/// the walk advances past it by one instead of two to stay aligned.
pub fn collect_phrases(fragments: &[&str]) -> String {
    let mut translation = String::new();
    let mut index = 0;

    while let Some(fragment) = fragments.get(index) {
        if fragment.starts_with(",,") {
            index += 1;
            continue;
        }

        translation.push_str(fragment);
        translation.push_str("  ");
        index += 2;
    }

    translation
}

/// Trims the text and removes spaces in front of `? ! , . ;`.
///
/// Idempotent: `fix_up(&fix_up(s)) == fix_up(s)`.
pub fn fix_up(text: &str) -> String {
    let mut fixed = String::with_capacity(text.len());

    for c in text.trim().chars() {
        if TIGHT_PUNCTUATION.contains(&c) {
            let kept = fixed.trim_end_matches(' ').len();
            fixed.truncate(kept);
        }
        fixed.push(c);
    }

    fixed
}

/// Extracts the translated text from a raw response body.
///
/// Returns an empty string when the body holds nothing translatable.
pub fn parse_translation(body: &str, source_code: &str) -> String {
    let raw = match detect_shape(body, source_code) {
        ResponseShape::SingleToken => first_quoted(body).to_string(),
        ResponseShape::MultiPhrase(section) => {
            let flattened = strip_brackets(section);
            collect_phrases(&split_fragments(&flattened))
        }
    };

    fix_up(&raw)
}
