//! Prompt assembly for the generation gateways.
//!
//! Pure functions: structured request in, one instruction string out. Absent
//! request fields interpolate as empty text; nothing here validates or fails.

use crate::{PostRequest, ThumbnailRequest};

/// Output contract appended to every post prompt so the model answers with
/// the JSON shape the decoder expects.
const OUTPUT_CONTRACT: &str = "\n\nOdpowiedz wyłącznie poprawnym obiektem JSON o polach: \
title, meta, lead, sections (tablica obiektów z polami heading i content), \
summary, cta, tags (tablica). Bez żadnego tekstu poza JSON.";

/// Builds the instruction string for drafting a blog post.
///
/// The topic, keywords, style, length, audience and language are embedded
/// verbatim. Each enabled optional flag appends its directive sentence;
/// disabled flags contribute nothing.
///
/// # Examples
///
/// ```
/// use blogsmith_core::{PostRequest, prompt};
///
/// let request = PostRequest::builder()
///     .topic("Pozycjonowanie lokalne")
///     .keywords("SEO, wizytówka")
///     .summary(true)
///     .build()
///     .unwrap();
///
/// let prompt = prompt::post_prompt(&request);
/// assert!(prompt.contains("Pozycjonowanie lokalne"));
/// assert!(prompt.contains("Dodaj podsumowanie"));
/// ```
pub fn post_prompt(request: &PostRequest) -> String {
    let mut prompt = format!(
        "Napisz artykuł blogowy na temat: {}. Słowa kluczowe: {}. Styl: {}. \
         Długość: {}. Grupa docelowa: {}. Język artykułu: {}.",
        request.topic(),
        request.keywords(),
        request.style(),
        request.length(),
        request.audience(),
        request.language(),
    );

    let directives = [
        (*request.cta(), "Dodaj sekcję z wezwaniem do działania."),
        (*request.meta(), "Dodaj meta description."),
        (
            *request.questions(),
            "Dodaj sekcję najczęściej zadawanych pytań.",
        ),
        (
            *request.summary(),
            "Dodaj podsumowanie na końcu artykułu.",
        ),
        (*request.links(), "Dodaj spis treści z linkami do sekcji."),
    ];
    for (enabled, directive) in directives {
        if enabled {
            prompt.push(' ');
            prompt.push_str(directive);
        }
    }

    prompt.push_str(OUTPUT_CONTRACT);
    prompt
}

/// Builds the instruction string for drafting a post thumbnail.
///
/// Title and keywords are embedded verbatim under a fixed art direction.
pub fn thumbnail_prompt(request: &ThumbnailRequest) -> String {
    format!(
        "Ilustracja na blog: {}. Motywy: {}. \
         Styl: modern, bright, flat design, no text, 16:9.",
        request.title(),
        request.keywords(),
    )
}
