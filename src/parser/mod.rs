pub mod detail;
pub mod index;
pub mod segments;

use scraper::{ElementRef, Selector};

/// Compile one of the module's fixed selectors.
fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// Element text with runs of whitespace collapsed to single spaces.
fn text_of(el: ElementRef) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn has_class(el: ElementRef, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}
