pub mod extract;
pub mod layout;

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;

/// A parsed Lodestone character page.
pub struct ProfilePage {
    html: Html,
}

impl ProfilePage {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(selector)
    }

    /// First match for `selector`, or a missing-element error naming `css`.
    pub fn first(&self, selector: &Selector, css: &'static str) -> Result<ElementRef<'_>, ParseError> {
        self.html
            .select(selector)
            .next()
            .ok_or(ParseError::MissingElement(css))
    }
}

/// First descendant of `scope` matching `selector`.
pub fn first_in<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    css: &'static str,
) -> Result<ElementRef<'a>, ParseError> {
    scope
        .select(selector)
        .next()
        .ok_or(ParseError::MissingElement(css))
}

/// All text under `el`, whitespace collapsed to single spaces and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
