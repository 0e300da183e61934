use scraper::ElementRef;

use crate::error::ParseError;
use crate::parser::layout::{
    ANCHOR_SEL, BLOCK_BOX_SEL, BLOCK_NAME, BLOCK_NAME_SEL, FREECOMPANY_NAME, FREECOMPANY_NAME_SEL,
};
use crate::parser::{first_in, normalize_ws, text_of, ProfilePage};

pub const NONE: &str = "none";

/// Which profile boxes are on the page. Race, nameday and city-state are always
/// present; Grand Company and Free Company boxes are appended when held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxLayout {
    GrandAndFree,
    FreeOnly,
    GrandOnly,
    Neither,
}

/// Where a company name is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Unheld,
    GrandCompanyName(usize),
    FreeCompanyAnchor(usize),
}

/// layout => (grand company, free company)
const AFFILIATIONS: [(BoxLayout, Source, Source); 4] = [
    (BoxLayout::GrandAndFree, Source::GrandCompanyName(3), Source::FreeCompanyAnchor(4)),
    (BoxLayout::FreeOnly, Source::Unheld, Source::FreeCompanyAnchor(3)),
    (BoxLayout::GrandOnly, Source::GrandCompanyName(3), Source::Unheld),
    (BoxLayout::Neither, Source::Unheld, Source::Unheld),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affiliations {
    pub grand_company: String,
    pub free_company: String,
}

pub fn classify(boxes: &[ElementRef<'_>]) -> BoxLayout {
    match boxes.len() {
        5 => BoxLayout::GrandAndFree,
        4 if is_free_company_box(boxes[3]) => BoxLayout::FreeOnly,
        4 => BoxLayout::GrandOnly,
        _ => BoxLayout::Neither,
    }
}

pub fn extract(page: &ProfilePage) -> Result<Affiliations, ParseError> {
    let boxes: Vec<ElementRef<'_>> = page.select(&BLOCK_BOX_SEL).collect();
    let layout = classify(&boxes);
    let (_, gc, fc) = AFFILIATIONS
        .iter()
        .find(|(l, _, _)| *l == layout)
        .copied()
        .unwrap_or((BoxLayout::Neither, Source::Unheld, Source::Unheld));

    Ok(Affiliations {
        grand_company: read(&boxes, gc)?,
        free_company: read(&boxes, fc)?,
    })
}

fn is_free_company_box(el: ElementRef<'_>) -> bool {
    el.select(&FREECOMPANY_NAME_SEL).next().is_some()
}

fn read(boxes: &[ElementRef<'_>], source: Source) -> Result<String, ParseError> {
    match source {
        Source::Unheld => Ok(NONE.to_string()),
        Source::GrandCompanyName(i) => {
            // "Maelstrom / Storm Captain"
            let name = text_of(first_in(boxes[i], &BLOCK_NAME_SEL, BLOCK_NAME)?);
            Ok(name.split('/').next().unwrap_or_default().trim().to_string())
        }
        Source::FreeCompanyAnchor(i) => {
            let fc = first_in(boxes[i], &FREECOMPANY_NAME_SEL, FREECOMPANY_NAME)?;
            let anchors: Vec<String> = fc.select(&ANCHOR_SEL).map(text_of).collect();
            Ok(normalize_ws(&anchors.join(" ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RACE: &str = r#"<div class="character-block__box"><p class="character-block__name">Hyur<br />Midlander / ♂</p></div>"#;
    const NAMEDAY: &str = r#"<div class="character-block__box"><p class="character-block__birth">1st Sun of the 1st Astral Moon</p></div>"#;
    const CITY: &str = r#"<div class="character-block__box"><p class="character-block__name">Limsa Lominsa</p></div>"#;
    const GC: &str = r#"<div class="character-block__box"><p class="character-block__title">Grand Company</p><p class="character-block__name">Maelstrom / Storm Captain</p></div>"#;

    fn fc(name: &str) -> String {
        format!(
            r#"<div class="character-block__box"><div class="character__freecompany__name"><p>Free Company</p><h4><a href="/lodestone/freecompany/9232238498621161199/">{name}</a></h4></div></div>"#
        )
    }

    fn page(boxes: &[&str]) -> ProfilePage {
        ProfilePage::parse(&format!("<html><body>{}</body></html>", boxes.concat()))
    }

    #[test]
    fn five_boxes_hold_both() {
        let dads = fc("Dad's Army");
        let p = page(&[RACE, NAMEDAY, CITY, GC, dads.as_str()]);
        let a = extract(&p).unwrap();
        assert_eq!(a.grand_company, "Maelstrom");
        assert_eq!(a.free_company, "Dad's Army");
    }

    #[test]
    fn four_boxes_with_free_company() {
        let solo = fc("Solo Venture");
        let p = page(&[RACE, NAMEDAY, CITY, solo.as_str()]);
        let a = extract(&p).unwrap();
        assert_eq!(a.grand_company, NONE);
        assert_eq!(a.free_company, "Solo Venture");
    }

    #[test]
    fn four_boxes_with_grand_company() {
        let p = page(&[RACE, NAMEDAY, CITY, GC]);
        let a = extract(&p).unwrap();
        assert_eq!(a.grand_company, "Maelstrom");
        assert_eq!(a.free_company, NONE);
    }

    #[test]
    fn three_boxes_hold_neither() {
        let p = page(&[RACE, NAMEDAY, CITY]);
        let a = extract(&p).unwrap();
        assert_eq!(a.grand_company, NONE);
        assert_eq!(a.free_company, NONE);
    }

    #[test]
    fn unexpected_box_counts_hold_neither() {
        let p = page(&[RACE, NAMEDAY]);
        let a = extract(&p).unwrap();
        assert_eq!(a.grand_company, NONE);
        assert_eq!(a.free_company, NONE);
    }

    #[test]
    fn fifth_box_without_free_company_is_an_error() {
        let p = page(&[RACE, NAMEDAY, CITY, GC, NAMEDAY]);
        assert!(matches!(extract(&p), Err(ParseError::MissingElement(FREECOMPANY_NAME))));
    }

    #[test]
    fn every_layout_has_a_row() {
        for layout in [BoxLayout::GrandAndFree, BoxLayout::FreeOnly, BoxLayout::GrandOnly, BoxLayout::Neither] {
            assert_eq!(AFFILIATIONS.iter().filter(|(l, _, _)| *l == layout).count(), 1);
        }
    }
}
