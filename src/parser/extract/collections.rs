use std::collections::BTreeSet;

use scraper::Selector;

use crate::parser::layout::{ITEM_SEL, ITEM_TOOLTIP_SEL, MINIONS_SEL, MOUNTS_SEL, TOOLTIP_ATTR};
use crate::parser::ProfilePage;

pub fn minions(page: &ProfilePage) -> BTreeSet<String> {
    tooltips(page, &MINIONS_SEL)
}

pub fn mounts(page: &ProfilePage) -> BTreeSet<String> {
    tooltips(page, &MOUNTS_SEL)
}

/// Item names from the first `container` on the page. Some profiles omit the
/// section entirely, which reads as an empty collection.
fn tooltips(page: &ProfilePage, container: &Selector) -> BTreeSet<String> {
    let Some(list) = page.select(container).next() else {
        return BTreeSet::new();
    };

    list.select(&ITEM_SEL)
        .filter_map(|li| li.select(&ITEM_TOOLTIP_SEL).next())
        .filter_map(|div| div.value().attr(TOOLTIP_ATTR))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> String {
        format!(r#"<li><div class="character__item_icon" data-tooltip="{name}"><img src="x.png"></div></li>"#)
    }

    #[test]
    fn reads_tooltips_as_a_set() {
        let html = format!(
            r#"<div class="character__minion"><ul>{}{}{}</ul></div>"#,
            item("Wind-up Cursor"),
            item("Beady Eye"),
            item("Wind-up Cursor"),
        );
        let page = ProfilePage::parse(&html);
        let minions = minions(&page);
        assert_eq!(minions.len(), 2);
        assert!(minions.contains("Wind-up Cursor"));
        assert!(minions.contains("Beady Eye"));
        assert!(mounts(&page).is_empty());
    }

    #[test]
    fn absent_section_is_empty() {
        let page = ProfilePage::parse("<html><body><p>nothing here</p></body></html>");
        assert!(minions(&page).is_empty());
        assert!(mounts(&page).is_empty());
    }

    #[test]
    fn items_without_tooltip_are_skipped() {
        let html = format!(
            r#"<div class="character__mounts"><ul><li><div class="character__item_icon"></div></li>{}</ul></div>"#,
            item("Legacy Chocobo"),
        );
        let page = ProfilePage::parse(&html);
        let mounts = mounts(&page);
        assert_eq!(mounts.into_iter().collect::<Vec<_>>(), vec!["Legacy Chocobo".to_string()]);
    }
}
