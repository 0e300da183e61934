//! Class names the Lodestone profile page is built from. Every structural lookup the
//! extractors make goes through one of these, so a site redesign is a change here.

use std::sync::LazyLock;

use scraper::Selector;

pub const TITLE: &str = "title";
pub const CHARA_WORLD: &str = ".frame__chara__world";
pub const BLOCK_BOX: &str = ".character-block__box";
pub const BLOCK_NAME: &str = ".character-block__name";
pub const FREECOMPANY_NAME: &str = ".character__freecompany__name";
pub const CONTENT: &str = ".character__content";
pub const JOB_LEVEL: &str = ".character__job__level";
pub const MINIONS: &str = ".character__minion";
pub const MOUNTS: &str = ".character__mounts";
pub const ITEM: &str = "li";
pub const ITEM_TOOLTIP: &str = "div[data-tooltip]";
pub const DETAIL_IMAGE: &str = ".character__detail__image";
pub const ANCHOR: &str = "a";
pub const IMAGE: &str = "img";

pub const TOOLTIP_ATTR: &str = "data-tooltip";
pub const SRC_ATTR: &str = "src";

/// Index of the class/job tab among the `.character__content` panes.
pub const JOB_CONTENT_INDEX: usize = 2;

macro_rules! selectors {
    ($($name:ident => $css:expr),* $(,)?) => {
        $(pub static $name: LazyLock<Selector> = LazyLock::new(|| {
            Selector::parse($css).unwrap()
        });)*
    };
}

selectors! {
    TITLE_SEL => TITLE,
    CHARA_WORLD_SEL => CHARA_WORLD,
    BLOCK_BOX_SEL => BLOCK_BOX,
    BLOCK_NAME_SEL => BLOCK_NAME,
    FREECOMPANY_NAME_SEL => FREECOMPANY_NAME,
    CONTENT_SEL => CONTENT,
    JOB_LEVEL_SEL => JOB_LEVEL,
    MINIONS_SEL => MINIONS,
    MOUNTS_SEL => MOUNTS,
    ITEM_SEL => ITEM,
    ITEM_TOOLTIP_SEL => ITEM_TOOLTIP,
    DETAIL_IMAGE_SEL => DETAIL_IMAGE,
    ANCHOR_SEL => ANCHOR,
    IMAGE_SEL => IMAGE,
}
