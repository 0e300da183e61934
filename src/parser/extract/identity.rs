use crate::error::ParseError;
use crate::model::Gender;
use crate::parser::layout::{BLOCK_NAME, BLOCK_NAME_SEL, CHARA_WORLD, CHARA_WORLD_SEL, TITLE, TITLE_SEL};
use crate::parser::{text_of, ProfilePage};

/// Character name from "<name> | FINAL FANTASY XIV, The Lodestone".
pub fn name(page: &ProfilePage) -> Result<String, ParseError> {
    let title = text_of(page.first(&TITLE_SEL, TITLE)?);
    Ok(title.split('|').next().unwrap_or_default().trim().to_string())
}

/// World name, rendered as "(Cerberus)".
pub fn realm(page: &ProfilePage) -> Result<String, ParseError> {
    let world = text_of(page.first(&CHARA_WORLD_SEL, CHARA_WORLD)?);
    Ok(world.replace(['(', ')'], "").trim().to_string())
}

/// Race is the leading text node of the race/clan/gender block; the clan and gender
/// follow after a `<br>`.
pub fn race(page: &ProfilePage) -> Result<String, ParseError> {
    let block = page.first(&BLOCK_NAME_SEL, BLOCK_NAME)?;
    let race = block
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .find(|text| !text.is_empty())
        .unwrap_or_default();
    Ok(race.to_string())
}

/// Gender symbol after the "/" in the race/clan/gender block. Profiles that omit or
/// localise the symbol yield `None`.
pub fn gender(page: &ProfilePage) -> Result<Option<Gender>, ParseError> {
    let block = text_of(page.first(&BLOCK_NAME_SEL, BLOCK_NAME)?);
    let gender = match block.split('/').nth(1).map(str::trim) {
        Some("♂") => Some(Gender::Male),
        Some("♀") => Some(Gender::Female),
        _ => None,
    };
    Ok(gender)
}
