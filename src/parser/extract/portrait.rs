use crate::error::ParseError;
use crate::parser::layout::{ANCHOR, ANCHOR_SEL, DETAIL_IMAGE, DETAIL_IMAGE_SEL, IMAGE, IMAGE_SEL, SRC_ATTR};
use crate::parser::{first_in, ProfilePage};

/// URL of the full body portrait. The image is regenerated whenever the character
/// logs out, so its Last-Modified header doubles as a last-seen date.
pub fn image_url(page: &ProfilePage) -> Result<String, ParseError> {
    let frame = page.first(&DETAIL_IMAGE_SEL, DETAIL_IMAGE)?;
    let anchor = first_in(frame, &ANCHOR_SEL, ANCHOR)?;
    let img = first_in(anchor, &IMAGE_SEL, IMAGE)?;
    img.value()
        .attr(SRC_ATTR)
        .map(str::to_string)
        .ok_or(ParseError::MissingElement(SRC_ATTR))
}
