use crate::error::ParseError;
use crate::model::{JobLevels, JobSlot};
use crate::parser::layout::{CONTENT, CONTENT_SEL, JOB_CONTENT_INDEX, JOB_LEVEL_SEL};
use crate::parser::{text_of, ProfilePage};

/// Raw level tokens from the class/job tab, in display order.
pub fn tokens(page: &ProfilePage) -> Result<Vec<String>, ParseError> {
    let tab = page
        .select(&CONTENT_SEL)
        .nth(JOB_CONTENT_INDEX)
        .ok_or(ParseError::MissingElement(CONTENT))?;
    Ok(tab.select(&JOB_LEVEL_SEL).map(text_of).collect())
}

/// Map display-ordered tokens onto [`JobSlot::ROSTER`]. `-` marks a job that has not
/// been unlocked.
pub fn map_levels(tokens: &[String]) -> Result<JobLevels, ParseError> {
    let expected = JobSlot::ROSTER.len();
    if tokens.len() > expected {
        return Err(ParseError::TooManyJobs { found: tokens.len(), expected });
    }
    if tokens.len() < JobSlot::MANDATORY {
        return Err(ParseError::TooFewJobs {
            found: tokens.len(),
            expected: JobSlot::MANDATORY,
        });
    }

    JobSlot::ROSTER
        .iter()
        .zip(tokens)
        .map(|(slot, token)| parse_level(token).map(|level| (*slot, level)))
        .collect()
}

pub fn extract(page: &ProfilePage) -> Result<JobLevels, ParseError> {
    map_levels(&tokens(page)?)
}

fn parse_level(token: &str) -> Result<u32, ParseError> {
    match token.trim() {
        "-" => Ok(0),
        t => t.parse().map_err(|_| ParseError::InvalidLevel(token.to_string())),
    }
}
