//! Navigation tokens carried in inline keyboard callback data
//!
//! Wire format, fields joined by `:`:
//! - `cat:<category>:<page>` browse a category page (pages start at 1)
//! - `play:<id>` play a track
//! - `menu` back to the category list
//!
//! Decoding splits at most `N - 1` times for an `N`-field token and parses the
//! number from the last segment. A category containing `:` would push part of
//! its name into that segment, so such categories are refused at ingestion
//! (see [`check_category`]).

use crate::constants::MAX_CALLBACK_DATA_LEN;
use std::fmt;
use std::str::FromStr;

/// Field delimiter
pub const DELIMITER: char = ':';

const BROWSE_TAG: &str = "cat";
const PLAY_TAG: &str = "play";
const MENU_TAG: &str = "menu";

/// UI state encoded into a button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    /// Show `page` of `category`
    Browse { category: String, page: u32 },
    /// Send the track with this id
    Play { track_id: i64 },
    /// Show the category list
    Categories,
}

/// Callback data that doesn't decode into a [`Nav`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed navigation token: {0:?}")]
pub struct MalformedToken(pub String);

impl Nav {
    pub fn browse(category: impl Into<String>, page: u32) -> Self {
        Nav::Browse {
            category: category.into(),
            page,
        }
    }

    pub fn play(track_id: i64) -> Self {
        Nav::Play { track_id }
    }

    /// Encode into callback data
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Decode callback data
    pub fn decode(data: &str) -> Result<Self, MalformedToken> {
        data.parse()
    }
}

impl fmt::Display for Nav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nav::Browse { category, page } => {
                write!(f, "{BROWSE_TAG}{DELIMITER}{category}{DELIMITER}{page}")
            }
            Nav::Play { track_id } => write!(f, "{PLAY_TAG}{DELIMITER}{track_id}"),
            Nav::Categories => f.write_str(MENU_TAG),
        }
    }
}

impl FromStr for Nav {
    type Err = MalformedToken;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedToken(data.to_string());
        let kind = data.split(DELIMITER).next().unwrap_or_default();

        match kind {
            BROWSE_TAG => {
                let fields: Vec<&str> = data.splitn(3, DELIMITER).collect();
                match fields.as_slice() {
                    [_, category, page] if !category.is_empty() => {
                        let page = parse_positive(page).ok_or_else(malformed)?;
                        let page = u32::try_from(page).map_err(|_| malformed())?;
                        Ok(Nav::browse(*category, page))
                    }
                    _ => Err(malformed()),
                }
            }
            PLAY_TAG => {
                let fields: Vec<&str> = data.splitn(2, DELIMITER).collect();
                match fields.as_slice() {
                    [_, id] => {
                        let id = parse_positive(id).ok_or_else(malformed)?;
                        let track_id = i64::try_from(id).map_err(|_| malformed())?;
                        Ok(Nav::play(track_id))
                    }
                    _ => Err(malformed()),
                }
            }
            MENU_TAG if data == MENU_TAG => Ok(Nav::Categories),
            _ => Err(malformed()),
        }
    }
}

/// Plain decimal digits, greater than zero
fn parse_positive(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u64>().ok().filter(|n| *n > 0)
}

/// Check that a category can be carried in browse tokens
///
/// The category must not contain the delimiter, and its browse token must fit
/// Telegram's callback data limit even at the largest page number.
pub fn check_category(category: &str) -> Result<(), String> {
    if category.contains(DELIMITER) {
        return Err(format!("Category cannot contain '{}'", DELIMITER));
    }
    let longest = Nav::browse(category, u32::MAX).encode();
    if longest.len() > MAX_CALLBACK_DATA_LEN {
        let overflow = longest.len() - MAX_CALLBACK_DATA_LEN;
        return Err(format!(
            "Category name is too long ({} bytes over the limit)",
            overflow
        ));
    }
    Ok(())
}
