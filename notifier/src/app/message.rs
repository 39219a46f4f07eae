//! Message composition
//!
//! Pure functions building the Block Kit body for each event kind from
//! already-resolved display data. Composition never performs I/O and
//! never fails.

use crate::domain::entities::ReviewState;
use crate::domain::ports::{Accessory, Block, Text};

/// Maximum button label length in characters, ellipsis included.
/// Slack rejects plain-text button labels longer than 75 characters.
pub const MAX_BUTTON_LABEL: usize = 75;

const ELLIPSIS: &str = "...";

/// Body for a new review request.
pub fn review_requested(requester_name: &str, title: &str, url: &str) -> Vec<Block> {
    let header = format!(
        "@{} has requested a review on the following Pull Request:",
        requester_name
    );
    compose(header, title, url)
}

/// Body for a submitted review, addressed to the PR owner.
pub fn review_submitted(
    reviewer_name: &str,
    state: ReviewState,
    title: &str,
    url: &str,
) -> Vec<Block> {
    let header = format!("{} {} your PR \"{}\"", reviewer_name, state.verb(), title);
    compose(header, title, url)
}

fn compose(header: String, title: &str, url: &str) -> Vec<Block> {
    vec![
        Block::Section {
            text: Text::Mrkdwn { text: header },
            accessory: None,
        },
        Block::Divider,
        Block::Section {
            text: Text::Mrkdwn {
                text: url.to_string(),
            },
            accessory: Some(Accessory::Button {
                text: Text::PlainText {
                    text: button_label(title),
                },
                url: url.to_string(),
            }),
        },
    ]
}

/// Truncate a PR title to the button label limit, counted in characters so
/// multibyte titles are not split mid-scalar. The ellipsis counts toward
/// the limit.
fn button_label(title: &str) -> String {
    if title.chars().count() <= MAX_BUTTON_LABEL {
        return title.to_string();
    }

    let keep = MAX_BUTTON_LABEL - ELLIPSIS.chars().count();
    let mut label: String = title.chars().take(keep).collect();
    label.push_str(ELLIPSIS);
    label
}
