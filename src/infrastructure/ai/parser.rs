//! Parser for the model's tag-delimited reply.
//!
//! The reply format is dictated by `super::prompt::REPURPOSE_PROMPT`; the
//! parser is intentionally rigid and fails the whole parse on any missing
//! or unterminated section.

use thiserror::Error;

/// Content pieces produced from one model reply.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedContent {
    pub summary: String,
    pub tweets: Vec<String>,
    pub linkedin_post: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("start tag '{0}' not found in model reply")]
    MissingSection(&'static str),

    #[error("end tag '{0}' not found in model reply")]
    UnterminatedSection(&'static str),
}

pub fn parse_generated_content(reply: &str) -> Result<GeneratedContent, ParseError> {
    let summary = extract_section(reply, "[SUMMARY]", "[END_SUMMARY]")?;
    let tweets_block = extract_section(reply, "[TWEETS]", "[END_TWEETS]")?;
    let linkedin_post = extract_section(reply, "[LINKEDIN]", "[END_LINKEDIN]")?;

    Ok(GeneratedContent {
        summary: summary.to_string(),
        tweets: split_tweet_lines(tweets_block),
        linkedin_post: linkedin_post.to_string(),
    })
}

/// Everything between the first `start_tag` and the next `end_tag`, trimmed.
fn extract_section<'a>(
    text: &'a str,
    start_tag: &'static str,
    end_tag: &'static str,
) -> Result<&'a str, ParseError> {
    let start = text
        .find(start_tag)
        .ok_or(ParseError::MissingSection(start_tag))?
        + start_tag.len();

    let end = text[start..]
        .find(end_tag)
        .ok_or(ParseError::UnterminatedSection(end_tag))?;

    Ok(text[start..start + end].trim())
}

/// Split the tweets block into one tweet per non-empty line.
///
/// A line whose second byte is `.` carries a single-digit label ("1. ...")
/// and loses its first three bytes. Labels of two or more digits are left
/// alone.
fn split_tweet_lines(block: &str) -> Vec<String> {
    let mut tweets = Vec::new();

    for line in block.split('\n') {
        let mut tweet = line.trim();
        if tweet.len() > 3 && tweet.as_bytes()[1] == b'.' {
            if let Some(rest) = tweet.get(3..) {
                tweet = rest;
            }
        }
        if !tweet.is_empty() {
            tweets.push(tweet.to_string());
        }
    }

    tweets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(summary: &str, tweets: &str, linkedin: &str) -> String {
        format!(
            "[SUMMARY]\n{summary}\n[END_SUMMARY]\n\n[TWEETS]\n{tweets}\n[END_TWEETS]\n\n[LINKEDIN]\n{linkedin}\n[END_LINKEDIN]"
        )
    }

    #[test]
    fn parses_a_well_formed_reply() {
        let content =
            parse_generated_content(&reply("S", "1. A\n2. B\n3. C", "L")).unwrap();

        assert_eq!(content.summary, "S");
        assert_eq!(content.tweets, vec!["A", "B", "C"]);
        assert_eq!(content.linkedin_post, "L");
    }

    #[test]
    fn missing_start_tag_names_the_tag() {
        let input = "[TWEETS]\n1. A\n[END_TWEETS]\n[LINKEDIN]\nL\n[END_LINKEDIN]";

        let err = parse_generated_content(input).unwrap_err();
        assert_eq!(err, ParseError::MissingSection("[SUMMARY]"));
    }

    #[test]
    fn unterminated_section_names_the_end_tag() {
        let input = "[SUMMARY]\nS\n\n[TWEETS]\n1. A\n[END_TWEETS]\n[LINKEDIN]\nL\n[END_LINKEDIN]";

        let err = parse_generated_content(input).unwrap_err();
        assert_eq!(err, ParseError::UnterminatedSection("[END_SUMMARY]"));
    }

    #[test]
    fn blank_lines_between_tweets_are_dropped() {
        let content =
            parse_generated_content(&reply("S", "1. A\n\n2. B\n\n3. C", "L")).unwrap();

        assert_eq!(content.tweets, vec!["A", "B", "C"]);
    }

    #[test]
    fn unnumbered_lines_are_kept_verbatim() {
        let content =
            parse_generated_content(&reply("S", "First tweet\nSecond tweet", "L")).unwrap();

        assert_eq!(content.tweets, vec!["First tweet", "Second tweet"]);
    }

    #[test]
    fn double_digit_labels_are_not_stripped() {
        let content =
            parse_generated_content(&reply("S", "9. Ninth\n10. Tenth", "L")).unwrap();

        assert_eq!(content.tweets, vec!["Ninth", "10. Tenth"]);
    }

    #[test]
    fn sections_are_trimmed_but_otherwise_verbatim() {
        let content = parse_generated_content(&reply(
            "  A summary\nwith two lines  ",
            "1. A",
            "\nDear network,\n\nbig news.\n",
        ))
        .unwrap();

        assert_eq!(content.summary, "A summary\nwith two lines");
        assert_eq!(content.linkedin_post, "Dear network,\n\nbig news.");
    }
}
