//! Instruction template for the repurposing call.
//!
//! The parser in `super::parser` depends on the exact tag names below;
//! any change here must change the parser in lockstep.

pub const REPURPOSE_PROMPT: &str = r#"Based on the following article text, please generate three distinct pieces of content:
1. A concise summary of the article (around 100 words).
2. Three engaging tweets, each under 280 characters.
3. A professional LinkedIn post (around 150 words).

Format the output EXACTLY as follows, using the specified separators:

[SUMMARY]
{Your summary here}
[END_SUMMARY]

[TWEETS]
1. {First tweet here}
2. {Second tweet here}
3. {Third tweet here}
[END_TWEETS]

[LINKEDIN]
{Your LinkedIn post here}
[END_LINKEDIN]

---
ARTICLE TEXT:
{article_text}"#;

pub fn build_prompt(article_text: &str) -> String {
    REPURPOSE_PROMPT.replace("{article_text}", article_text)
}
