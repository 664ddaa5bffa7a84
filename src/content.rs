pub const OWNER_NAME: &str = "Dwight Thompson";
pub const HEADING: &str = "Hey, I'm Dwight.";

pub const PORTRAIT_SRC: &str = "/Dwight.jpeg";
pub const PORTRAIT_ALT: &str = "Portrait of Dwight Thompson";

pub const EMAIL: &str = "dthomp95@stanford.edu";
pub const GITHUB_URL: &str = "https://github.com/dtlavendar";
pub const GITHUB_ICON: &str = "https://cdn.simpleicons.org/github/ffffff";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/dwight-thompson";
pub const LINKEDIN_ICON: &str = "/icons/linkedin.svg";
pub const RESUME_PATH: &str = "/resume.pdf";
pub const SPOTIFY_URL: &str =
    "https://open.spotify.com/track/1GlR2Y7PTzIOi6fkxtoIm0?si=d525a799c8414a09";
pub const PUZZLE_URL: &str =
    "https://docs.google.com/document/d/11R2INdgvdcnzlnp38QS-67Po1-3LOmFYRrjydljfbNs/edit?usp=sharing";

pub const BIO_INTRO: &str = "I’m a rising sophomore at Stanford passionate about CS Theory, music production, and full-stack software engineering.";
pub const BIO_MUSIC_LEAD: &str = "Feel free to check out my music here: ";
pub const BIO_HOBBIES_LEAD: &str = "In my free time, I like to play music, read manga, and play basketball. I also like making puzzles: ";

pub const FOOTER_HINT: &str = "One more secret on this page...";
pub const FOOTER_FOUND: &str = "Yeah, that was it!";

pub fn footer_message(secret_found: bool) -> &'static str {
    if secret_found {
        FOOTER_FOUND
    } else {
        FOOTER_HINT
    }
}

/// One word of the animated heading with its entrance timing.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingWord {
    pub text: String,
    pub scale: f64,
    pub delay_secs: f64,
    pub letter_spacing_em: f64,
    pub trailing_space: bool,
}

impl HeadingWord {
    pub fn style(&self) -> String {
        format!(
            "--word-scale: {:.2}; --word-delay: {:.2}s; letter-spacing: {}em;",
            self.scale, self.delay_secs, self.letter_spacing_em
        )
    }
}

pub fn heading_words(text: &str) -> Vec<HeadingWord> {
    let words: Vec<&str> = text.split(' ').collect();
    let last = words.len().saturating_sub(1);

    words
        .iter()
        .enumerate()
        .map(|(index, word)| HeadingWord {
            text: (*word).to_string(),
            scale: 1.0 + (index as f64 * 0.03).min(0.12),
            delay_secs: index as f64 * 0.06,
            letter_spacing_em: match index {
                1 => 0.01,
                2 => 0.02,
                _ => 0.0,
            },
            trailing_space: index < last,
        })
        .collect()
}

/// Entrance stagger for the n-th skill card, capped so late cards don't lag.
pub fn skill_card_delay_secs(index: usize) -> f64 {
    (index as f64 * 0.03).min(0.3)
}
