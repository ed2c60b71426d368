//! Sign-up field rules. Each validator returns the message to show, or `None`.

use std::sync::LazyLock;

use regex::Regex;

const SPECIAL_CHARS: &str = "!@#$%^&*";

static SIGNUP_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+@[a-z0-9]+\.[a-z]{2,3}$")
        .expect("SIGNUP_EMAIL_RE is a valid regex literal")
});

fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Validate a username: 7-19 characters from letters, digits and `!@#$%^&*`,
/// with at least one capital letter, one special character and one digit.
pub fn validate_username(username: &str) -> Option<String> {
    let len = username.chars().count();
    let allowed = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c));
    let has_upper = username.chars().any(|c| c.is_ascii_uppercase());
    let has_special = username.chars().any(is_special);
    let has_digit = username.chars().any(|c| c.is_ascii_digit());

    if !(7..=19).contains(&len) || !allowed || !has_upper || !has_special || !has_digit {
        return Some(
            "Username must contain a capital letter, at least one special character, \
             one number, and be between 7 and 19 characters long."
                .to_string(),
        );
    }
    None
}

/// Validate an email: lowercase `name@domain.tld`, shorter than 50 characters.
pub fn validate_email(email: &str) -> Option<String> {
    if !SIGNUP_EMAIL_RE.is_match(email) || email.len() >= 50 {
        return Some(
            "Email must contain only lowercase letters and digits, look like name@domain.com \
             and be shorter than 50 characters."
                .to_string(),
        );
    }
    None
}

/// Validate a password: 8-10 characters with at least one special character
/// and one digit.
pub fn validate_password(password: &str) -> Option<String> {
    let len = password.chars().count();
    let has_special = password.chars().any(is_special);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(8..=10).contains(&len) || !has_special || !has_digit {
        return Some(
            "Password must be between 8 and 10 characters long, contain at least one special \
             character, and at least one number."
                .to_string(),
        );
    }
    None
}

/// Run the sign-up checks in order and report the first failure.
pub fn validate_signup(username: &str, email: &str, password: &str) -> Option<String> {
    validate_username(username)
        .or_else(|| validate_email(email))
        .or_else(|| validate_password(password))
}
