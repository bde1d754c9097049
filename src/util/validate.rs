//! Client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before any request is sent. A rejected form produces a notification
//! message and never reaches the network, so every check returns the exact
//! text shown to the user.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::{LoginRequest, NewLesson, NewTutorial, NewVocabulary, SignupRequest};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

pub const MISSING_AVATAR: &str = "Please select a profile picture before creating an account";

/// Raw signup form input. `avatar` is the hosted image URL once the upload
/// has finished.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

/// Raw add-vocabulary form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VocabularyForm {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub when_to_say: String,
    pub lesson_no: Option<u32>,
}

/// Minimal email shape check: `local@domain.tld` with no whitespace.
#[must_use]
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// # Errors
///
/// Returns the message to show when the email or password is unusable.
pub fn login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if !is_email(email) {
        return Err("Enter a valid email address");
    }
    check_password(password)?;
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// Returns the message to show for the first invalid field. A missing avatar
/// is reported only once the other fields are valid.
pub fn signup(form: &SignupForm) -> Result<SignupRequest, &'static str> {
    let name = form.name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err("Name must be at least 2 characters");
    }
    let LoginRequest { email, password } = login(&form.email, &form.password)?;
    let avatar = form
        .avatar
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or(MISSING_AVATAR)?;
    Ok(SignupRequest { name: name.to_owned(), email, password, avatar: avatar.to_owned() })
}

fn check_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Parse a positive lesson number from a text input.
#[must_use]
pub fn lesson_number(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// # Errors
///
/// Returns the message to show when the name is blank or the number is not a
/// positive integer.
pub fn lesson(name: &str, number: &str) -> Result<NewLesson, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Lesson name is required");
    }
    let lesson_number = lesson_number(number).ok_or("Lesson number must be a positive number")?;
    Ok(NewLesson { name: name.to_owned(), lesson_number })
}

/// # Errors
///
/// Returns the message to show for the first missing field, or when no
/// submitter email is known.
pub fn vocabulary(form: &VocabularyForm, admin_email: Option<&str>) -> Result<NewVocabulary, &'static str> {
    let word = required(&form.word, "Word is required")?;
    let pronunciation = required(&form.pronunciation, "Pronunciation is required")?;
    let meaning = required(&form.meaning, "Meaning is required")?;
    let when_to_say = required(&form.when_to_say, "When to say is required")?;
    let lesson_no = form.lesson_no.ok_or("Select a lesson")?;
    let admin_email = admin_email
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .ok_or("You must be logged in to add vocabulary")?;
    Ok(NewVocabulary { word, pronunciation, meaning, when_to_say, lesson_no, admin_email: admin_email.to_owned() })
}

/// # Errors
///
/// Returns the message to show when the title is blank or the link is not an
/// `http(s)` URL.
pub fn tutorial(title: &str, link: &str) -> Result<NewTutorial, &'static str> {
    let title = required(title, "Title is required")?;
    let link = link.trim();
    let has_host = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());
    if !has_host {
        return Err("Enter a valid video link");
    }
    Ok(NewTutorial { title, link: link.to_owned() })
}

fn required(value: &str, message: &'static str) -> Result<String, &'static str> {
    let value = value.trim();
    if value.is_empty() { Err(message) } else { Ok(value.to_owned()) }
}
