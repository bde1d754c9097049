use super::*;

fn signup_form() -> SignupForm {
    SignupForm {
        name: "Hana".to_owned(),
        email: "hana@example.com".to_owned(),
        password: "secret1".to_owned(),
        avatar: Some("https://i.ibb.co/abc/hana.png".to_owned()),
    }
}

// =============================================================================
// is_email
// =============================================================================

#[test]
fn is_email_accepts_common_shapes() {
    assert!(is_email("a@b.co"));
    assert!(is_email("first.last+tag@mail.example.org"));
}

#[test]
fn is_email_rejects_malformed() {
    assert!(!is_email("plain"));
    assert!(!is_email("@example.com"));
    assert!(!is_email("a@b"));
    assert!(!is_email("a@.com"));
    assert!(!is_email("a b@example.com"));
    assert!(!is_email("a@b@example.com"));
}

// =============================================================================
// login
// =============================================================================

#[test]
fn login_trims_email_and_keeps_password() {
    let req = login("  hana@example.com ", " pass word").unwrap();
    assert_eq!(req.email, "hana@example.com");
    assert_eq!(req.password, " pass word");
}

#[test]
fn login_reports_first_problem() {
    assert_eq!(login("", "secret1"), Err("Email is required"));
    assert_eq!(login("nope", "secret1"), Err("Enter a valid email address"));
    assert_eq!(login("a@b.co", ""), Err("Password is required"));
    assert_eq!(login("a@b.co", "12345"), Err("Password must be at least 6 characters"));
}

// =============================================================================
// signup
// =============================================================================

#[test]
fn signup_builds_request_with_avatar() {
    let req = signup(&signup_form()).unwrap();
    assert_eq!(req.name, "Hana");
    assert_eq!(req.avatar, "https://i.ibb.co/abc/hana.png");
}

#[test]
fn signup_without_avatar_is_rejected() {
    let form = SignupForm { avatar: None, ..signup_form() };
    assert_eq!(signup(&form), Err(MISSING_AVATAR));

    let blank = SignupForm { avatar: Some("  ".to_owned()), ..signup_form() };
    assert_eq!(signup(&blank), Err(MISSING_AVATAR));
}

#[test]
fn signup_checks_fields_before_avatar() {
    let form = SignupForm { name: "H".to_owned(), avatar: None, ..signup_form() };
    assert_eq!(signup(&form), Err("Name must be at least 2 characters"));
}

// =============================================================================
// admin forms
// =============================================================================

#[test]
fn lesson_number_requires_positive_integer() {
    assert_eq!(lesson_number("3"), Some(3));
    assert_eq!(lesson_number(" 12 "), Some(12));
    assert_eq!(lesson_number("0"), None);
    assert_eq!(lesson_number("-1"), None);
    assert_eq!(lesson_number("two"), None);
}

#[test]
fn lesson_requires_name_and_number() {
    assert_eq!(lesson("", "1"), Err("Lesson name is required"));
    assert_eq!(lesson("Greetings", "0"), Err("Lesson number must be a positive number"));
    let ok = lesson(" Greetings ", "1").unwrap();
    assert_eq!(ok.name, "Greetings");
    assert_eq!(ok.lesson_number, 1);
}

#[test]
fn vocabulary_requires_every_field_and_submitter() {
    let form = VocabularyForm {
        word: "こんにちは".to_owned(),
        pronunciation: "konnichiwa".to_owned(),
        meaning: "hello".to_owned(),
        when_to_say: "daytime greeting".to_owned(),
        lesson_no: Some(1),
    };
    let ok = vocabulary(&form, Some("admin@example.com")).unwrap();
    assert_eq!(ok.admin_email, "admin@example.com");
    assert_eq!(ok.lesson_no, 1);

    assert_eq!(vocabulary(&form, None), Err("You must be logged in to add vocabulary"));
    let no_lesson = VocabularyForm { lesson_no: None, ..form.clone() };
    assert_eq!(vocabulary(&no_lesson, Some("admin@example.com")), Err("Select a lesson"));
    let no_meaning = VocabularyForm { meaning: " ".to_owned(), ..form };
    assert_eq!(vocabulary(&no_meaning, Some("admin@example.com")), Err("Meaning is required"));
}

#[test]
fn tutorial_requires_http_link() {
    assert!(tutorial("Intro", "https://www.youtube.com/watch?v=abc").is_ok());
    assert_eq!(tutorial("", "https://x.io"), Err("Title is required"));
    assert_eq!(tutorial("Intro", "ftp://x.io"), Err("Enter a valid video link"));
    assert_eq!(tutorial("Intro", "https://"), Err("Enter a valid video link"));
}
