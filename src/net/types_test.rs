use super::*;
use serde_json::json;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_known_values() {
    assert_eq!(serde_json::from_value::<Role>(json!("user")).unwrap(), Role::User);
    assert_eq!(serde_json::from_value::<Role>(json!("admin")).unwrap(), Role::Admin);
}

#[test]
fn role_maps_unrecognized_value_to_unknown() {
    assert_eq!(serde_json::from_value::<Role>(json!("moderator")).unwrap(), Role::Unknown);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(RoleUpdate { role: Role::Admin }).unwrap(), json!({ "role": "admin" }));
}

#[test]
fn role_toggle_flips_between_user_and_admin() {
    assert_eq!(Role::User.toggled(), Role::Admin);
    assert_eq!(Role::Admin.toggled(), Role::User);
}

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_reads_mongo_style_id_and_date() {
    let identity: Identity = serde_json::from_value(json!({
        "_id": "65f0",
        "name": "Aiko",
        "email": "aiko@example.com",
        "avatar": "https://img.example/a.png",
        "role": "user",
        "date": "2024-11-02T10:00:00.000Z"
    }))
    .unwrap();
    assert_eq!(identity.id, "65f0");
    assert_eq!(identity.role, Role::User);
    assert_eq!(identity.avatar.as_deref(), Some("https://img.example/a.png"));
    assert_eq!(identity.registered_at.as_deref(), Some("2024-11-02T10:00:00.000Z"));
}

#[test]
fn identity_tolerates_missing_optional_fields() {
    let identity: Identity = serde_json::from_value(json!({
        "id": "u1",
        "name": "Ken",
        "email": "ken@example.com",
        "role": "admin"
    }))
    .unwrap();
    assert_eq!(identity.id, "u1");
    assert!(identity.avatar.is_none());
    assert!(identity.registered_at.is_none());
}

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn auth_response_carries_token_user_and_message() {
    let resp: AuthResponse = serde_json::from_value(json!({
        "token": "t-1",
        "message": "Welcome back",
        "user": { "_id": "u1", "name": "Ken", "email": "ken@example.com", "role": "admin" }
    }))
    .unwrap();
    assert_eq!(resp.token, "t-1");
    assert_eq!(resp.user.role, Role::Admin);
    assert_eq!(resp.message.as_deref(), Some("Welcome back"));
}

#[test]
fn signup_request_serializes_avatar_field() {
    let req = SignupRequest {
        name: "Aiko".into(),
        email: "aiko@example.com".into(),
        password: "secret1".into(),
        avatar: "https://img.example/a.png".into(),
    };
    assert_eq!(
        serde_json::to_value(req).unwrap(),
        json!({
            "name": "Aiko",
            "email": "aiko@example.com",
            "password": "secret1",
            "avatar": "https://img.example/a.png"
        })
    );
}

// =============================================================
// Content payloads
// =============================================================

#[test]
fn vocabulary_page_reads_camel_case_fields() {
    let page: VocabularyPage = serde_json::from_value(json!({
        "lesson": { "_id": "l1", "name": "Greetings", "lessonNumber": 1 },
        "vocabularies": [{
            "_id": "v1",
            "word": "こんにちは",
            "pronunciation": "konnichiwa",
            "meaning": "hello",
            "whenToSay": "daytime greeting",
            "lessonNo": 1
        }],
        "totalPages": 12
    }))
    .unwrap();
    assert_eq!(page.total_pages, 12);
    assert_eq!(page.lesson.vocabulary_count, 0);
    assert_eq!(page.vocabularies[0].when_to_say, "daytime greeting");
}

#[test]
fn new_vocabulary_serializes_camel_case() {
    let value = serde_json::to_value(NewVocabulary {
        word: "ありがとう".into(),
        pronunciation: "arigatou".into(),
        meaning: "thank you".into(),
        when_to_say: "after receiving help".into(),
        lesson_no: 2,
        admin_email: "admin@example.com".into(),
    })
    .unwrap();
    assert_eq!(value["whenToSay"], "after receiving help");
    assert_eq!(value["lessonNo"], 2);
    assert_eq!(value["adminEmail"], "admin@example.com");
}

#[test]
fn dashboard_summary_reads_counts_and_breakdown() {
    let summary: DashboardSummary = serde_json::from_value(json!({
        "totalUsers": 10,
        "totalLessons": 3,
        "totalTutorials": 4,
        "totalVocabulary": 42,
        "recentUsers": [],
        "vocabularyByLesson": [{ "_id": 1, "vocabularyCount": 20 }, { "_id": 2, "vocabularyCount": 22 }]
    }))
    .unwrap();
    assert_eq!(summary.total_vocabulary, 42);
    assert_eq!(
        summary.vocabulary_by_lesson[1],
        LessonVocabularyCount { lesson_number: 2, vocabulary_count: 22 }
    );
}
