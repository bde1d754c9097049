use super::*;

#[test]
fn lesson_vocabulary_path_includes_paging() {
    assert_eq!(lesson_vocabulary_path(3, 2, 1), "/api/vocabularies/lesson/3?page=2&limit=1");
}

#[test]
fn admin_vocabularies_path_without_filter() {
    assert_eq!(admin_vocabularies_path(None), "/admin/vocabularies");
}

#[test]
fn admin_vocabularies_path_with_lesson_filter() {
    assert_eq!(admin_vocabularies_path(Some(4)), "/admin/vocabularies?lessonNo=4");
}

#[test]
fn item_path_appends_id() {
    assert_eq!(item_path(ADMIN_TUTORIALS_PATH, "t9"), "/admin/tutorials/t9");
    assert_eq!(item_path(ADMIN_LESSONS_PATH, "l1"), "/admin/lessons/l1");
}

#[test]
fn user_role_path_formats_expected_path() {
    assert_eq!(user_role_path("u123"), "/admin/users/u123/role");
}

#[test]
fn record_updates_target_the_item_path() {
    assert_eq!(item_path(ADMIN_LESSONS_PATH, "l1"), "/admin/lessons/l1");
    assert_eq!(item_path(ADMIN_VOCABULARIES_PATH, "v7"), "/admin/vocabularies/v7");
    assert_eq!(item_path(ADMIN_TUTORIALS_PATH, "t9"), "/admin/tutorials/t9");
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn updates_fail_cleanly_off_browser() {
    let api = ApiClient::new(crate::config::AppConfig::default());
    let lesson = NewLesson { name: "Greetings".into(), lesson_number: 1 };
    assert_eq!(api.update_lesson("l1", &lesson).await, Err(ApiError::Unavailable));
}
