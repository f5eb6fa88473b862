use crate::helpers::{ada, validation_message, TestApp};
use member_registry::domain::MemberAPIError;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_created_member(app: &mut TestApp) {
    let created = app.create_member(&ada()).await.unwrap();

    let member = app
        .get_member(&created.id.to_string())
        .await
        .expect("Failed to get member");

    assert_eq!(member, created);
    assert_eq!(member.display_name, "Ada Lovelace");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_not_found_for_unknown_id(app: &mut TestApp) {
    let unknown = uuid::Uuid::new_v4();

    let result = app.get_member(&unknown.to_string()).await;

    assert!(
        matches!(result, Err(MemberAPIError::MemberNotFound(id)) if id == unknown),
        "Expected not found, got {result:?}"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_malformed_id(app: &mut TestApp) {
    let error = app
        .get_member("not-a-uuid")
        .await
        .expect_err("Malformed ID should be rejected");

    assert!(validation_message(error).starts_with("Invalid member ID"));
}
