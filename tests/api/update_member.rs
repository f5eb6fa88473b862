use crate::helpers::{ada, validation_message, TestApp};
use member_registry::{
    domain::MemberAPIError,
    operations::{update_member, UpdateMemberRequest},
};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_update_only_supplied_fields(app: &mut TestApp) {
    let created = app
        .create_member(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "555-0100",
            "balance": "5.00"
        }))
        .await
        .unwrap();
    let member_id = created.id.to_string();

    let updated = app
        .update_member(
            &member_id,
            &json!({ "lastName": "King", "balance": "-12.5" }),
        )
        .await
        .expect("Failed to update member");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.first_name, "Ada");
    assert_eq!(updated.last_name, "King");
    assert_eq!(updated.email, "ada@example.com");
    assert_eq!(updated.phone_number.as_deref(), Some("555-0100"));
    assert_eq!(updated.balance, "-12.50");
    assert_eq!(updated.display_name, "Ada King");

    assert_eq!(app.get_member(&member_id).await.unwrap(), updated);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_clear_phone_number(app: &mut TestApp) {
    let created = app
        .create_member(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phoneNumber": "555-0100"
        }))
        .await
        .unwrap();
    let member_id = created.id.to_string();

    let unchanged = app
        .update_member(&member_id, &json!({}))
        .await
        .unwrap();
    assert_eq!(unchanged, created);

    for clear in [json!({ "phoneNumber": null }), json!({ "phoneNumber": "" })]
    {
        let updated = app.update_member(&member_id, &clear).await.unwrap();
        assert_eq!(updated.phone_number, None, "Failed for input: {clear}");
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_allow_keeping_own_email(app: &mut TestApp) {
    let created = app.create_member(&ada()).await.unwrap();

    let updated = app
        .update_member(
            &created.id.to_string(),
            &json!({ "email": "ada@example.com", "firstName": "Augusta" }),
        )
        .await
        .expect("Re-submitting the current email should succeed");

    assert_eq!(updated.display_name, "Augusta Lovelace");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_duplicate_email(app: &mut TestApp) {
    app.create_member(&ada()).await.unwrap();
    let charles = app
        .create_member(&json!({
            "firstName": "Charles",
            "lastName": "Babbage",
            "email": "charles@example.com"
        }))
        .await
        .unwrap();

    let result = app
        .update_member(
            &charles.id.to_string(),
            &json!({ "email": "ada@example.com" }),
        )
        .await;

    assert!(
        matches!(
            result,
            Err(MemberAPIError::EmailAlreadyExists(ref email)) if email == "ada@example.com"
        ),
        "Expected uniqueness violation, got {result:?}"
    );
    assert_eq!(
        app.get_member(&charles.id.to_string()).await.unwrap(),
        charles,
        "Rejected update should not change the member"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_invalid_changes(app: &mut TestApp) {
    let created = app.create_member(&ada()).await.unwrap();
    let member_id = created.id.to_string();

    let test_cases = [
        (json!({ "firstName": "" }), "First name cannot be empty"),
        (
            json!({ "lastName": "a".repeat(101) }),
            "Last name may be at most 100 characters",
        ),
        (
            json!({ "email": "not-an-email" }),
            "Invalid email address: not-an-email",
        ),
        (
            json!({ "balance": "0.001" }),
            "Ensure that there are no more than 2 decimal places",
        ),
    ];

    for (test_case, expected) in test_cases.iter() {
        let error = app
            .update_member(&member_id, test_case)
            .await
            .expect_err("Invalid change should be rejected");
        assert_eq!(
            validation_message(error),
            *expected,
            "Failed for input: {:?}",
            test_case
        );
    }

    assert_eq!(app.get_member(&member_id).await.unwrap(), created);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_not_found_for_unknown_id(app: &mut TestApp) {
    let unknown = uuid::Uuid::new_v4();

    let result = app
        .update_member(&unknown.to_string(), &json!({ "firstName": "Ada" }))
        .await;

    assert!(
        matches!(result, Err(MemberAPIError::MemberNotFound(id)) if id == unknown),
        "Expected not found, got {result:?}"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_allow_only_one_concurrent_claim_of_an_email(app: &mut TestApp) {
    let mut member_ids = Vec::new();
    for i in 0..4 {
        let member = app
            .create_member(&json!({
                "firstName": "Member",
                "lastName": i.to_string(),
                "email": format!("member{i}@example.com")
            }))
            .await
            .unwrap();
        member_ids.push(member.id.to_string());
    }

    let handles: Vec<_> = member_ids
        .into_iter()
        .map(|member_id| {
            let state = app.state.clone();
            let request = UpdateMemberRequest {
                email: Some("claimed@example.com".to_string()),
                ..Default::default()
            };
            tokio::spawn(async move {
                update_member(&state, &member_id, request).await
            })
        })
        .collect();

    let mut updated = 0;
    for handle in handles {
        match handle.await.expect("Task panicked") {
            Ok(_) => updated += 1,
            Err(MemberAPIError::EmailAlreadyExists(_)) => (),
            Err(e) => panic!("Unexpected error: {e:?}"),
        }
    }

    assert_eq!(updated, 1, "Exactly one update should claim the email");
}
