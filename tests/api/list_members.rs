use crate::helpers::TestApp;
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_empty_list(app: &mut TestApp) {
    assert_eq!(app.list_members().await.unwrap(), vec![]);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_list_members_ordered_by_email(app: &mut TestApp) {
    let members = [
        ("Grace", "Hopper", "grace@example.com"),
        ("Ada", "Lovelace", "ada@example.com"),
        ("Alan", "Turing", "alan@example.com"),
    ];

    for (first, last, email) in members.iter() {
        app.create_member(&json!({
            "firstName": first,
            "lastName": last,
            "email": email
        }))
        .await
        .unwrap();
    }

    let names: Vec<String> = app
        .list_members()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.display_name)
        .collect();

    assert_eq!(names, ["Ada Lovelace", "Alan Turing", "Grace Hopper"]);
}
