use renovation_auth::domain::UserSummary;
use test_context::test_context;

use crate::helpers::{get_random_email, TestContext, PASSWORD};

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_public_fields_without_authentication(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();
    app.register("Ana", &email, PASSWORD, None).await;

    let response = app.get_user(1).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "id": 1, "name": "Ana", "email": email })
    );
    let summary: UserSummary = serde_json::from_value(body).unwrap();
    assert_eq!(summary.id.value(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_404_if_user_missing(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get_user(999).await;
    assert_eq!(response.status().as_u16(), 404);
}
