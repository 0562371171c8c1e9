use chrono::{Duration, Utc};
use renovation_auth::domain::{MessageResponse, Role, UpdateProfileRequestBody, UserProfile};
use renovation_auth::utils::DEFAULT_ACCESS_COOKIE_NAME;
use test_context::test_context;

use crate::helpers::{get_random_email, token_service_at, TestContext, PASSWORD};

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_profile_for_bearer_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, token) = app.signed_in_user(None).await;

    let response = app.get_profile(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);

    let profile = response.json::<UserProfile>().await.unwrap();
    assert_eq!(profile.id, user_id);
    assert_eq!(profile.name, "Test User");
    assert_eq!(profile.role, Role::Client);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_accept_the_access_cookie(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, token) = app.signed_in_user(None).await;

    let response = app.get_profile_with_cookie(&token).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.json::<UserProfile>().await.unwrap().id, user_id);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_without_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get_profile(None).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(response.headers().get("www-authenticate").unwrap(), "Bearer");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_for_bad_authorization_headers(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, token) = app.signed_in_user(None).await;

    for header in [
        "Bearer".to_owned(),
        format!("Basic {}", token),
        "Bearer not.a.token".to_owned(),
    ] {
        let response = app.get_profile_with_header(&header).await;
        assert_eq!(response.status().as_u16(), 401, "header {:?}", header);
    }

    let response = app.get_profile_with_header(&format!("bearer {}", token)).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_for_tampered_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, token) = app.signed_in_user(None).await;

    let mut chars: Vec<char> = token.chars().collect();
    let index = chars.len() - 10;
    chars[index] = if chars[index] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();

    let response = app.get_profile(Some(&tampered)).await;
    assert_eq!(response.status().as_u16(), 401);
    let message = response.text().await.unwrap();
    assert!(message.contains("invalid signature"), "{}", message);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_401_for_expired_token(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, _) = app.signed_in_user(None).await;

    let expired = token_service_at(Utc::now() - Duration::minutes(31))
        .issue(user_id)
        .unwrap();

    let response = app.get_profile(Some(&expired.access_token)).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_update_only_the_fields_sent(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, token) = app.signed_in_user(None).await;
    let new_email = get_random_email();

    let update = UpdateProfileRequestBody {
        name: Some("Renamed".to_owned()),
        email: Some(new_email.clone()),
        password: None,
    };
    let response = app.update_profile(&token, &update).await;
    assert_eq!(response.status().as_u16(), 200);

    let profile = response.json::<UserProfile>().await.unwrap();
    assert_eq!(
        profile,
        UserProfile {
            id: user_id,
            name: "Renamed".to_owned(),
            email: new_email.clone(),
            role: Role::Client,
        }
    );

    // The old password still works with the new email.
    let response = app.login(&new_email, PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_change_the_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let email = get_random_email();
    app.register("Ana", &email, PASSWORD, None).await;
    let token = app
        .login(&email, PASSWORD)
        .await
        .json::<renovation_auth::domain::LoginResponse>()
        .await
        .unwrap()
        .access_token;

    let update = UpdateProfileRequestBody {
        password: Some("Changed456?".to_owned()),
        ..Default::default()
    };
    let response = app.update_profile(&token, &update).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(app.login(&email, PASSWORD).await.status().as_u16(), 401);
    assert_eq!(app.login(&email, "Changed456?").await.status().as_u16(), 200);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_409_when_email_belongs_to_someone_else(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let taken = get_random_email();
    app.register("Ana", &taken, PASSWORD, None).await;
    let (_, token) = app.signed_in_user(None).await;

    let update = UpdateProfileRequestBody {
        email: Some(taken),
        ..Default::default()
    };
    let response = app.update_profile(&token, &update).await;
    assert_eq!(response.status().as_u16(), 409);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_return_422_for_invalid_update(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (_, token) = app.signed_in_user(None).await;

    let update = UpdateProfileRequestBody {
        password: Some("weak".to_owned()),
        ..Default::default()
    };
    let response = app.update_profile(&token, &update).await;
    assert_eq!(response.status().as_u16(), 422);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_delete_account_and_clear_cookie(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let (user_id, token) = app.signed_in_user(None).await;

    let response = app.delete_profile(&token).await;
    assert_eq!(response.status().as_u16(), 200);

    let cookie = response
        .cookies()
        .find(|cookie| cookie.name() == DEFAULT_ACCESS_COOKIE_NAME)
        .expect("No access cookie found");
    assert!(cookie.value().is_empty());

    assert_eq!(
        response.json::<MessageResponse>().await.unwrap().message,
        "Profile deleted successfully"
    );

    // Tokens are stateless: the token still verifies, but the account is gone.
    assert_eq!(app.get_profile(Some(&token)).await.status().as_u16(), 404);
    assert_eq!(app.get_user(user_id.value()).await.status().as_u16(), 404);
}
