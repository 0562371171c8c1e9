use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

pub fn access_cookie(name: &str, token: &str, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build((name.to_owned(), token.to_owned()))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .same_site(SameSite::Lax)
        .secure(true)
        .max_age(Duration::seconds(ttl_secs))
        .build()
}

pub fn clear_cookie(name: &str) -> Cookie<'static> {
    Cookie::build((name.to_owned(), String::new()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(true)
        .max_age(Duration::seconds(0))
        .build()
}
