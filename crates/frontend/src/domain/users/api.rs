use contracts::domain::user::{CreateUser, User};
use contracts::session::Session;

use crate::shared::api::{post_json, post_list, put_empty, ApiError};

pub async fn fetch_all(session: &Session) -> Result<Vec<User>, ApiError> {
    let path = format!("/Users/getall?user_id={}", session.user_id);
    post_list(&path, Some(session)).await
}

/// One search box covers both gmail and phone; the server matches the
/// term against either.
pub async fn search(term: &str, session: &Session) -> Result<Vec<User>, ApiError> {
    let encoded = urlencoding::encode(term);
    let path = format!("/Users/search?gmail={encoded}&phone={encoded}");
    post_list(&path, Some(session)).await
}

pub async fn create(user: &CreateUser, session: &Session) -> Result<(), ApiError> {
    let path = format!("/Users/create?user_id={}", session.user_id);
    post_json(&path, user, Some(session)).await
}

pub async fn change_status(id: i64, session: &Session) -> Result<(), ApiError> {
    let path = format!("/Users/changestatus?id={id}&user_id={}", session.user_id);
    put_empty(&path, Some(session)).await
}
