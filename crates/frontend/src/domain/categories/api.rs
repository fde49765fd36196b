use contracts::domain::category::{Category, NewCategory};
use contracts::session::Session;

use crate::shared::api::{post_json, post_list, put_empty, put_json, ApiError};

pub async fn fetch_all(user_id: i64) -> Result<Vec<Category>, ApiError> {
    post_list(&format!("/Categories/getall?user_id={user_id}"), None).await
}

// Category endpoints identify the caller via the user_id query
// parameter; no Authorization header goes out.

pub async fn create(category: &NewCategory, session: &Session) -> Result<(), ApiError> {
    let path = format!("/Categories/create?user_id={}", session.user_id);
    post_json(&path, category, None).await
}

/// Updates send the whole record back with the edit applied.
pub async fn update(category: &Category, session: &Session) -> Result<(), ApiError> {
    let path = format!("/Categories/update?user_id={}", session.user_id);
    put_json(&path, category, None).await
}

pub async fn change_status(id: i64, session: &Session) -> Result<(), ApiError> {
    let path = format!("/Categories/changestatus?id={id}&user_id={}", session.user_id);
    put_empty(&path, None).await
}
