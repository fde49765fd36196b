use contracts::domain::table::{DiningTable, NewTable};
use contracts::session::Session;

use crate::shared::api::{post_json, post_list, put_empty, ApiError};

pub async fn fetch_all() -> Result<Vec<DiningTable>, ApiError> {
    post_list("/Tables/getall", None).await
}

// Table endpoints identify the caller via the user_id query parameter;
// no Authorization header goes out.

pub async fn create(table: &NewTable, session: &Session) -> Result<(), ApiError> {
    let path = format!("/Tables/create?user_id={}", session.user_id);
    post_json(&path, table, None).await
}

pub async fn change_status(id: i64, session: &Session) -> Result<(), ApiError> {
    let path = format!("/Tables/changestatus?id={id}&user_id={}", session.user_id);
    put_empty(&path, None).await
}
