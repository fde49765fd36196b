use contracts::domain::status::TableFoodStatus;
use contracts::domain::table_food::{CreateTableFood, TableFood};
use contracts::session::Session;

use crate::shared::api::{get_list, post_json, put_json, ApiError};
use serde::Serialize;

pub async fn fetch_all(session: Option<&Session>) -> Result<Vec<TableFood>, ApiError> {
    get_list("/TableFood/getall", session).await
}

/// One search box covers both phone and food id; the server matches the
/// term against either.
pub async fn search(term: &str, session: Option<&Session>) -> Result<Vec<TableFood>, ApiError> {
    let encoded = urlencoding::encode(term);
    let path = format!("/TableFood/search?customerPhone={encoded}&foodId={encoded}");
    get_list(&path, session).await
}

pub async fn create(order: &CreateTableFood, session: &Session) -> Result<(), ApiError> {
    let path = format!("/TableFood/create?user_id={}", session.user_id);
    post_json(&path, order, Some(session)).await
}

/// This endpoint takes snake_case keys, unlike the rest of the API.
#[derive(Serialize)]
struct ChangeStatus {
    id: i64,
    status: i32,
    user_id: i64,
}

pub async fn change_status(
    id: i64,
    status: TableFoodStatus,
    session: &Session,
) -> Result<(), ApiError> {
    let payload = ChangeStatus {
        id,
        status: status.code(),
        user_id: session.user_id,
    };
    put_json("/TableFood/changestatus", &payload, Some(session)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_status_payload_uses_snake_case_keys() {
        let payload = ChangeStatus {
            id: 5,
            status: TableFoodStatus::Served.code(),
            user_id: 2,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["status"], 2);
        assert_eq!(json["user_id"], 2);
    }
}
