use contracts::domain::category::Category;
use contracts::domain::food::{FoodItem, NewFoodItem};
use contracts::session::Session;

use crate::shared::api::{post_json, post_list, ApiError};

pub async fn fetch_all() -> Result<Vec<FoodItem>, ApiError> {
    post_list("/Foods/getall", None).await
}

/// Categories feed the category dropdown on the add-item form.
pub async fn fetch_categories(user_id: i64) -> Result<Vec<Category>, ApiError> {
    post_list(&format!("/Categories/getall?user_id={user_id}"), None).await
}

// Food endpoints identify the caller via the user_id query parameter;
// no Authorization header goes out.
pub async fn create(item: &NewFoodItem, session: &Session) -> Result<(), ApiError> {
    let path = format!("/Foods/create?user_id={}", session.user_id);
    post_json(&path, item, None).await
}
