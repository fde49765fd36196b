use contracts::domain::bill::Bill;
use contracts::domain::status::BillStatus;
use contracts::session::Session;

use crate::shared::api::{post_empty, post_list, put_empty, ApiError};

pub async fn fetch_all(session: Option<&Session>) -> Result<Vec<Bill>, ApiError> {
    post_list("/Bills/getall", session).await
}

/// Bills are created from the unbilled orders of a customer, looked up by
/// phone. The server computes the total.
pub async fn create(customer_phone: &str, session: &Session) -> Result<(), ApiError> {
    let path = format!(
        "/Bills/create?customerPhone={}&user_id={}",
        urlencoding::encode(customer_phone),
        session.user_id
    );
    post_empty(&path, Some(session)).await
}

pub async fn update_status(
    id: i64,
    status: BillStatus,
    session: &Session,
) -> Result<(), ApiError> {
    let path = format!(
        "/Bills/update?id={id}&status={}&user_id={}",
        status.code(),
        session.user_id
    );
    put_empty(&path, Some(session)).await
}
