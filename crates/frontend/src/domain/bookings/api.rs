use contracts::domain::booking::Booking;
use contracts::session::Session;

use crate::shared::api::{get_list, ApiError};

pub async fn fetch_all(session: Option<&Session>) -> Result<Vec<Booking>, ApiError> {
    get_list("/Booking/getall", session).await
}

pub async fn search_by_phone(
    phone: &str,
    session: Option<&Session>,
) -> Result<Vec<Booking>, ApiError> {
    let path = format!(
        "/Booking/searchbycustomerphone?customerPhone={}",
        urlencoding::encode(phone)
    );
    get_list(&path, session).await
}

pub async fn search_by_date(
    start: &str,
    end: &str,
    session: Option<&Session>,
) -> Result<Vec<Booking>, ApiError> {
    let path = format!(
        "/Booking/searchbydate?startEatingTime={}&endEatingTime={}",
        urlencoding::encode(start),
        urlencoding::encode(end)
    );
    get_list(&path, session).await
}
