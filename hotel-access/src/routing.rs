use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::User,
    dto::output,
    error::Error,
    service::hotels_service::HotelsService,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/hotels", get(get_hotels))
        .route("/hotels/:hotel_id", get(get_hotel_with_rooms))
        .route_layer(application_middleware.auth.clone())
}

async fn get_hotels(
    State(service): State<Arc<dyn HotelsService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<Vec<output::Hotel>>), Error> {
    let hotels = service.find_hotels(user.id).await?;

    Ok((StatusCode::OK, Json(hotels)))
}

async fn get_hotel_with_rooms(
    State(service): State<Arc<dyn HotelsService>>,
    Extension(user): Extension<User>,
    Path(hotel_id): Path<String>,
) -> Result<(StatusCode, Json<output::HotelWithRooms>), Error> {
    // id that is not a number can't point to any hotel
    let hotel_id = hotel_id
        .parse::<i64>()
        .map_err(|_| Error::HotelNotExist)?;

    let hotel = service.find_hotel_with_rooms(user.id, hotel_id).await?;

    Ok((StatusCode::OK, Json(hotel)))
}
