use crate::backend::BookingBackend;
use crate::configuration::Configuration;
use crate::error::SlotError;
use crate::events::{calendar_events, CalendarEvent};
use crate::forms::{
    booking_complete_path, AddScheduleRequest, BookingForm, BookingFormView,
    RemoveScheduleRequest,
};
use crate::pages;
use crate::reservation::{check_slot, submit_booking, Submission};
use crate::slots::available_time_slots_json;
use crate::types::{Booking, DateRange, NewSchedule, Schedule};
use axum::extract::{Path, Query, Request};
use axum::middleware::{self, Next};
use axum::response::{Html, Redirect, Response};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use axum::{
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct AppState<T: BookingBackend, C: Configuration> {
    pub backend: T,
    pub configuration: C,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct EventsQuery {
    start: Option<String>,
    end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    fn success(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            status: "success".into(),
            message: message.into(),
        })
    }

    fn error(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            status: "error".into(),
            message: message.into(),
        })
    }
}

pub fn create_app<T: BookingBackend, C: Configuration>(backend: T, configuration: C) -> Router {
    let state = AppState {
        backend,
        configuration,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        .route("/", get(get_calendar_page::<T, C>))
        .route("/api/bookings/", get(get_events::<T, C>))
        .route(
            "/book/:year/:month/:day/:time_slot/",
            get(get_booking_form::<T, C>).post(post_booking_form::<T, C>),
        )
        .route("/booking_complete/:id/", get(get_booking_complete::<T, C>))
        .route("/delete_booking/:id/", post(delete_booking::<T, C>));

    let admin = Router::new()
        .route("/admin/schedules", get(get_schedules::<T, C>).post(add_schedule::<T, C>))
        .route("/admin/schedules/remove", post(remove_schedule::<T, C>))
        .route("/admin/bookings", get(get_bookings::<T, C>))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth::<T, C>));

    Router::new()
        .merge(public)
        .merge(admin)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn admin_auth<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    if let Some(auth_header) = request.headers().get("x-admin-password") {
        if auth_header.to_str().unwrap_or("") != state.configuration.admin_password() {
            return Err((StatusCode::UNAUTHORIZED, "Unauthorized".to_string()));
        }
    } else {
        return Err((StatusCode::UNAUTHORIZED, "Missing credentials".to_string()));
    }
    Ok(next.run(request).await)
}

async fn get_calendar_page<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let path = state.configuration.calendar_template();

    match fs::read_to_string(&path).await {
        Ok(template) => Ok(pages::calendar_page(
            &template,
            &state.configuration.website_title(),
            &available_time_slots_json(),
            Local::now().date_naive(),
        )),
        Err(e) => {
            let error_message = format!("Failed to read frontend file: {}", e);
            error!(path = %path.display(), "{error_message}");
            Err((StatusCode::INTERNAL_SERVER_ERROR, error_message))
        }
    }
}

/// Keeps the date part of `2025-06-01T00:00:00+09:00`. Empty means unbounded.
fn parse_date_bound(value: Option<&str>) -> Result<Option<NaiveDate>, String> {
    let date = value.unwrap_or("").split('T').next().unwrap_or("");
    if date.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("Invalid date: {date}"))
}

async fn get_events<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<Vec<CalendarEvent>>, (StatusCode, String)> {
    let bad_request = |message| (StatusCode::BAD_REQUEST, message);
    let range = DateRange::new(
        parse_date_bound(query.start.as_deref()).map_err(bad_request)?,
        parse_date_bound(query.end.as_deref()).map_err(bad_request)?,
    );

    calendar_events(&state.backend, range)
        .map(Json)
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
}

fn slot_error_response(website_title: &str, err: SlotError) -> Response {
    match err {
        SlotError::Malformed => Redirect::to("/").into_response(),
        SlotError::PastTime | SlotError::SlotTaken => {
            pages::booking_error(website_title, &err.to_string()).into_response()
        }
        SlotError::Backend(err) => {
            error!(%err, "Slot check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                pages::server_error(website_title),
            )
                .into_response()
        }
    }
}

async fn get_booking_form<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Path((year, month, day, time_slot)): Path<(i32, u32, u32, String)>,
) -> Response {
    let website_title = state.configuration.website_title();
    match check_slot(&state.backend, year, month, day, &time_slot, Local::now()) {
        Ok(slot) => pages::booking_form(
            &website_title,
            &BookingFormView::new(slot.date, &slot.time_slot),
        )
        .into_response(),
        Err(err) => slot_error_response(&website_title, err),
    }
}

async fn post_booking_form<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Path((year, month, day, time_slot)): Path<(i32, u32, u32, String)>,
    Form(form): Form<BookingForm>,
) -> Response {
    let website_title = state.configuration.website_title();
    let slot = match check_slot(&state.backend, year, month, day, &time_slot, Local::now()) {
        Ok(slot) => slot,
        Err(err) => return slot_error_response(&website_title, err),
    };

    match submit_booking(&state.backend, &slot, form) {
        Submission::Booked(booking) => {
            info!(id = booking.id, starts_at = %slot.starts_at, "Booking created");
            Redirect::to(&booking_complete_path(booking.id)).into_response()
        }
        Submission::Invalid(form, errors) => {
            info!(?errors, "Booking form rejected");
            let mut view = BookingFormView::new(slot.date, &slot.time_slot);
            view.name = form.name;
            view.errors = errors;
            pages::booking_form(&website_title, &view).into_response()
        }
    }
}

async fn get_booking_complete<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Path(id): Path<i32>,
) -> Response {
    let website_title = state.configuration.website_title();
    match state.backend.booking(id) {
        Ok(booking) => pages::booking_complete(&website_title, &booking).into_response(),
        Err(err) if err.is_not_found() => {
            (StatusCode::NOT_FOUND, pages::not_found(&website_title)).into_response()
        }
        Err(err) => {
            error!(%err, id, "Failed to load booking");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                pages::server_error(&website_title),
            )
                .into_response()
        }
    }
}

async fn delete_booking<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Path(id): Path<i32>,
) -> (StatusCode, Json<StatusResponse>) {
    match state.backend.remove_booking(id) {
        Ok(()) => (StatusCode::OK, StatusResponse::success("Booking deleted.")),
        Err(err) if err.is_not_found() => {
            (StatusCode::NOT_FOUND, StatusResponse::error(err.to_string()))
        }
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusResponse::error(err.to_string()),
        ),
    }
}

async fn get_schedules<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Result<Json<Vec<Schedule>>, (StatusCode, String)> {
    state
        .backend
        .schedules(DateRange::all())
        .map(Json)
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
}

async fn add_schedule<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<AddScheduleRequest>,
) -> Result<Json<Schedule>, (StatusCode, String)> {
    request
        .validate()
        .map_err(|errors| (StatusCode::UNPROCESSABLE_ENTITY, errors.to_string()))?;

    let schedule = state
        .backend
        .add_schedule(NewSchedule {
            title: request.title,
            description: request.description,
            date: request.date,
        })
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))?;
    info!(id = schedule.id, date = %schedule.date, "Schedule added");
    Ok(Json(schedule))
}

async fn remove_schedule<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
    Json(request): Json<RemoveScheduleRequest>,
) -> impl IntoResponse {
    match state.backend.remove_schedule(request.id) {
        Ok(()) => (StatusCode::OK, "Schedule removed successfully".to_string()),
        Err(err) if err.is_not_found() => (StatusCode::NOT_FOUND, err.to_string()),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

async fn get_bookings<T: BookingBackend, C: Configuration>(
    State(state): State<AppState<T, C>>,
) -> Result<Json<Vec<Booking>>, (StatusCode, String)> {
    state
        .backend
        .bookings(DateRange::all())
        .map(Json)
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()))
}
