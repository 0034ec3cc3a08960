use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult, OptionExt};
use crate::gallery::Variant;
use crate::layout::Grid;
use crate::state::AppState;
use crate::types::{Category, ListingResponse};

fn category_from_path(slug: &str) -> AppResult<Category> {
    Category::from_slug(slug).ok_or_not_found(&format!("Category '{}'", slug))
}

// GET /api/{category} - ordered filenames, empty on any listing failure
pub async fn list_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ListingResponse>> {
    let category = category_from_path(&slug)?;
    let files = state.list(category).await;
    Ok(Json(ListingResponse::from(files)))
}

#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    pub variant: Option<String>,
}

fn parse_variant(raw: Option<&str>) -> AppResult<Variant> {
    match raw {
        None | Some("desktop") => Ok(Variant::Desktop),
        Some("mobile") => Ok(Variant::Mobile),
        Some(other) => Err(AppError::ValidationError {
            field: "variant".to_string(),
            message: format!("expected 'desktop' or 'mobile', got '{}'", other),
        }),
    }
}

// GET /api/{category}/layout?variant=desktop|mobile - the generated grid
pub async fn category_layout(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(q): Query<LayoutQuery>,
) -> AppResult<Json<Grid>> {
    let category = category_from_path(&slug)?;
    let variant = parse_variant(q.variant.as_deref())?;
    let files = state.list(category).await;
    Ok(Json(state.catalog.grid(category, &files, variant)))
}
