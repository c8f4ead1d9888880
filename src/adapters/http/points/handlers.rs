//! HTTP handlers for points endpoints.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::AppState;

use super::dto::{ListTransactionsQuery, ProfileView, TransactionView};

/// GET /api/points/profile
///
/// Returns the user's point profile, provisioning a zero-total one on first
/// read.
pub async fn get_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<ProfileView>, ApiError> {
    let profile = state.get_profile.handle(&user.id).await?;
    Ok(Json(ProfileView::from(&profile)))
}

/// GET /api/points/transactions?limit=N
///
/// Lists the user's ledger entries, most recent first.
pub async fn list_transactions(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<Vec<TransactionView>>, ApiError> {
    let transactions = state.list_transactions.handle(&user.id, query.limit).await?;
    Ok(Json(transactions.iter().map(TransactionView::from).collect()))
}
