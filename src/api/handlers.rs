//! HTTP request handlers for the wage tracker API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
    routing::{get, patch, post, put},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_summary, compute_summary_from_entries, compute_summary_with_lines, current_record,
    day_overview, summarize_period,
};
use crate::error::TrackerError;
use crate::models::{
    AttendanceRecord, AttendanceStatus, DayOverview, Group, Member, MemberUpdate, MemberWithWage,
    NewMember, NewPayment, PaymentRecord, PeriodSummary, SummaryReport, SummaryWarning,
    WageRecord, validate_payment, validate_wage,
};

use super::request::{
    AttendanceRequest, CalculationRequest, DateQuery, GroupRequest, MonthQuery,
    PaymentEntryRequest, WageRequest, date_or_today, require_name,
};
use super::response::ApiErrorResponse;
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;
type Created<T> = Result<(StatusCode, Json<T>), ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/calculate", post(calculate_handler))
        .route("/members", get(list_members).post(create_member))
        .route("/members/:id", get(get_member).patch(update_member))
        .route(
            "/members/:id/attendance",
            put(record_attendance).get(list_attendance),
        )
        .route(
            "/members/:id/payments",
            post(record_payment).get(list_payments),
        )
        .route("/members/:id/wages", put(set_wage).get(wage_history))
        .route("/members/:id/summary", get(member_summary))
        .route("/groups", get(list_groups).post(create_group))
        .route("/groups/:id", patch(rename_group).delete(delete_group))
        .route("/summaries", get(period_summaries))
        .route("/wages/current", get(current_wages))
        .route("/overview", get(overview))
        .with_state(state)
}

/// Logs a rejected request and passes the error response through.
fn rejected(correlation_id: Uuid, error: impl Into<ApiErrorResponse>) -> ApiErrorResponse {
    let response = error.into();
    warn!(
        correlation_id = %correlation_id,
        code = %response.error.code,
        error = %response.error.message,
        "Request rejected"
    );
    response
}

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    version: &'static str,
    currency_symbol: String,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        currency_symbol: state.config().currency_symbol.clone(),
    })
}

/// Handler for POST /calculate.
///
/// Computes a summary from a self-contained payload. Unknown attendance
/// statuses and records dated outside the given period become warnings.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> ApiResult<SummaryReport> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let Json(request) = payload.map_err(|r| rejected(correlation_id, r))?;
    let period = request
        .period
        .map(|p| p.into_period())
        .transpose()
        .map_err(|e| rejected(correlation_id, e))?;

    let member = request.member;
    let payments: Vec<PaymentRecord> = request
        .payments
        .into_iter()
        .map(|p| p.into_record(&member.id))
        .collect();
    let wages: Vec<WageRecord> = request
        .wage_history
        .into_iter()
        .map(|w| w.into_record(&member.id))
        .collect();
    for record in &wages {
        validate_wage(record.wage).map_err(|e| rejected(correlation_id, e))?;
    }
    for payment in &payments {
        validate_payment(payment.amount).map_err(|e| rejected(correlation_id, e))?;
    }

    let mut warnings = Vec::new();
    if let Some(period) = &period {
        let outside = request
            .attendance
            .iter()
            .map(|a| a.date)
            .chain(payments.iter().map(|p| p.date))
            .filter(|date| !period.contains_date(*date));
        for date in outside {
            warnings.push(SummaryWarning {
                code: "OUT_OF_PERIOD".to_string(),
                message: format!(
                    "Record dated {} falls outside {} to {} and was still counted",
                    date, period.start_date, period.end_date
                ),
            });
        }
    }

    let start_time = Instant::now();
    let breakdown = compute_summary_from_entries(&member, request.attendance, &payments, &wages);
    warnings.extend(breakdown.skipped.iter().map(|err| SummaryWarning {
        code: "UNKNOWN_ATTENDANCE_STATUS".to_string(),
        message: err.to_string(),
    }));

    info!(
        correlation_id = %correlation_id,
        member_id = %member.id,
        lines = breakdown.lines.len(),
        skipped = breakdown.summary.skipped_records,
        balance = %breakdown.summary.balance,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    Ok(Json(SummaryReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period,
        summary: breakdown.summary,
        lines: breakdown.lines,
        warnings,
    }))
}

async fn list_members(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Vec<Member>> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_user(&headers)
        .map_err(|e| rejected(correlation_id, e))?;

    let members = state.store().list_members()?;
    debug!(correlation_id = %correlation_id, count = members.len(), "Listed members");
    Ok(Json(members))
}

async fn create_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewMember>, JsonRejection>,
) -> Created<Member> {
    let correlation_id = Uuid::new_v4();
    let user = state
        .acting_admin(&headers, "create members")
        .map_err(|e| rejected(correlation_id, e))?;
    let Json(mut new_member) = payload.map_err(|r| rejected(correlation_id, r))?;
    new_member.name = require_name(&new_member.name).map_err(|e| rejected(correlation_id, e))?;

    let member = state
        .store()
        .create_member(new_member)
        .map_err(|e| rejected(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        member_id = %member.id,
        "Created member"
    );
    Ok((StatusCode::CREATED, Json(member)))
}

async fn get_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Member> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_user(&headers)
        .map_err(|e| rejected(correlation_id, e))?;

    let member = state
        .store()
        .get_member(&id)
        .map_err(|e| rejected(correlation_id, e))?;
    Ok(Json(member))
}

async fn update_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<MemberUpdate>, JsonRejection>,
) -> ApiResult<Member> {
    let correlation_id = Uuid::new_v4();
    let user = state
        .acting_admin(&headers, "update members")
        .map_err(|e| rejected(correlation_id, e))?;
    let Json(mut update) = payload.map_err(|r| rejected(correlation_id, r))?;
    if let Some(name) = &update.name {
        update.name = Some(require_name(name).map_err(|e| rejected(correlation_id, e))?);
    }

    let member = state
        .store()
        .update_member(&id, update)
        .map_err(|e| rejected(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        member_id = %member.id,
        "Updated member"
    );
    Ok(Json(member))
}

async fn list_groups(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Vec<Group>> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_user(&headers)
        .map_err(|e| rejected(correlation_id, e))?;
    Ok(Json(state.store().list_groups()?))
}

async fn create_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GroupRequest>, JsonRejection>,
) -> Created<Group> {
    let correlation_id = Uuid::new_v4();
    let user = state
        .acting_admin(&headers, "create groups")
        .map_err(|e| rejected(correlation_id, e))?;
    let Json(request) = payload.map_err(|r| rejected(correlation_id, r))?;
    let name = require_name(&request.name).map_err(|e| rejected(correlation_id, e))?;

    let group = state.store().create_group(&name)?;
    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        group_id = %group.id,
        "Created group"
    );
    Ok((StatusCode::CREATED, Json(group)))
}

async fn rename_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<GroupRequest>, JsonRejection>,
) -> ApiResult<Group> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_admin(&headers, "rename groups")
        .map_err(|e| rejected(correlation_id, e))?;
    let Json(request) = payload.map_err(|r| rejected(correlation_id, r))?;
    let name = require_name(&request.name).map_err(|e| rejected(correlation_id, e))?;

    let group = state
        .store()
        .update_group(&id, &name)
        .map_err(|e| rejected(correlation_id, e))?;
    Ok(Json(group))
}

/// Body returned by `DELETE /groups/{id}`.
#[derive(Debug, Serialize)]
struct GroupDeleted {
    deleted: String,
    unassigned_members: usize,
}

async fn delete_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<GroupDeleted> {
    let correlation_id = Uuid::new_v4();
    let user = state
        .acting_admin(&headers, "delete groups")
        .map_err(|e| rejected(correlation_id, e))?;

    let unassigned_members = state
        .store()
        .delete_group(&id)
        .map_err(|e| rejected(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        group_id = %id,
        unassigned_members,
        "Deleted group"
    );
    Ok(Json(GroupDeleted {
        deleted: id,
        unassigned_members,
    }))
}

async fn record_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> ApiResult<AttendanceRecord> {
    let correlation_id = Uuid::new_v4();
    let user = state
        .acting_user(&headers)
        .map_err(|e| rejected(correlation_id, e))?;
    let Json(request) = payload.map_err(|r| rejected(correlation_id, r))?;

    let date = date_or_today(request.date);
    let status: AttendanceStatus = request.status.parse().map_err(|_| {
        rejected(
            correlation_id,
            TrackerError::UnknownAttendanceStatus {
                status: request.status.clone(),
                member_id: member_id.clone(),
                date,
            },
        )
    })?;

    let record = state
        .store()
        .upsert_attendance(AttendanceRecord::new(&member_id, date, status, &user.id))
        .map_err(|e| rejected(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        member_id = %member_id,
        date = %date,
        status = %status,
        "Recorded attendance"
    );
    Ok(Json(record))
}

async fn list_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<Vec<AttendanceRecord>> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_user(&headers)
        .map_err(|e| rejected(correlation_id, e))?;
    let Query(month) = query.map_err(|r| rejected(correlation_id, r))?;
    let period = month.period().map_err(|e| rejected(correlation_id, e))?;

    let store = state.store();
    store
        .get_member(&member_id)
        .map_err(|e| rejected(correlation_id, e))?;
    Ok(Json(store.list_attendance(&member_id, &period)?))
}

async fn record_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
    payload: Result<Json<PaymentEntryRequest>, JsonRejection>,
) -> Created<PaymentRecord> {
    let correlation_id = Uuid::new_v4();
    let user = state
        .acting_user(&headers)
        .map_err(|e| rejected(correlation_id, e))?;
    let Json(request) = payload.map_err(|r| rejected(correlation_id, r))?;

    let payment = state
        .store()
        .append_payment(NewPayment {
            member_id: member_id.clone(),
            date: date_or_today(request.date),
            amount: request.amount,
            recorded_by_id: user.id.clone(),
        })
        .map_err(|e| rejected(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        member_id = %member_id,
        amount = %payment.amount,
        "Recorded payment"
    );
    Ok((StatusCode::CREATED, Json(payment)))
}

async fn list_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<Vec<PaymentRecord>> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_user(&headers)
        .map_err(|e| rejected(correlation_id, e))?;
    let Query(month) = query.map_err(|r| rejected(correlation_id, r))?;
    let period = month.period().map_err(|e| rejected(correlation_id, e))?;

    let store = state.store();
    store
        .get_member(&member_id)
        .map_err(|e| rejected(correlation_id, e))?;
    Ok(Json(store.list_payments(&member_id, &period)?))
}

async fn set_wage(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
    payload: Result<Json<WageRequest>, JsonRejection>,
) -> ApiResult<WageRecord> {
    let correlation_id = Uuid::new_v4();
    let user = state
        .acting_admin(&headers, "set wages")
        .map_err(|e| rejected(correlation_id, e))?;
    let Json(request) = payload.map_err(|r| rejected(correlation_id, r))?;

    let record = state
        .store()
        .upsert_wage(request.into_record(&member_id))
        .map_err(|e| rejected(correlation_id, e))?;
    info!(
        correlation_id = %correlation_id,
        user_id = %user.id,
        member_id = %member_id,
        wage = %record.wage,
        effective_date = %record.effective_date,
        "Set wage"
    );
    Ok(Json(record))
}

async fn wage_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
) -> ApiResult<Vec<WageRecord>> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_admin(&headers, "view wages")
        .map_err(|e| rejected(correlation_id, e))?;

    let store = state.store();
    store
        .get_member(&member_id)
        .map_err(|e| rejected(correlation_id, e))?;
    Ok(Json(store.list_wage_history(&member_id)?))
}

async fn member_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(member_id): Path<String>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<SummaryReport> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_admin(&headers, "view summaries")
        .map_err(|e| rejected(correlation_id, e))?;
    let Query(month) = query.map_err(|r| rejected(correlation_id, r))?;
    let period = month.period().map_err(|e| rejected(correlation_id, e))?;

    let store = state.store();
    let member = store
        .get_member(&member_id)
        .map_err(|e| rejected(correlation_id, e))?;
    let attendance = store.list_attendance(&member_id, &period)?;
    let payments = store.list_payments(&member_id, &period)?;
    let wages = store.list_wage_history(&member_id)?;

    let breakdown = compute_summary_with_lines(&member, &attendance, &payments, &wages);
    info!(
        correlation_id = %correlation_id,
        member_id = %member_id,
        start_date = %period.start_date,
        balance = %breakdown.summary.balance,
        "Computed member summary"
    );

    Ok(Json(SummaryReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period: Some(period),
        summary: breakdown.summary,
        lines: breakdown.lines,
        warnings: Vec::new(),
    }))
}

async fn period_summaries(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<PeriodSummary> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_admin(&headers, "view summaries")
        .map_err(|e| rejected(correlation_id, e))?;
    let Query(month) = query.map_err(|r| rejected(correlation_id, r))?;
    let period = month.period().map_err(|e| rejected(correlation_id, e))?;

    let store = state.store();
    let mut summaries = Vec::new();
    for member in store.list_members()? {
        let attendance = store.list_attendance(&member.id, &period)?;
        let payments = store.list_payments(&member.id, &period)?;
        let wages = store.list_wage_history(&member.id)?;
        summaries.push(compute_summary(&member, &attendance, &payments, &wages));
    }
    let totals = summarize_period(&summaries);

    info!(
        correlation_id = %correlation_id,
        start_date = %period.start_date,
        members = totals.member_count,
        total_balance = %totals.total_balance,
        "Computed period summaries"
    );
    Ok(Json(PeriodSummary {
        period,
        summaries,
        totals,
    }))
}

async fn current_wages(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> ApiResult<Vec<MemberWithWage>> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_admin(&headers, "view wages")
        .map_err(|e| rejected(correlation_id, e))?;
    let Query(query) = query.map_err(|r| rejected(correlation_id, r))?;
    let date = date_or_today(query.date);

    let store = state.store();
    let mut result = Vec::new();
    for member in store.list_members()? {
        let history = store.list_wage_history(&member.id)?;
        let in_force = current_record(&history, date);
        result.push(MemberWithWage {
            current_wage: in_force.map(|r| r.wage).unwrap_or_default(),
            effective_date: in_force.map(|r| r.effective_date),
            member,
        });
    }
    Ok(Json(result))
}

async fn overview(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> ApiResult<DayOverview> {
    let correlation_id = Uuid::new_v4();
    state
        .acting_user(&headers)
        .map_err(|e| rejected(correlation_id, e))?;
    let Query(query) = query.map_err(|r| rejected(correlation_id, r))?;
    let date = date_or_today(query.date);

    let store = state.store();
    let members = store.list_members()?;
    let attendance = store.list_attendance_on(date)?;
    let payments = store.list_payments_on(date)?;

    let overview = day_overview(&members, &attendance, &payments, date);
    debug!(
        correlation_id = %correlation_id,
        date = %date,
        present = overview.present,
        "Built day overview"
    );
    Ok(Json(overview))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, USER_HEADER};
    use crate::config::TrackerConfig;
    use crate::models::{User, UserRole};
    use crate::store::{InMemoryStore, LedgerStore};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        let store = InMemoryStore::new();
        for (id, role) in [("admin1", UserRole::Admin), ("staff1", UserRole::Staff)] {
            store
                .insert_user(User {
                    id: id.to_string(),
                    name: id.to_string(),
                    email: format!("{}@example.com", id),
                    role,
                    active: true,
                })
                .unwrap();
        }
        store
            .insert_member(Member {
                id: "m1".to_string(),
                name: "Rajesh Kumar".to_string(),
                group_id: None,
                avatar_url: None,
            })
            .unwrap();
        AppState::new(Arc::new(store), TrackerConfig::default())
    }

    fn create_valid_request() -> serde_json::Value {
        serde_json::json!({
            "member": {"id": "m1", "name": "Rajesh Kumar"},
            "period": {"start_date": "2023-01-01", "end_date": "2023-01-31"},
            "attendance": [
                {"member_id": "m1", "date": "2023-01-10", "status": "full"},
                {"member_id": "m1", "date": "2023-01-11", "status": "half"},
                {"member_id": "m1", "date": "2023-01-12", "status": "absent"}
            ],
            "payments": [{"date": "2023-01-15", "amount": "600"}],
            "wage_history": [{"wage": "500", "effective_date": "2023-01-01"}]
        })
    }

    async fn post_calculate(router: Router, body: String) -> axum::response::Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["currency_symbol"], "₹");
    }

    #[tokio::test]
    async fn test_calculate_returns_summary() {
        let router = create_router(create_test_state());
        let response = post_calculate(router, create_valid_request().to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: SummaryReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.summary.total_days, dec("1.5"));
        assert_eq!(report.summary.total_earned, dec("750"));
        assert_eq!(report.summary.total_paid, dec("600"));
        assert_eq!(report.summary.balance, dec("150"));
        assert_eq!(report.lines.len(), 3);
        assert!(report.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_calculate_warns_on_unknown_status() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request["attendance"][2]["status"] = serde_json::json!("double_shift");

        let response = post_calculate(router, request.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: SummaryReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.summary.skipped_records, 1);
        assert_eq!(report.summary.total_days, dec("1.5"));
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code, "UNKNOWN_ATTENDANCE_STATUS");
    }

    #[tokio::test]
    async fn test_calculate_warns_on_out_of_period_record() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request["attendance"][0]["date"] = serde_json::json!("2023-02-01");

        let response = post_calculate(router, request.to_string()).await;
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: SummaryReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code, "OUT_OF_PERIOD");
        // Still counted; scoping is the caller's job.
        assert_eq!(report.summary.total_days, dec("1.5"));
    }

    #[tokio::test]
    async fn test_calculate_rejects_oversized_wage() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request["wage_history"][0]["wage"] = serde_json::json!("79228162514264337593543950335");
        request["attendance"][0]["status"] = serde_json::json!("one_and_a_half");

        let response = post_calculate(router, request.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_calculate_rejects_oversized_payment() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request["payments"][0]["amount"] = serde_json::json!("1000000000.01");

        let response = post_calculate(router, request.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_calculate_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = post_calculate(router, "{ not json".to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_calculate_reversed_period_returns_400() {
        let router = create_router(create_test_state());
        let mut request = create_valid_request();
        request["period"] = serde_json::json!({"start_date": "2023-02-01", "end_date": "2023-01-01"});

        let response = post_calculate(router, request.to_string()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_PERIOD");
    }

    #[tokio::test]
    async fn test_attendance_with_unknown_status_is_rejected() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/members/m1/attendance")
                    .header("Content-Type", "application/json")
                    .header(USER_HEADER, "staff1")
                    .body(Body::from(r#"{"date":"2023-01-10","status":"double"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNKNOWN_ATTENDANCE_STATUS");
    }

    #[tokio::test]
    async fn test_blank_group_name_is_validation_error() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/groups")
                    .header("Content-Type", "application/json")
                    .header(USER_HEADER, "admin1")
                    .body(Body::from(r#"{"name":"   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_month_query_out_of_range_is_invalid_period() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/members/m1/attendance?year=2023&month=13")
                    .header(USER_HEADER, "staff1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_month_query_is_validation_error() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/members/m1/payments")
                    .header(USER_HEADER, "staff1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
