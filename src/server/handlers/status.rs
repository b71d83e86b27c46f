//! JSON status handler.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AppState, ErrorCounts, InfoCounts, StatusResponse};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

fn sum_errors(stats: &ProcessingStats, types: &[ErrorType]) -> usize {
    types.iter().map(|t| stats.get_error_count(*t)).sum()
}

/// Uptime, extraction count and degradation counters.
pub async fn status_handler(State(state): State<AppState>) -> Response {
    let stats = &state.stats;

    let response = StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        extractions: stats.extractions(),
        errors: ErrorCounts {
            total: stats.total_errors(),
            search: sum_errors(
                stats,
                &[
                    ErrorType::SearchRequestTimeout,
                    ErrorType::SearchRequestError,
                    ErrorType::SearchStatusError,
                    ErrorType::SearchBodyError,
                ],
            ),
            dns: sum_errors(
                stats,
                &[
                    ErrorType::DnsATimeout,
                    ErrorType::DnsALookupError,
                    ErrorType::DnsMxTimeout,
                    ErrorType::DnsMxLookupError,
                ],
            ),
            geolocation: sum_errors(
                stats,
                &[
                    ErrorType::GeolocationRequestTimeout,
                    ErrorType::GeolocationRequestError,
                    ErrorType::GeolocationStatusError,
                    ErrorType::GeolocationDecodeError,
                ],
            ),
        },
        info: InfoCounts {
            total: stats.total_info(),
            search_no_links: stats.get_info_count(InfoType::SearchNoLinks),
            dns_no_a_records: stats.get_info_count(InfoType::DnsNoARecords),
            dns_no_mx_records: stats.get_info_count(InfoType::DnsNoMxRecords),
            dns_results_suppressed: stats.get_info_count(InfoType::DnsResultsSuppressed),
        },
    };

    Json(response).into_response()
}
