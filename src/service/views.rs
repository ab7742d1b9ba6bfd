//! Saved-view service: listing views and re-applying a view's stored
//! filter parameters over an incoming request.

use super::request::TableRequest;
use crate::constants::value_sets::VIEW_FILTER_FIELDS;
use crate::logging::log_table_query_failure;
use crate::models::view::{FilterParams, View};
use sqlx::PgPool;

/// List saved views, newest first; degrades to empty on failure.
pub async fn get_views(pool: &PgPool) -> Vec<View> {
    match View::list(pool).await {
        Ok(views) => views,
        Err(error) => {
            log_table_query_failure("views", &error);
            Vec::new()
        }
    }
}

/// Overlay a saved view's filter parameters onto a base request.
///
/// The view's operator, sort, and filters replace the corresponding request
/// fields; everything else (pagination, date bounds) is kept from the base.
/// Filters on fields outside the allow-list are ignored.
pub fn request_with_view(base: &TableRequest, params: &FilterParams) -> TableRequest {
    let mut request = base.clone();

    if let Some(operator) = params.operator {
        request.operator = Some(operator.as_param().to_string());
    }
    if params.sort.is_some() {
        request.sort = params.sort.clone();
    }

    for filter in &params.filters {
        if !VIEW_FILTER_FIELDS.contains(&filter.field.as_str()) {
            continue;
        }
        match filter.field.as_str() {
            "title" => request.title = Some(filter.value.clone()),
            "status" => request.status = Some(filter.value.clone()),
            "priority" => request.priority = Some(filter.value.clone()),
            _ => {}
        }
    }

    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::view::ViewFilter;
    use crate::query::Operator;

    fn view_params() -> FilterParams {
        FilterParams {
            operator: Some(Operator::Or),
            sort: Some("priority.desc".to_string()),
            filters: vec![
                ViewFilter {
                    field: "status".to_string(),
                    value: "todo.done".to_string(),
                    is_multi: true,
                },
                ViewFilter {
                    field: "label".to_string(),
                    value: "bug".to_string(),
                    is_multi: false,
                },
            ],
        }
    }

    #[test]
    fn test_view_overrides_operator_sort_and_filters() {
        let base = TableRequest {
            page: 3,
            title: Some("weekly".to_string()),
            ..Default::default()
        };
        let merged = request_with_view(&base, &view_params());

        assert_eq!(merged.operator.as_deref(), Some("or"));
        assert_eq!(merged.sort.as_deref(), Some("priority.desc"));
        assert_eq!(merged.status.as_deref(), Some("todo.done"));
        // pagination and untouched filters survive from the base request
        assert_eq!(merged.page, 3);
        assert_eq!(merged.title.as_deref(), Some("weekly"));
    }

    #[test]
    fn test_unknown_view_filter_fields_are_ignored() {
        let merged = request_with_view(&TableRequest::default(), &view_params());
        // "label" is not a view-filterable field; nothing should absorb it
        assert!(merged.priority.is_none());
    }

    #[test]
    fn test_empty_params_change_nothing() {
        let base = TableRequest {
            status: Some("done".to_string()),
            ..Default::default()
        };
        let merged = request_with_view(&base, &FilterParams::default());
        assert_eq!(merged.status.as_deref(), Some("done"));
        assert!(merged.operator.is_none());
    }
}
