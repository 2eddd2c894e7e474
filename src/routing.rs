//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{
    AppState, endpoints,
    entry::{
        create_entry_endpoint, delete_entry_endpoint, get_edit_entry_page, get_entries_page,
        get_new_entry_page, update_entry_endpoint,
    },
    home::get_home_page,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    summary::get_summary_page,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_home_page))
        .route(endpoints::ENTRIES_VIEW, get(get_entries_page))
        .route(endpoints::NEW_ENTRY_VIEW, get(get_new_entry_page))
        .route(endpoints::EDIT_ENTRY_VIEW, get(get_edit_entry_page))
        .route(endpoints::SUMMARY_VIEW, get(get_summary_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(endpoints::POST_ENTRY, post(create_entry_endpoint))
        .route(endpoints::PUT_ENTRY, put(update_entry_endpoint))
        .route(endpoints::DELETE_ENTRY, delete(delete_entry_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{AppState, build_router, endpoints};

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state =
            AppState::new(connection, "Asia/Tokyo").expect("Could not initialize app state");

        TestServer::new(build_router(state))
    }

    #[tokio::test]
    async fn pages_render() {
        let server = get_test_server();

        for (path, want_text) in [
            (endpoints::ROOT, "Home"),
            (endpoints::ENTRIES_VIEW, "Entries"),
            (endpoints::NEW_ENTRY_VIEW, "Record Entry"),
            (endpoints::SUMMARY_VIEW, "Summary"),
        ] {
            let response = server.get(path).await;

            response.assert_status_ok();
            let text = response.text();
            assert!(
                text.contains(want_text),
                "page {path} does not contain {want_text:?}"
            );
        }
    }

    #[tokio::test]
    async fn created_entry_appears_in_listing() {
        let server = get_test_server();

        let response = server
            .post(endpoints::POST_ENTRY)
            .form(&[
                ("date", "2025-08-01"),
                ("category", "Groceries"),
                ("amount", "2000"),
                ("memo", "Lunch"),
                ("type", "expense"),
            ])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);

        let listing = server.get(endpoints::ENTRIES_VIEW).await;
        listing.assert_status_ok();
        let text = listing.text();
        assert!(text.contains("Groceries"));
        assert!(text.contains("¥2,000"));
    }

    #[tokio::test]
    async fn summary_reflects_created_entries() {
        let server = get_test_server();

        for (date, category, amount, entry_type) in [
            ("2025-08-01", "Groceries", "2000", "expense"),
            ("2025-08-02", "Salary", "100000", "income"),
        ] {
            server
                .post(endpoints::POST_ENTRY)
                .form(&[
                    ("date", date),
                    ("category", category),
                    ("amount", amount),
                    ("memo", ""),
                    ("type", entry_type),
                ])
                .await
                .assert_status(StatusCode::SEE_OTHER);
        }

        let summary = server.get(endpoints::SUMMARY_VIEW).await;
        summary.assert_status_ok();
        let text = summary.text();
        assert!(text.contains("Groceries"));
        assert!(text.contains("Salary"));
        assert!(text.contains("¥2,000"));
        assert!(text.contains("¥100,000"));
    }

    #[tokio::test]
    async fn unknown_route_returns_404_page() {
        let server = get_test_server();

        let response = server.get("/no/such/page").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("404"));
    }
}
