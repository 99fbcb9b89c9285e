use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_build_without_leptos_config() {
    let _router: Router = api_routes(test_app_state());
}
