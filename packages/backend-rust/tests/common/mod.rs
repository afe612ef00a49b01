use axum::Router;

pub fn create_test_app() -> Router {
    coach_backend_rust::create_app()
}
