use crate::pages::home;
use axum::response::Html;

/// GET / and GET /index.html
pub async fn index() -> Html<&'static str> {
    Html(home::page())
}
