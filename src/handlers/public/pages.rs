// handlers/public/pages.rs - Embedded HTML pages

use axum::response::Html;

const DASHBOARD_HTML: &str = include_str!("../../../assets/dashboard.html");
const REGISTER_HTML: &str = include_str!("../../../assets/register.html");
const ADMIN_HTML: &str = include_str!("../../../assets/admin.html");

pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub async fn register_page() -> Html<&'static str> {
    Html(REGISTER_HTML)
}

pub async fn admin_page() -> Html<&'static str> {
    Html(ADMIN_HTML)
}
