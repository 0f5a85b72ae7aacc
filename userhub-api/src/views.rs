/// HTML views
///
/// Pages are built with `maud::html!`, which escapes every interpolated value.
///
/// # Example
///
/// ```
/// use userhub_api::config::Config;
/// use userhub_api::views::index_page;
///
/// let mut config = Config::default();
/// config.app.name = "Tom & Jerry".to_string();
///
/// let html = index_page(&config.app);
/// assert!(html.contains("<title>Tom &amp; Jerry</title>"));
/// ```

use crate::config::AppConfig;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLESHEET: &str = "/static/css/style.css";
const SCRIPT: &str = "/static/js/main.js";

const SWAGGER_CSS: &str = "https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css";
const SWAGGER_JS: &str = "https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js";
const REDOC_JS: &str = "https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js";

/// Endpoints listed on the landing page
const ENDPOINTS: [(&str, &str, &str); 9] = [
    ("GET", "/api/health/", "Health check"),
    ("GET", "/api/health/ping", "Ping"),
    ("GET", "/api/health/info", "Application info"),
    ("GET", "/api/users/", "List users"),
    ("POST", "/api/users/", "Create user"),
    ("GET", "/api/users/{id}", "Get user"),
    ("PUT", "/api/users/{id}", "Update user"),
    ("DELETE", "/api/users/{id}", "Delete user"),
    ("GET", "/api/users/username/{username}", "Find by username"),
];

/// Renders the landing page
pub fn index_page(app: &AppConfig) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            (head(&app.name))
            body {
                (navbar(&app.name, true))
                main class="container" {
                    header class="hero" {
                        h1 { (app.name) }
                        p class="lead" { (app.description) }
                        p class="meta" {
                            span class="badge" { "v" (app.version) }
                            " "
                            span class="badge badge-env" { (app.environment) }
                        }
                    }
                    section id="api-documentation" class="card" {
                        h2 { "API Documentation" }
                        p { "Explore the endpoints interactively or read the reference." }
                        ul {
                            li { a href="/docs" { "Swagger UI" } " " code { "/docs" } }
                            li { a href="/redoc" { "ReDoc" } " " code { "/redoc" } }
                            li {
                                a href="/openapi.json" { "OpenAPI schema" }
                                " "
                                code { "/openapi.json" }
                            }
                        }
                    }
                    section id="endpoints" class="card" {
                        h2 { "Endpoints" }
                        table {
                            thead {
                                tr { th { "Method" } th { "Path" } th { "Description" } }
                            }
                            tbody {
                                @for (method, path, description) in ENDPOINTS {
                                    tr {
                                        td { (method) }
                                        td { code { (path) } }
                                        td { (description) }
                                    }
                                }
                            }
                        }
                    }
                    section id="status" class="card" {
                        h2 { "Status" }
                        p id="health-status" { "Checking..." }
                    }
                }
                footer class="footer" { (app.name) " v" (app.version) }
                script src=(SCRIPT) {}
            }
        }
    };

    markup.into_string()
}

/// Renders the page shown for unknown non-API paths
pub fn not_found_page(app: &AppConfig, path: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            (head(&format!("Page not found - {}", app.name)))
            body {
                (navbar(&app.name, false))
                main class="container" {
                    section class="card" {
                        h1 { "404" }
                        p { "The page " code { (path) } " does not exist." }
                        p { a href="/" { "Back to home" } }
                    }
                }
                footer class="footer" {
                    (app.name) " v" (app.version) " · " (app.environment)
                }
            }
        }
    };

    markup.into_string()
}

/// Renders the Swagger UI page for the document at `openapi_url`
pub fn swagger_ui_page(title: &str, openapi_url: &str) -> String {
    let init = format!(
        "window.ui = SwaggerUIBundle({{ url: \"{}\", dom_id: \"#swagger-ui\" }});",
        openapi_url
    );

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - Swagger UI" }
                link rel="stylesheet" href=(SWAGGER_CSS);
            }
            body {
                div id="swagger-ui" {}
                script src=(SWAGGER_JS) {}
                script { (PreEscaped(init)) }
            }
        }
    };

    markup.into_string()
}

/// Renders the ReDoc page for the document at `openapi_url`
pub fn redoc_page(title: &str, openapi_url: &str) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " - ReDoc" }
            }
            body {
                redoc spec-url=(openapi_url) {}
                script src=(REDOC_JS) {}
            }
        }
    };

    markup.into_string()
}

fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (title) }
            link rel="stylesheet" href=(STYLESHEET);
        }
    }
}

fn navbar(app_name: &str, with_links: bool) -> Markup {
    html! {
        nav class="navbar" {
            a class="brand" href="/" { (app_name) }
            @if with_links {
                ul class="nav-links" {
                    li { a class="nav-link" href="/" { "Home" } }
                    li { a class="nav-link" href="/docs" { "Docs" } }
                    li { a class="nav-link" href="/redoc" { "ReDoc" } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_index_links_docs() {
        let html = index_page(&Config::default().app);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("API Documentation"));
        assert!(html.contains("href=\"/docs\""));
        assert!(html.contains("href=\"/redoc\""));
        assert!(html.contains("<title>UserHub</title>"));
    }

    #[test]
    fn test_values_are_inserted_literally() {
        let mut app = Config::default().app;
        app.name = "Literal {{ environment }}".to_string();

        let html = index_page(&app);
        assert!(html.contains("<title>Literal {{ environment }}</title>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut app = Config::default().app;
        app.description = "<script>\"x\"</script>".to_string();

        let html = index_page(&app);
        assert!(html.contains("&lt;script&gt;&quot;x&quot;&lt;/script&gt;"));
        assert!(!html.contains("<script>\"x\""));
    }

    #[test]
    fn test_not_found_shows_escaped_path() {
        let html = not_found_page(&Config::default().app, "/<missing>");
        assert!(html.contains("<code>/&lt;missing&gt;</code>"));
    }

    #[test]
    fn test_docs_pages_point_at_document() {
        let swagger = swagger_ui_page("UserHub", "/openapi.json");
        assert!(swagger.contains("url: \"/openapi.json\""));
        assert!(swagger.contains("<title>UserHub - Swagger UI</title>"));

        let redoc = redoc_page("UserHub", "/openapi.json");
        assert!(redoc.contains("spec-url=\"/openapi.json\""));
    }
}
