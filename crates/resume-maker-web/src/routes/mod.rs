//! HTTP route handlers for the resume maker web application.
//!
//! Three routes make up the whole flow: the form page, the preview
//! submission, and the PDF download. HTML routes use Askama templates from
//! the `templates` module.

mod download;
mod pages;
mod preview;

pub use download::download;
pub use pages::index;
pub use preview::preview;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use resume_maker_core::AppConfig;

    use crate::state::AppState;

    fn test_app(converter_binary: PathBuf) -> Router {
        let mut config = AppConfig::default();
        config.converter.binary = converter_binary;
        let state = Arc::new(AppState::new(config, std::path::Path::new("static")));
        crate::app(state)
    }

    /// Fake wkhtmltopdf that copies its input HTML into the output slot, so
    /// the "PDF" bytes are the rendered markup and assertions can see them.
    #[cfg(unix)]
    fn fake_converter(dir: &tempfile::TempDir) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.path().join("fake-wkhtmltopdf");
        std::fs::write(
            &script,
            "#!/bin/sh\nprev=; last=\nfor a in \"$@\"; do prev=$last; last=$a; done\ncp \"$prev\" \"$last\"\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_request(body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/preview")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn download_request(cookie: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/download")
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap()
    }

    fn session_cookie(response: &axum::response::Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .expect("preview should establish a session")
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn index_serves_the_form() {
        let app = test_app(PathBuf::from("wkhtmltopdf"));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("action=\"/preview\""));
        assert!(body.contains("name=\"name\""));
    }

    #[tokio::test]
    async fn download_without_submission_redirects_to_form() {
        let app = test_app(PathBuf::from("wkhtmltopdf"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/download")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }

    #[tokio::test]
    async fn preview_echoes_submitted_fields() {
        let app = test_app(PathBuf::from("wkhtmltopdf"));
        let response = app
            .oneshot(form_request(
                "name=Jane+Doe&email=jane%40example.com",
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Jane Doe"));
        assert!(body.contains("jane@example.com"));
        // Preview mode keeps the on-screen chrome
        assert!(body.contains("/download"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn download_after_preview_returns_pdf_attachment() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(fake_converter(&dir));

        let preview = app
            .clone()
            .oneshot(form_request(
                "name=Jane+Doe&email=jane%40example.com",
                None,
            ))
            .await
            .unwrap();
        let cookie = session_cookie(&preview);

        let response = app.oneshot(download_request(&cookie)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"resume.pdf\""
        );

        // The fake converter passes the rendered HTML through, so the export
        // must carry the submitted values and none of the preview chrome.
        let body = body_string(response).await;
        assert!(body.contains("Jane Doe"));
        assert!(body.contains("jane@example.com"));
        assert!(!body.contains("/download"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn resubmission_overwrites_previous_data() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(fake_converter(&dir));

        let first = app
            .clone()
            .oneshot(form_request("name=First+Draft", None))
            .await
            .unwrap();
        let cookie = session_cookie(&first);

        let second = app
            .clone()
            .oneshot(form_request("name=Final+Version", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::OK);

        let response = app.oneshot(download_request(&cookie)).await.unwrap();
        let body = body_string(response).await;
        assert!(body.contains("Final Version"));
        assert!(!body.contains("First Draft"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn repeated_downloads_re_export_from_the_same_data() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(fake_converter(&dir));

        let preview = app
            .clone()
            .oneshot(form_request("name=Jane+Doe", None))
            .await
            .unwrap();
        let cookie = session_cookie(&preview);

        let first = app.clone().oneshot(download_request(&cookie)).await.unwrap();
        let second = app.oneshot(download_request(&cookie)).await.unwrap();

        assert_eq!(first.status(), StatusCode::OK);
        assert_eq!(second.status(), StatusCode::OK);
        assert_eq!(body_string(first).await, body_string(second).await);
    }

    #[tokio::test]
    async fn converter_failure_surfaces_as_server_error() {
        let app = test_app(PathBuf::from("/nonexistent/wkhtmltopdf"));

        let preview = app
            .clone()
            .oneshot(form_request("name=Jane+Doe", None))
            .await
            .unwrap();
        let cookie = session_cookie(&preview);

        let response = app.oneshot(download_request(&cookie)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
