//! Embedded frontend bundle and the catch-all handler that serves it.
//!
//! Every path that is not a bundled file gets `index.html`, so client-side
//! routes such as `/blog/{slug}` survive a reload or a shared link.

use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

pub static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Bundle served by [`serve_embedded`], registered as app data.
#[derive(Clone, Copy)]
pub struct Assets(pub &'static Dir<'static>);

pub async fn serve_embedded(req: HttpRequest, assets: web::Data<Assets>) -> HttpResponse {
    let path = req.path().trim_start_matches('/');

    if !path.is_empty() {
        if let Some(file) = assets.0.get_file(path) {
            let mime = from_path(path).first_or_octet_stream();
            debug!("asset {}", path);
            return HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec());
        }
    }

    match assets.0.get_file(INDEX) {
        Some(index) => {
            debug!("index fallback for /{}", path);
            HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec())
        }
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use include_dir::{DirEntry, File};

    static BUNDLE: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>portfolio</html>")),
            DirEntry::File(File::new("styles.css", b"body{}")),
        ],
    );
    static EMPTY: Dir = Dir::new("", &[]);

    async fn get(dir: &'static Dir<'static>, uri: &str) -> (StatusCode, String, Vec<u8>) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Assets(dir)))
                .default_service(web::route().to(serve_embedded)),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = test::read_body(resp).await.to_vec();
        (status, content_type, body)
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let (status, content_type, body) = get(&BUNDLE, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/html; charset=utf-8");
        assert_eq!(body, b"<html>portfolio</html>");
    }

    #[actix_web::test]
    async fn bundled_file_gets_its_mime_type() {
        let (status, content_type, body) = get(&BUNDLE, "/styles.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/css");
        assert_eq!(body, b"body{}");
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        for uri in ["/blog/mastering-react-hooks", "/contact?service=SEO", "/no/such/page"] {
            let (status, content_type, body) = get(&BUNDLE, uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(content_type, "text/html; charset=utf-8");
            assert_eq!(body, b"<html>portfolio</html>");
        }
    }

    #[actix_web::test]
    async fn missing_index_is_not_found() {
        let (status, _, _) = get(&EMPTY, "/about").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[::core::prelude::v1::test]
    fn build_embeds_an_index() {
        assert!(STATIC_DIR.get_file(INDEX).is_some());
    }
}
