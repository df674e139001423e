//! Serves the compiled frontend bundle embedded in the binary.
//!
//! Paths that do not name a bundled file get `index.html`, so client-side
//! navigation survives a reload. Without a bundle every request is a 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond(&STATIC_DIR, req.path())
}

pub fn respond(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => {
                log::debug!("no bundled file for {}, serving index.html", request_path);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use include_dir::{DirEntry, File};

    static BUNDLE: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>forge</html>")),
            DirEntry::File(File::new("forge-frontend.js", b"console.log('forge')")),
        ],
    );
    static EMPTY: Dir = Dir::new("", &[]);

    #[actix_web::test]
    async fn serves_bundled_files_with_their_mime_type() {
        let response = respond(&BUNDLE, "/forge-frontend.js");
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").and_then(|v| v.to_str().ok());
        assert!(content_type.is_some_and(|v| v.contains("javascript")));
    }

    #[actix_web::test]
    async fn unknown_paths_fall_back_to_index() {
        let response = respond(&BUNDLE, "/status/machines");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], b"<html>forge</html>");

        let root = respond(&BUNDLE, "/");
        assert_eq!(root.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_bundle_is_not_found() {
        let response = respond(&EMPTY, "/anything");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&body[..], b"Not Found");
    }
}
