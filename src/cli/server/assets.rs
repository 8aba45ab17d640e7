//! Embedded browser form
//!
//! The form under `ui/` is included in the binary at compile time and served
//! from the server root.

use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use include_dir::{Dir, include_dir};
use mime_guess::from_path;

static UI_ASSETS: Dir = include_dir!("$CARGO_MANIFEST_DIR/ui");

/// Serve embedded UI assets with proper MIME types
pub async fn serve_embedded_assets(Path(path): Path<String>) -> Response {
    let asset_path = if path.is_empty() || path == "/" {
        "index.html"
    } else {
        path.as_str()
    };

    match UI_ASSETS.get_file(asset_path) {
        Some(file) => {
            let mime_type = from_path(asset_path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime_type.as_ref().to_string())],
                file.contents(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}

/// Serve the form page
pub async fn serve_ui_root() -> Response {
    match UI_ASSETS.get_file("index.html") {
        Some(file) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            file.contents(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "UI not available").into_response(),
    }
}

/// Get asset count for diagnostics
pub fn asset_count() -> usize {
    count_files(&UI_ASSETS)
}

fn count_files(dir: &Dir) -> usize {
    let mut count = 0;
    for entry in dir.entries() {
        match entry {
            include_dir::DirEntry::File(_) => count += 1,
            include_dir::DirEntry::Dir(subdir) => count += count_files(subdir),
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_page_is_embedded() {
        let index = UI_ASSETS.get_file("index.html").expect("index.html embedded");
        let html = index.contents_utf8().expect("utf-8 page");
        assert!(html.contains("/api/solve"));
        assert!(asset_count() >= 1);
    }
}
