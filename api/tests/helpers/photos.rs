use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// A minimal JFIF header: enough bytes to carry the JPEG signature.
pub const JPEG_BYTES: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00, 0x01, 0xFF, 0xD9,
];

/// The PNG signature followed by the start of an IHDR chunk.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
];

/// Serves photo fixtures on an ephemeral local port and returns the base URL.
///
/// - `/photo.jpg` — bytes with a valid JPEG signature
/// - `/photo.png` — bytes with a valid PNG signature
/// - `/notes.txt` — bytes that are not an image
/// - `/gone.jpg` — always responds 404
pub async fn spawn_photo_server() -> String {
    let app = Router::new()
        .route("/photo.jpg", get(|| async { JPEG_BYTES.to_vec() }))
        .route("/photo.png", get(|| async { PNG_BYTES.to_vec() }))
        .route(
            "/notes.txt",
            get(|| async { b"definitely not an image".to_vec() }),
        )
        .route("/gone.jpg", get(|| async { StatusCode::NOT_FOUND }));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind photo fixture server");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Photo fixture server crashed");
    });

    format!("http://{}", addr)
}
