//! Capture a video frame from a scanner

use scanlink::Scanner;

#[tokio::main]
async fn main() -> scanlink::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let base_url =
        std::env::var("SCANNER_URL").unwrap_or_else(|_| "https://localhost:3003".to_string());
    let scanner_secret = std::env::var("SCANNER_SECRET").unwrap_or_else(|_| "k28b1".to_string());

    let mut scanner = Scanner::new(base_url)?;
    scanner.register(&scanner_secret).await?;

    let frame = scanner.capture_frame().await?;
    println!("captured {}", frame);

    scanner.disconnect();

    Ok(())
}
