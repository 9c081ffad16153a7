//! Register with a scanner and walk through a few commands

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
    println!(
        "registered: {:?} ({:?})",
        scanner.response_status(),
        scanner.response_message()
    );

    // Relax capture preconditions, then configure the camera sensor
    scanner.require_stillness(false).await?;
    scanner.require_marker(true).await?;
    scanner.set_exposure_ns(10_000_000).await?;
    scanner.set_sensitivity_iso(800).await?;

    scanner.get_state().await?;
    println!(
        "state: {:?} ({:?})",
        scanner.response_status(),
        scanner.response_message()
    );

    scanner.disconnect();

    Ok(())
}
