use mitraverify::{Client, Config, UploadFile};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Base URL, timeout and upload limit come from MITRAVERIFY_* variables
    let config = Config::from_env();
    println!("Using API at {}", config.base_url);

    let client = Client::new(config)?;

    let health = client.health_check().await?;
    println!("Backend status: {} (version {})", health.status, health.version);

    let mut args = env::args().skip(1);
    let text = args.next();
    let image = match args.next() {
        Some(path) => Some(UploadFile::from_path(&path).await?),
        None => None,
    };

    if text.is_none() && image.is_none() {
        println!("Usage: verify <text> [image-path]");
        return Ok(());
    }

    let result = client
        .verify_content(text.as_deref(), image.as_ref())
        .await?;

    println!(
        "Verdict: {} ({}, {} confidence)",
        result.overall_verdict,
        result.confidence_label(),
        result.confidence_level()
    );
    println!("{}", result.explanation);

    if let Some(text) = &result.text_analysis {
        println!(
            "\nText [{}]: {} ({:.1}% misinformation)",
            text.language,
            text.prediction,
            text.probabilities.misinformation * 100.0
        );
    }

    if let Some(image) = &result.image_analysis {
        println!(
            "\nImage: manipulated={} type={}",
            image.is_manipulated,
            image.manipulation_type.as_deref().unwrap_or("none")
        );
        for m in &image.similarity_matches {
            println!("- {} ({:.2})", m.filename, m.similarity);
        }
    }

    if !result.evidence.is_empty() {
        println!("\nEvidence:");
        for item in &result.evidence {
            println!("- {} ({:.2}): {}", item.source, item.credibility, item.url);
        }
    }

    println!("\nProcessed in {:.2}s", result.processing_time);

    Ok(())
}
