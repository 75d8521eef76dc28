//! Output file operations

use crate::assemble::{PageDocument, calibration_document, render_deck};
use crate::deck::{DeckSummary, load_deck};
use crate::options::{DeckSettings, LayoutConfig};
use crate::types::*;
use chrono::Local;
use log::info;
use std::path::{Path, PathBuf};

use super::pdf::write_pdf;

/// File name for a document generated at `timestamp` (`YYYYmmdd_HHMMSS`)
pub fn output_file_name(document: &PageDocument, timestamp: &str) -> String {
    format!("{}_{}.pdf", document.kind.file_prefix(), timestamp)
}

fn timestamp_now() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Encode a document to PDF bytes off the async runtime
pub async fn encode_pdf(document: &PageDocument, config: &LayoutConfig) -> Result<Vec<u8>> {
    let document = document.clone();
    let config = config.clone();
    tokio::task::spawn_blocking(move || write_pdf(&document, &config)).await?
}

/// Write a single document to `path`
pub async fn save_pdf(
    document: &PageDocument,
    config: &LayoutConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let bytes = encode_pdf(document, config).await?;
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

/// Write every document into `results_dir` with timestamped names.
///
/// All documents are encoded before anything is written, so a failing
/// image leaves no partial output behind.
pub async fn save_documents(
    documents: &[PageDocument],
    config: &LayoutConfig,
    results_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let results_dir = results_dir.as_ref();
    let timestamp = timestamp_now();

    let mut encoded = Vec::with_capacity(documents.len());
    for document in documents {
        let bytes = encode_pdf(document, config).await?;
        encoded.push((results_dir.join(output_file_name(document, &timestamp)), bytes));
    }

    tokio::fs::create_dir_all(results_dir).await?;

    let mut written = Vec::with_capacity(encoded.len());
    for (path, bytes) in encoded {
        tokio::fs::write(&path, bytes).await?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Read a deck directory, lay it out and write the PDFs.
///
/// Returns the written file paths: fronts and backs, or a single
/// interleaved deck.
pub async fn generate_deck(
    deck_dir: impl AsRef<Path>,
    settings: &DeckSettings,
    results_dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let config = settings.layout_config()?;
    let policy = settings.back_policy();

    let cards = load_deck(deck_dir, &policy).await?;
    let summary = DeckSummary::from_pairs(&cards, &policy);
    info!(
        "{} cards: {} paired backs, {} default backs, {} blank backs",
        summary.cards, summary.paired_backs, summary.default_backs, summary.blank_backs
    );

    let assembled = render_deck(&cards, &config)?;
    save_documents(&assembled.documents, &config, results_dir).await
}

/// Write the two-page calibration document
pub async fn generate_calibration(
    settings: &DeckSettings,
    results_dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let config = settings.layout_config()?;
    let document = calibration_document(&config)?;
    let mut written = save_documents(&[document], &config, results_dir).await?;
    written
        .pop()
        .ok_or_else(|| DeckError::Config("No calibration document written".to_string()))
}
