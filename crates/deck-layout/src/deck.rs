//! Deck directory parsing
//!
//! Card images follow the naming convention
//! `[<qty> ][<F|B><id> ]<name>.<jpg|png>`, for example `3 Forest.png`,
//! `F07 Delver of Secrets.jpg` and `B07 Insectile Aberration.jpg`.
//! Parsing works on an already enumerated list of paths so it can be
//! exercised without touching the filesystem.

use crate::options::BackPolicy;
use crate::types::*;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "png"];

/// Parse a single file name, returning `None` when it does not follow the
/// naming convention.
pub fn parse_card_face(path: &Path) -> Option<CardFace> {
    let file_name = path.file_name()?.to_str()?;
    if file_name.starts_with('.') {
        return None;
    }

    let (stem, extension) = file_name.rsplit_once('.')?;
    if !IMAGE_EXTENSIONS
        .iter()
        .any(|ext| extension.eq_ignore_ascii_case(ext))
    {
        return None;
    }

    let mut rest = stem;

    let mut quantity = 1;
    if let Some((token, tail)) = leading_token(rest) {
        if token.bytes().all(|b| b.is_ascii_digit()) {
            quantity = token.parse().ok()?;
            rest = tail;
        }
    }

    let mut role = CardRole::Unmarked;
    let mut pair_id = None;
    if let Some((token, tail)) = leading_token(rest) {
        if let Some((marker, id)) = role_marker(token) {
            role = marker;
            pair_id = Some(id.to_string());
            rest = tail;
        }
    }

    let name = rest.trim();
    if name.is_empty() {
        return None;
    }

    Some(CardFace {
        path: path.to_path_buf(),
        pair_id,
        role,
        quantity,
        name: name.to_string(),
    })
}

/// Split off the first whitespace-delimited token, only when something follows it
fn leading_token(s: &str) -> Option<(&str, &str)> {
    let (token, tail) = s.split_once(char::is_whitespace)?;
    let tail = tail.trim_start();
    if token.is_empty() || tail.is_empty() {
        return None;
    }
    Some((token, tail))
}

/// Recognize `F01` / `B01` style markers
fn role_marker(token: &str) -> Option<(CardRole, &str)> {
    let mut chars = token.chars();
    let role = match chars.next()?.to_ascii_uppercase() {
        'F' => CardRole::Front,
        'B' => CardRole::Back,
        _ => return None,
    };
    let id = chars.as_str();
    if id.len() == 2 && id.bytes().all(|b| b.is_ascii_digit()) {
        Some((role, id))
    } else {
        None
    }
}

/// Parse every matching entry, ordered by file name
pub fn parse_faces(entries: &[PathBuf]) -> Vec<CardFace> {
    let mut sorted: Vec<&PathBuf> = entries.iter().collect();
    sorted.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    sorted
        .into_iter()
        .filter_map(|path| {
            let face = parse_card_face(path);
            if face.is_none() {
                debug!("Skipping {}: not a card image", path.display());
            }
            face
        })
        .collect()
}

/// Build the card schedule from a deck listing.
///
/// Each front or unmarked file contributes `quantity` identical pairs. The
/// back is the `B` file with the same pair id, else the policy's default
/// back, else a blank back when allowed. When several back files share an
/// id the first one in file-name order is used.
pub fn parse_deck(entries: &[PathBuf], policy: &BackPolicy) -> Result<Vec<CardPair>> {
    let faces = parse_faces(entries);

    let mut backs: HashMap<&str, &Path> = HashMap::new();
    for face in faces.iter().filter(|f| f.role == CardRole::Back) {
        let Some(id) = face.pair_id.as_deref() else {
            continue;
        };
        match backs.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(&face.path);
            }
            Entry::Occupied(existing) => {
                warn!(
                    "Duplicate back id {}: keeping {}, ignoring {}",
                    id,
                    existing.get().display(),
                    face.path.display()
                );
            }
        }
    }

    let mut cards = Vec::new();
    for face in faces.iter().filter(|f| f.role != CardRole::Back) {
        let matched = match (face.role, face.pair_id.as_deref()) {
            (CardRole::Front, Some(id)) => backs.get(id).map(|p| p.to_path_buf()),
            _ => None,
        };

        let back = match matched {
            Some(path) => Some(path),
            None => resolve_fallback_back(face, policy)?,
        };

        debug!("{} x{} ({})", face.name, face.quantity, face.path.display());
        for _ in 0..face.quantity {
            cards.push(CardPair::new(face.path.clone(), back.clone()));
        }
    }

    info!("Parsed {} cards from {} files", cards.len(), faces.len());
    Ok(cards)
}

fn resolve_fallback_back(face: &CardFace, policy: &BackPolicy) -> Result<Option<PathBuf>> {
    if face.role == CardRole::Front {
        warn!(
            "No back file for {} (id {})",
            face.name,
            face.pair_id.as_deref().unwrap_or("--")
        );
    }

    match (&policy.default_back, policy.blank_back) {
        (Some(default_back), _) => Ok(Some(default_back.clone())),
        (None, true) => Ok(None),
        (None, false) => Err(DeckError::MissingBack {
            front: face.path.clone(),
        }),
    }
}

/// Number of printable cards in a listing (sum of front quantities)
pub fn count_cards(entries: &[PathBuf]) -> usize {
    parse_faces(entries)
        .iter()
        .filter(|f| f.role != CardRole::Back)
        .map(|f| f.quantity)
        .sum()
}

/// Breakdown of where each card's back comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckSummary {
    pub cards: usize,
    /// Backed by a matching `B` file
    pub paired_backs: usize,
    pub default_backs: usize,
    pub blank_backs: usize,
}

impl DeckSummary {
    pub fn from_pairs(cards: &[CardPair], policy: &BackPolicy) -> Self {
        let mut summary = DeckSummary {
            cards: cards.len(),
            ..Default::default()
        };
        for card in cards {
            match &card.back {
                None => summary.blank_backs += 1,
                Some(back) if policy.default_back.as_ref() == Some(back) => {
                    summary.default_backs += 1
                }
                Some(_) => summary.paired_backs += 1,
            }
        }
        summary
    }
}

/// List the files of a deck directory, ordered by file name
pub async fn read_deck_dir(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut reader = tokio::fs::read_dir(dir.as_ref()).await?;
    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        if entry.file_type().await?.is_file() {
            entries.push(entry.path());
        }
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// Read and parse a deck directory
pub async fn load_deck(dir: impl AsRef<Path>, policy: &BackPolicy) -> Result<Vec<CardPair>> {
    let entries = read_deck_dir(dir).await?;
    parse_deck(&entries, policy)
}
