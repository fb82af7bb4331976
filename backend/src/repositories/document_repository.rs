//! Document listing capability.
//!
//! There is no document store yet. `StaticDocumentRepository` serves a fixed
//! catalogue so the web client has something to render.

use super::StoreResult;
use crate::database::models::Document;
use async_trait::async_trait;

#[async_trait]
pub trait DocumentStorer: Send + Sync {
    async fn list_documents(&self) -> StoreResult<Vec<Document>>;
}

const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/100/150";

const CATALOGUE: [(&str, &str, &str); 10] = [
    (
        "001",
        "The Adventures of Huckleberry Finn by Mark Twain",
        PLACEHOLDER_IMAGE,
    ),
    (
        "002",
        "The Great Gatsby by F. Scott Fizgerald",
        "https://images-na.ssl-images-amazon.com/images/I/41iers%2BHLSL._SL160_.jpg",
    ),
    (
        "003",
        "The Stories of Anton Chekhov by Anton Checkhov",
        PLACEHOLDER_IMAGE,
    ),
    ("004", "War and Peace by Leo Tolstoy", PLACEHOLDER_IMAGE),
    ("005", " Madame Bovary by Gustav Flaubert", PLACEHOLDER_IMAGE),
    (
        "006",
        "The Adventures of Huckleberry Finn by Mark Twain",
        PLACEHOLDER_IMAGE,
    ),
    (
        "007",
        " The Brothers Karamazov by Fyodor Dostoyevsky",
        PLACEHOLDER_IMAGE,
    ),
    (
        "008",
        "Don Quixote by Miguel de Cervantes",
        "https://m.media-amazon.com/images/I/51nBHIQv6zL._SL160_.jpg",
    ),
    ("009", "Ulysses by James Joyce", PLACEHOLDER_IMAGE),
    (
        "010",
        "Crime and Punishment by Fyodor Dostoyevsky",
        PLACEHOLDER_IMAGE,
    ),
];

/// Read-only, hardcoded document source.
#[derive(Debug, Clone, Default)]
pub struct StaticDocumentRepository;

#[async_trait]
impl DocumentStorer for StaticDocumentRepository {
    async fn list_documents(&self) -> StoreResult<Vec<Document>> {
        Ok(CATALOGUE
            .iter()
            .map(|(id, name, image_url)| Document {
                id: id.to_string(),
                name: name.to_string(),
                image_url: image_url.to_string(),
                parent_id: "root".to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_catalogue() {
        let docs = StaticDocumentRepository.list_documents().await.unwrap();
        assert_eq!(docs.len(), 10);
        assert_eq!(docs[0].id, "001");
        assert_eq!(docs[9].id, "010");
        assert!(docs.iter().all(|d| d.parent_id == "root"));
    }
}
