//! Tests for the in-memory chunk vector store

use ripple_domain::entities::SourceChunk;
use ripple_domain::error::Error;
use ripple_domain::ports::providers::{ChunkSimilarityProvider, EmbeddingProvider};
use ripple_domain::value_objects::Embedding;
use ripple_providers::embedding::NullEmbeddingProvider;
use ripple_providers::vector_store::InMemoryChunkVectorStore;

fn emb(vector: Vec<f32>) -> Embedding {
    Embedding::new(vector, "test")
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn seeded_store() -> InMemoryChunkVectorStore {
    InMemoryChunkVectorStore::with_embeddings([
        ("old".to_string(), emb(vec![1.0, 0.0, 0.0])),
        ("near".to_string(), emb(vec![0.9, 0.1, 0.0])),
        ("far".to_string(), emb(vec![0.0, 1.0, 0.0])),
        ("opposite".to_string(), emb(vec![-1.0, 0.0, 0.0])),
    ])
}

#[tokio::test]
async fn test_returns_closest_candidate() {
    let store = seeded_store();

    let found = store
        .find_most_similar("old", &ids(&["far", "near", "opposite"]))
        .await
        .expect("lookup should succeed")
        .expect("a candidate should match");

    assert_eq!(found.chunk_id, "near");
    assert!(found.score > 0.9 && found.score <= 1.0);
}

#[tokio::test]
async fn test_search_is_restricted_to_candidates() {
    let store = seeded_store();

    let found = store
        .find_most_similar("old", &ids(&["far", "opposite"]))
        .await
        .expect("lookup should succeed")
        .expect("a candidate should match");

    assert_eq!(found.chunk_id, "far");
    assert!(found.score.abs() < 1e-6);
}

#[tokio::test]
async fn test_negative_cosine_is_reported_raw() {
    let store = seeded_store();

    let found = store
        .find_most_similar("old", &ids(&["opposite"]))
        .await
        .expect("lookup should succeed")
        .expect("a candidate should match");

    assert!((found.score + 1.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_empty_candidates_yield_none() {
    let store = seeded_store();

    let found = store.find_most_similar("old", &[]).await.expect("lookup should succeed");

    assert!(found.is_none());
}

#[tokio::test]
async fn test_missing_query_embedding_is_not_found() {
    let store = seeded_store();

    let err = store
        .find_most_similar("unknown", &ids(&["near"]))
        .await
        .expect_err("query without embedding must fail");

    assert!(matches!(err, Error::NotFound { .. }));
}

#[tokio::test]
async fn test_mismatched_dimensions_and_unknown_candidates_are_skipped() {
    let store = seeded_store();
    store.upsert("short", emb(vec![1.0, 0.0]));
    store.upsert("zero", emb(vec![0.0, 0.0, 0.0]));

    let found = store
        .find_most_similar("old", &ids(&["short", "zero", "ghost"]))
        .await
        .expect("lookup should succeed");

    assert!(found.is_none());
}

#[tokio::test]
async fn test_ties_keep_first_candidate() {
    let store = seeded_store();
    store.upsert("near-copy", emb(vec![0.9, 0.1, 0.0]));

    let found = store
        .find_most_similar("old", &ids(&["near", "near-copy"]))
        .await
        .expect("lookup should succeed")
        .expect("a candidate should match");

    assert_eq!(found.chunk_id, "near");
}

#[test]
fn test_upsert_and_remove() {
    let store = InMemoryChunkVectorStore::new();
    assert!(store.is_empty());

    store.upsert("a", emb(vec![1.0]));
    store.upsert("a", emb(vec![2.0]));
    assert_eq!(store.len(), 1);
    assert!(store.contains("a"));

    let removed = store.remove("a").expect("embedding should be present");
    assert_eq!(removed.vector, vec![2.0]);
    assert!(store.is_empty());
    assert!(store.remove("a").is_none());
}

#[tokio::test]
async fn test_seeded_with_null_embeddings() {
    let provider = NullEmbeddingProvider::with_dimensions(32);
    let chunks = vec![
        SourceChunk::new("old-1", "Passwords expire after 90 days.", 0),
        SourceChunk::new("new-1", "Passwords expire after 90 days.", 0),
        SourceChunk::new("new-2", "Sessions time out after an hour.", 1),
    ];
    let texts: Vec<String> = chunks.iter().map(|chunk| chunk.content.clone()).collect();
    let vectors = provider.embed_batch(&texts).await.expect("embedding should succeed");

    let store = InMemoryChunkVectorStore::with_embeddings(
        chunks.iter().map(|chunk| chunk.id.clone()).zip(vectors),
    );
    assert_eq!(store.len(), 3);

    let found = store
        .find_most_similar("old-1", &ids(&["new-2", "new-1"]))
        .await
        .expect("lookup should succeed")
        .expect("a candidate should match");

    assert_eq!(found.chunk_id, "new-1");
    assert!((found.score - 1.0).abs() < 1e-5);
}
