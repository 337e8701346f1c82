//! Tests for the null embedding provider

use ripple_domain::ports::providers::EmbeddingProvider;
use ripple_providers::embedding::NullEmbeddingProvider;

#[tokio::test]
async fn test_embeddings_are_deterministic() {
    let provider = NullEmbeddingProvider::new();

    let first = provider.embed("shall log all errors").await.expect("embed should succeed");
    let second = provider.embed("shall log all errors").await.expect("embed should succeed");

    assert_eq!(first, second);
    assert_eq!(first.dimensions, 384);
    assert!(first.vector.iter().all(|v| (-1.0..1.0).contains(v)));
}

#[tokio::test]
async fn test_different_texts_differ() {
    let provider = NullEmbeddingProvider::with_dimensions(64);

    let batch = provider
        .embed_batch(&["alpha".to_string(), "beta".to_string()])
        .await
        .expect("embed should succeed");

    assert_eq!(batch.len(), 2);
    assert_ne!(batch[0].vector, batch[1].vector);
    let score = batch[0].cosine_similarity(&batch[1]).expect("vectors are comparable");
    assert!(score < 0.99);
}

#[test]
fn test_zero_dimensions_clamped() {
    assert_eq!(NullEmbeddingProvider::with_dimensions(0).dimensions(), 1);
}
