//! Unit tests for Embedding value object

use ripple_domain::Embedding;

#[test]
fn test_embedding_creation() {
    let vector = vec![0.1, 0.2, 0.3, 0.4, 0.5];
    let embedding = Embedding::new(vector.clone(), "text-embedding-3-small");

    assert_eq!(embedding.vector, vector);
    assert_eq!(embedding.model, "text-embedding-3-small");
    assert_eq!(embedding.dimensions, 5);
}

#[test]
fn test_cosine_similarity_identical_and_orthogonal() {
    let a = Embedding::new(vec![1.0, 0.0], "m");
    let b = Embedding::new(vec![0.0, 1.0], "m");

    let same = a.cosine_similarity(&a).expect("score");
    let orthogonal = a.cosine_similarity(&b).expect("score");

    assert!((same - 1.0).abs() < 1e-6);
    assert!(orthogonal.abs() < 1e-6);
}

#[test]
fn test_cosine_similarity_opposite_is_negative() {
    let a = Embedding::new(vec![1.0, 2.0], "m");
    let b = Embedding::new(vec![-1.0, -2.0], "m");

    let score = a.cosine_similarity(&b).expect("score");
    assert!((score + 1.0).abs() < 1e-6);
}

#[test]
fn test_cosine_similarity_rejects_zero_and_mismatched() {
    let zero = Embedding::new(vec![0.0, 0.0], "m");
    let a = Embedding::new(vec![1.0, 0.0], "m");
    let longer = Embedding::new(vec![1.0, 0.0, 0.0], "m");

    assert_eq!(zero.cosine_similarity(&a), None);
    assert_eq!(a.cosine_similarity(&longer), None);
}
