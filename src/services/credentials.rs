use anyhow::Context;

// bcrypt is CPU-bound, so both operations run on the blocking pool rather
// than stalling the request executor.

pub async fn hash_password(password: String, cost: u32) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .context("password hashing task panicked")?
        .context("failed to hash password")
}

pub async fn verify_password(password: String, hash: String) -> anyhow::Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .context("password verification task panicked")?
        .context("failed to verify password")
}

#[cfg(test)]
mod tests {
    use super::*;

    // minimum bcrypt cost keeps the tests fast
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hash = hash_password("admin123".to_string(), TEST_COST).await.unwrap();
        assert!(verify_password("admin123".to_string(), hash.clone()).await.unwrap());
        assert!(!verify_password("wrong".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_hashes_are_salted() {
        let a = hash_password("admin123".to_string(), TEST_COST).await.unwrap();
        let b = hash_password("admin123".to_string(), TEST_COST).await.unwrap();
        assert_ne!(a, b);
    }
}
