use tracing::instrument;

/// Root greeting endpoint.
#[instrument]
pub async fn greeting() -> &'static str {
    "Hello World!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greeting_text() {
        assert_eq!(greeting().await, "Hello World!");
    }
}
