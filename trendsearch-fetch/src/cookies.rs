//! Cookie persistence across requests.
//!
//! Trends hands out a NID cookie on the first response and expects it back
//! on subsequent requests; without it some endpoints return 429 immediately.
//! The store is keyed by origin so one client can talk to several hosts.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

/// Stores and replays cookies per origin.
#[async_trait]
pub trait CookieStore: Send + Sync {
    /// The `Cookie` header value for an origin, if any cookies are held.
    async fn cookie_header(&self, origin: &str) -> Option<String>;

    /// Merges `Set-Cookie` header values received from an origin.
    async fn store(&self, origin: &str, set_cookie: &[String]);
}

/// In-memory [`CookieStore`] used by default.
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    // origin -> cookie name -> value
    jars: Mutex<HashMap<String, HashMap<String, String>>>,
}

impl MemoryCookieStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CookieStore for MemoryCookieStore {
    async fn cookie_header(&self, origin: &str) -> Option<String> {
        let jars = self.jars.lock().expect("cookie jar lock poisoned");
        let jar = jars.get(origin)?;
        if jar.is_empty() {
            return None;
        }
        let mut pairs: Vec<_> = jar.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        Some(
            pairs
                .into_iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    async fn store(&self, origin: &str, set_cookie: &[String]) {
        let mut jars = self.jars.lock().expect("cookie jar lock poisoned");
        let jar = jars.entry(origin.to_string()).or_default();
        for header in set_cookie {
            // Attributes after the first ';' (Path, Expires, ...) are not
            // relevant to replaying the cookie.
            let pair = header.split(';').next().unwrap_or_default().trim();
            if let Some((name, value)) = pair.split_once('=') {
                if !name.is_empty() {
                    jar.insert(name.to_string(), value.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_merges_by_cookie_name() {
        let store = MemoryCookieStore::new();
        let origin = "https://trends.google.com";
        store
            .store(
                origin,
                &["NID=abc; Path=/; HttpOnly".to_string(), "S=1".to_string()],
            )
            .await;
        store.store(origin, &["NID=def; Path=/".to_string()]).await;

        let header = store.cookie_header(origin).await.unwrap();
        assert_eq!(header, "NID=def; S=1");
    }

    #[tokio::test]
    async fn test_origins_are_isolated() {
        let store = MemoryCookieStore::new();
        store
            .store("https://a.example", &["X=1".to_string()])
            .await;
        assert!(store.cookie_header("https://b.example").await.is_none());
    }
}
