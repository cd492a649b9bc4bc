#[cfg(test)]
mod tests {
    use crate::store::url_store::{StoreError, UrlStore};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.json");

        let store = UrlStore::load(&path).await.unwrap();
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_reload_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.json");

        let mut store = UrlStore::new(&path);
        store.upsert("http://radio.example.com/a.m3u", Some("Station A"));
        store.upsert("http://radio.example.com/b.pls", None);
        store.upsert("http://radio.example.com/c/", Some("Station C"));
        store.save().await.unwrap();

        let reloaded = UrlStore::load(&path).await.unwrap();
        let addresses: Vec<&str> = reloaded.records().iter().map(|r| r.address.as_str()).collect();
        assert_eq!(
            addresses,
            vec![
                "http://radio.example.com/a.m3u",
                "http://radio.example.com/b.pls",
                "http://radio.example.com/c/",
            ]
        );
        assert_eq!(reloaded.records()[0].nickname.as_deref(), Some("Station A"));
    }

    #[tokio::test]
    async fn test_upsert_keeps_first_insert_position() {
        let mut store = UrlStore::new("unused.json");
        store.upsert("http://a.test/", Some("old"));
        store.upsert("http://b.test/", None);
        store.upsert("http://a.test/", Some("new"));

        assert_eq!(store.records().len(), 2);
        assert_eq!(store.records()[0].address, "http://a.test/");
        assert_eq!(store.records()[0].nickname.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_remove() {
        let mut store = UrlStore::new("unused.json");
        store.upsert("http://a.test/", None);

        assert!(store.remove("http://a.test/"));
        assert!(!store.remove("http://a.test/"));
        assert!(store.records().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("urls.json");
        tokio::fs::write(&path, r#"{"version": 99, "records": []}"#)
            .await
            .unwrap();

        match UrlStore::load(&path).await {
            Err(StoreError::UnsupportedVersion(99)) => {}
            other => panic!("expected version error, got {:?}", other.map(|s| s.records().len())),
        }
    }
}
