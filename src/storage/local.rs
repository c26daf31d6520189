use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use futures::StreamExt;

use super::BlobStore;
use crate::{EtlError, Res};

/// Blob store backed by the local file system.
///
/// Each bucket is a directory below `root` and each key is a relative path
/// inside it, so `discover_weekly/raw_data/to_process/a.json` in bucket `b`
/// lives at `<root>/b/discover_weekly/raw_data/to_process/a.json`.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, bucket: &str, key: &str) -> Res<PathBuf> {
        let mut path = self.root.join(bucket);
        for segment in key.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." {
                return Err(EtlError::storage(key, "key escapes the bucket"));
            }
            path.push(segment);
        }
        Ok(path)
    }

    async fn ensure_parent(path: &Path, key: &str) -> Res<()> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| EtlError::storage(key, e))?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, bucket: &str, key: &str, body: Vec<u8>) -> Res<()> {
        let path = self.object_path(bucket, key)?;
        Self::ensure_parent(&path, key).await?;
        async_fs::write(&path, body)
            .await
            .map_err(|e| EtlError::storage(key, e))
    }

    async fn list(&self, bucket: &str, prefix: &str) -> Res<Vec<String>> {
        let bucket_dir = self.root.join(bucket);
        // only the directory part of the prefix needs walking
        let start_rel = match prefix.rfind('/') {
            Some(idx) => &prefix[..idx],
            None => "",
        };
        let start = self.object_path(bucket, start_rel)?;

        let mut keys = Vec::new();
        let mut pending = vec![start];

        while let Some(dir) = pending.pop() {
            let mut entries = match async_fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(EtlError::storage(prefix, e)),
            };

            while let Some(entry) = entries.next().await {
                let entry = entry.map_err(|e| EtlError::storage(prefix, e))?;
                let path = entry.path();
                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| EtlError::storage(prefix, e))?;

                if file_type.is_dir() {
                    pending.push(path);
                    continue;
                }

                let Ok(rel) = path.strip_prefix(&bucket_dir) else {
                    continue;
                };
                let key = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }

        keys.sort();
        Ok(keys)
    }

    async fn get(&self, bucket: &str, key: &str) -> Res<Vec<u8>> {
        let path = self.object_path(bucket, key)?;
        match async_fs::read(&path).await {
            Ok(body) => Ok(body),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(EtlError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }),
            Err(e) => Err(EtlError::storage(key, e)),
        }
    }

    async fn copy(
        &self,
        src_bucket: &str,
        src_key: &str,
        dest_bucket: &str,
        dest_key: &str,
    ) -> Res<()> {
        let src = self.object_path(src_bucket, src_key)?;
        let dest = self.object_path(dest_bucket, dest_key)?;
        Self::ensure_parent(&dest, dest_key).await?;

        match async_fs::copy(&src, &dest).await {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(EtlError::NotFound {
                bucket: src_bucket.to_string(),
                key: src_key.to_string(),
            }),
            Err(e) => Err(EtlError::storage(src_key, e)),
        }
    }

    async fn delete(&self, bucket: &str, key: &str) -> Res<()> {
        let path = self.object_path(bucket, key)?;
        match async_fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(EtlError::storage(key, e)),
        }
    }
}
