use std::collections::BTreeMap;
use std::sync::Arc;

use aws_sdk_s3::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::objects::{self, ObjectMeta};

const JSON: &str = "application/json";

/// Where records live. Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub enum RecordStore {
    S3 { client: Client, bucket: String },
    Memory(MemoryStore),
}

/// Precondition for a conditional write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteCondition {
    /// Nothing is stored under the key yet.
    Absent,
    /// The stored object still carries this version tag.
    Matches(String),
}

/// A stored value together with the version tag it was read at.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub value: T,
    pub etag: String,
}

/// An in-process object map, for tests and single-node deployments.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<MemoryObjects>>,
}

#[derive(Default)]
struct MemoryObjects {
    objects: BTreeMap<String, StoredObject>,
    next_version: u64,
}

struct StoredObject {
    body: Vec<u8>,
    version: u64,
    last_modified: jiff::Timestamp,
}

impl MemoryObjects {
    fn check(&self, key: &str, condition: &WriteCondition) -> Result<(), StorageError> {
        let current = self.objects.get(key).map(|o| o.version.to_string());
        let holds = match condition {
            WriteCondition::Absent => current.is_none(),
            WriteCondition::Matches(etag) => current.as_deref() == Some(etag.as_str()),
        };
        if holds {
            Ok(())
        } else {
            Err(StorageError::PreconditionFailed {
                key: key.to_string(),
            })
        }
    }

    fn insert(&mut self, key: &str, body: Vec<u8>) {
        self.next_version += 1;
        self.objects.insert(
            key.to_string(),
            StoredObject {
                body,
                version: self.next_version,
                last_modified: jiff::Timestamp::now(),
            },
        );
    }
}

impl RecordStore {
    pub fn s3(client: Client, bucket: impl Into<String>) -> Self {
        RecordStore::S3 {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn memory() -> Self {
        RecordStore::Memory(MemoryStore::default())
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            RecordStore::S3 { .. } => "s3",
            RecordStore::Memory(_) => "memory",
        }
    }

    pub async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.get_versioned(key).await.map(|v| v.value)
    }

    async fn get_versioned(&self, key: &str) -> Result<Versioned<Vec<u8>>, StorageError> {
        match self {
            RecordStore::S3 { client, bucket } => {
                let output = objects::get_object(client, bucket, key).await?;
                Ok(Versioned {
                    value: output.body,
                    etag: output.etag.unwrap_or_default(),
                })
            }
            RecordStore::Memory(mem) => mem
                .inner
                .read()
                .await
                .objects
                .get(key)
                .map(|o| Versioned {
                    value: o.body.clone(),
                    etag: o.version.to_string(),
                })
                .ok_or_else(|| StorageError::NotFound {
                    key: key.to_string(),
                }),
        }
    }

    pub async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        match self {
            RecordStore::S3 { client, bucket } => {
                objects::put_object(client, bucket, key, body, content_type, None).await
            }
            RecordStore::Memory(mem) => {
                mem.inner.write().await.insert(key, body);
                Ok(())
            }
        }
    }

    /// Write only if `condition` still holds, otherwise fail with
    /// `StorageError::PreconditionFailed`.
    pub async fn put_if(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
        condition: &WriteCondition,
    ) -> Result<(), StorageError> {
        match self {
            RecordStore::S3 { client, bucket } => {
                objects::put_object(client, bucket, key, body, content_type, Some(condition))
                    .await
            }
            RecordStore::Memory(mem) => {
                // check and insert under one write guard
                let mut objects = mem.inner.write().await;
                objects.check(key, condition)?;
                objects.insert(key, body);
                Ok(())
            }
        }
    }

    /// List objects under a prefix, in key order.
    pub async fn list(&self, prefix: &str) -> Result<Vec<ObjectMeta>, StorageError> {
        match self {
            RecordStore::S3 { client, bucket } => {
                let mut listed = objects::list_objects(client, bucket, prefix).await?;
                listed.sort_by(|a, b| a.key.cmp(&b.key));
                Ok(listed)
            }
            RecordStore::Memory(mem) => Ok(mem
                .inner
                .read()
                .await
                .objects
                .range(prefix.to_string()..)
                .take_while(|(key, _)| key.starts_with(prefix))
                .map(|(key, o)| ObjectMeta {
                    key: key.clone(),
                    size: o.body.len() as i64,
                    last_modified: Some(o.last_modified),
                })
                .collect()),
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let body = self.get(key).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Load a JSON object and its version tag; a missing object is `None`.
    pub async fn find_json<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<Versioned<T>>, StorageError> {
        match self.get_versioned(key).await {
            Ok(stored) => Ok(Some(Versioned {
                value: serde_json::from_slice(&stored.value)?,
                etag: stored.etag,
            })),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn put_json_if<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        condition: &WriteCondition,
    ) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(value)?;
        self.put_if(key, body, JSON, condition).await
    }
}
