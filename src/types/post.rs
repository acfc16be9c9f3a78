use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RPost {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
pub struct PostOwner {
    pub id: Uuid,
    pub email: String,
}

/// Post joined with its owner, as returned by list/single.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub owner: PostOwner,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostView {
    pub fn from_joined(
        (post, owner): (entity::post::Model, Option<entity::account::Model>),
    ) -> Self {
        PostView {
            id: post.id,
            title: post.title,
            description: post.description,
            owner: PostOwner {
                id: post.owner_id,
                email: owner.map(|a| a.email).unwrap_or_default(),
            },
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Post without the owner join, as returned by create/update.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::post::Model> for PostData {
    fn from(m: entity::post::Model) -> Self {
        PostData {
            id: m.id,
            title: m.title,
            description: m.description,
            owner_id: m.owner_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
