use crate::{domain::authentication::entities::Session, entity::sessions};

impl From<&sessions::Model> for Session {
    fn from(model: &sessions::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            created_at: model.created_at.to_utc(),
            expires_at: model.expires_at.to_utc(),
            revoked_at: model.revoked_at.map(|at| at.to_utc()),
        }
    }
}

impl From<sessions::Model> for Session {
    fn from(model: sessions::Model) -> Self {
        Self::from(&model)
    }
}
