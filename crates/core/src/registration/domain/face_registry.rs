use std::time::{SystemTime, UNIX_EPOCH};

/// A subject registered through the wizard. `image_data` is an inline image
/// (data URI) and opaque to everything but the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFace {
    pub id: String,
    pub name: String,
    pub image_data: String,
}

/// Append-only list of registered subjects, alive for the process lifetime.
///
/// Ids are derived from the wall clock in milliseconds (`reg-<millis>`); two
/// registrations within the same millisecond get consecutive ids.
#[derive(Debug, Default)]
pub struct FaceRegistry {
    faces: Vec<RegisteredFace>,
    last_stamp: Option<u128>,
}

impl FaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn faces(&self) -> &[RegisteredFace] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn register(&mut self, name: impl Into<String>, image_data: impl Into<String>) -> &RegisteredFace {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        self.register_at(now, name.into(), image_data.into())
    }

    fn register_at(&mut self, millis: u128, name: String, image_data: String) -> &RegisteredFace {
        let stamp = match self.last_stamp {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last_stamp = Some(stamp);

        let face = RegisteredFace {
            id: format!("reg-{stamp}"),
            name,
            image_data,
        };
        log::info!("registered face {} ({})", face.id, face.name);
        self.faces.push(face);
        &self.faces[self.faces.len() - 1]
    }
}
