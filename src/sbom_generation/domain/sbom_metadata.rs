/// SbomMetadata value object: document-level header fields
#[derive(Debug, Clone)]
pub struct SbomMetadata {
    name: String,
    namespace: String,
    creators: Vec<String>,
    created: String,
}

impl SbomMetadata {
    pub fn new(name: String, namespace: String, creators: Vec<String>, created: String) -> Self {
        Self {
            name,
            namespace,
            creators,
            created,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn creators(&self) -> &[String] {
        &self.creators
    }

    pub fn created(&self) -> &str {
        &self.created
    }
}
