use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub services: Vec<String>,
    pub location: String,
    pub price: i64,
    pub approved: bool,
}

impl Provider {
    pub fn offers(&self, slug: &str) -> bool {
        self.services.iter().any(|s| s == slug)
    }
}
