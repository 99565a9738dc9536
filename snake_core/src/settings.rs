use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WorldSettings {
    pub width: i32,
    pub height: i32,
}

impl WorldSettings {
    pub fn validate(&self) -> Result<(), String> {
        // The snake starts as 3 cells in a horizontal row.
        if self.width < 3 || self.width > 100 {
            return Err("Field width must be between 3 and 100".to_string());
        }
        if self.height < 1 || self.height > 100 {
            return Err("Field height must be between 1 and 100".to_string());
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e))
    }

    pub fn to_yaml_string(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize settings: {}", e))
    }
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: 15,
            height: 10,
        }
    }
}
