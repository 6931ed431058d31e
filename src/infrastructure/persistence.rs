use crate::domain::Directory;
use std::fs;

pub struct DirectoryRepository;

impl DirectoryRepository {
    pub fn save_directory(directory: &Directory, filename: &str) -> Result<String, String> {
        match serde_json::to_string_pretty(directory) {
            Ok(json) => {
                match fs::write(filename, &json) {
                    Ok(_) => Ok(filename.to_string()),
                    Err(e) => Err(e.to_string()),
                }
            }
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    pub fn load_directory(filename: &str) -> Result<(Directory, String), String> {
        match fs::read_to_string(filename) {
            Ok(content) => {
                match serde_json::from_str::<Directory>(&content) {
                    Ok(directory) => match directory.validate() {
                        Ok(()) => Ok((directory, filename.to_string())),
                        Err(e) => Err(format!("Unusable directory - {}", e)),
                    },
                    Err(e) => Err(format!("Invalid file format - {}", e)),
                }
            }
            Err(e) => Err(e.to_string()),
        }
    }
}
