use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The user's profile. Pictures are raw image bytes from the picker,
/// stored as base64 strings in JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub goals: String,
    #[serde(with = "base64_opt")]
    pub profile_picture: Option<Vec<u8>>,
    #[serde(with = "base64_vec")]
    pub progress_pictures: Vec<Vec<u8>>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

mod base64_opt {
    use super::*;

    pub fn serialize<S: Serializer>(bytes: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        bytes.as_ref().map(|b| STANDARD.encode(b)).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|encoded| STANDARD.decode(encoded).map_err(serde::de::Error::custom))
            .transpose()
    }
}

mod base64_vec {
    use super::*;

    pub fn serialize<S: Serializer>(images: &[Vec<u8>], s: S) -> Result<S::Ok, S::Error> {
        images
            .iter()
            .map(|b| STANDARD.encode(b))
            .collect::<Vec<_>>()
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Vec<u8>>, D::Error> {
        Vec::<String>::deserialize(d)?
            .into_iter()
            .map(|encoded| STANDARD.decode(encoded).map_err(serde::de::Error::custom))
            .collect()
    }
}
