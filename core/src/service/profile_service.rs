use anyhow::Result;
use tracing::warn;

use crate::error::{DecodeError, ProfileError};
use crate::model::profile::UserProfile;
use crate::repository::LifestyleRepository;

/// Text fields to change; `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub goals: Option<String>,
}

pub struct ProfileService<R: LifestyleRepository> {
    repo: R,
    profile: UserProfile,
}

impl<R: LifestyleRepository> ProfileService<R> {
    pub fn load(repo: R) -> Self {
        let profile = repo.load_profile().unwrap_or_else(|e| {
            if !matches!(e, DecodeError::Missing { .. }) {
                warn!(error = %e, "profile unreadable, starting blank");
            }
            UserProfile::default()
        });
        Self { repo, profile }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn update(&mut self, update: ProfileUpdate) {
        let ProfileUpdate { first_name, last_name, gender, goals } = update;
        if let Some(v) = first_name {
            self.profile.first_name = v;
        }
        if let Some(v) = last_name {
            self.profile.last_name = v;
        }
        if let Some(v) = gender {
            self.profile.gender = v;
        }
        if let Some(v) = goals {
            self.profile.goals = v;
        }
    }

    pub fn set_profile_picture(&mut self, image: Vec<u8>) {
        self.profile.profile_picture = Some(image);
    }

    pub fn add_progress_picture(&mut self, image: Vec<u8>) {
        self.profile.progress_pictures.push(image);
    }

    pub fn remove_progress_picture(&mut self, index: usize) -> Result<Vec<u8>, ProfileError> {
        let len = self.profile.progress_pictures.len();
        if index >= len {
            return Err(ProfileError::IndexOutOfRange { index, len });
        }
        Ok(self.profile.progress_pictures.remove(index))
    }

    pub fn save(&self) -> Result<()> {
        self.repo.save_profile(&self.profile)
    }
}
