//! In-memory adapters for the outgoing ports. Clones share their storage,
//! so a test can hand one copy to a service and inspect the other.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{NewStaffUser, StaffUser};
use crate::modules::auth::application::ports::outgoing::staff_user_repository::{
    StaffUserRepository, StaffUserRepositoryError,
};
use crate::modules::contact_info::application::domain::entities::ContactInfo;
use crate::modules::contact_info::application::ports::outgoing::{
    ContactInfoRepository, ContactInfoRepositoryError,
};
use crate::modules::contact_message::application::domain::entities::{
    ContactMessage, NewContactMessage,
};
use crate::modules::contact_message::application::ports::outgoing::{
    ContactMessageRepository, ContactMessageRepositoryError,
};
use crate::modules::content::application::domain::{ContentKind, ContentRecord};
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};
use crate::modules::media::application::ports::outgoing::{MediaStorage, MediaStorageError};
use crate::modules::profile::application::domain::entities::{
    Profile, ProfileFields, ProfileText,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::modules::testimonial::application::domain::entities::{NewTestimonial, Testimonial};
use crate::modules::testimonial::application::ports::outgoing::{
    TestimonialRepository, TestimonialRepositoryError,
};
use crate::shared::i18n::{LanguageCode, Translations};

// ──────────────────────────────────────────────────────────
// Staff users
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryStaffUserRepository {
    users: Arc<Mutex<Vec<StaffUser>>>,
}

impl InMemoryStaffUserRepository {
    pub fn with_user(self, username: &str, password_hash: &str, is_staff: bool) -> Self {
        self.users.lock().unwrap().push(StaffUser {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: password_hash.to_string(),
            is_staff,
            created_at: Utc::now(),
        });
        self
    }
}

#[async_trait]
impl StaffUserRepository for InMemoryStaffUserRepository {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StaffUser>, StaffUserRepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<StaffUser>, StaffUserRepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn create(&self, user: NewStaffUser) -> Result<StaffUser, StaffUserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(StaffUserRepositoryError::UserAlreadyExists);
        }
        let stored = StaffUser {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            is_staff: true,
            created_at: Utc::now(),
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        password_hash: String,
    ) -> Result<(), StaffUserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(StaffUserRepositoryError::UserNotFound)?;
        user.password_hash = password_hash;
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    row: Arc<Mutex<Option<Profile>>>,
}

fn empty_profile() -> Profile {
    Profile {
        profile_picture: None,
        resume: None,
        translations: Translations::new(),
    }
}

impl InMemoryProfileRepository {
    pub fn with_translation(self, language: &LanguageCode, text: ProfileText) -> Self {
        self.row
            .lock()
            .unwrap()
            .get_or_insert_with(empty_profile)
            .translations
            .insert(language.clone(), text);
        self
    }

    pub fn exists(&self) -> bool {
        self.row.lock().unwrap().is_some()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn load_or_init(
        &self,
        default_language: &LanguageCode,
        fallback: ProfileText,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut row = self.row.lock().unwrap();
        let profile = row.get_or_insert_with(empty_profile);
        if !profile.translations.contains(default_language) {
            profile
                .translations
                .insert(default_language.clone(), fallback);
        }
        Ok(profile.clone())
    }

    async fn create(
        &self,
        fields: ProfileFields,
        translations: Translations<ProfileText>,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut row = self.row.lock().unwrap();
        if row.is_some() {
            return Err(ProfileRepositoryError::AlreadyExists);
        }
        let profile = Profile {
            profile_picture: fields.profile_picture,
            resume: fields.resume,
            translations,
        };
        *row = Some(profile.clone());
        Ok(profile)
    }

    async fn update(&self, fields: ProfileFields) -> Result<Profile, ProfileRepositoryError> {
        let mut row = self.row.lock().unwrap();
        let profile = row.get_or_insert_with(empty_profile);
        profile.profile_picture = fields.profile_picture;
        profile.resume = fields.resume;
        Ok(profile.clone())
    }

    async fn upsert_translation(
        &self,
        language: &LanguageCode,
        text: ProfileText,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut row = self.row.lock().unwrap();
        let profile = row.get_or_insert_with(empty_profile);
        profile.translations.insert(language.clone(), text);
        Ok(profile.clone())
    }

    async fn remove_translation(
        &self,
        language: &LanguageCode,
    ) -> Result<Profile, ProfileRepositoryError> {
        let mut row = self.row.lock().unwrap();
        let profile = row
            .as_mut()
            .ok_or(ProfileRepositoryError::TranslationNotFound)?;
        profile
            .translations
            .remove(language)
            .ok_or(ProfileRepositoryError::TranslationNotFound)?;
        Ok(profile.clone())
    }
}

// ──────────────────────────────────────────────────────────
// Contact info
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryContactInfoRepository {
    row: Arc<Mutex<Option<ContactInfo>>>,
}

impl InMemoryContactInfoRepository {
    pub fn with_row(self, info: ContactInfo) -> Self {
        *self.row.lock().unwrap() = Some(info);
        self
    }
}

#[async_trait]
impl ContactInfoRepository for InMemoryContactInfoRepository {
    async fn load_or_init(
        &self,
        defaults: ContactInfo,
    ) -> Result<ContactInfo, ContactInfoRepositoryError> {
        let mut row = self.row.lock().unwrap();
        let info = row.get_or_insert_with(|| defaults.clone());
        if info.email.is_empty() {
            info.email = defaults.email;
        }
        Ok(info.clone())
    }

    async fn create(&self, info: ContactInfo) -> Result<ContactInfo, ContactInfoRepositoryError> {
        let mut row = self.row.lock().unwrap();
        if row.is_some() {
            return Err(ContactInfoRepositoryError::AlreadyExists);
        }
        *row = Some(info.clone());
        Ok(info)
    }

    async fn update(&self, info: ContactInfo) -> Result<ContactInfo, ContactInfoRepositoryError> {
        *self.row.lock().unwrap() = Some(info.clone());
        Ok(info)
    }
}

// ──────────────────────────────────────────────────────────
// Contact messages
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryContactMessageRepository {
    messages: Arc<Mutex<Vec<ContactMessage>>>,
    failure: Option<ContactMessageRepositoryError>,
}

impl InMemoryContactMessageRepository {
    /// Every call fails with `error`.
    pub fn failing_with(mut self, error: ContactMessageRepositoryError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), ContactMessageRepositoryError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryContactMessageRepository {
    async fn create(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError> {
        self.check()?;
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
            created_at: Utc::now(),
        };
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn list(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ContactMessage>, ContactMessageRepositoryError> {
        self.check()?;
        let needle = search.map(|s| s.to_lowercase());
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|m| match &needle {
                Some(n) => [&m.name, &m.email, &m.subject, &m.message]
                    .iter()
                    .any(|field| field.to_lowercase().contains(n)),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<ContactMessage>, ContactMessageRepositoryError> {
        self.check()?;
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactMessageRepositoryError> {
        self.check()?;
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() == before {
            return Err(ContactMessageRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Testimonials
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryTestimonialRepository {
    testimonials: Arc<Mutex<Vec<Testimonial>>>,
}

impl InMemoryTestimonialRepository {
    pub fn count(&self) -> usize {
        self.testimonials.lock().unwrap().len()
    }
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonialRepository {
    async fn create(&self, data: NewTestimonial) -> Result<Testimonial, TestimonialRepositoryError> {
        let testimonial = Testimonial {
            id: Uuid::new_v4(),
            name: data.name,
            role_company: data.role_company,
            quote: data.quote,
            is_approved: false,
            created_at: Utc::now(),
        };
        self.testimonials.lock().unwrap().push(testimonial.clone());
        Ok(testimonial)
    }

    async fn list(
        &self,
        approved: Option<bool>,
        search: Option<String>,
    ) -> Result<Vec<Testimonial>, TestimonialRepositoryError> {
        let needle = search.map(|s| s.to_lowercase());
        Ok(self
            .testimonials
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|t| approved.map_or(true, |a| t.is_approved == a))
            .filter(|t| match &needle {
                Some(n) => [&t.name, &t.role_company, &t.quote]
                    .iter()
                    .any(|field| field.to_lowercase().contains(n)),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn set_approval(
        &self,
        ids: &[Uuid],
        approved: bool,
    ) -> Result<u64, TestimonialRepositoryError> {
        let mut changed = 0;
        for t in self.testimonials.lock().unwrap().iter_mut() {
            if ids.contains(&t.id) {
                t.is_approved = approved;
                changed += 1;
            }
        }
        Ok(changed)
    }

    async fn count_pending(&self) -> Result<u64, TestimonialRepositoryError> {
        Ok(self
            .testimonials
            .lock()
            .unwrap()
            .iter()
            .filter(|t| !t.is_approved)
            .count() as u64)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError> {
        let mut testimonials = self.testimonials.lock().unwrap();
        let before = testimonials.len();
        testimonials.retain(|t| t.id != id);
        if testimonials.len() == before {
            return Err(TestimonialRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Content
// ──────────────────────────────────────────────────────────

/// Keeps entries in insertion order whatever the kind.
pub struct InMemoryContentRepository<K: ContentKind> {
    records: Arc<Mutex<Vec<ContentRecord<K>>>>,
    failure: Option<ContentRepositoryError>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: ContentKind> Default for InMemoryContentRepository<K> {
    fn default() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            _kind: PhantomData,
        }
    }
}

impl<K: ContentKind> Clone for InMemoryContentRepository<K> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            failure: self.failure.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: ContentKind> InMemoryContentRepository<K> {
    /// Every call fails with `error`.
    pub fn failing_with(mut self, error: ContentRepositoryError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), ContentRepositoryError> {
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn modify<F>(&self, id: Uuid, change: F) -> Result<ContentRecord<K>, ContentRepositoryError>
    where
        F: FnOnce(&mut ContentRecord<K>) -> Result<(), ContentRepositoryError>,
    {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ContentRepositoryError::NotFound)?;
        change(record)?;
        Ok(record.clone())
    }
}

#[async_trait]
impl<K: ContentKind> ContentRepository<K> for InMemoryContentRepository<K> {
    async fn list(
        &self,
        search: Option<String>,
    ) -> Result<Vec<ContentRecord<K>>, ContentRepositoryError> {
        self.check()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| search.as_deref().map_or(true, |term| r.matches(term)))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContentRecord<K>>, ContentRepositoryError> {
        self.check()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn create(
        &self,
        data: K,
        translations: Translations<K::Text>,
    ) -> Result<ContentRecord<K>, ContentRepositoryError> {
        self.check()?;
        let record = ContentRecord {
            id: Uuid::new_v4(),
            data,
            translations,
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: Uuid, data: K) -> Result<ContentRecord<K>, ContentRepositoryError> {
        self.modify(id, |record| {
            record.data = data;
            Ok(())
        })
    }

    async fn upsert_translation(
        &self,
        id: Uuid,
        language: &LanguageCode,
        text: K::Text,
    ) -> Result<ContentRecord<K>, ContentRepositoryError> {
        self.modify(id, |record| {
            record.translations.insert(language.clone(), text);
            Ok(())
        })
    }

    async fn remove_translation(
        &self,
        id: Uuid,
        language: &LanguageCode,
    ) -> Result<ContentRecord<K>, ContentRepositoryError> {
        self.modify(id, |record| {
            record
                .translations
                .remove(language)
                .map(|_| ())
                .ok_or(ContentRepositoryError::TranslationNotFound)
        })
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        self.check()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(ContentRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ──────────────────────────────────────────────────────────
// Media
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryMediaStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryMediaStorage {
    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaStorage for InMemoryMediaStorage {
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), MediaStorageError> {
        self.files
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_insert_with(|| bytes.to_vec());
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, MediaStorageError> {
        Ok(self.files.lock().unwrap().get(path).cloned())
    }
}
