//! Data provider seam.
//!
//! Screens never own their records. They ask a [`DataProvider`] found in
//! context. The shipped implementation serves the sample document bundled
//! at `assets/sample_data.json`; a real backend plugs in behind the same
//! trait.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, PrimitiveDateTime};

const BUNDLED_SAMPLE_DATA: &str = include_str!("../assets/sample_data.json");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");
time::serde::format_description!(
    minute_stamp,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]"
);

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DataError {
    #[error("Failed to parse sample data: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

pub type DataResult<T> = Result<T, DataError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Chat,
    Call,
}

impl SessionKind {
    pub fn label(self) -> &'static str {
        match self {
            SessionKind::Chat => "AI Chat",
            SessionKind::Call => "Agent Call",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Ai,
    Agent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub sender: Speaker,
    pub text: String,
    #[serde(with = "minute_stamp")]
    pub timestamp: PrimitiveDateTime,
}

/// A past chat or call transcript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: String,
    pub kind: SessionKind,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub summary: String,
    pub messages: Vec<TranscriptLine>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    Expired,
    Pending,
}

impl PolicyStatus {
    pub fn label(self) -> &'static str {
        match self {
            PolicyStatus::Active => "Active",
            PolicyStatus::Expired => "Expired",
            PolicyStatus::Pending => "Pending",
        }
    }
}

/// A purchased insurance product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    /// Product line: auto, home, travel, life or health.
    pub kind: String,
    pub name: String,
    pub policy_number: String,
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
    pub price: f64,
    pub status: PolicyStatus,
    pub coverage: Vec<String>,
    pub documents: Vec<String>,
    #[serde(default)]
    pub renewal_price: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub policy_reminders: bool,
    pub marketing_updates: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePreference {
    pub id: String,
    pub title: String,
    pub description: String,
    pub selected: bool,
}

/// Recommendation card on the dashboard overview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub body: String,
    pub action: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleData {
    pub sessions: Vec<ChatSession>,
    pub policies: Vec<Policy>,
    pub personal_info: PersonalInfo,
    pub notifications: NotificationSettings,
    pub preferences: Vec<InsurancePreference>,
    pub insights: Vec<Insight>,
}

#[async_trait]
pub trait DataProvider: Send + Sync {
    async fn chat_sessions(&self) -> DataResult<Vec<ChatSession>>;

    async fn policies(&self) -> DataResult<Vec<Policy>>;

    async fn personal_info(&self) -> DataResult<PersonalInfo>;

    async fn notification_settings(&self) -> DataResult<NotificationSettings>;

    async fn insurance_preferences(&self) -> DataResult<Vec<InsurancePreference>>;

    async fn insights(&self) -> DataResult<Vec<Insight>>;

    async fn chat_session(&self, id: &str) -> DataResult<ChatSession> {
        self.chat_sessions()
            .await?
            .into_iter()
            .find(|session| session.id == id)
            .ok_or_else(|| DataError::NotFound(id.to_string()))
    }
}

pub type SharedProvider = Arc<dyn DataProvider>;

static BUNDLED: Lazy<DataResult<Arc<SampleData>>> =
    Lazy::new(|| SampleDataProvider::parse(BUNDLED_SAMPLE_DATA).map(Arc::new));

/// Serves a fixed [`SampleData`] document.
#[derive(Clone, Debug)]
pub struct SampleDataProvider {
    data: Arc<SampleData>,
}

impl SampleDataProvider {
    pub fn new(data: SampleData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// The document compiled into the binary.
    pub fn bundled() -> DataResult<Self> {
        match &*BUNDLED {
            Ok(data) => Ok(Self { data: data.clone() }),
            Err(err) => Err(err.clone()),
        }
    }

    pub fn from_json(source: &str) -> DataResult<Self> {
        Self::parse(source).map(Self::new)
    }

    fn parse(source: &str) -> DataResult<SampleData> {
        let data: SampleData = serde_json::from_str(source)?;
        tracing::debug!(
            sessions = data.sessions.len(),
            policies = data.policies.len(),
            "loaded sample data"
        );
        Ok(data)
    }

    pub fn shared(self) -> SharedProvider {
        Arc::new(self)
    }
}

#[async_trait]
impl DataProvider for SampleDataProvider {
    async fn chat_sessions(&self) -> DataResult<Vec<ChatSession>> {
        Ok(self.data.sessions.clone())
    }

    async fn policies(&self) -> DataResult<Vec<Policy>> {
        Ok(self.data.policies.clone())
    }

    async fn personal_info(&self) -> DataResult<PersonalInfo> {
        Ok(self.data.personal_info.clone())
    }

    async fn notification_settings(&self) -> DataResult<NotificationSettings> {
        Ok(self.data.notifications)
    }

    async fn insurance_preferences(&self) -> DataResult<Vec<InsurancePreference>> {
        Ok(self.data.preferences.clone())
    }

    async fn insights(&self) -> DataResult<Vec<Insight>> {
        Ok(self.data.insights.clone())
    }
}

/// Stand-in used when the bundled document fails to load. Every call
/// reports the original error so screens can show it inline.
#[derive(Clone, Debug)]
pub struct UnavailableProvider {
    error: DataError,
}

impl UnavailableProvider {
    pub fn new(error: DataError) -> Self {
        Self { error }
    }

    fn fail<T>(&self) -> DataResult<T> {
        Err(self.error.clone())
    }
}

#[async_trait]
impl DataProvider for UnavailableProvider {
    async fn chat_sessions(&self) -> DataResult<Vec<ChatSession>> {
        self.fail()
    }

    async fn policies(&self) -> DataResult<Vec<Policy>> {
        self.fail()
    }

    async fn personal_info(&self) -> DataResult<PersonalInfo> {
        self.fail()
    }

    async fn notification_settings(&self) -> DataResult<NotificationSettings> {
        self.fail()
    }

    async fn insurance_preferences(&self) -> DataResult<Vec<InsurancePreference>> {
        self.fail()
    }

    async fn insights(&self) -> DataResult<Vec<Insight>> {
        self.fail()
    }
}

/// Bundled provider, or an [`UnavailableProvider`] if it cannot be parsed.
pub fn default_provider() -> SharedProvider {
    match SampleDataProvider::bundled() {
        Ok(provider) => provider.shared(),
        Err(err) => {
            tracing::error!(error = %err, "sample data unavailable");
            Arc::new(UnavailableProvider::new(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn test_bundled_parses() {
        let provider = SampleDataProvider::bundled().unwrap();
        assert_eq!(provider.data.sessions.len(), 4);
        assert_eq!(provider.data.policies.len(), 5);
        assert_eq!(provider.data.preferences.len(), 5);
    }

    #[test]
    fn test_date_formats() {
        let provider = SampleDataProvider::bundled().unwrap();
        let first = &provider.data.sessions[0];
        assert_eq!(first.date, date!(2025 - 05 - 15));
        assert_eq!(first.messages[0].timestamp, datetime!(2025-05-15 14:35));
    }

    #[test]
    fn test_malformed_json() {
        let err = SampleDataProvider::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[tokio::test]
    async fn test_unavailable_provider_reports_error() {
        let err = SampleDataProvider::from_json("[]").unwrap_err();
        let provider: SharedProvider = Arc::new(UnavailableProvider::new(err.clone()));

        assert_eq!(provider.chat_sessions().await.unwrap_err(), err);
        assert_eq!(provider.policies().await.unwrap_err(), err);
        assert_eq!(provider.personal_info().await.unwrap_err(), err);
        assert_eq!(provider.notification_settings().await.unwrap_err(), err);
        assert_eq!(provider.insurance_preferences().await.unwrap_err(), err);
        assert_eq!(provider.insights().await.unwrap_err(), err);
        assert_eq!(provider.chat_session("chat-1").await.unwrap_err(), err);
    }
}
