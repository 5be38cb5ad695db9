//! Integration tests for the dashboard screens against the bundled data

use insureai::data::{DataError, DataProvider, SampleDataProvider, SessionKind};
use insureai::history::{HistoryTab, filter_sessions, latest_session, visible_sessions};
use insureai::profile::{Notification, PersonalField, ProfileState, change_password};
use insureai::purchases::{PolicyTab, policies_in_tab, summarize};
use insureai::validation::{PasswordChangeForm, ValidationError};

fn bundled() -> SampleDataProvider {
    SampleDataProvider::bundled().expect("bundled data parses")
}

async fn profile_state() -> ProfileState {
    let provider = bundled();
    ProfileState::new(
        provider.personal_info().await.expect("personal info"),
        provider.notification_settings().await.expect("notifications"),
        provider.insurance_preferences().await.expect("preferences"),
    )
}

mod history_tests {
    use super::*;

    #[tokio::test]
    async fn test_flood_matches_one_chat_and_one_call() {
        let sessions = bundled().chat_sessions().await.expect("sessions");
        let found = filter_sessions(&sessions, "flood");

        assert_eq!(found.len(), 2);
        assert_eq!(found.iter().filter(|s| s.kind == SessionKind::Chat).count(), 1);
        assert_eq!(found.iter().filter(|s| s.kind == SessionKind::Call).count(), 1);
    }

    #[tokio::test]
    async fn test_search_ignores_case() {
        let sessions = bundled().chat_sessions().await.expect("sessions");
        assert_eq!(
            filter_sessions(&sessions, "FLOOD").len(),
            filter_sessions(&sessions, "flood").len()
        );
    }

    #[tokio::test]
    async fn test_empty_query_keeps_everything() {
        let sessions = bundled().chat_sessions().await.expect("sessions");
        assert_eq!(filter_sessions(&sessions, "").len(), sessions.len());
        assert_eq!(visible_sessions(&sessions, "", HistoryTab::All).len(), 4);
    }

    #[tokio::test]
    async fn test_tabs_combine_with_search() {
        let sessions = bundled().chat_sessions().await.expect("sessions");

        let calls = visible_sessions(&sessions, "flood", HistoryTab::Calls);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "call-1");

        let chats = visible_sessions(&sessions, "", HistoryTab::Chats);
        assert!(chats.iter().all(|s| s.kind == SessionKind::Chat));
        assert_eq!(chats.len(), 2);

        assert!(visible_sessions(&sessions, "no such words", HistoryTab::All).is_empty());
    }

    #[tokio::test]
    async fn test_latest_session_is_newest() {
        let sessions = bundled().chat_sessions().await.expect("sessions");
        assert_eq!(latest_session(&sessions).map(|s| s.id.as_str()), Some("chat-1"));
    }
}

mod purchases_tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_counts() {
        let policies = bundled().policies().await.expect("policies");
        let summary = summarize(&policies);

        assert_eq!(summary.active, 3);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.expired, 1);
        assert!((summary.annual_premium - 2530.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_tabs_partition_policies() {
        let policies = bundled().policies().await.expect("policies");
        let split: usize = [PolicyTab::Active, PolicyTab::Pending, PolicyTab::Expired]
            .into_iter()
            .map(|tab| policies_in_tab(&policies, tab).len())
            .sum();

        assert_eq!(split, policies.len());
        assert_eq!(policies_in_tab(&policies, PolicyTab::All).len(), policies.len());
    }
}

mod profile_tests {
    use super::*;

    #[tokio::test]
    async fn test_double_toggle_is_identity() {
        let mut state = profile_state().await;
        let before = state.clone();

        for which in Notification::ALL {
            state.toggle_notification(which);
            state.toggle_notification(which);
        }
        assert!(state.toggle_preference("auto"));
        assert!(state.toggle_preference("auto"));

        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_cancel_restores_snapshot() {
        let mut state = profile_state().await;
        let original = state.info.clone();

        state.begin_edit();
        state.update(PersonalField::FirstName, "Sam".to_string());
        state.update(PersonalField::City, "Elsewhere".to_string());
        assert_eq!(state.info.field(PersonalField::FirstName), "Sam");

        state.cancel_edit();
        assert!(!state.is_editing());
        assert_eq!(state.info, original);
    }

    #[tokio::test]
    async fn test_commit_keeps_edits() {
        let mut state = profile_state().await;
        state.toggle_edit();
        state.update(PersonalField::Phone, "(555) 000-1111".to_string());
        state.commit_edit();

        assert!(!state.is_editing());
        assert_eq!(state.info.field(PersonalField::Phone), "(555) 000-1111");
    }

    #[test]
    fn test_password_change_clears_form() {
        let mut form = PasswordChangeForm {
            current_password: "old".to_string(),
            new_password: "brand-new-pass".to_string(),
            confirm_password: "brand-new-pass".to_string(),
        };
        change_password(&mut form).expect("valid change");
        assert_eq!(form, PasswordChangeForm::default());
    }

    #[test]
    fn test_password_change_reports_mismatch_first() {
        let mut form = PasswordChangeForm {
            current_password: "old".to_string(),
            new_password: "short".to_string(),
            confirm_password: "other".to_string(),
        };
        let err = change_password(&mut form).expect_err("mismatch");
        assert_eq!(err, ValidationError::NewPasswordMismatch);
        assert_eq!(form.new_password, "short");
    }
}

mod provider_tests {
    use super::*;

    #[tokio::test]
    async fn test_chat_session_lookup() {
        let provider = bundled();
        let session = provider.chat_session("call-1").await.expect("known id");
        assert_eq!(session.kind, SessionKind::Call);

        let err = provider.chat_session("missing").await.expect_err("unknown id");
        assert!(matches!(err, DataError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_shared_provider_serves_same_data() {
        let shared = bundled().shared();
        assert_eq!(shared.policies().await.expect("policies").len(), 5);
        assert_eq!(shared.insights().await.expect("insights").len(), 2);
        assert_eq!(shared.personal_info().await.expect("info").first_name, "Alex");
    }
}
