//! Integration tests for the session, form validation and route guards

use insureai::auth::{AuthError, DEMO_EMAIL, DEMO_PASSWORD, Session};
use insureai::routes::{Access, Route, authorize, home_route, nav_items};
use insureai::validation::{Field, LoginForm, SignupForm, ValidationError};

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn signed_in() -> Session {
    let mut session = Session::default();
    session
        .login(&login_form(DEMO_EMAIL, DEMO_PASSWORD))
        .expect("demo credentials log in");
    session
}

mod login_tests {
    use super::*;

    #[test]
    fn test_malformed_emails_never_authenticate() {
        for email in ["", "demo", "demo@example", "demo example.com", "@."] {
            let mut session = Session::default();
            let result = session.login(&login_form(email, DEMO_PASSWORD));

            let err = result.expect_err("malformed email rejected");
            assert!(err.field_errors().is_some(), "{email:?} should fail validation");
            assert!(!session.is_authenticated());
        }
    }

    #[test]
    fn test_demo_pair_logs_in() {
        let session = signed_in();
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some(DEMO_EMAIL));
    }

    #[test]
    fn test_wrong_pair_shows_hint() {
        let mut session = Session::default();
        let err = session
            .login(&login_form("someone@example.com", "hunter22"))
            .expect_err("unknown pair rejected");

        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(
            err.to_string(),
            "Invalid email or password. Try demo@example.com / password"
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_empty_password_is_a_field_error() {
        let mut session = Session::default();
        let err = session
            .login(&login_form(DEMO_EMAIL, ""))
            .expect_err("empty password rejected");

        let errors = err.field_errors().expect("validation failure");
        assert_eq!(errors.get(Field::Password), Some(ValidationError::PasswordRequired));
        assert_eq!(errors.get(Field::Email), None);
    }

    #[test]
    fn test_logout_clears_session() {
        let mut session = signed_in();
        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_provider_sign_in() {
        let mut session = Session::default();
        session.sign_in_with_provider("Google");
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some("Google user"));
    }
}

mod signup_tests {
    use super::*;

    fn valid_signup() -> SignupForm {
        SignupForm {
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_valid_signup_signs_in() {
        let mut session = Session::default();
        session.signup(&valid_signup()).expect("valid signup");
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some("alex@example.com"));
    }

    #[test]
    fn test_signup_reports_every_failing_field() {
        let form = SignupForm {
            name: "   ".to_string(),
            email: "nope".to_string(),
            password: "short".to_string(),
            confirm_password: "different".to_string(),
            accept_terms: false,
        };
        let mut session = Session::default();
        let err = session.signup(&form).expect_err("invalid signup");
        let errors = err.field_errors().expect("validation failure");

        assert_eq!(errors.message(Field::Name).as_deref(), Some("Name is required"));
        assert_eq!(errors.message(Field::Email).as_deref(), Some("Email address is invalid"));
        assert_eq!(
            errors.message(Field::Password).as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(errors.message(Field::ConfirmPassword).as_deref(), Some("Passwords don't match"));
        assert_eq!(
            errors.message(Field::AcceptTerms).as_deref(),
            Some("You must accept the terms and conditions")
        );
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_password_minimum_is_eight_characters() {
        let seven = SignupForm {
            password: "abcdefg".to_string(),
            confirm_password: "abcdefg".to_string(),
            ..valid_signup()
        };
        let mut session = Session::default();
        let err = session.signup(&seven).expect_err("7 characters rejected");
        let errors = err.field_errors().expect("validation failure");
        assert_eq!(errors.get(Field::Password), Some(ValidationError::PasswordTooShort));
        assert!(!session.is_authenticated());

        let eight = SignupForm {
            password: "abcdefgh".to_string(),
            confirm_password: "abcdefgh".to_string(),
            ..valid_signup()
        };
        session.signup(&eight).expect("8 characters accepted");
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_signup_requires_terms() {
        let form = SignupForm {
            accept_terms: false,
            ..valid_signup()
        };
        let mut session = Session::default();
        let err = session.signup(&form).expect_err("terms required");
        let errors = err.field_errors().expect("validation failure");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::AcceptTerms), Some(ValidationError::TermsNotAccepted));
    }
}

mod guard_tests {
    use super::*;

    fn dashboard_routes() -> [Route; 4] {
        [
            Route::Overview {},
            Route::ChatHistory {},
            Route::Purchases {},
            Route::Profile {},
        ]
    }

    #[test]
    fn test_dashboard_denied_when_signed_out() {
        let session = Session::default();
        for route in dashboard_routes() {
            assert_eq!(
                authorize(&route, &session),
                Access::Redirect(Route::Login {}),
                "{route:?}"
            );
        }
    }

    #[test]
    fn test_dashboard_allowed_when_signed_in() {
        let session = signed_in();
        for route in dashboard_routes() {
            assert_eq!(authorize(&route, &session), Access::Allow, "{route:?}");
        }
    }

    #[test]
    fn test_public_routes_always_allowed() {
        assert_eq!(authorize(&Route::Landing {}, &Session::default()), Access::Allow);
        assert_eq!(authorize(&Route::Landing {}, &signed_in()), Access::Allow);
        assert_eq!(authorize(&Route::Login {}, &Session::default()), Access::Allow);
        assert_eq!(authorize(&Route::Signup {}, &Session::default()), Access::Allow);
    }

    #[test]
    fn test_home_route_is_dashboard() {
        assert!(home_route().to_string().starts_with("/dashboard"));
        assert_eq!(home_route(), Route::Overview {});
    }

    #[test]
    fn test_auth_screens_redirect_when_signed_in() {
        let session = signed_in();
        assert_eq!(authorize(&Route::Login {}, &session), Access::Redirect(home_route()));
        assert_eq!(authorize(&Route::Signup {}, &session), Access::Redirect(home_route()));
    }

    #[test]
    fn test_logout_revokes_access() {
        let mut session = signed_in();
        session.logout();
        assert_eq!(
            authorize(&Route::Profile {}, &session),
            Access::Redirect(Route::Login {})
        );
    }

    #[test]
    fn test_paths_parse_to_routes() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Landing {}));
        assert_eq!("/login".parse::<Route>().ok(), Some(Route::Login {}));
        assert_eq!(
            "/dashboard/chat-history".parse::<Route>().ok(),
            Some(Route::ChatHistory {})
        );
        assert_eq!("/dashboard/purchases".parse::<Route>().ok(), Some(Route::Purchases {}));
        assert_eq!("/dashboard/profile".parse::<Route>().ok(), Some(Route::Profile {}));
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            "/nowhere".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["nowhere".to_string()]
            })
        );
    }

    #[test]
    fn test_nav_items_cover_dashboard() {
        let routes: Vec<Route> = nav_items().into_iter().map(|item| item.route).collect();
        assert_eq!(routes, dashboard_routes().to_vec());
        assert_eq!(nav_items()[0].label, "Dashboard");
    }
}
