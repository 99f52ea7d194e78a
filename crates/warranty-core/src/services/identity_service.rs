// ============================================================================
// Warranty Core - Identity Service
// File: crates/warranty-core/src/services/identity_service.rs
// ============================================================================
//! Identity resolver: login, signup, logout, and session bootstrap

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Duration;
use tracing::{info, warn};

use crate::domain::{NewAccount, Principal, RegisteredPrincipal, Role, Session};
use crate::error::DomainError;
use crate::repositories::{PrincipalRegistry, SessionStore};
use warranty_security::PasswordService;
use warranty_shared::utils::mask_email;

/// Identity service for login/signup/logout flows and session restore.
///
/// Credentials are checked against the built-in demo principals first,
/// then the signup registry. Only one login or signup may be in flight at
/// a time per service instance; overlapping calls fail with
/// [`DomainError::ConcurrentAuthOperation`].
pub struct IdentityService<R: PrincipalRegistry, S: SessionStore> {
    registry: Arc<R>,
    sessions: Arc<S>,
    builtins: Vec<RegisteredPrincipal>,
    session_ttl: Duration,
    auth_in_flight: AtomicBool,
}

impl<R: PrincipalRegistry, S: SessionStore> IdentityService<R, S> {
    pub fn new(
        registry: Arc<R>,
        sessions: Arc<S>,
        builtins: Vec<RegisteredPrincipal>,
        session_ttl_hours: i64,
    ) -> Self {
        Self {
            registry,
            sessions,
            builtins,
            session_ttl: Duration::hours(session_ttl_hours),
            auth_in_flight: AtomicBool::new(false),
        }
    }

    /// Login with email and password.
    ///
    /// On success the session is persisted with an absolute expiry of
    /// now + TTL, fixed at creation. The tenant hint is attached to the
    /// principal snapshot unless the role is the unrestricted platform
    /// administrator.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        tenant_hint: Option<&str>,
    ) -> Result<Session, DomainError> {
        let _guard = self.begin_auth()?;
        info!("Login attempt for email: {}", mask_email(email));

        // 1. Find account - built-in demo principals first, then registry
        let record = self.find_account(email).await?.ok_or_else(|| {
            warn!("Login failed: unknown email: {}", mask_email(email));
            DomainError::InvalidCredentials
        })?;

        if !record.principal.is_active {
            warn!("Login failed: principal not active: {}", mask_email(email));
            return Err(DomainError::PrincipalNotActive);
        }

        // 2. Verify password against the stored hash
        let password_valid = PasswordService::verify(password, &record.password_hash)
            .map_err(|_e| DomainError::InvalidCredentials)?;

        if !password_valid {
            warn!("Login failed: invalid password for: {}", mask_email(email));
            return Err(DomainError::InvalidCredentials);
        }

        // 3. Attach tenant hint; the platform admin operates tenant-free
        let mut principal = record.principal.clone();
        if let Some(hint) = tenant_hint {
            if !principal.role.is_unrestricted_admin() {
                principal.tenant = Some(hint.to_string());
            }
        }

        // 4. Issue and persist the session
        let session = Session::issue(principal, self.session_ttl);
        self.sessions.save(&session).await?;

        info!("Login successful for: {}", mask_email(email));
        Ok(session)
    }

    /// Register a new account and immediately log it in.
    pub async fn signup(&self, account: NewAccount) -> Result<Session, DomainError> {
        let _guard = self.begin_auth()?;
        info!("Signup attempt for email: {}", mask_email(&account.email));

        // 1. Reject duplicate emails, built-in or registered
        if self.find_account(&account.email).await?.is_some() {
            warn!("Signup failed: email already exists: {}", mask_email(&account.email));
            return Err(DomainError::DuplicateAccount(account.email));
        }

        // 2. Hash the password; plaintext never reaches the registry
        let password_hash = PasswordService::hash(&account.password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;

        // 3. Create the principal with the default unprivileged role
        let principal = Principal::new(account.email, account.display_name, Role::default());
        let created = self
            .registry
            .create(&RegisteredPrincipal {
                principal,
                password_hash,
            })
            .await?;

        // 4. Same side effects as login
        let session = Session::issue(created.principal, self.session_ttl);
        self.sessions.save(&session).await?;

        info!("Signup successful for: {}", mask_email(&session.principal.email));
        Ok(session)
    }

    /// Clear the persisted session. Always succeeds; a storage failure is
    /// logged and the caller still ends up unauthenticated.
    pub async fn logout(&self) {
        if let Err(e) = self.sessions.clear().await {
            warn!("Logout: failed to clear session store: {}", e);
        }
        info!("Logged out");
    }

    /// Current principal, or `None`. A session past expiry is purged
    /// silently - expiry is a state transition, not an error.
    pub async fn current_principal(&self) -> Result<Option<Principal>, DomainError> {
        match self.sessions.load().await? {
            Some(session) if session.is_expired() => {
                self.purge_expired().await;
                Ok(None)
            }
            Some(session) => Ok(Some(session.principal)),
            None => Ok(None),
        }
    }

    /// Restore a persisted session at startup.
    ///
    /// A valid session is restored with no re-validation against the
    /// registry; an expired one is purged silently.
    pub async fn bootstrap(&self) -> Result<Option<Principal>, DomainError> {
        match self.sessions.load().await? {
            Some(session) if session.is_expired() => {
                self.purge_expired().await;
                Ok(None)
            }
            Some(session) => {
                info!(
                    "Restored session for: {}",
                    mask_email(&session.principal.email)
                );
                Ok(Some(session.principal))
            }
            None => Ok(None),
        }
    }

    async fn purge_expired(&self) {
        tracing::debug!("Session expired, purging");
        if let Err(e) = self.sessions.clear().await {
            warn!("Failed to purge expired session: {}", e);
        }
    }

    async fn find_account(&self, email: &str) -> Result<Option<RegisteredPrincipal>, DomainError> {
        let email = email.trim().to_lowercase();
        if let Some(builtin) = self.builtins.iter().find(|b| b.principal.email == email) {
            return Ok(Some(builtin.clone()));
        }
        self.registry.find_by_email(&email).await
    }

    fn begin_auth(&self) -> Result<AuthGuard<'_>, DomainError> {
        if self
            .auth_in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_err()
        {
            return Err(DomainError::ConcurrentAuthOperation);
        }
        Ok(AuthGuard {
            flag: &self.auth_in_flight,
        })
    }
}

/// Releases the in-flight flag when an auth operation completes.
struct AuthGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for AuthGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockPrincipalRegistry, MockSessionStore};
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    fn builtin(email: &str, password: &str, role: Role) -> RegisteredPrincipal {
        RegisteredPrincipal {
            principal: Principal::new(email.into(), "Demo".into(), role),
            password_hash: PasswordService::hash(password).unwrap(),
        }
    }

    fn service_with(
        builtins: Vec<RegisteredPrincipal>,
        registry: MockPrincipalRegistry,
        sessions: MockSessionStore,
    ) -> IdentityService<MockPrincipalRegistry, MockSessionStore> {
        IdentityService::new(Arc::new(registry), Arc::new(sessions), builtins, 24)
    }

    #[tokio::test]
    async fn test_login_issues_24h_session() {
        let builtins = vec![builtin("retailer@acme.com", "retailer123", Role::BrandRetailer)];
        let mut registry = MockPrincipalRegistry::new();
        registry.expect_find_by_email().never();
        let mut sessions = MockSessionStore::new();
        let saved = Arc::new(Mutex::new(None));
        let saved_clone = saved.clone();
        sessions.expect_save().returning(move |s| {
            *saved_clone.lock().unwrap() = Some(s.clone());
            Ok(())
        });

        let service = service_with(builtins, registry, sessions);
        let before = Utc::now();
        let session = service
            .login("retailer@acme.com", "retailer123", None)
            .await
            .unwrap();
        let after = Utc::now();

        assert_eq!(session.principal.email, "retailer@acme.com");
        assert!(session.expires_at >= before + Duration::hours(24));
        assert!(session.expires_at <= after + Duration::hours(24));
        // The exact issued session was persisted
        assert_eq!(saved.lock().unwrap().as_ref(), Some(&session));
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let builtins = vec![builtin("retailer@acme.com", "retailer123", Role::BrandRetailer)];
        let mut registry = MockPrincipalRegistry::new();
        registry.expect_find_by_email().never();
        let mut sessions = MockSessionStore::new();
        sessions.expect_save().never();

        let service = service_with(builtins, registry, sessions);
        let err = service
            .login("retailer@acme.com", "wrong", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_email() {
        let mut registry = MockPrincipalRegistry::new();
        registry.expect_find_by_email().returning(|_| Ok(None));
        let mut sessions = MockSessionStore::new();
        sessions.expect_save().never();

        let service = service_with(vec![], registry, sessions);
        let err = service
            .login("nobody@example.com", "whatever", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_tenant_hint_attached_except_for_platform_admin() {
        let builtins = vec![
            builtin("admin@warrantyhub.io", "admin123", Role::SystemAdmin),
            builtin("retailer@acme.com", "retailer123", Role::BrandRetailer),
        ];
        let mut sessions = MockSessionStore::new();
        sessions.expect_save().returning(|_| Ok(()));
        let service = service_with(builtins, MockPrincipalRegistry::new(), sessions);

        let admin = service
            .login("admin@warrantyhub.io", "admin123", Some("acme"))
            .await
            .unwrap();
        assert_eq!(admin.principal.tenant, None);

        let retailer = service
            .login("retailer@acme.com", "retailer123", Some("acme"))
            .await
            .unwrap();
        assert_eq!(retailer.principal.tenant.as_deref(), Some("acme"));
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicate_email() {
        let builtins = vec![builtin("retailer@acme.com", "retailer123", Role::BrandRetailer)];
        let mut registry = MockPrincipalRegistry::new();
        registry.expect_create().never();
        let mut sessions = MockSessionStore::new();
        sessions.expect_save().never();

        let service = service_with(builtins, registry, sessions);
        let err = service
            .signup(NewAccount {
                email: "retailer@acme.com".into(),
                display_name: "Impostor".into(),
                password: "whatever123".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateAccount(_)));
    }

    #[tokio::test]
    async fn test_signup_registers_and_authenticates() {
        let mut registry = MockPrincipalRegistry::new();
        registry.expect_find_by_email().returning(|_| Ok(None));
        registry
            .expect_create()
            .returning(|record| Ok(record.clone()));
        let mut sessions = MockSessionStore::new();
        sessions.expect_save().times(1).returning(|_| Ok(()));

        let service = service_with(vec![], registry, sessions);
        let session = service
            .signup(NewAccount {
                email: "new@example.com".into(),
                display_name: "New User".into(),
                password: "longenough".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.principal.email, "new@example.com");
        assert_eq!(session.principal.role, Role::User);
        assert_ne!(session.principal.id, Uuid::nil());
        assert!(!session.is_expired());
    }

    #[tokio::test]
    async fn test_signup_never_stores_plaintext() {
        let mut registry = MockPrincipalRegistry::new();
        registry.expect_find_by_email().returning(|_| Ok(None));
        registry.expect_create().returning(|record| {
            assert_ne!(record.password_hash, "longenough");
            assert!(record.password_hash.starts_with("$argon2"));
            Ok(record.clone())
        });
        let mut sessions = MockSessionStore::new();
        sessions.expect_save().returning(|_| Ok(()));

        let service = service_with(vec![], registry, sessions);
        service
            .signup(NewAccount {
                email: "new@example.com".into(),
                display_name: "New User".into(),
                password: "longenough".into(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_bootstrap_restores_valid_session() {
        let principal = Principal::new("customer@example.com".into(), "Customer".into(), Role::Customer);
        let session = Session::issue(principal.clone(), Duration::hours(24));
        let mut sessions = MockSessionStore::new();
        let stored = session.clone();
        sessions.expect_load().returning(move || Ok(Some(stored.clone())));
        sessions.expect_clear().never();

        let service = service_with(vec![], MockPrincipalRegistry::new(), sessions);
        let restored = service.bootstrap().await.unwrap();
        assert_eq!(restored, Some(principal));
    }

    #[tokio::test]
    async fn test_bootstrap_purges_expired_session() {
        let principal = Principal::new("customer@example.com".into(), "Customer".into(), Role::Customer);
        let mut session = Session::issue(principal, Duration::hours(24));
        session.expires_at = Utc::now() - Duration::seconds(1);

        let mut sessions = MockSessionStore::new();
        let stored = session.clone();
        sessions.expect_load().returning(move || Ok(Some(stored.clone())));
        sessions.expect_clear().times(1).returning(|| Ok(()));

        let service = service_with(vec![], MockPrincipalRegistry::new(), sessions);
        let restored = service.bootstrap().await.unwrap();
        assert_eq!(restored, None);
    }

    #[tokio::test]
    async fn test_every_builtin_demo_credential_logs_in() {
        let mut sessions = MockSessionStore::new();
        sessions.expect_save().returning(|_| Ok(()));
        let service = service_with(
            crate::seed::builtin_credentials().unwrap(),
            MockPrincipalRegistry::new(),
            sessions,
        );

        for (principal, password) in crate::seed::builtin_principals() {
            let session = service
                .login(&principal.email, password, None)
                .await
                .unwrap();
            assert_eq!(session.principal.role, principal.role);
            assert!(service.login(&principal.email, "wrong", None).await.is_err());
        }
    }

    #[tokio::test]
    async fn test_sequential_auth_operations_release_the_guard() {
        let builtins = vec![builtin("retailer@acme.com", "retailer123", Role::BrandRetailer)];
        let mut sessions = MockSessionStore::new();
        sessions.expect_save().returning(|_| Ok(()));
        let service = service_with(builtins, MockPrincipalRegistry::new(), sessions);

        // A failed attempt must release the in-flight guard too.
        assert!(service.login("retailer@acme.com", "bad", None).await.is_err());
        assert!(service.login("retailer@acme.com", "retailer123", None).await.is_ok());
        assert!(service.login("retailer@acme.com", "retailer123", None).await.is_ok());
    }
}
