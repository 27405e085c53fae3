//! End-to-end login flow tests over in-memory collaborator fakes.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use reporthub_auth::authn::{Authenticator, LoginRequest, RegisterRequest};
use reporthub_auth::client::ClientInfo;
use reporthub_auth::gateway::{CredentialStore, LoginEventRecorder, RolePermissionResolver};
use reporthub_auth::jwt::{JwtDecoder, JwtEncoder};
use reporthub_auth::password::PasswordHasher;
use reporthub_core::config::auth::AuthConfig;
use reporthub_core::result::AppResult;
use reporthub_entity::login::{CreateLoginLog, LoginLog};
use reporthub_entity::user::{CreateUser, User};
use reporthub_service::{LoginOutcome, LoginService, UserDirectory};

/// Shared in-memory backend standing in for the credential store and the
/// role/permission tables.
#[derive(Default)]
struct MemoryBackend {
    users: Mutex<HashMap<i64, User>>,
    assignments: Mutex<Vec<(i64, i64)>>,
}

struct MemoryStore(Arc<MemoryBackend>);

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_id(&self, user_id: i64) -> AppResult<Option<User>> {
        Ok(self.0.users.lock().unwrap().get(&user_id).cloned())
    }

    async fn create(&self, user: &CreateUser) -> AppResult<i64> {
        let mut users = self.0.users.lock().unwrap();
        let user_id = users.len() as i64 + 1;
        users.insert(
            user_id,
            User {
                user_id,
                username: user.username.clone(),
                email: user.email.clone(),
                password_hash: user.password_hash.clone(),
                password_salt: user.password_salt.clone(),
                is_active: user.is_active,
                created_at: Utc::now(),
            },
        );
        Ok(user_id)
    }

    async fn assign_role(&self, user_id: i64, role_id: i64) -> AppResult<()> {
        self.0.assignments.lock().unwrap().push((user_id, role_id));
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.0.users.lock().unwrap().values().cloned().collect())
    }
}

/// Resolver over the shared backend with a static role table.
struct MemoryResolver {
    backend: Arc<MemoryBackend>,
    role_names: HashMap<i64, &'static str>,
    role_permissions: HashMap<i64, Vec<&'static str>>,
}

impl MemoryResolver {
    fn new(backend: Arc<MemoryBackend>) -> Self {
        let role_names = HashMap::from([(1, "Viewer"), (4, "Admin")]);
        let role_permissions = HashMap::from([
            (1, vec!["ViewReport"]),
            (4, vec!["ViewReport", "ViewUserLog", "ManageUsers"]),
        ]);
        Self {
            backend,
            role_names,
            role_permissions,
        }
    }

    fn role_ids_of(&self, user_id: i64) -> Vec<i64> {
        self.backend
            .assignments
            .lock()
            .unwrap()
            .iter()
            .filter(|(uid, _)| *uid == user_id)
            .map(|(_, rid)| *rid)
            .collect()
    }
}

#[async_trait]
impl RolePermissionResolver for MemoryResolver {
    async fn roles_of(&self, user_id: i64) -> AppResult<Vec<String>> {
        Ok(self
            .role_ids_of(user_id)
            .iter()
            .filter_map(|rid| self.role_names.get(rid))
            .map(|s| s.to_string())
            .collect())
    }

    async fn permissions_of(&self, user_id: i64) -> AppResult<Vec<String>> {
        let mut permissions: Vec<String> = self
            .role_ids_of(user_id)
            .iter()
            .filter_map(|rid| self.role_permissions.get(rid))
            .flatten()
            .map(|s| s.to_string())
            .collect();
        permissions.sort();
        permissions.dedup();
        Ok(permissions)
    }
}

/// Recorder fake capturing every event.
#[derive(Default)]
struct MemoryRecorder {
    events: Mutex<Vec<LoginLog>>,
}

#[async_trait]
impl LoginEventRecorder for MemoryRecorder {
    async fn record(&self, event: &CreateLoginLog) -> AppResult<i64> {
        let mut events = self.events.lock().unwrap();
        let log_id = events.len() as i64 + 1;
        events.push(LoginLog {
            log_id,
            user_id: event.user_id,
            device: event.device.clone(),
            browser: event.browser.clone(),
            ip_address: event.ip_address.clone(),
            login_time: event.login_time,
            logout_time: event.logout_time,
            is_success: event.is_success,
        });
        Ok(log_id)
    }
}

struct TestHarness {
    backend: Arc<MemoryBackend>,
    recorder: Arc<MemoryRecorder>,
    service: LoginService,
    decoder: JwtDecoder,
}

fn harness() -> TestHarness {
    let config = AuthConfig {
        hash_iterations: 100,
        ..AuthConfig::default()
    };

    let backend = Arc::new(MemoryBackend::default());
    let recorder = Arc::new(MemoryRecorder::default());

    let authenticator = Authenticator::new(
        Arc::new(MemoryStore(backend.clone())),
        Arc::new(MemoryResolver::new(backend.clone())),
        Arc::new(PasswordHasher::new(&config)),
    );
    let service = LoginService::new(
        authenticator,
        Arc::new(JwtEncoder::new(&config).unwrap()),
        recorder.clone(),
    );

    TestHarness {
        backend,
        recorder,
        service,
        decoder: JwtDecoder::new(&config),
    }
}

fn chrome_client() -> ClientInfo {
    ClientInfo::resolve(
        Some("203.0.113.7, 10.0.0.1"),
        Some(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10))),
        Some(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
        ),
    )
}

#[tokio::test]
async fn test_register_login_and_validate_token() {
    let h = harness();

    let registered = h
        .service
        .register(&RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
            role_id: 4,
        })
        .await
        .unwrap();
    assert!(registered.is_created());

    let outcome = h
        .service
        .login(
            &LoginRequest {
                username: "alice".to_string(),
                password: "secret123".to_string(),
            },
            &chrome_client(),
        )
        .await
        .unwrap();

    let response = match outcome {
        LoginOutcome::Granted(response) => response,
        LoginOutcome::Denied { reason } => panic!("login denied: {reason}"),
    };

    assert_eq!(response.username, "alice");
    assert_eq!(response.roles, vec!["Admin".to_string()]);
    assert_eq!(
        response.permissions,
        vec![
            "ManageUsers".to_string(),
            "ViewReport".to_string(),
            "ViewUserLog".to_string()
        ]
    );

    let claims = h.decoder.decode(&response.token).unwrap();
    assert_eq!(claims.user_id().unwrap(), response.user_id);
    assert_eq!(claims.unique_name, "alice");
    assert_eq!(claims.role, response.roles);
    assert_eq!(claims.permission, response.permissions);
}

#[tokio::test]
async fn test_successful_login_records_one_event_with_client_metadata() {
    let h = harness();

    h.service
        .register(&RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
            role_id: 1,
        })
        .await
        .unwrap();

    h.service
        .login(
            &LoginRequest {
                username: "alice".to_string(),
                password: "secret123".to_string(),
            },
            &chrome_client(),
        )
        .await
        .unwrap();

    let events = h.recorder.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert!(event.is_success);
    assert_eq!(event.logout_time, None);
    assert_eq!(event.ip_address.as_deref(), Some("203.0.113.7"));
    assert_eq!(event.device.as_deref(), Some("Desktop"));
    assert_eq!(event.browser.as_deref(), Some("Chrome 126"));
}

#[tokio::test]
async fn test_denied_login_records_no_event() {
    let h = harness();

    h.service
        .register(&RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
            role_id: 1,
        })
        .await
        .unwrap();

    let outcome = h
        .service
        .login(
            &LoginRequest {
                username: "alice".to_string(),
                password: "wrong".to_string(),
            },
            &chrome_client(),
        )
        .await
        .unwrap();

    assert!(matches!(outcome, LoginOutcome::Denied { .. }));
    assert!(h.recorder.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_directory_lists_registered_users_without_credentials() {
    let h = harness();

    h.service
        .register(&RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret123".to_string(),
            role_id: 1,
        })
        .await
        .unwrap();

    let directory = UserDirectory::new(Arc::new(MemoryStore(h.backend.clone())));
    let users = directory.list_users().await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "alice");
    assert!(users[0].is_active);
}
