//! User service unit tests.
//!
//! The repository is mocked so the service's delegation and error
//! promotion can be tested without a database.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use user_directory::domain::{CreateUser, UpdateUser, User};
use user_directory::errors::{AppError, AppResult};
use user_directory::infra::UserRepository;
use user_directory::services::{DirectoryService, UserService};

mock! {
    UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn list(&self) -> AppResult<Vec<User>>;
        async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
        async fn find_by_department(&self, department: &str) -> AppResult<Vec<User>>;
        async fn search_by_name(&self, fragment: &str) -> AppResult<Vec<User>>;
        async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
        async fn count(&self) -> AppResult<u64>;
        async fn create(&self, email: String, name: String, department: String) -> AppResult<User>;
        async fn update(&self, id: i64, fields: UpdateUser) -> AppResult<User>;
        async fn delete(&self, id: i64) -> AppResult<()>;
    }
}

fn create_test_user(id: i64) -> User {
    User {
        id,
        email: "test@example.com".to_string(),
        name: "Test User".to_string(),
        department: "Engineering".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn service(repo: MockUserRepo) -> DirectoryService {
    DirectoryService::new(Arc::new(repo))
}

#[tokio::test]
async fn test_get_user_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id()
        .withf(|id| *id == 42)
        .returning(|id| Ok(Some(create_test_user(id))));

    let result = service(repo).get_user(42).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, 42);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service(repo).get_user(42).await;

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_get_user_by_email_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_email()
        .withf(|email| email == "test@example.com")
        .returning(|_| Ok(Some(create_test_user(1))));

    let result = service(repo).get_user_by_email("test@example.com").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().email, "test@example.com");
}

#[tokio::test]
async fn test_get_user_by_email_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_email().returning(|_| Ok(None));

    let result = service(repo).get_user_by_email("absent@example.com").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_users_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_list()
        .returning(|| Ok(vec![create_test_user(1), create_test_user(2)]));

    let result = service(repo).list_users().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_users_by_department_passthrough() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_department()
        .withf(|department| department == "Engineering")
        .returning(|_| Ok(vec![create_test_user(1)]));

    let result = service(repo).list_users_by_department("Engineering").await;

    assert_eq!(result.unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_users_by_name_passthrough() {
    let mut repo = MockUserRepo::new();
    repo.expect_search_by_name()
        .withf(|fragment| fragment == "ali")
        .returning(|_| Ok(vec![create_test_user(1), create_test_user(2)]));

    let result = service(repo).search_users_by_name("ali").await;

    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_user_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_exists_by_email()
        .withf(|email| email == "new@example.com")
        .returning(|_| Ok(false));
    repo.expect_create().returning(|email, name, department| {
        Ok(User {
            id: 1,
            email,
            name,
            department,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    });

    let payload = CreateUser {
        email: "new@example.com".to_string(),
        name: "New User".to_string(),
        department: "Sales".to_string(),
    };
    let result = service(repo).create_user(payload).await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.department, "Sales");
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let mut repo = MockUserRepo::new();
    repo.expect_exists_by_email().returning(|_| Ok(true));
    // No create expectation: the insert must never be attempted

    let payload = CreateUser {
        email: "taken@example.com".to_string(),
        name: "Someone".to_string(),
        department: "Sales".to_string(),
    };
    let result = service(repo).create_user(payload).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_update_user_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_update().returning(|id, fields| {
        let mut user = create_test_user(id);
        if let Some(name) = fields.name {
            user.name = name;
        }
        Ok(user)
    });

    let fields = UpdateUser {
        name: Some("Renamed".to_string()),
        ..Default::default()
    };
    let result = service(repo).update_user(7, fields).await;

    let user = result.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Renamed");
}

#[tokio::test]
async fn test_update_user_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_update().returning(|_, _| Err(AppError::NotFound));

    let result = service(repo).update_user(999, UpdateUser::default()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_delete_user_success() {
    let mut repo = MockUserRepo::new();
    repo.expect_delete().returning(|_| Ok(()));

    let result = service(repo).delete_user(1).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let mut repo = MockUserRepo::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let result = service(repo).delete_user(999).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_count_users() {
    let mut repo = MockUserRepo::new();
    repo.expect_count().returning(|| Ok(7));

    let result = service(repo).count_users().await;

    assert_eq!(result.unwrap(), 7);
}
