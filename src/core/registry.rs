//! # Service Registry
//!
//! `singleton_macro`의 `#[service]` / `#[repository]` 매크로가 생성하는 등록 정보를
//! `inventory`로 수집하고, 타입 기반으로 싱글톤 인스턴스를 찾아주는 의존성 주입 컨테이너입니다.
//!
//! ## 동작 방식
//!
//! 1. 매크로가 구조체마다 `inventory::submit!`으로 등록 정보를 제출합니다.
//! 2. `Arc<T>` 필드는 생성 시 `ServiceLocator::get::<T>()`로 주입됩니다.
//! 3. 매크로 밖의 인프라 타입(`Database`)은 `ServiceLocator::set`으로 직접 등록합니다.
//!
//! ## 이름 규칙
//!
//! 타입 이름에서 `Service` / `Repository` 접미사를 제거하고 소문자로 바꾼 값이
//! 매크로의 `name` 인자와 같아야 합니다.
//!
//! ```rust,ignore
//! #[service(name = "profile")]          // ProfileService
//! pub struct ProfileService {
//!     profile_repo: Arc<ProfileRepository>,
//! }
//!
//! #[repository(name = "profile", collection = "profiles")]
//! pub struct ProfileRepository {
//!     db: Arc<Database>,
//! }
//! ```
//!
//! ## 초기화 순서
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(database));   // 1. 인프라
//! ServiceLocator::initialize_all().await?;   // 2. 리포지토리 → 서비스
//! ```
//!
//! 생성자는 잠금 밖에서 호출되므로 중첩된 의존성 해결이 가능하며,
//! 순환 참조는 `initializing` 집합으로 감지합니다.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// `#[service]` 매크로가 구현하는 trait
#[async_trait]
pub trait Service: Send + Sync {
    fn name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 구현하는 trait
#[async_trait]
pub trait Repository: Send + Sync {
    fn name(&self) -> &str;

    fn collection_name(&self) -> &str;

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    /// `{name}_service` 형식의 등록 이름
    pub name: &'static str,
    /// `Box<Arc<T>>`를 반환하는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// `{name}_repository` 형식의 등록 이름
    pub name: &'static str,
    /// `Box<Arc<T>>`를 반환하는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

static SERVICE_NAME_CACHE: Lazy<HashMap<String, &'static ServiceRegistration>> = Lazy::new(|| {
    let cache: HashMap<_, _> = inventory::iter::<ServiceRegistration>()
        .map(|registration| (clean_registration_name(registration.name), registration))
        .collect();

    print_cache_initialized("Service", cache.len());
    cache
});

static REPOSITORY_NAME_CACHE: Lazy<HashMap<String, &'static RepositoryRegistration>> =
    Lazy::new(|| {
        let cache: HashMap<_, _> = inventory::iter::<RepositoryRegistration>()
            .map(|registration| (clean_registration_name(registration.name), registration))
            .collect();

        print_cache_initialized("Repository", cache.len());
        cache
    });

/// `user_service` → `user`, `profile_repository` → `profile`
fn clean_registration_name(name: &str) -> String {
    name.strip_suffix("_service")
        .or_else(|| name.strip_suffix("_repository"))
        .unwrap_or(name)
        .to_string()
}

/// 모듈 경로를 제거한 타입 이름 (`crate::services::UserService` → `UserService`)
fn short_type_name(type_name: &str) -> &str {
    type_name.rsplit("::").next().unwrap_or(type_name)
}

/// 타입 이름으로 등록 정보의 생성자를 찾습니다.
fn find_constructor(short_name: &str) -> Option<(&'static str, fn() -> Box<dyn Any + Send + Sync>)> {
    if let Some(entity) = short_name.strip_suffix("Repository") {
        return REPOSITORY_NAME_CACHE
            .get(&entity.to_lowercase())
            .map(|r| (r.name, r.constructor));
    }

    if let Some(entity) = short_name.strip_suffix("Service") {
        return SERVICE_NAME_CACHE
            .get(&entity.to_lowercase())
            .map(|r| (r.name, r.constructor));
    }

    None
}

/// 타입 기반 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
    initializing: RwLock<HashSet<TypeId>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
    initializing: RwLock::new(HashSet::new()),
});

impl ServiceLocator {
    fn lookup<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR.instances.read().unwrap_or_else(|e| e.into_inner());
        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
    }

    /// 타입에 해당하는 싱글톤 인스턴스를 반환합니다.
    ///
    /// 없으면 등록 정보의 생성자로 만들어 저장합니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입이거나 순환 참조가 감지된 경우 시작 단계에서 패닉합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        if let Some(instance) = Self::lookup::<T>() {
            return instance;
        }

        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        {
            let mut initializing = LOCATOR.initializing.write().unwrap_or_else(|e| e.into_inner());
            if !initializing.insert(type_id) {
                log::error!("❌ Circular dependency detected for type: {}", type_name);
                panic!("Circular dependency detected: {} is already being initialized", type_name);
            }
        }

        let short_name = short_type_name(type_name);
        let created = find_constructor(short_name).map(|(name, constructor)| {
            let boxed = constructor();
            boxed
                .downcast::<Arc<T>>()
                .map(|arc| *arc)
                .unwrap_or_else(|_| panic!("Type mismatch for registration: {}", name))
        });

        LOCATOR
            .initializing
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&type_id);

        let instance = created.unwrap_or_else(|| {
            panic!(
                "Service not found: {}. Make sure it's registered with #[service] or #[repository], or with ServiceLocator::set()",
                type_name
            )
        });

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        instances
            .entry(type_id)
            .or_insert_with(|| instance.clone() as Arc<dyn Any + Send + Sync>);
        instance
    }

    /// 외부에서 생성된 인스턴스를 직접 등록합니다.
    ///
    /// 매크로로 관리되지 않는 인프라 컴포넌트(`Database` 등)에 사용합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = std::any::type_name::<T>();
        log::info!("📦 Registering: {}", short_type_name(type_name));

        let mut instances = LOCATOR.instances.write().unwrap_or_else(|e| e.into_inner());
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 모든 리포지토리와 서비스를 미리 생성합니다.
    ///
    /// 리포지토리를 먼저 만든 뒤 서비스를 만듭니다.
    pub async fn initialize_all() -> Result<(), Box<dyn std::error::Error>> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        if repo_count > 0 {
            print_step_start(1, "Creating Repository instances");
            for registration in repo_registrations {
                print_sub_task(registration.name, "Creating...");
                let _ = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(1, "Repository instances created", repo_count);
        }

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        if service_count > 0 {
            print_step_start(2, "Creating Service instances");
            for registration in service_registrations {
                print_sub_task(registration.name, "Creating...");
                let _ = (registration.constructor)();
                print_sub_task(registration.name, "✓ Created");
            }
            print_step_complete(2, "Service instances created", service_count);
        }

        print_final_summary(repo_count, service_count);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(u32);

    #[test]
    fn test_clean_registration_name() {
        assert_eq!(clean_registration_name("user_service"), "user");
        assert_eq!(clean_registration_name("profile_repository"), "profile");
        assert_eq!(clean_registration_name("plain"), "plain");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("crate::services::UserService"), "UserService");
        assert_eq!(short_type_name("Database"), "Database");
    }

    #[test]
    fn test_set_then_get_returns_same_instance() {
        ServiceLocator::set(Arc::new(Marker(7)));
        let first = ServiceLocator::get::<Marker>();
        let second = ServiceLocator::get::<Marker>();
        assert_eq!(first.0, 7);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_registered_services_resolve_by_name() {
        use crate::services::auth::password_service::PasswordService;

        let service = ServiceLocator::get::<PasswordService>();
        assert!(Arc::ptr_eq(&service, &PasswordService::instance()));
    }
}
