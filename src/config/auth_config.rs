//! # Authentication Configuration Module
//!
//! 관리자 범위 JWT 발급에 필요한 설정을 관리합니다.
//! 애플리케이션 시작 시 한 번 읽어서 핸들러에 주입합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_ADMIN_SECRET_KEY="your-admin-secret"   # 프로덕션 필수
//! export JWT_ADMIN_TTL="7200000"                    # 밀리초, 기본 2시간
//! ```

use std::env;
use std::fmt;

use crate::config::Environment;
use crate::errors::AppError;

/// 개발/테스트 환경에서만 사용하는 기본 서명 키
const DEV_ADMIN_SECRET_KEY: &str = "sky-admin-dev-secret";

/// 기본 토큰 유효 시간 (밀리초)
pub const DEFAULT_ADMIN_TTL_MILLIS: i64 = 7_200_000;

/// 허용하는 최대 토큰 유효 시간 (밀리초, 1년)
pub const MAX_ADMIN_TTL_MILLIS: i64 = 365 * 24 * 60 * 60 * 1000;

/// 관리자 JWT 설정
#[derive(Clone, PartialEq)]
pub struct JwtProperties {
    /// HMAC 서명 키
    pub admin_secret_key: String,
    /// 토큰 유효 시간 (밀리초)
    pub admin_ttl: i64,
}

impl JwtProperties {
    pub fn new(admin_secret_key: impl Into<String>, admin_ttl: i64) -> Self {
        Self {
            admin_secret_key: admin_secret_key.into(),
            admin_ttl,
        }
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 프로덕션에서 `JWT_ADMIN_SECRET_KEY`가 없는 경우
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(&Environment::current(), |key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 구성합니다.
    pub fn from_lookup<F>(environment: &Environment, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin_secret_key = match lookup("JWT_ADMIN_SECRET_KEY").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err(AppError::InternalError(
                    "JWT_ADMIN_SECRET_KEY must be set in production".to_string(),
                ));
            }
            None => {
                log::warn!("JWT_ADMIN_SECRET_KEY 미설정, 개발용 기본 키를 사용합니다");
                DEV_ADMIN_SECRET_KEY.to_string()
            }
        };

        let admin_ttl = match lookup("JWT_ADMIN_TTL") {
            Some(raw) => match raw.parse::<i64>() {
                Ok(ttl) if (1..=MAX_ADMIN_TTL_MILLIS).contains(&ttl) => ttl,
                _ => {
                    log::error!(
                        "JWT_ADMIN_TTL 파싱 실패: {}. 기본값 {} 사용",
                        raw,
                        DEFAULT_ADMIN_TTL_MILLIS
                    );
                    DEFAULT_ADMIN_TTL_MILLIS
                }
            },
            None => DEFAULT_ADMIN_TTL_MILLIS,
        };

        Ok(Self {
            admin_secret_key,
            admin_ttl,
        })
    }
}

// 서명 키는 로그에 남기지 않는다
impl fmt::Debug for JwtProperties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtProperties")
            .field("admin_secret_key", &"***")
            .field("admin_ttl", &self.admin_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_reads_secret_and_ttl() {
        let props = JwtProperties::from_lookup(
            &Environment::Production,
            lookup_from(&[("JWT_ADMIN_SECRET_KEY", "itcast"), ("JWT_ADMIN_TTL", "60000")]),
        )
        .unwrap();

        assert_eq!(props, JwtProperties::new("itcast", 60_000));
    }

    #[test]
    fn test_production_requires_secret() {
        let result = JwtProperties::from_lookup(&Environment::Production, lookup_from(&[]));
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_development_defaults() {
        let props = JwtProperties::from_lookup(&Environment::Development, lookup_from(&[])).unwrap();

        assert_eq!(props.admin_secret_key, DEV_ADMIN_SECRET_KEY);
        assert_eq!(props.admin_ttl, DEFAULT_ADMIN_TTL_MILLIS);
    }

    #[test]
    fn test_invalid_ttl_falls_back_to_default() {
        let props = JwtProperties::from_lookup(
            &Environment::Development,
            lookup_from(&[("JWT_ADMIN_TTL", "-5")]),
        )
        .unwrap();
        assert_eq!(props.admin_ttl, DEFAULT_ADMIN_TTL_MILLIS);
    }

    #[test]
    fn test_oversized_ttl_falls_back_to_default() {
        let huge = i64::MAX.to_string();
        let props = JwtProperties::from_lookup(
            &Environment::Development,
            lookup_from(&[("JWT_ADMIN_TTL", huge.as_str())]),
        )
        .unwrap();
        assert_eq!(props.admin_ttl, DEFAULT_ADMIN_TTL_MILLIS);

        let max = MAX_ADMIN_TTL_MILLIS.to_string();
        let props = JwtProperties::from_lookup(
            &Environment::Development,
            lookup_from(&[("JWT_ADMIN_TTL", max.as_str())]),
        )
        .unwrap();
        assert_eq!(props.admin_ttl, MAX_ADMIN_TTL_MILLIS);
    }

    #[test]
    fn test_debug_masks_secret() {
        let rendered = format!("{:?}", JwtProperties::new("top-secret", 1000));
        assert!(!rendered.contains("top-secret"));
    }
}
