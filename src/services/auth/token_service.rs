//! JWT 토큰 발급/검증 유틸리티
//!
//! 임의의 클레임 맵에 만료 시각(`exp`)을 더해 HS256으로 서명합니다.
//! 서명 키와 유효 시간은 호출자가 [`crate::config::JwtProperties`]에서 가져와 전달합니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// 직원 ID 클레임 키
pub const EMP_ID: &str = "empId";

/// JWT 토큰 서비스
pub struct TokenService;

impl TokenService {
    /// 클레임 맵으로 JWT를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `secret` - HMAC 서명 키
    /// * `ttl_millis` - 유효 시간 (밀리초)
    /// * `claims` - 토큰에 담을 클레임 (`exp`는 덮어씀)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패, 만료 시각 범위 초과
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mut claims = Map::new();
    /// claims.insert(EMP_ID.to_string(), json!(employee.id));
    /// let token = TokenService::create_token(&props.admin_secret_key, props.admin_ttl, claims)?;
    /// ```
    pub fn create_token(
        secret: &str,
        ttl_millis: i64,
        mut claims: Map<String, Value>,
    ) -> Result<String, AppError> {
        let expires_at = Utc::now()
            .timestamp_millis()
            .checked_add(ttl_millis)
            .ok_or_else(|| AppError::InternalError(format!("토큰 만료 시각 계산 실패: ttl {}", ttl_millis)))?;
        claims.insert("exp".to_string(), Value::from(expires_at / 1000));

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());

        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 서명과 만료 시각을 검증하고 클레임 맵을 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn parse_token(secret: &str, token: &str) -> Result<Map<String, Value>, AppError> {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let validation = Validation::new(Algorithm::HS256);

        decode::<Map<String, Value>>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SECRET: &str = "itcast";

    fn emp_claims(id: i64) -> Map<String, Value> {
        let mut claims = Map::new();
        claims.insert(EMP_ID.to_string(), json!(id));
        claims
    }

    #[test]
    fn test_token_carries_claims() {
        let token = TokenService::create_token(SECRET, 7_200_000, emp_claims(42)).unwrap();
        let claims = TokenService::parse_token(SECRET, &token).unwrap();

        assert_eq!(claims.get(EMP_ID), Some(&json!(42)));
        assert!(claims.get("exp").and_then(Value::as_i64).unwrap() > Utc::now().timestamp());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = TokenService::create_token(SECRET, 60_000, emp_claims(1)).unwrap();
        let result = TokenService::parse_token("other-secret", &token);

        assert!(matches!(result, Err(AppError::AuthenticationError(msg)) if msg == "유효하지 않은 토큰입니다"));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // 기본 leeway(60초)를 넘겨서 만료시킨다
        let token = TokenService::create_token(SECRET, -600_000, emp_claims(1)).unwrap();
        let result = TokenService::parse_token(SECRET, &token);

        assert!(matches!(result, Err(AppError::AuthenticationError(msg)) if msg == "토큰이 만료되었습니다"));
    }

    #[test]
    fn test_unrepresentable_ttl_is_error() {
        let result = TokenService::create_token(SECRET, i64::MAX, emp_claims(1));

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(TokenService::parse_token(SECRET, "not.a.jwt").is_err());
    }
}
