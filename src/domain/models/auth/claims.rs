//! Auth0 액세스 토큰 클레임 모델
//!
//! RS256 서명 검증 후 역직렬화되는 토큰 페이로드 구조를 정의합니다.

use serde::{Deserialize, Serialize};

/// Auth0 액세스 토큰 클레임
///
/// 서명 검증을 통과한 토큰의 페이로드입니다. `permissions` 클레임은
/// 테넌트의 RBAC 설정에 따라 생략될 수 있으므로 기본값(빈 목록)으로
/// 역직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auth0Claims {
    /// 토큰 발급자 (테넌트 issuer URL)
    pub iss: String,
    /// 사용자 고유 식별자
    pub sub: String,
    /// 토큰 대상 audience
    pub aud: String,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
    /// 부여된 권한 목록 (RBAC 비활성 시 생략됨)
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_permissions_defaults_to_empty() {
        let json = r#"{
            "iss": "https://dev-bvzlp059.us.auth0.com/",
            "sub": "auth0|abc123",
            "aud": "drink",
            "iat": 1700000000,
            "exp": 1700086400
        }"#;

        let claims: Auth0Claims = serde_json::from_str(json).unwrap();
        assert!(claims.permissions.is_empty());
        assert_eq!(claims.sub, "auth0|abc123");
    }

    #[test]
    fn test_permissions_deserialized_when_present() {
        let json = r#"{
            "iss": "https://dev-bvzlp059.us.auth0.com/",
            "sub": "auth0|abc123",
            "aud": "drink",
            "iat": 1700000000,
            "exp": 1700086400,
            "permissions": ["get:drinks-detail", "post:drinks"]
        }"#;

        let claims: Auth0Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.permissions.len(), 2);
        assert!(claims.permissions.contains(&"post:drinks".to_string()));
    }
}
