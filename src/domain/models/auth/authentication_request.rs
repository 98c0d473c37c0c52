/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMode {
    /// 인증이 반드시 필요함
    Required,
    /// 인증이 선택사항임 (있으면 검증, 없어도 허용)
    Optional,
}

/// 스코프 접근에 요구되는 단일 권한
#[derive(Debug, Clone)]
pub struct RequiredPermission(String);

impl RequiredPermission {
    /// 권한 이름으로 요구사항을 생성합니다.
    pub fn new(permission: impl Into<String>) -> Self {
        Self(permission.into())
    }

    /// 사용자 권한 목록이 요구사항을 만족하는지 확인합니다.
    pub fn is_satisfied(&self, user_permissions: &[String]) -> bool {
        user_permissions.iter().any(|p| p == &self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_permission_satisfied() {
        let required = RequiredPermission::new("post:drinks");

        assert!(required.is_satisfied(&perms(&["post:drinks", "patch:drinks"])));
        assert!(!required.is_satisfied(&perms(&["get:drinks-detail"])));
        assert!(!required.is_satisfied(&[]));
    }
}
