//! # 문자열 유틸리티
//!
//! 요청 본문 정리, 스킬 목록 분리, Gravatar URL 생성 등 문자열 처리 함수들입니다.

use serde::Deserialize;
use sha2::{Digest, Sha256};

const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  Seoul ".into())), Some("Seoul".into()));
/// assert_eq!(clean_optional_string(Some("   ".into())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
/// 폼에서 비워 둔 필드가 빈 문자열로 전송되는 경우를 처리합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct ProfileRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     company: Option<String>,
/// }
///
/// // {"company": "  Acme  "} → Some("Acme")
/// // {"company": ""}         → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 콤마로 구분된 스킬 문자열을 목록으로 분리합니다.
///
/// 각 항목의 공백을 제거하고 빈 항목은 버립니다.
///
/// ```rust,ignore
/// assert_eq!(split_skills("HTML, CSS,,Rust "), vec!["HTML", "CSS", "Rust"]);
/// ```
pub fn split_skills(skills: &str) -> Vec<String> {
    skills
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 이메일 주소로 Gravatar 아바타 URL을 생성합니다.
///
/// 이메일은 앞뒤 공백 제거 후 소문자로 정규화하여 SHA-256 해시합니다.
/// 크기 200px, PG 등급, 기본 이미지 `mm` 옵션을 사용합니다.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let hash = Sha256::digest(normalized.as_bytes());

    format!("{}/{:x}?s=200&r=pg&d=mm", GRAVATAR_BASE_URL, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  Hello World  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("Hello World".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("안녕하세요".to_string()));
    }

    #[test]
    fn test_split_skills() {
        assert_eq!(
            split_skills("HTML, CSS,,  JavaScript , "),
            vec!["HTML".to_string(), "CSS".to_string(), "JavaScript".to_string()]
        );
        assert!(split_skills("  ,  ").is_empty());
        assert_eq!(split_skills("Rust"), vec!["Rust".to_string()]);
    }

    #[test]
    fn test_gravatar_url_normalizes_email() {
        let a = gravatar_url("John@Example.com ");
        let b = gravatar_url("john@example.com");

        assert_eq!(a, b);
        assert!(a.starts_with("https://www.gravatar.com/avatar/"));
        assert!(a.ends_with("?s=200&r=pg&d=mm"));

        // 64자리 16진수 해시
        let hash = a
            .trim_start_matches("https://www.gravatar.com/avatar/")
            .trim_end_matches("?s=200&r=pg&d=mm");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
