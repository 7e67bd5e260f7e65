//! 상장사와 뉴스 헤드라인.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ViewerResult;
use crate::types::StockCode;

/// 상장사 (회사명 ↔ 종목코드).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// 회사명
    pub name: String,
    /// 종목코드
    pub code: StockCode,
}

impl Company {
    /// 새 상장사 항목을 생성합니다.
    pub fn new(name: impl Into<String>, code: StockCode) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }

    /// 선택 목록에 표시할 레이블 (`삼성전자 (005930)`).
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }

    /// `display_label` 형식의 문자열에서 회사명과 종목코드를 분리합니다.
    ///
    /// 회사명에 괄호가 들어 있어도 마지막 괄호를 코드로 사용합니다.
    pub fn parse_display_label(label: &str) -> ViewerResult<Self> {
        let label = label.trim();
        let (name, rest) = match label.rsplit_once(" (") {
            Some(parts) => parts,
            None => return StockCode::parse(label).map(|code| Self::new(label, code)),
        };
        let code = StockCode::parse(rest.trim_end_matches(')'))?;
        Ok(Self::new(name.trim(), code))
    }
}

/// 뉴스 헤드라인.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    /// 제목
    pub title: String,
    /// 기사 링크
    pub link: String,
    /// 언론사 (없으면 빈 문자열)
    #[serde(default)]
    pub source: String,
    /// 게시 시각
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<NaiveDateTime>,
}

impl Headline {
    /// `언론사 · 2024-01-02 09:30` 형식의 메타 정보. 둘 다 없으면 None.
    pub fn meta_line(&self) -> Option<String> {
        let published = self
            .published_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string());
        let parts: Vec<&str> = [Some(self.source.as_str()), published.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_display_label_roundtrip() {
        let company = Company::new("삼성전자", StockCode::parse("5930").unwrap());
        let label = company.display_label();
        assert_eq!(label, "삼성전자 (005930)");
        assert_eq!(Company::parse_display_label(&label).unwrap(), company);
    }

    #[test]
    fn test_parse_label_with_parenthesized_name() {
        let company = Company::parse_display_label("한화(우) (000885)").unwrap();
        assert_eq!(company.name, "한화(우)");
        assert_eq!(company.code.as_str(), "000885");
    }

    #[test]
    fn test_parse_label_rejects_bad_code() {
        assert!(Company::parse_display_label("Apple (AAPL)").is_err());
    }

    #[test]
    fn test_headline_meta_line() {
        let mut headline = Headline {
            title: "삼성전자 주가".to_string(),
            link: "https://example.com/a".to_string(),
            source: "연합뉴스".to_string(),
            published_at: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(9, 30, 0),
        };
        assert_eq!(
            headline.meta_line().as_deref(),
            Some("연합뉴스 · 2024-01-02 09:30")
        );

        headline.source.clear();
        headline.published_at = None;
        assert_eq!(headline.meta_line(), None);
    }
}
