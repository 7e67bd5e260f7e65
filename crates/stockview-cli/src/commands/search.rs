//! 상장사 검색 명령.

use anyhow::Result;
use stockview_data::{search_companies, CompanyDirectory};

/// 검색 결과를 `회사명 (종목코드)` 한 줄씩 반환합니다.
pub async fn run_search<D: CompanyDirectory>(
    directory: &D,
    keyword: &str,
    limit: Option<usize>,
) -> Result<String> {
    let companies = directory.list_companies().await?;
    let found = search_companies(&companies, keyword, limit);

    if found.is_empty() {
        return Ok("검색 결과가 없습니다. 다른 키워드를 입력해보세요.\n".to_string());
    }

    let mut out = String::new();
    for company in found {
        out.push_str(&company.display_label());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockview_data::CsvCompanyDirectory;

    #[tokio::test]
    async fn test_search_output() {
        let dir = std::env::temp_dir().join(format!("stockview-cli-search-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("companies.csv");
        std::fs::write(&path, "name,code\nLG전자,66570\n삼성전자,5930\n").unwrap();
        let directory = CsvCompanyDirectory::new(&path);

        let output = run_search(&directory, "전자", None).await.unwrap();
        assert_eq!(output, "LG전자 (066570)\n삼성전자 (005930)\n");

        let output = run_search(&directory, "카카오", None).await.unwrap();
        assert!(output.starts_with("검색 결과가 없습니다"));
    }
}
