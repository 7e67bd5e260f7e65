//! 상장사 검색.
//!
//! 회사명에 검색어가 포함된 항목을 찾되, 검색어로 시작하는 항목을 먼저 보여줍니다
//! (`삼성` → `삼성전자`, `삼성SDI`, ..., `에스삼성...`). 각 그룹 안에서는 목록 순서를 유지합니다.

use stockview_core::Company;

/// 검색어가 비어 있을 때 보여줄 최대 항목 수.
pub const BROWSE_LIMIT: usize = 200;

/// 회사명으로 상장사를 검색합니다.
///
/// - 검색어 앞뒤 공백은 무시합니다.
/// - 빈 검색어는 목록 앞쪽 [`BROWSE_LIMIT`]개를 반환합니다.
/// - `limit`이 있으면 그 개수까지만 반환합니다.
pub fn search_companies<'a>(
    companies: &'a [Company],
    keyword: &str,
    limit: Option<usize>,
) -> Vec<&'a Company> {
    let keyword = keyword.trim();

    let ranked: Vec<&Company> = if keyword.is_empty() {
        companies.iter().take(BROWSE_LIMIT).collect()
    } else {
        let (prefix, rest): (Vec<&Company>, Vec<&Company>) = companies
            .iter()
            .filter(|c| c.name.contains(keyword))
            .partition(|c| c.name.starts_with(keyword));
        prefix.into_iter().chain(rest).collect()
    };

    match limit {
        Some(n) => ranked.into_iter().take(n).collect(),
        None => ranked,
    }
}
