//! 데이터 모듈 오류 타입.

use stockview_core::ViewerError;
use thiserror::Error;

/// 외부 데이터 소스 오류.
#[derive(Debug, Error)]
pub enum SourceError {
    /// 데이터를 찾을 수 없음 (파일 없음, 등록되지 않은 종목 등)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV 형식 오류
    #[error("CSV error: {0}")]
    Csv(String),

    /// 값 파싱 오류
    #[error("Parse error: {0}")]
    Parse(String),

    /// 네트워크 오류 (재시도 가능)
    #[error("Network error: {0}")]
    Network(String),

    /// 작업 시간 초과 (재시도 가능)
    #[error("Operation timeout: {0}")]
    Timeout(String),
}

impl SourceError {
    /// 재시도 가능한 오류인지 확인합니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SourceError::Network(_) | SourceError::Timeout(_))
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => SourceError::NotFound(err.to_string()),
            _ => SourceError::Io(err.to_string()),
        }
    }
}

impl From<csv::Error> for SourceError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound => {
                SourceError::NotFound(err.to_string())
            }
            _ => SourceError::Csv(err.to_string()),
        }
    }
}

impl From<SourceError> for ViewerError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(msg) => ViewerError::NotFound(msg),
            SourceError::Network(msg) | SourceError::Timeout(msg) => ViewerError::Network(msg),
            other => ViewerError::Source(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SourceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use stockview_core::ErrorKind;

    #[test]
    fn test_conversion_keeps_retryability() {
        let err = SourceError::Timeout("price fetch".to_string());
        assert!(err.is_retryable());

        let viewer: ViewerError = err.into();
        assert!(viewer.is_retryable());
        assert_eq!(viewer.kind(), ErrorKind::Upstream);
    }

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err = SourceError::from(io);
        assert!(matches!(err, SourceError::NotFound(_)));
        assert!(matches!(ViewerError::from(err), ViewerError::NotFound(_)));
    }

    #[test]
    fn test_parse_error_is_upstream_source() {
        let viewer = ViewerError::from(SourceError::Parse("close: abc".to_string()));
        assert!(matches!(viewer, ViewerError::Source(_)));
        assert!(!viewer.is_retryable());
    }
}
