use crate::external::number_service::FetchError;
use serde::Deserialize;

/// 外部服务返回 `{"numbers": [...]}`，也兼容裸数组
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumbersPayload {
    Wrapped { numbers: Vec<i64> },
    Bare(Vec<i64>),
}

pub(crate) fn parse_numbers(body: &[u8]) -> Result<Vec<i64>, FetchError> {
    let payload: NumbersPayload = serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(match payload {
        NumbersPayload::Wrapped { numbers } => numbers,
        NumbersPayload::Bare(numbers) => numbers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wrapped_and_bare() {
        assert_eq!(parse_numbers(br#"{"numbers": [2, 3, 5]}"#).unwrap(), vec![2, 3, 5]);
        assert_eq!(parse_numbers(br#"{"numbers": [], "extra": true}"#).unwrap(), Vec::<i64>::new());
        assert_eq!(parse_numbers(b"[8, 13, 8]").unwrap(), vec![8, 13, 8]);
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        let bodies: [&[u8]; 5] = [
            br#"{"numbers": [1, 2.5]}"#,
            br#"{"numbers": ["7"]}"#,
            br#"{"values": [1]}"#,
            b"not json",
            b"",
        ];
        for body in bodies {
            assert!(matches!(parse_numbers(body), Err(FetchError::Decode(_))));
        }
    }
}
