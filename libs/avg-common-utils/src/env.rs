/// 读取环境变量，空字符串视为未设置
/// read an env var, an empty value counts as unset
pub fn get_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(val) if !val.trim().is_empty() => Some(val.trim().to_string()),
        _ => None,
    }
}

pub fn get_env_or(key: &str, default: &str) -> String {
    get_env(key).unwrap_or_else(|| default.to_string())
}

/// 读取布尔开关，无法识别的值按未设置处理
pub fn get_env_flag(key: &str) -> Option<bool> {
    get_env(key).and_then(|val| parse_flag(&val))
}

pub fn parse_flag(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("yes"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_unset_env_falls_back() {
        let key = "AVG_COMMON_UTILS_TEST_SURELY_UNSET_KEY";
        assert_eq!(get_env(key), None);
        assert_eq!(get_env_or(key, "fallback"), "fallback");
        assert_eq!(get_env_flag(key), None);
    }
}
