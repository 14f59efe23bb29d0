//! Content Negotiation
//!
//! 根据请求的 Accept 头在 HTML 与 JSON 两种表现之间选择。
//! 匹配规则：精确匹配 > `type/*` > `*/*`；q=0 排除；
//! 缺失或空白的 Accept 头等同于 `*/*`；同分时偏向 HTML。

/// 可用的响应表现
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Html,
    Json,
}

/// 支持的媒体类型，按偏好排列
const SUPPORTED: &[(Representation, &str, &str)] = &[
    (Representation::Html, "text", "html"),
    (Representation::Json, "application", "json"),
];

/// 一条解析后的媒体范围
#[derive(Debug)]
struct MediaRange {
    kind: String,
    sub: String,
    q: f32,
}

/// 解析 Accept 头为媒体范围列表，无法解析的条目直接跳过
fn parse_accept(value: &str) -> Vec<MediaRange> {
    value
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let media = parts.next()?.trim();
            let (kind, sub) = media.split_once('/')?;
            if kind.is_empty() || sub.is_empty() {
                return None;
            }

            let mut q = 1.0f32;
            for param in parts {
                if let Some((name, val)) = param.split_once('=') {
                    if name.trim().eq_ignore_ascii_case("q") {
                        q = val.trim().parse().unwrap_or(1.0);
                    }
                }
            }

            Some(MediaRange {
                kind: kind.trim().to_ascii_lowercase(),
                sub: sub.trim().to_ascii_lowercase(),
                q,
            })
        })
        .collect()
}

/// 一种表现对一条媒体范围的匹配特异度
fn specificity(range: &MediaRange, kind: &str, sub: &str) -> Option<u8> {
    match (range.kind.as_str(), range.sub.as_str()) {
        (k, s) if k == kind && s == sub => Some(3),
        (k, "*") if k == kind => Some(2),
        ("*", "*") => Some(1),
        _ => None,
    }
}

/// 对 Accept 头做内容协商
///
/// 返回选中的表现；无可接受表现时返回 Err，携带原始 Accept 值
/// 供 406 响应引用
pub fn negotiate(accept: Option<&str>) -> Result<Representation, String> {
    let raw = match accept {
        Some(v) if !v.trim().is_empty() => v,
        // 未声明偏好等同于接受任何类型
        _ => return Ok(Representation::Html),
    };

    let ranges = parse_accept(raw);

    let mut best: Option<(Representation, f32)> = None;
    for (rep, kind, sub) in SUPPORTED {
        // 取该表现能匹配到的最具体的一条范围的 q 值
        let quality = ranges
            .iter()
            .filter_map(|r| specificity(r, kind, sub).map(|s| (s, r.q)))
            .max_by_key(|(s, _)| *s)
            .map(|(_, q)| q);

        if let Some(q) = quality {
            if q > 0.0 && best.map_or(true, |(_, bq)| q > bq) {
                best = Some((*rep, q));
            }
        }
    }

    match best {
        Some((rep, _)) => Ok(rep),
        None => Err(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_preferred() {
        assert_eq!(negotiate(Some("text/html")), Ok(Representation::Html));
    }

    #[test]
    fn test_json_preferred() {
        assert_eq!(
            negotiate(Some("application/json")),
            Ok(Representation::Json)
        );
    }

    #[test]
    fn test_missing_accept_defaults_to_html() {
        assert_eq!(negotiate(None), Ok(Representation::Html));
        assert_eq!(negotiate(Some("")), Ok(Representation::Html));
        assert_eq!(negotiate(Some("   ")), Ok(Representation::Html));
    }

    #[test]
    fn test_wildcard_defaults_to_html() {
        assert_eq!(negotiate(Some("*/*")), Ok(Representation::Html));
    }

    #[test]
    fn test_type_wildcard() {
        assert_eq!(negotiate(Some("text/*")), Ok(Representation::Html));
        assert_eq!(negotiate(Some("application/*")), Ok(Representation::Json));
    }

    #[test]
    fn test_unsupported_type_rejected_with_original_value() {
        assert_eq!(
            negotiate(Some("application/xml")),
            Err("application/xml".to_string())
        );
    }

    #[test]
    fn test_quality_ordering() {
        assert_eq!(
            negotiate(Some("text/html;q=0.5, application/json;q=0.9")),
            Ok(Representation::Json)
        );
        assert_eq!(
            negotiate(Some("text/html;q=0.9, application/json;q=0.5")),
            Ok(Representation::Html)
        );
    }

    #[test]
    fn test_equal_quality_prefers_html() {
        assert_eq!(
            negotiate(Some("application/json, text/html")),
            Ok(Representation::Html)
        );
    }

    #[test]
    fn test_q_zero_excludes() {
        assert_eq!(
            negotiate(Some("text/html;q=0")),
            Err("text/html;q=0".to_string())
        );
        assert_eq!(
            negotiate(Some("text/html;q=0, application/json")),
            Ok(Representation::Json)
        );
    }

    #[test]
    fn test_browser_style_accept() {
        let browser = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
        assert_eq!(negotiate(Some(browser)), Ok(Representation::Html));
    }

    #[test]
    fn test_specific_beats_wildcard_quality() {
        // application/json 精确命中 q=1，*/* 的 q=0.8 只作用于 HTML
        assert_eq!(
            negotiate(Some("application/json, */*;q=0.8")),
            Ok(Representation::Json)
        );
    }

    #[test]
    fn test_malformed_entries_skipped() {
        assert_eq!(negotiate(Some("garbage, text/html")), Ok(Representation::Html));
        assert_eq!(negotiate(Some("garbage")), Err("garbage".to_string()));
    }
}
