//! Book - 管道分隔字段的投影变换
//!
//! 存储中的 authors/genres 为 `|` 分隔的字符串。
//! HTML 与 JSON 两种展现各自从原始字符串独立推导，互不依赖执行顺序。

/// 存储中使用的列表分隔符
pub const LIST_DELIMITER: char = '|';

/// 人类可读投影：`"a|b|c"` -> `"a, b, c"`
pub fn display_list(raw: &str) -> String {
    raw.split(LIST_DELIMITER)
        .collect::<Vec<_>>()
        .join(", ")
}

/// 机器可读投影：`"a|b|c"` -> `["a", "b", "c"]`
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_DELIMITER).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_list_joins_with_comma_space() {
        assert_eq!(display_list("Neil Gaiman|Terry Pratchett"), "Neil Gaiman, Terry Pratchett");
    }

    #[test]
    fn test_display_list_single_entry_unchanged() {
        assert_eq!(display_list("Fantasy"), "Fantasy");
    }

    #[test]
    fn test_split_list_splits_on_pipe() {
        assert_eq!(
            split_list("Fantasy|Humor|Fiction"),
            vec!["Fantasy", "Humor", "Fiction"]
        );
    }

    #[test]
    fn test_split_list_entries_carry_no_padding() {
        // 两种投影独立作用于原始字符串，条目不含分隔符替换产生的空格
        for entry in split_list("A|B|C") {
            assert_eq!(entry, entry.trim());
        }
    }

    #[test]
    fn test_projections_are_independent() {
        let raw = "Fantasy|Humor";
        let display = display_list(raw);
        let split = split_list(raw);
        assert_eq!(display, "Fantasy, Humor");
        assert_eq!(split, vec!["Fantasy", "Humor"]);
        // 原始值不被修改
        assert_eq!(raw, "Fantasy|Humor");
    }
}
