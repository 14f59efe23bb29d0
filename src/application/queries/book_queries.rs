//! Book Queries

/// 按标题前缀列出一页图书
#[derive(Debug, Clone)]
pub struct ListBooksByPrefix {
    /// 标题起始字符（大小写敏感性由存储排序规则决定）
    pub prefix: String,
    /// 请求的偏移量（解析失败已在 HTTP 层回退为 0）
    pub offset: u32,
}

/// 获取图书详情
#[derive(Debug, Clone)]
pub struct GetBookDetail {
    pub book_id: i64,
}
