//! Pagination - 分页窗口计算
//!
//! 列表页的核心逻辑：由 offset/limit/总数推导导航状态

/// 每页条数
pub const PAGE_SIZE: u32 = 10;

/// 解析请求中的 offset 参数
///
/// 缺失、非数字或负数一律回退为 0，不向调用方报错
pub fn parse_offset(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

/// 分页窗口
///
/// offset 超出总数时仍按原样透传：页面为空、has_next 为 false，
/// prev_offset 依旧从请求的 offset 推导，不按总数截断
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 跳过的行数
    pub offset: u32,
    /// 每页条数
    pub limit: u32,
    /// 过滤条件下的总行数
    pub total_count: u64,
}

impl PageWindow {
    pub fn new(offset: u32, limit: u32, total_count: u64) -> Self {
        Self {
            offset,
            limit,
            total_count,
        }
    }

    /// 上一页 offset，下限为 0
    pub fn prev_offset(&self) -> u32 {
        self.offset.saturating_sub(self.limit)
    }

    /// 下一页 offset，饱和加法避免恶意大 offset 溢出
    pub fn next_offset(&self) -> u32 {
        self.offset.saturating_add(self.limit)
    }

    /// 是否存在下一页
    ///
    /// 仅当 offset + limit < total_count 时为 true（相等视为无下一页）
    pub fn has_next(&self) -> bool {
        u64::from(self.next_offset()) < self.total_count
    }
}
