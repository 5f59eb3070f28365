/// 日志工具模块
///
/// 提供批量查询各阶段的日志输出
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `endpoint`: 查询接口
/// - `exam_id`: 考试 ID
/// - `max_concurrent`: 最大并发数
pub fn log_startup(endpoint: &str, exam_id: u32, max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 录取结果批量查询");
    info!("🌐 查询接口: {}", endpoint);
    info!("🆔 考试 ID: {}", exam_id);
    info!("📊 最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 记录考生加载信息
///
/// # 参数
/// - `total`: 有效考生数
pub fn log_records_loaded(total: usize) {
    info!("✓ 找到 {} 个待查询的考生", total);
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 查询成功数量
/// - `failed`: 查无记录数量
pub fn print_final_stats(success: usize, failed: usize) {
    info!("{}", "=".repeat(60));
    info!("📊 全部查询完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", success, success + failed);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
}
