use admission_bulk_query::cli::Cli;
use admission_bulk_query::{logger, App};
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = cli.resolve_config().await?;

    // 初始化日志
    logger::init(config.verbose_logging);

    // 参数错误按用法错误退出
    let input = match cli.input() {
        Ok(input) => input,
        Err(e) => Cli::usage_error(&e).exit(),
    };

    // 初始化并运行应用
    App::initialize(config, cli.output_format())?
        .run(input, std::io::stdout().lock())
        .await?;

    Ok(())
}
