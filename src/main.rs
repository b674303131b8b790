use anyhow::Result;
use eju_math_builder::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    eju_math_builder::logger::init();

    // 解析命令行覆盖项
    let config = Config::from_args(std::env::args().skip(1));

    // 执行构建
    App::new(config).run().await?;

    Ok(())
}
