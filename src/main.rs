use anyhow::Result;
use tracing::{error, info};

use keyword_suggest::{logger, App, AppError, Config, Shutdown};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load()?;

    // Ctrl+C：剩余关键词记为空结果，输出文件照常写出
    let (shutdown_tx, shutdown) = Shutdown::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 收到 Ctrl+C，停止剩余关键词并写出已有结果...");
            let _ = shutdown_tx.send(true);
        }
    });

    // 初始化并运行应用
    match App::new(config).with_shutdown(shutdown).run().await {
        Ok(_) => Ok(()),
        Err(e @ AppError::MissingDaySheet { .. }) => {
            error!("❌ {}，本次不生成输出文件", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
