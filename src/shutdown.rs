//! 停止信号
//!
//! 包装 `watch` 通道：批处理在两个关键词之间检查，联想词等待过程中也会响应。

use std::future::pending;

use tokio::sync::watch;

/// 停止信号的接收端
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: Option<watch::Receiver<bool>>,
}

impl Shutdown {
    /// 创建一对发送端 / 接收端，发送 `true` 表示停止
    pub fn channel() -> (watch::Sender<bool>, Shutdown) {
        let (tx, rx) = watch::channel(false);
        (tx, Shutdown { rx: Some(rx) })
    }

    /// 永远不会触发的信号
    pub fn never() -> Self {
        Shutdown { rx: None }
    }

    pub fn is_requested(&self) -> bool {
        self.rx.as_ref().map(|rx| *rx.borrow()).unwrap_or(false)
    }

    /// 等到收到停止信号；发送端已关闭且未发过停止时永远挂起
    pub async fn requested(&self) {
        let Some(mut rx) = self.rx.clone() else {
            return pending().await;
        };

        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                return pending().await;
            }
        }
    }
}
