// 高コスト処理シミュレーター
//
// 重い計算や下流呼び出しを模擬する、固定時間待機するユニット。
// 呼び出しレイテンシの確認・デモ用であり、ハンドラー経路からは呼ばれない。

use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::time::sleep;
use tracing::{info, warn};

/// 模擬する処理時間（2秒）
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(2000);

/// 高コスト処理のエラー型
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExpensiveOperationError {
    /// 待機完了前に外部から中断された
    ///
    /// 回復不能として扱う。待機の再試行や再開は行わない。
    #[error("expensive operation interrupted before completion")]
    Interrupted,
}

/// 高コスト処理シミュレーター
pub struct ExpensiveOperation;

impl ExpensiveOperation {
    /// 固定時間待機して高コスト処理を模擬する
    ///
    /// 呼び出し元タスクを`SIMULATED_LATENCY`の間サスペンドし、
    /// 経過後に制御を返す。
    pub async fn run() {
        info!(latency_ms = SIMULATED_LATENCY.as_millis() as u64, "高コスト処理開始");
        sleep(SIMULATED_LATENCY).await;
        info!("高コスト処理完了");
    }

    /// 中断シグナル付きで高コスト処理を模擬する
    ///
    /// 待機中に`interrupt`が発火した場合（送信側のドロップを含む）、
    /// 残り時間を待たずに即座に`Interrupted`エラーで失敗する。
    ///
    /// # Arguments
    /// * `interrupt` - 外部からの中断シグナル
    ///
    /// # Returns
    /// * `Ok(())` - 待機が中断されずに完了した場合
    /// * `Err(ExpensiveOperationError::Interrupted)` - 中断された場合
    pub async fn run_with_interrupt(
        interrupt: oneshot::Receiver<()>,
    ) -> Result<(), ExpensiveOperationError> {
        info!(latency_ms = SIMULATED_LATENCY.as_millis() as u64, "高コスト処理開始");

        tokio::select! {
            _ = sleep(SIMULATED_LATENCY) => {
                info!("高コスト処理完了");
                Ok(())
            }
            _ = interrupt => {
                warn!("高コスト処理が中断された");
                Err(ExpensiveOperationError::Interrupted)
            }
        }
    }
}
